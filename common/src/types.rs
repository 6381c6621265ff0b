use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// アップロード対象の画像（カテゴリ名とローカルパス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub name: String,
    pub path: PathBuf,
}

impl ImageEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// カテゴリ名 → secure URL のマップ
///
/// 成功したアップロードのみ登録される。挿入順を保持し、
/// `{"yoga": "https://..."}` 形式のフラットなJSONオブジェクトとして保存する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadResults {
    urls: IndexMap<String, String>,
}

impl UploadResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(name.into(), url.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.urls.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.urls.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.urls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// 1件ごとのアップロード結果
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// アップロード成功
    Uploaded { url: String },
    /// ローカルファイルが存在しない
    FileMissing { path: PathBuf },
    /// JSONは返ったが secure_url を含まない
    MissingSecureUrl { body: serde_json::Value },
    /// プロセス起動失敗・JSONパース失敗など
    Failed { reason: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }

    /// コンソール出力用のメッセージ
    pub fn message(&self, name: &str) -> String {
        match self {
            UploadOutcome::Uploaded { url } => format!("Success {}: {}", name, url),
            UploadOutcome::FileMissing { path } => {
                format!("File {} does not exist for {}", path.display(), name)
            }
            UploadOutcome::MissingSecureUrl { body } => {
                format!("Error uploading {}: {}", name, body)
            }
            UploadOutcome::Failed { reason } => format!("Failed to upload {}: {}", name, reason),
        }
    }
}

/// カテゴリ名付きの結果（コンソール出力1行分）
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    pub name: String,
    pub outcome: UploadOutcome,
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outcome.message(&self.name))
    }
}

/// アップロード全体の結果
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    pub results: UploadResults,
    pub items: Vec<ItemReport>,
}

impl UploadReport {
    /// 結果を追加（成功時のみ results にも登録）
    pub fn record(&mut self, name: &str, outcome: UploadOutcome) {
        if let UploadOutcome::Uploaded { url } = &outcome {
            self.results.insert(name, url.clone());
        }
        self.items.push(ItemReport {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_success()).count()
    }

    pub fn outcome(&self, name: &str) -> Option<&UploadOutcome> {
        self.items.iter().find(|i| i.name == name).map(|i| &i.outcome)
    }
}
