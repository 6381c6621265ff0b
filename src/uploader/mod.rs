mod curl;

pub use curl::CurlClient;

use crate::error::Result;
use cloudinary_upload_common::{
    classify_response, ImageEntry, ResponseKind, UploadOutcome, UploadReport,
};
use std::path::Path;

/// アップロード処理の差し替えポイント
///
/// 画像パスを受け取り、APIのレスポンス本文（生文字列）を返す
#[allow(async_fn_in_trait)]
pub trait UploadClient {
    async fn upload(&self, path: &Path) -> Result<String>;
}

/// 全エントリを順番にアップロード
///
/// 失敗したエントリは出力して次へ進む（中断・リトライなし）。
pub async fn upload_all<C: UploadClient>(
    entries: &[ImageEntry],
    client: &C,
    verbose: bool,
) -> UploadReport {
    let mut report = UploadReport::default();

    for (idx, entry) in entries.iter().enumerate() {
        if verbose {
            println!("  [{}/{}] {}", idx + 1, entries.len(), entry.path.display());
        }

        let outcome = upload_entry(entry, client).await;
        report.record(&entry.name, outcome);
    }

    report
}

/// 1件分のアップロード（進捗と結果の出力もここで行う）
pub async fn upload_entry<C: UploadClient>(entry: &ImageEntry, client: &C) -> UploadOutcome {
    let outcome = if entry.path.exists() {
        println!("Uploading {}...", entry.name);
        send(entry, client).await
    } else {
        UploadOutcome::FileMissing {
            path: entry.path.clone(),
        }
    };

    println!("{}", outcome.message(&entry.name));
    outcome
}

async fn send<C: UploadClient>(entry: &ImageEntry, client: &C) -> UploadOutcome {
    let response = match client.upload(&entry.path).await {
        Ok(r) => r,
        Err(e) => return UploadOutcome::Failed { reason: e.to_string() },
    };

    match classify_response(&response) {
        Ok(ResponseKind::SecureUrl(url)) => UploadOutcome::Uploaded { url },
        Ok(ResponseKind::Unexpected(body)) => UploadOutcome::MissingSecureUrl { body },
        Err(e) => UploadOutcome::Failed { reason: e.to_string() },
    }
}
