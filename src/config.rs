use cloudinary_upload_common::ImageEntry;
use std::path::PathBuf;

const CLOUD_NAME: &str = "dntnzraxh";
const UPLOAD_PRESET: &str = "gym_uploads";
const OUTPUT_FILE: &str = "cloudinary_urls.json";
const CATEGORY_DIR: &str = "assets/images/categories";
const CATEGORIES: &[&str] = &["yoga", "hiit", "strength", "cardio", "pilates"];

/// アップロード設定
///
/// すべて固定値。フラグや環境変数からは変更しない。
#[derive(Debug, Clone)]
pub struct Config {
    pub cloud_name: String,
    pub upload_preset: String,
    pub curl_program: String,
    pub output_path: PathBuf,
    pub entries: Vec<ImageEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cloud_name: CLOUD_NAME.into(),
            upload_preset: UPLOAD_PRESET.into(),
            curl_program: "curl".into(),
            output_path: PathBuf::from(OUTPUT_FILE),
            entries: default_entries(),
        }
    }
}

impl Config {
    /// アップロード先URL
    pub fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

fn default_entries() -> Vec<ImageEntry> {
    CATEGORIES
        .iter()
        .map(|name| ImageEntry::new(*name, format!("{}/{}.png", CATEGORY_DIR, name)))
        .collect()
}
