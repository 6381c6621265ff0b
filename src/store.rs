//! アップロード結果の保存
//!
//! 実行のたびに出力ファイルを上書きする（アトミック書き込み・バックアップなし）

use crate::error::Result;
use cloudinary_upload_common::UploadResults;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 結果をJSONとして保存
pub fn save_results(results: &UploadResults, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}
