//! curl連携モジュール
//!
//! `curl -s -X POST -F file=@<path> -F upload_preset=<preset> <endpoint>` を実行し、
//! 標準出力をレスポンス本文として返す

use super::UploadClient;
use crate::config::Config;
use crate::error::{Result, UploaderError};
use std::path::Path;
use tokio::process::Command;

/// curl コマンドでアップロードするクライアント
#[derive(Debug, Clone)]
pub struct CurlClient {
    program: String,
    endpoint: String,
    upload_preset: String,
    verbose: bool,
}

impl CurlClient {
    pub fn new(config: &Config, verbose: bool) -> Self {
        Self {
            program: config.curl_program.clone(),
            endpoint: config.endpoint(),
            upload_preset: config.upload_preset.clone(),
            verbose,
        }
    }

    /// curl に渡す引数列
    pub fn build_args(&self, path: &Path) -> Vec<String> {
        vec![
            "-s".into(),
            "-X".into(),
            "POST".into(),
            "-F".into(),
            format!("file=@{}", path.display()),
            "-F".into(),
            format!("upload_preset={}", self.upload_preset),
            self.endpoint.clone(),
        ]
    }
}

impl UploadClient for CurlClient {
    async fn upload(&self, path: &Path) -> Result<String> {
        let args = self.build_args(path);
        if self.verbose {
            println!("  {} {}", self.program, args.join(" "));
        }

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| UploaderError::CliExecution(format!("{} 実行エラー: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UploaderError::CliExecution(format!(
                "curl failed (code {:?}): {}",
                output.status.code(),
                stderr
            )));
        }

        let response = String::from_utf8(output.stdout)
            .map_err(|e| UploaderError::ApiParse(format!("UTF-8ではない出力: {}", e)))?;

        if self.verbose {
            let preview: String = response.chars().take(500).collect();
            println!("  レスポンス: {}", preview);
        }

        Ok(response)
    }
}
