//! カテゴリ画像アップローダ
//!
//! 固定のカテゴリ画像を curl 経由でCloudinaryへアップロードし、
//! 返却された secure URL を JSON ファイルに記録する

pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod uploader;
