//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use cloudinary_upload::error::UploaderError;
use cloudinary_upload::store;
use tempfile::tempdir;

/// UploaderErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        UploaderError::CliExecution("curl 実行エラー".to_string()),
        UploaderError::ApiParse("UTF-8ではない出力".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: UploaderError = io_err.into();

    assert!(matches!(err, UploaderError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: UploaderError = json_err.into();

    assert!(matches!(err, UploaderError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = cloudinary_upload_common::Error::Parse("レスポンスが空です".to_string());
    let err: UploaderError = common_err.into();

    assert!(matches!(err, UploaderError::Common(_)));
    assert!(format!("{}", err).contains("レスポンスが空です"));
}

/// 書き込めない場所への保存はIOエラー
#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no-such-dir").join("cloudinary_urls.json");

    let result = store::save_results(&Default::default(), &path);
    assert!(matches!(result, Err(UploaderError::Io(_))));
}
