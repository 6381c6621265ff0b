use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploaderError {
    #[error("CLI実行エラー: {0}")]
    CliExecution(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cloudinary_upload_common::Error),
}

pub type Result<T> = std::result::Result<T, UploaderError>;
