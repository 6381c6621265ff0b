//! Cloudinary Upload Common Library
//!
//! アップロードCLIとテストで共有される型とレスポンス解析

pub mod types;
pub mod error;
pub mod parser;

pub use types::{ImageEntry, ItemReport, UploadResults, UploadOutcome, UploadReport};
pub use error::{Error, Result};
pub use parser::{classify_response, ResponseKind, SECURE_URL_FIELD};
