use crate::domain::ports::ContentSource;
use crate::utils::error::{PortfolioError, Result};
use std::path::PathBuf;

/// 從本地目錄讀取靜態內容
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ContentSource for LocalStorage {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());

        let bytes = match tokio::fs::read(&full_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PortfolioError::SourceUnavailable {
                    path: path.to_string(),
                    reason: "file not found".to_string(),
                });
            }
            Err(e) => return Err(PortfolioError::IoError(e)),
        };

        // 無效的 UTF-8 以替代字元顯示，不丟棄整個檔案
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("⚠️ {} is not valid UTF-8, decoding lossily", path);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
