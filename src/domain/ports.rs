use crate::core::carousel::CarouselSettings;
use crate::domain::model::{ContentPaths, SiteContent, TimingSettings};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 讀取靜態內容檔案（本地目錄或遠端網址）
pub trait ContentSource: Send + Sync {
    fn fetch_text(&self, path: &str)
        -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Markdown 轉為顯示用標記的外部協作者
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn content_base(&self) -> &str;
    fn content_paths(&self) -> ContentPaths;
    fn carousel(&self) -> CarouselSettings;
    fn timing(&self) -> TimingSettings;
    fn swipe_threshold(&self) -> f32;
}

/// 一次載入所有內容；各來源失敗時只退回該來源的預設值，因此沒有錯誤回傳
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn load_all(&self) -> SiteContent;
}
