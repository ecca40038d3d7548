use crate::core::front_matter::{parse_markdown_post, sort_posts};
use crate::domain::model::{AboutData, BlogPost, ContentPaths, Project, ResumeData, SiteContent};
use crate::domain::ports::{ContentProvider, ContentSource};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use futures::future::join_all;
use serde::de::DeserializeOwned;

/// 從內容來源載入所有靜態內容
pub struct ContentLoader<S: ContentSource> {
    source: S,
    paths: ContentPaths,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_paths(source, ContentPaths::default())
    }

    pub fn with_paths(source: S, paths: ContentPaths) -> Self {
        Self { source, paths }
    }

    /// 讀取並解析 JSON；檔案不存在與格式錯誤分別回報
    pub async fn load_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let text = self.source.fetch_text(path).await?;
        serde_json::from_str(&text).map_err(|e| PortfolioError::MalformedContent {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// 載入部落格文章。個別檔案失敗時略過該篇，不影響其他文章
    pub async fn load_blog_posts(&self) -> Result<Vec<BlogPost>> {
        let index_path = self.paths.blog_index_path();
        let files: Vec<String> = self.load_json(&index_path).await?;
        tracing::debug!("Found {} blog post files in {}", files.len(), index_path);

        let mut fetches = Vec::with_capacity(files.len());
        for filename in &files {
            fetches.push(self.load_post(filename));
        }

        let mut posts: Vec<BlogPost> = join_all(fetches).await.into_iter().flatten().collect();
        sort_posts(&mut posts);
        Ok(posts)
    }

    async fn load_post(&self, filename: &str) -> Option<BlogPost> {
        let path = self.paths.post_path(filename);
        match self.source.fetch_text(&path).await {
            Ok(markdown) => Some(parse_markdown_post(&markdown, filename)),
            Err(e) => {
                tracing::warn!("⚠️ Skipping blog post {}: {}", filename, e);
                None
            }
        }
    }

    pub async fn load_projects(&self) -> Result<Vec<Project>> {
        self.load_json(&self.paths.projects).await
    }

    pub async fn load_about(&self) -> Result<AboutData> {
        self.load_json(&self.paths.about).await
    }

    pub async fn load_resume(&self) -> Result<ResumeData> {
        self.load_json(&self.paths.resume).await
    }
}

/// 來源失敗時記錄警告並退回預設值
fn or_default<T: Default>(name: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!("⚠️ {} unavailable, using empty value: {}", name, e);
        tracing::debug!("💡 {}", e.recovery_suggestion());
        T::default()
    })
}

#[async_trait]
impl<S: ContentSource> ContentProvider for ContentLoader<S> {
    async fn load_all(&self) -> SiteContent {
        // 四個來源同時載入，全部完成後才回傳
        let (posts, projects, about, resume) = tokio::join!(
            self.load_blog_posts(),
            self.load_projects(),
            self.load_about(),
            self.load_resume(),
        );

        let content = SiteContent {
            posts: or_default("blog posts", posts),
            projects: or_default("projects", projects),
            about: or_default("about", about),
            resume: or_default("resume", resume),
        };

        tracing::info!(
            "📚 Loaded {} posts, {} projects",
            content.posts.len(),
            content.projects.len()
        );
        content
    }
}
