use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Projects,
    Blog,
    Resume,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub kind: TileType,
}

/// 固定的四個磁貼，建立後不再變動
pub const TILES: [Tile; 4] = [
    Tile {
        title: "Projects",
        subtitle: "My Work",
        icon: "🎮",
        kind: TileType::Projects,
    },
    Tile {
        title: "Blog",
        subtitle: "Thoughts & Updates",
        icon: "📝",
        kind: TileType::Blog,
    },
    Tile {
        title: "Resume",
        subtitle: "Experience & Skills",
        icon: "📄",
        kind: TileType::Resume,
    },
    Tile {
        title: "About",
        subtitle: "Who I Am",
        icon: "👤",
        kind: TileType::About,
    },
];

pub const BLOG_TILE_INDEX: usize = 1;

pub const NO_DATE: &str = "No date";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub download_url: Option<String>,
}

impl ResumeData {
    pub fn is_empty(&self) -> bool {
        self.education.is_empty() && self.skills.is_empty() && self.experience.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub label: String,
    pub text: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutData {
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
    pub contacts: Vec<Contact>,
}

impl AboutData {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.contacts.is_empty()
    }
}

/// 四個來源合併後的載入結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    pub posts: Vec<BlogPost>,
    pub projects: Vec<Project>,
    pub about: AboutData,
    pub resume: ResumeData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width <= breakpoint {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// 一個自足的標記區塊，由各區塊渲染器產生
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub html: String,
}

impl ContentBlock {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// 靜態內容檔案相對於內容根目錄的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPaths {
    pub blog_dir: String,
    pub blog_index: String,
    pub projects: String,
    pub about: String,
    pub resume: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            blog_dir: "blog-posts".to_string(),
            blog_index: "index.json".to_string(),
            projects: "projects.json".to_string(),
            about: "about.json".to_string(),
            resume: "resume.json".to_string(),
        }
    }
}

impl ContentPaths {
    pub fn blog_index_path(&self) -> String {
        format!("{}/{}", self.blog_dir, self.blog_index)
    }

    pub fn post_path(&self, filename: &str) -> String {
        format!("{}/{}", self.blog_dir, filename)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    pub hover_delay_ms: u64,
    pub resize_delay_ms: u64,
    pub open_delay_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            hover_delay_ms: 200,
            resize_delay_ms: 100,
            open_delay_ms: 400,
        }
    }
}
