use crate::domain::model::{BlogPost, NO_DATE};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

const DELIMITER: &str = "---";
const EXCERPT_CHARS: usize = 200;
const BOM: char = '\u{feff}';

static HEADER_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s+").expect("header marker pattern"));
static EMPHASIS_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_`]").expect("emphasis marker pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub content: String,
    /// 有開頭分隔線但找不到結尾分隔線
    pub unclosed: bool,
}

impl FrontMatter {
    /// 先查小寫鍵，再查首字大寫的鍵
    pub fn get(&self, key: &str) -> Option<&str> {
        self.non_empty(key)
            .or_else(|| self.non_empty(&capitalize(key)))
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 解析文件開頭由 `---` 包住的 `key: value` 區塊。
///
/// 找不到結尾分隔線時保留已解析的鍵，內容為開頭分隔線之後的全部文字。
/// 開頭的 BOM 會被忽略。
pub fn parse_front_matter(markdown: &str) -> FrontMatter {
    let markdown = markdown.strip_prefix(BOM).unwrap_or(markdown);
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut fields = HashMap::new();

    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return FrontMatter {
            fields,
            content: markdown.trim().to_string(),
            unclosed: false,
        };
    }

    let mut content_start = None;
    for (i, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line == DELIMITER {
            content_start = Some(i + 1);
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let (start, unclosed) = match content_start {
        Some(start) => (start, false),
        None => (1, true),
    };

    FrontMatter {
        fields,
        content: lines[start.min(lines.len())..].join("\n").trim().to_string(),
        unclosed,
    }
}

/// 解析一篇 Markdown 文章並補齊標題、日期與摘要
pub fn parse_markdown_post(markdown: &str, filename: &str) -> BlogPost {
    let front = parse_front_matter(markdown);
    if front.unclosed {
        tracing::warn!("Front matter in {} has no closing delimiter", filename);
    }

    let slug = filename.strip_suffix(".md").unwrap_or(filename).to_string();

    let title = front
        .get("title")
        .map(str::to_string)
        .or_else(|| first_heading(&front.content))
        .unwrap_or_else(|| slug.clone());

    let date = front.get("date").unwrap_or(NO_DATE).to_string();

    let excerpt = front
        .get("excerpt")
        .map(str::to_string)
        .unwrap_or_else(|| derive_excerpt(&front.content));

    tracing::debug!("Parsed {}: title={:?}, date={:?}", filename, title, date);

    BlogPost {
        title,
        date,
        slug,
        content: front.content,
        excerpt,
    }
}

fn first_heading(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let heading = rest.trim();
        (!heading.is_empty()).then(|| heading.to_string())
    })
}

pub fn derive_excerpt(content: &str) -> String {
    let without_headers = HEADER_MARKERS.replace_all(content, "");
    let plain = EMPHASIS_MARKERS.replace_all(&without_headers, "");
    let clipped: String = plain.trim().chars().take(EXCERPT_CHARS).collect();
    format!("{}...", clipped)
}

/// 盡力解析文章日期，無法解析時回傳 None
pub fn parse_post_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }

    ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 依日期由新到舊排序；無法解析的日期排在最後並保留原本順序
pub fn sort_posts(posts: &mut [BlogPost]) {
    posts.sort_by_cached_key(|post| Reverse(parse_post_date(&post.date)));
}
