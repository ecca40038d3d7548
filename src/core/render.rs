use crate::domain::model::{
    AboutData, BlogPost, ContentBlock, Project, ResumeData, SiteContent, TileType, Viewport,
};
use crate::domain::ports::MarkdownRenderer;
use crate::utils::error::{PortfolioError, Result};
use pulldown_cmark::{html, Options, Parser};

pub const EMPTY_BLOG: &str = "No blog posts found. Add .md files to the blog-posts folder!";
pub const EMPTY_PROJECTS: &str = "No projects found.";
pub const EMPTY_RESUME: &str = "No resume information found.";
pub const EMPTY_ABOUT: &str = "No about information found.";

const CLOSE_BUTTON: &str = r#"<button class="close-btn" data-action="close">×</button>"#;
const IMAGE_PLACEHOLDER: &str = "🖼️";

/// 以 pulldown-cmark 將 Markdown 轉為 HTML
#[derive(Debug, Clone, Default)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> Result<String> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(html_output)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn section(heading: &str) -> String {
    format!("{}<h1>{}</h1>", CLOSE_BUTTON, escape_html(heading))
}

fn empty_section(heading: &str, message: &str) -> ContentBlock {
    ContentBlock::new(format!(
        "{}<p class=\"empty-state\">{}</p>",
        section(heading),
        escape_html(message)
    ))
}

pub fn render_placeholder() -> ContentBlock {
    ContentBlock::new(r#"<div class="sync-spinner"></div>"#)
}

/// 依磁貼類型選擇渲染器；每個渲染器只讀取自己的資料
pub fn render_section(kind: TileType, content: &SiteContent, viewport: Viewport) -> ContentBlock {
    match kind {
        TileType::Projects => render_projects(&content.projects, viewport),
        TileType::Blog => render_blog_list(&content.posts),
        TileType::Resume => render_resume(&content.resume),
        TileType::About => render_about(&content.about),
    }
}

pub fn render_projects(projects: &[Project], viewport: Viewport) -> ContentBlock {
    if projects.is_empty() {
        return empty_section("My Projects", EMPTY_PROJECTS);
    }

    // 行動版只顯示一張圖
    let gallery_size = match viewport {
        Viewport::Mobile => 1,
        Viewport::Desktop => 3,
    };

    let mut html = section("My Projects");
    for project in projects {
        html.push_str(&format!(
            "<div class=\"project-card\"><h2>{}</h2><p>{}</p><div class=\"project-gallery\">",
            escape_html(&project.title),
            escape_html(&project.description)
        ));
        if project.images.is_empty() {
            for _ in 0..gallery_size {
                html.push_str(&format!("<div class=\"project-image\">{}</div>", IMAGE_PLACEHOLDER));
            }
        } else {
            for src in project.images.iter().take(gallery_size) {
                html.push_str(&format!(
                    "<img class=\"project-image\" src=\"{}\" alt=\"{}\">",
                    escape_html(src),
                    escape_html(&project.title)
                ));
            }
        }
        html.push_str("</div>");
        if let Some(link) = &project.link {
            html.push_str(&format!(
                "<p><a href=\"{}\" target=\"_blank\">View on GitHub →</a></p>",
                escape_html(link)
            ));
        }
        html.push_str("</div>");
    }
    ContentBlock::new(html)
}

pub fn render_blog_list(posts: &[BlogPost]) -> ContentBlock {
    if posts.is_empty() {
        return empty_section("Blog Posts", EMPTY_BLOG);
    }

    let mut html = section("Blog Posts");
    for (index, post) in posts.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"blog-post\" data-post=\"{}\"><div class=\"blog-date\">{}</div><h2>{}</h2><p>{}</p></div>",
            index,
            escape_html(&post.date),
            escape_html(&post.title),
            escape_html(&post.excerpt)
        ));
    }
    ContentBlock::new(html)
}

pub fn render_resume(resume: &ResumeData) -> ContentBlock {
    if resume.is_empty() {
        return empty_section("Resume", EMPTY_RESUME);
    }

    let mut html = section("Resume");
    if !resume.education.is_empty() {
        html.push_str("<h2>Education</h2>");
        for edu in &resume.education {
            let details: Vec<String> = edu.details.iter().map(|d| escape_html(d)).collect();
            html.push_str(&format!(
                "<p><strong>{}</strong> - {}",
                escape_html(&edu.degree),
                escape_html(&edu.school)
            ));
            for detail in details {
                html.push_str(&format!("<br>{}", detail));
            }
            html.push_str("</p>");
        }
    }
    if !resume.skills.is_empty() {
        let skills: Vec<String> = resume.skills.iter().map(|s| escape_html(s)).collect();
        html.push_str(&format!("<h2>Technical Skills</h2><p>{}</p>", skills.join(", ")));
    }
    if !resume.experience.is_empty() {
        html.push_str("<h2>Experience</h2>");
        for job in &resume.experience {
            html.push_str(&format!(
                "<div class=\"blog-post\"><h3>{} - {}</h3><p>{}</p></div>",
                escape_html(&job.role),
                escape_html(&job.company),
                escape_html(&job.summary)
            ));
        }
    }
    if let Some(url) = &resume.download_url {
        html.push_str(&format!(
            "<p><a href=\"{}\" download>Download Full Resume (PDF) →</a></p>",
            escape_html(url)
        ));
    }
    ContentBlock::new(html)
}

pub fn render_about(about: &AboutData) -> ContentBlock {
    let heading = about.heading.as_deref().unwrap_or("About Me");
    if about.is_empty() {
        return empty_section(heading, EMPTY_ABOUT);
    }

    let mut html = section(heading);
    for paragraph in &about.paragraphs {
        html.push_str(&format!("<p>{}</p>", escape_html(paragraph)));
    }
    if !about.contacts.is_empty() {
        html.push_str("<h2>Contact</h2>");
        for contact in &about.contacts {
            match &contact.href {
                Some(href) => {
                    html.push_str(&format!(
                        "<p>{}: <a href=\"{}\" target=\"_blank\">{}</a></p>",
                        escape_html(&contact.label),
                        escape_html(href),
                        escape_html(&contact.text)
                    ));
                }
                None => {
                    html.push_str(&format!(
                        "<p>{}: {}</p>",
                        escape_html(&contact.label),
                        escape_html(&contact.text)
                    ));
                }
            }
        }
    }
    ContentBlock::new(html)
}

/// 渲染單篇文章；渲染失敗只影響這一篇
pub fn render_post(post: &BlogPost, renderer: &dyn MarkdownRenderer) -> ContentBlock {
    let body = match renderer.render(&post.content) {
        Ok(markup) => markup,
        Err(e) => {
            let err = PortfolioError::RenderFailure {
                slug: post.slug.clone(),
                message: e.to_string(),
            };
            tracing::warn!("⚠️ {}", err);
            format!(
                "<p class=\"render-error\">{}</p>",
                escape_html(&err.user_friendly_message())
            )
        }
    };

    ContentBlock::new(format!(
        "{}<div class=\"back-to-list\" data-action=\"back\">← Back to Blog List</div><div class=\"blog-full-content\"><div class=\"blog-date\">{}</div>{}</div>",
        CLOSE_BUTTON,
        escape_html(&post.date),
        body
    ))
}
