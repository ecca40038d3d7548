use anyhow::Result;
use folio_carousel::domain::model::{ContentPaths, NO_DATE};
use folio_carousel::domain::ports::ContentProvider;
use folio_carousel::{ContentLoader, HttpSource, LocalStorage};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, rel: &str, body: &str) -> Result<()> {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, body)?;
    Ok(())
}

fn write_site(dir: &Path) -> Result<()> {
    write(
        dir,
        "blog-posts/index.json",
        r#"["older.md", "newer.md", "undated.md"]"#,
    )?;
    write(
        dir,
        "blog-posts/older.md",
        "---\ntitle: Older post\ndate: 2023-02-01\n---\nFirst words",
    )?;
    write(
        dir,
        "blog-posts/newer.md",
        "---\ntitle: Newer post\ndate: 2024-07-15\nexcerpt: Custom excerpt\n---\n# Ignored heading\nBody",
    )?;
    write(dir, "blog-posts/undated.md", "# Undated thoughts\nNo front matter here")?;
    write(
        dir,
        "projects.json",
        r#"[{"title": "Ray Tracer", "description": "SIMD", "link": "https://github.com/me/rt"}]"#,
    )?;
    write(
        dir,
        "about.json",
        r#"{"paragraphs": ["I like fast code."], "contacts": [{"label": "Email", "text": "me@example.com"}]}"#,
    )?;
    write(dir, "resume.json", r#"{"skills": ["Rust", "C++"]}"#)?;
    Ok(())
}

/// 從本地目錄載入完整網站內容
#[tokio::test]
async fn test_load_all_from_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_site(temp_dir.path())?;

    let loader = ContentLoader::new(LocalStorage::new(temp_dir.path()));
    let content = loader.load_all().await;

    let slugs: Vec<&str> = content.posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["newer", "older", "undated"]);

    let newer = &content.posts[0];
    assert_eq!(newer.title, "Newer post");
    assert_eq!(newer.excerpt, "Custom excerpt");
    assert_eq!(newer.content, "# Ignored heading\nBody");

    let undated = &content.posts[2];
    assert_eq!(undated.title, "Undated thoughts");
    assert_eq!(undated.date, NO_DATE);
    assert!(undated.excerpt.ends_with("..."));

    assert_eq!(content.projects.len(), 1);
    assert_eq!(content.projects[0].title, "Ray Tracer");
    assert!(content.projects[0].images.is_empty());
    assert_eq!(content.about.contacts[0].href, None);
    assert_eq!(content.resume.skills, vec!["Rust".to_string(), "C++".to_string()]);

    Ok(())
}

/// projects.json 不存在時其他來源仍然正確
#[tokio::test]
async fn test_missing_projects_does_not_affect_others() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_site(temp_dir.path())?;
    std::fs::remove_file(temp_dir.path().join("projects.json"))?;

    let loader = ContentLoader::new(LocalStorage::new(temp_dir.path()));
    let content = loader.load_all().await;

    assert!(content.projects.is_empty());
    assert_eq!(content.posts.len(), 3);
    assert_eq!(content.about.paragraphs, vec!["I like fast code.".to_string()]);
    assert_eq!(content.resume.skills.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_missing_blog_index_yields_no_posts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_site(temp_dir.path())?;
    std::fs::remove_file(temp_dir.path().join("blog-posts/index.json"))?;

    let loader = ContentLoader::new(LocalStorage::new(temp_dir.path()));
    let content = loader.load_all().await;

    assert!(content.posts.is_empty());
    assert_eq!(content.projects.len(), 1);

    Ok(())
}

/// 以 BOM 開頭或含無效 UTF-8 的文章仍保留標題與日期
#[tokio::test]
async fn test_post_encoding_quirks_keep_front_matter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "blog-posts/index.json", r#"["bom.md", "latin1.md"]"#)?;
    write(
        temp_dir.path(),
        "blog-posts/bom.md",
        "\u{feff}---\ntitle: With BOM\ndate: 2024-02-01\n---\nBody",
    )?;
    std::fs::write(
        temp_dir.path().join("blog-posts/latin1.md"),
        b"---\ntitle: Caf\xe9\ndate: 2024-01-01\n---\nBody",
    )?;

    let loader = ContentLoader::new(LocalStorage::new(temp_dir.path()));
    let posts = loader.load_blog_posts().await?;

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "With BOM");
    assert_eq!(posts[0].date, "2024-02-01");
    assert_eq!(posts[0].content, "Body");
    assert_eq!(posts[1].title, "Caf\u{fffd}");

    Ok(())
}

#[tokio::test]
async fn test_custom_content_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write(temp_dir.path(), "posts/list.json", r#"["a.md"]"#)?;
    write(temp_dir.path(), "posts/a.md", "---\ntitle: A\n---\nbody")?;

    let paths = ContentPaths {
        blog_dir: "posts".to_string(),
        blog_index: "list.json".to_string(),
        ..ContentPaths::default()
    };
    let loader = ContentLoader::with_paths(LocalStorage::new(temp_dir.path()), paths);
    let posts = loader.load_blog_posts().await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "A");

    Ok(())
}

/// 透過 HTTP 載入，單一來源回傳錯誤狀態碼時只影響該來源
#[tokio::test]
async fn test_http_source_isolates_failures() -> Result<()> {
    let server = MockServer::start();

    let index_mock = server.mock(|when, then| {
        when.method(GET).path("/blog-posts/index.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"["hello.md", "gone.md"]"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/blog-posts/hello.md");
        then.status(200)
            .body("---\ntitle: Hello\ndate: 2024-01-01\n---\nHi from the server");
    });
    server.mock(|when, then| {
        when.method(GET).path("/blog-posts/gone.md");
        then.status(404);
    });
    let projects_mock = server.mock(|when, then| {
        when.method(GET).path("/projects.json");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/about.json");
        then.status(200).body("{ definitely not json");
    });
    server.mock(|when, then| {
        when.method(GET).path("/resume.json");
        then.status(200)
            .json_body(serde_json::json!({"download_url": "/resume.pdf", "skills": ["Rust"]}));
    });

    let loader = ContentLoader::new(HttpSource::new(server.base_url()));
    let content = loader.load_all().await;

    index_mock.assert();
    projects_mock.assert();

    assert_eq!(content.posts.len(), 1);
    assert_eq!(content.posts[0].title, "Hello");
    assert!(content.projects.is_empty());
    assert!(content.about.is_empty());
    assert_eq!(content.resume.download_url.as_deref(), Some("/resume.pdf"));

    Ok(())
}
