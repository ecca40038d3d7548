use anyhow::Result;
use folio_carousel::core::input::{InputEvent, Key, Point};
use folio_carousel::core::modal::{ModalPhase, ModalView};
use folio_carousel::core::render::EMPTY_BLOG;
use folio_carousel::domain::model::{BlogPost, SiteContent, BLOG_TILE_INDEX};
use folio_carousel::{PortfolioApp, Runtime, TomlConfig};
use std::time::Duration;
use tokio::time::sleep;

fn post(slug: &str, date: &str, body: &str) -> BlogPost {
    BlogPost {
        title: slug.to_uppercase(),
        date: date.to_string(),
        slug: slug.to_string(),
        content: body.to_string(),
        excerpt: format!("{}...", body),
    }
}

fn site() -> SiteContent {
    SiteContent {
        posts: vec![
            post("second", "2024-05-01", "Second **post**"),
            post("first", "2024-01-01", "First post"),
        ],
        ..Default::default()
    }
}

fn instant_config() -> TomlConfig {
    let mut config = TomlConfig::default();
    config.timing.open_delay_ms = 0;
    config
}

fn key(k: Key) -> InputEvent {
    InputEvent::KeyDown(k)
}

/// 選擇文章後返回列表，結果與直接開啟部落格磁貼相同
#[tokio::test]
async fn test_back_to_list_matches_direct_open() -> Result<()> {
    let mut direct = PortfolioApp::new(site(), &instant_config(), 1280.0, 800.0);
    direct.settle(InputEvent::TileClick(BLOG_TILE_INDEX), Duration::ZERO).await;
    let direct_frame = direct.frame();

    let mut app = PortfolioApp::new(site(), &instant_config(), 1280.0, 800.0);
    app.settle(key(Key::Enter), Duration::ZERO).await;
    app.settle(InputEvent::PostClick(0), Duration::ZERO).await;

    let post_frame = app.frame();
    let modal = post_frame.modal.as_ref().expect("modal open");
    assert_eq!(modal.view, ModalView::Post);
    assert!(modal.html.contains("<strong>post</strong>"));
    assert!(modal.html.contains("2024-05-01"));

    app.settle(key(Key::Char('b')), Duration::ZERO).await;
    assert_eq!(app.modal().phase(), ModalPhase::OpenList { tile: BLOG_TILE_INDEX });
    assert_eq!(app.frame(), direct_frame);

    Ok(())
}

#[tokio::test]
async fn test_empty_blog_shows_message() -> Result<()> {
    let mut app = PortfolioApp::new(SiteContent::default(), &instant_config(), 1280.0, 800.0);
    app.settle(key(Key::Enter), Duration::ZERO).await;

    let frame = app.frame();
    let modal = frame.modal.expect("modal open");
    assert!(modal.html.contains(EMPTY_BLOG));
    assert!(!modal.html.contains("data-post"));

    // 沒有文章時點擊文章不會改變畫面
    app.settle(InputEvent::PostClick(0), Duration::ZERO).await;
    assert_eq!(app.modal().view(), ModalView::List);

    Ok(())
}

#[tokio::test]
async fn test_backdrop_click_closes_and_resets_view() -> Result<()> {
    let mut app = PortfolioApp::new(site(), &instant_config(), 1280.0, 800.0);
    app.settle(key(Key::Space), Duration::ZERO).await;
    app.settle(InputEvent::PostClick(1), Duration::ZERO).await;
    assert_eq!(app.modal().view(), ModalView::Post);

    app.settle(InputEvent::BackdropClick, Duration::ZERO).await;
    assert_eq!(app.modal().view(), ModalView::List);
    app.settle(InputEvent::BackdropClick, Duration::ZERO).await;
    assert!(!app.modal().is_open());
    assert!(app.frame().modal.is_none());

    Ok(())
}

/// 關閉後重新開啟另一個磁貼時，先前的載入結果不會覆蓋畫面
#[tokio::test(start_paused = true)]
async fn test_stale_open_is_not_applied() -> Result<()> {
    let app = PortfolioApp::new(site(), &TomlConfig::default(), 1280.0, 800.0);
    let (runtime, handle) = Runtime::new(app);

    let driver = async move {
        handle.send(key(Key::Enter));
        sleep(Duration::from_millis(50)).await;
        handle.send(key(Key::Escape));
        handle.send(key(Key::ArrowRight));
        handle.send(key(Key::Enter));

        // 第一次載入在 400ms 完成，但已被取代
        sleep(Duration::from_millis(370)).await;
        let frame = handle.current_frame();
        let modal = frame.modal.expect("modal open");
        assert!(modal.loading);
        assert!(modal.html.contains("sync-spinner"));
        assert_eq!(frame.counter, "3 of 4");

        sleep(Duration::from_millis(200)).await;
        let frame = handle.current_frame();
        let modal = frame.modal.expect("modal open");
        assert!(!modal.loading);
        assert!(modal.html.contains("<h1>Resume</h1>"));
    };

    let (app, ()) = tokio::join!(runtime.run(), driver);
    assert_eq!(app.modal().phase(), ModalPhase::OpenList { tile: 2 });

    Ok(())
}

/// 滑鼠快速掃過多個磁貼時只有最後一個目標會被選取
#[tokio::test(start_paused = true)]
async fn test_hover_select_is_debounced_in_runtime() -> Result<()> {
    let app = PortfolioApp::new(site(), &TomlConfig::default(), 1000.0, 800.0);
    let (runtime, handle) = Runtime::new(app);

    let driver = async move {
        handle.send(InputEvent::PointerMove(Point { x: 950.0, y: 400.0 }));
        sleep(Duration::from_millis(100)).await;
        handle.send(InputEvent::PointerMove(Point { x: 100.0, y: 400.0 }));

        sleep(Duration::from_millis(150)).await;
        assert_eq!(handle.current_frame().counter, "2 of 4");

        sleep(Duration::from_millis(100)).await;
        let frame = handle.current_frame();
        assert_eq!(frame.counter, "1 of 4");
        assert!(frame.tiles[0].active);
        assert_eq!(frame.tiles[0].transform.x, 0.0);
    };

    let (app, ()) = tokio::join!(runtime.run(), driver);
    assert_eq!(app.carousel().active_index(), 0);

    Ok(())
}

#[test]
fn test_swipe_navigation_wraps() {
    let mut app = PortfolioApp::new(site(), &instant_config(), 1280.0, 800.0);
    let swipe_left = InputEvent::Swipe {
        start: Point { x: 300.0, y: 200.0 },
        end: Point { x: 100.0, y: 210.0 },
        moved: true,
    };

    for expected in ["3 of 4", "4 of 4", "1 of 4"] {
        tokio_test::block_on(app.settle(swipe_left, Duration::ZERO));
        assert_eq!(app.frame().counter, expected);
    }
}
