use clap::Parser;
use folio_carousel::core::input::{InputEvent, Key};
use folio_carousel::domain::ports::{ConfigProvider, ContentSource};
use folio_carousel::utils::error::ErrorSeverity;
use folio_carousel::utils::{logger, validation::is_remote};
use folio_carousel::{CliConfig, ContentLoader, HttpSource, LocalStorage, PortfolioApp, TomlConfig};
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting folio preview");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
            };
            std::process::exit(exit_code);
        }
    };

    let base = config.content_base().to_string();
    tracing::info!("📁 Loading content from: {}", base);

    if is_remote(&base) {
        preview(HttpSource::new(base), &config, &cli).await;
    } else {
        preview(LocalStorage::new(base), &config, &cli).await;
    }

    Ok(())
}

async fn preview<S: ContentSource>(source: S, config: &TomlConfig, cli: &CliConfig) {
    let loader = ContentLoader::with_paths(source, config.content_paths());
    let mut app = PortfolioApp::start(&loader, config, cli.width, cli.height).await;

    println!("{}", app.frame());

    let mut now = Duration::ZERO;
    for token in &cli.keys {
        let Some(event) = parse_event(token) else {
            tracing::warn!("⚠️ Unknown key in script: {:?}", token);
            continue;
        };
        tracing::info!("⌨️ {:?}", event);
        app.settle(event, now).await;
        now += Duration::from_millis(config.timing.open_delay_ms);
    }

    if !cli.keys.is_empty() {
        println!("{}", app.frame());
    }
}

/// 數字代表點擊部落格列表中的文章，`backdrop` 代表點擊背景
fn parse_event(token: &str) -> Option<InputEvent> {
    if let Ok(index) = token.parse::<usize>() {
        return Some(InputEvent::PostClick(index));
    }
    if token == "backdrop" {
        return Some(InputEvent::BackdropClick);
    }
    Key::parse(token).map(InputEvent::KeyDown)
}
