pub mod carousel;
pub mod front_matter;
pub mod input;
pub mod loader;
pub mod modal;
pub mod render;
pub mod scheduler;

pub use crate::domain::model::{BlogPost, ContentBlock, SiteContent, Tile, TileType};
pub use crate::domain::ports::{ConfigProvider, ContentProvider, ContentSource, MarkdownRenderer};
pub use crate::utils::error::Result;
