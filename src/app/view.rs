use crate::core::carousel::{CarouselState, TileTransform};
use crate::core::modal::{ModalController, ModalView};
use crate::domain::model::TILES;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub index: usize,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub transform: TileTransform,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFrame {
    pub loading: bool,
    pub view: ModalView,
    pub html: String,
}

/// 某一時刻畫面的完整投影，與狀態分離以便在沒有瀏覽器的情況下測試
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub tiles: Vec<TileView>,
    pub counter: String,
    pub modal: Option<ModalFrame>,
}

impl Frame {
    pub fn project(
        carousel: &CarouselState,
        layout: &[TileTransform],
        modal: &ModalController,
    ) -> Self {
        let tiles = TILES
            .iter()
            .zip(layout)
            .enumerate()
            .map(|(index, (tile, transform))| TileView {
                index,
                title: tile.title,
                subtitle: tile.subtitle,
                icon: tile.icon,
                transform: *transform,
                active: index == carousel.active_index(),
            })
            .collect();

        let modal = modal.is_open().then(|| ModalFrame {
            loading: modal.is_loading(),
            view: modal.view(),
            html: modal
                .content()
                .map(|block| block.html.clone())
                .unwrap_or_default(),
        });

        Self {
            tiles,
            counter: carousel.counter_text(),
            modal,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            let t = &tile.transform;
            writeln!(
                f,
                "{} {} {:<8} x={:>6.0} z={:>5.0} scale={:.2} opacity={:.2}{}",
                if tile.active { ">" } else { " " },
                tile.icon,
                tile.title,
                t.x,
                t.z,
                t.scale,
                t.opacity,
                if t.interactive { "" } else { " (inert)" }
            )?;
        }
        writeln!(f, "{}", self.counter)?;
        if let Some(modal) = &self.modal {
            writeln!(
                f,
                "modal: {:?}{}",
                modal.view,
                if modal.loading { " (loading)" } else { "" }
            )?;
            writeln!(f, "{}", modal.html)?;
        }
        Ok(())
    }
}
