use crate::core::render::{render_placeholder, render_post, render_section};
use crate::domain::model::{
    BlogPost, ContentBlock, SiteContent, TileType, Viewport, BLOG_TILE_INDEX, TILES,
};
use crate::domain::ports::MarkdownRenderer;
use std::sync::Arc;
use std::time::Duration;

/// 每次開啟流程的遞增編號，用來辨識過期的載入結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpenTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening { ticket: OpenTicket, tile: usize },
    OpenList { tile: usize },
    OpenPost { post: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalView {
    List,
    Post,
}

/// 尚未完成的開啟流程；`resolve` 不借用控制器，可以與其他事件交錯執行
#[derive(Debug, Clone)]
pub struct PendingOpen {
    pub ticket: OpenTicket,
    pub tile: usize,
    kind: TileType,
    content: Arc<SiteContent>,
    viewport: Viewport,
    delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOutcome {
    pub ticket: OpenTicket,
    pub tile: usize,
    pub block: ContentBlock,
}

impl PendingOpen {
    pub async fn resolve(self) -> OpenOutcome {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        OpenOutcome {
            ticket: self.ticket,
            tile: self.tile,
            block: render_section(self.kind, &self.content, self.viewport),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalController {
    phase: ModalPhase,
    content: Option<ContentBlock>,
    next_ticket: u64,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            phase: ModalPhase::Closed,
            content: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening { .. })
    }

    pub fn view(&self) -> ModalView {
        match self.phase {
            ModalPhase::OpenPost { .. } => ModalView::Post,
            _ => ModalView::List,
        }
    }

    pub fn content(&self) -> Option<&ContentBlock> {
        self.content.as_ref()
    }

    /// 開始開啟流程。若已有流程進行中，新的流程取代舊的（舊結果之後會被丟棄）
    pub fn open(
        &mut self,
        tile: usize,
        content: Arc<SiteContent>,
        viewport: Viewport,
        delay: Duration,
    ) -> Option<PendingOpen> {
        let kind = TILES.get(tile)?.kind;

        if let ModalPhase::Opening { ticket, .. } = self.phase {
            tracing::debug!("Superseding in-flight open {:?}", ticket);
        }

        self.next_ticket += 1;
        let ticket = OpenTicket(self.next_ticket);
        self.phase = ModalPhase::Opening { ticket, tile };
        self.content = Some(render_placeholder());

        Some(PendingOpen {
            ticket,
            tile,
            kind,
            content,
            viewport,
            delay,
        })
    }

    /// 套用載入結果；只有目前進行中的流程會被套用
    pub fn complete(&mut self, outcome: OpenOutcome) -> bool {
        match self.phase {
            ModalPhase::Opening { ticket, .. } if ticket == outcome.ticket => {
                self.phase = ModalPhase::OpenList { tile: outcome.tile };
                self.content = Some(outcome.block);
                true
            }
            _ => {
                tracing::debug!("Discarding stale open result {:?}", outcome.ticket);
                false
            }
        }
    }

    /// 在部落格列表中選擇一篇文章，同步替換內容
    pub fn select_post(
        &mut self,
        index: usize,
        posts: &[BlogPost],
        renderer: &dyn MarkdownRenderer,
    ) -> bool {
        if self.phase != (ModalPhase::OpenList { tile: BLOG_TILE_INDEX }) {
            return false;
        }
        let Some(post) = posts.get(index) else {
            return false;
        };

        self.phase = ModalPhase::OpenPost { post: index };
        self.content = Some(render_post(post, renderer));
        true
    }

    /// 從文章返回列表，等同重新開啟部落格磁貼
    pub fn back_to_list(
        &mut self,
        content: Arc<SiteContent>,
        viewport: Viewport,
        delay: Duration,
    ) -> Option<PendingOpen> {
        if self.view() != ModalView::Post {
            return None;
        }
        self.open(BLOG_TILE_INDEX, content, viewport, delay)
    }

    pub fn close(&mut self) -> bool {
        if self.phase == ModalPhase::Closed {
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.content = None;
        true
    }
}
