use crate::app::view::Frame;
use crate::core::carousel::{compute_layout, hit_test, CarouselSettings, CarouselState, TileTransform};
use crate::core::input::{Command, InputEvent, InputRouter, Point, RouteContext};
use crate::core::modal::{ModalController, OpenOutcome, PendingOpen};
use crate::core::render::CmarkRenderer;
use crate::core::scheduler::{Scheduler, TaskKey};
use crate::domain::model::{SiteContent, TimingSettings, Viewport, TILES};
use crate::domain::ports::{ConfigProvider, ContentProvider, MarkdownRenderer};
use std::sync::Arc;
use std::time::Duration;

/// 事件處理後需要由外層執行的副作用
#[derive(Debug)]
pub enum Effect {
    Load(PendingOpen),
    PreventDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    SelectTile(usize),
    RecomputeLayout,
}

/// 整個頁面的狀態，只透過下列操作修改
pub struct PortfolioApp {
    content: Arc<SiteContent>,
    carousel: CarouselState,
    modal: ModalController,
    router: InputRouter,
    settings: CarouselSettings,
    timing: TimingSettings,
    viewport_size: (f32, f32),
    viewport: Viewport,
    layout: Vec<TileTransform>,
    scheduler: Scheduler<ScheduledAction>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl PortfolioApp {
    pub fn new<C: ConfigProvider>(content: SiteContent, config: &C, width: f32, height: f32) -> Self {
        let settings = config.carousel();
        let viewport = Viewport::classify(width, settings.mobile_breakpoint);
        let carousel = CarouselState::new(TILES.len(), settings.initial_index);
        let layout = compute_layout(
            carousel.active_index(),
            carousel.tile_count(),
            settings.params_for(viewport),
        );

        Self {
            content: Arc::new(content),
            carousel,
            modal: ModalController::new(),
            router: InputRouter::new(config.swipe_threshold()),
            settings,
            timing: config.timing(),
            viewport_size: (width, height),
            viewport,
            layout,
            scheduler: Scheduler::new(),
            renderer: Arc::new(CmarkRenderer),
        }
    }

    /// 等待所有內容來源完成後才建立磁貼
    pub async fn start<P: ContentProvider, C: ConfigProvider>(
        provider: &P,
        config: &C,
        width: f32,
        height: f32,
    ) -> Self {
        let content = provider.load_all().await;
        Self::new(content, config, width, height)
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &[TileTransform] {
        &self.layout
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.scheduler.is_pending(key)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn route_context(&self) -> RouteContext {
        RouteContext {
            modal_open: self.modal.is_open(),
            view: self.modal.view(),
            active_index: self.carousel.active_index(),
        }
    }

    /// 處理一個輸入事件，回傳需要外層執行的副作用
    pub fn handle(&mut self, event: InputEvent, now: Duration) -> Vec<Effect> {
        match self.router.route(&event, &self.route_context()) {
            Some(command) => self.apply(command, now),
            None => Vec::new(),
        }
    }

    pub fn apply(&mut self, command: Command, now: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();
        match command {
            Command::Navigate(direction) => {
                self.scheduler.cancel(TaskKey::HoverSelect);
                self.carousel.navigate(direction);
                self.recompute_layout();
            }
            Command::OpenModal(tile) => {
                self.scheduler.cancel(TaskKey::HoverSelect);
                if let Some(pending) = self.modal.open(
                    tile,
                    self.content.clone(),
                    self.viewport,
                    self.open_delay(),
                ) {
                    tracing::debug!("Opening {} ({:?})", TILES[tile].title, pending.ticket);
                    effects.push(Effect::Load(pending));
                }
            }
            Command::SelectPost(index) => {
                self.modal
                    .select_post(index, &self.content.posts, self.renderer.as_ref());
            }
            Command::BackToList => {
                if let Some(pending) =
                    self.modal
                        .back_to_list(self.content.clone(), self.viewport, self.open_delay())
                {
                    effects.push(Effect::Load(pending));
                }
            }
            Command::CloseModal => {
                self.modal.close();
            }
            Command::Hover(point) => self.hover(point, now),
            Command::Resize { width, height } => {
                self.viewport_size = (width, height);
                self.viewport = Viewport::classify(width, self.settings.mobile_breakpoint);
                self.scheduler.schedule(
                    TaskKey::ResizeRecompute,
                    now,
                    Duration::from_millis(self.timing.resize_delay_ms),
                    ScheduledAction::RecomputeLayout,
                );
            }
            Command::PreventDefault => effects.push(Effect::PreventDefault),
        }
        effects
    }

    fn hover(&mut self, point: Point, now: Duration) {
        // 行動裝置沒有滑鼠懸停
        if self.viewport == Viewport::Mobile {
            return;
        }

        // 縮放防抖期間 self.layout 可能仍是舊裝置類型的排版，命中測試以目前參數計算
        let (width, height) = self.viewport_size;
        let params = self.settings.params_for(self.viewport);
        let layout = compute_layout(
            self.carousel.active_index(),
            self.carousel.tile_count(),
            params,
        );
        match hit_test(&layout, params, width, height, point.x, point.y) {
            Some(index) if index != self.carousel.active_index() => {
                self.scheduler.schedule(
                    TaskKey::HoverSelect,
                    now,
                    Duration::from_millis(self.timing.hover_delay_ms),
                    ScheduledAction::SelectTile(index),
                );
            }
            Some(_) => {
                self.scheduler.cancel(TaskKey::HoverSelect);
            }
            None => {}
        }
    }

    /// 執行所有到期的排程任務，回傳執行數量
    pub fn fire_due(&mut self, now: Duration) -> usize {
        let due = self.scheduler.take_due(now);
        let fired = due.len();
        for (_, action) in due {
            match action {
                ScheduledAction::SelectTile(index) => {
                    if !self.modal.is_open() && self.carousel.select(index) {
                        self.recompute_layout();
                    }
                }
                ScheduledAction::RecomputeLayout => self.recompute_layout(),
            }
        }
        fired
    }

    /// 套用非同步載入結果；過期的結果會被丟棄
    pub fn complete(&mut self, outcome: OpenOutcome) -> bool {
        let applied = self.modal.complete(outcome);
        if !applied {
            tracing::warn!("⚠️ Ignored a superseded modal load");
        }
        applied
    }

    /// 處理事件並依序等待其載入完成
    pub async fn settle(&mut self, event: InputEvent, now: Duration) -> Vec<Effect> {
        let mut remaining = Vec::new();
        for effect in self.handle(event, now) {
            match effect {
                Effect::Load(pending) => {
                    let outcome = pending.resolve().await;
                    self.complete(outcome);
                }
                other => remaining.push(other),
            }
        }
        remaining
    }

    fn open_delay(&self) -> Duration {
        Duration::from_millis(self.timing.open_delay_ms)
    }

    fn recompute_layout(&mut self) {
        self.layout = compute_layout(
            self.carousel.active_index(),
            self.carousel.tile_count(),
            self.settings.params_for(self.viewport),
        );
    }

    pub fn frame(&self) -> Frame {
        Frame::project(&self.carousel, &self.layout, &self.modal)
    }
}
