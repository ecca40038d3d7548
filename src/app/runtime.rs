use crate::app::controller::{Effect, PortfolioApp};
use crate::app::view::Frame;
use crate::core::input::InputEvent;
use crate::core::modal::OpenOutcome;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// 傳送輸入事件並觀察畫面
pub struct RuntimeHandle {
    events: mpsc::UnboundedSender<InputEvent>,
    frames: watch::Receiver<Frame>,
}

impl RuntimeHandle {
    pub fn send(&self, event: InputEvent) -> bool {
        self.events.send(event).is_ok()
    }

    pub fn current_frame(&self) -> Frame {
        self.frames.borrow().clone()
    }
}

/// 單執行緒事件迴圈：輸入事件、非同步載入與排程任務都在這裡依序套用
pub struct Runtime {
    app: PortfolioApp,
    events: mpsc::UnboundedReceiver<InputEvent>,
    frames: watch::Sender<Frame>,
    started: Instant,
}

impl Runtime {
    pub fn new(app: PortfolioApp) -> (Self, RuntimeHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (frame_tx, frame_rx) = watch::channel(app.frame());

        let runtime = Self {
            app,
            events: event_rx,
            frames: frame_tx,
            started: Instant::now(),
        };
        let handle = RuntimeHandle {
            events: event_tx,
            frames: frame_rx,
        };
        (runtime, handle)
    }

    /// 執行到所有 handle 被丟棄為止，並等待進行中的載入完成後交回狀態
    pub async fn run(mut self) -> PortfolioApp {
        let mut pending: FuturesUnordered<BoxFuture<'static, OpenOutcome>> = FuturesUnordered::new();

        loop {
            let deadline = self.app.next_deadline().map(|d| self.started + d);

            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    let now = self.started.elapsed();
                    for effect in self.app.handle(event, now) {
                        match effect {
                            Effect::Load(open) => pending.push(open.resolve().boxed()),
                            Effect::PreventDefault => {
                                tracing::trace!("Suppressed pull-to-refresh gesture");
                            }
                        }
                    }
                }
                Some(outcome) = pending.next(), if !pending.is_empty() => {
                    self.app.complete(outcome);
                }
                _ = wait_until(deadline) => {
                    self.app.fire_due(self.started.elapsed());
                }
            }

            self.frames.send_replace(self.app.frame());
        }

        while let Some(outcome) = pending.next().await {
            self.app.complete(outcome);
        }
        self.frames.send_replace(self.app.frame());

        tracing::debug!("Runtime stopped");
        self.app
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
