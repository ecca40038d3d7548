use crate::core::modal::ModalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Char(char),
}

impl Key {
    /// 解析按鍵名稱，例如 `ArrowLeft`、`Enter`、`a`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "left" => Some(Key::ArrowLeft),
            "ArrowRight" | "right" => Some(Key::ArrowRight),
            "Enter" | "enter" => Some(Key::Enter),
            " " | "Space" | "space" => Some(Key::Space),
            "Escape" | "Esc" | "esc" => Some(Key::Escape),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// 觸控開始到結束的位置；`moved` 表示期間有 touchmove
    Swipe { start: Point, end: Point, moved: bool },
    PointerMove(Point),
    TileClick(usize),
    PostClick(usize),
    BackdropClick,
    Resize { width: f32, height: f32 },
    TouchMove { delta_y: f32, scroll_y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Navigate(i32),
    OpenModal(usize),
    SelectPost(usize),
    BackToList,
    CloseModal,
    Hover(Point),
    Resize { width: f32, height: f32 },
    PreventDefault,
}

/// 路由判斷所需的唯讀狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContext {
    pub modal_open: bool,
    pub view: ModalView,
    pub active_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRouter {
    pub swipe_threshold: f32,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
        }
    }
}

impl InputRouter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self { swipe_threshold }
    }

    pub fn route(&self, event: &InputEvent, ctx: &RouteContext) -> Option<Command> {
        match *event {
            InputEvent::KeyDown(key) if ctx.modal_open => match key {
                Key::Escape | Key::Char('b') | Key::Char('B') => Some(dismiss(ctx)),
                _ => None,
            },
            InputEvent::KeyDown(key) => match key {
                Key::ArrowLeft | Key::Char('a') | Key::Char('A') => Some(Command::Navigate(-1)),
                Key::ArrowRight | Key::Char('d') | Key::Char('D') => Some(Command::Navigate(1)),
                Key::Enter | Key::Space => Some(Command::OpenModal(ctx.active_index)),
                _ => None,
            },
            InputEvent::Swipe { start, end, moved } => {
                if ctx.modal_open || !moved {
                    return None;
                }
                self.swipe_direction(start, end).map(Command::Navigate)
            }
            InputEvent::BackdropClick if ctx.modal_open => Some(dismiss(ctx)),
            InputEvent::BackdropClick => None,
            InputEvent::TileClick(index) if !ctx.modal_open => Some(Command::OpenModal(index)),
            InputEvent::TileClick(_) => None,
            InputEvent::PostClick(index) if ctx.modal_open && ctx.view == ModalView::List => {
                Some(Command::SelectPost(index))
            }
            InputEvent::PostClick(_) => None,
            InputEvent::PointerMove(point) if !ctx.modal_open => Some(Command::Hover(point)),
            InputEvent::PointerMove(_) => None,
            InputEvent::Resize { width, height } => Some(Command::Resize { width, height }),
            // 頁面頂端往下拉時阻止瀏覽器的下拉重新整理
            InputEvent::TouchMove { delta_y, scroll_y } => {
                (scroll_y <= 0.0 && delta_y > 0.0).then_some(Command::PreventDefault)
            }
        }
    }

    /// 水平位移超過門檻且大於垂直位移時回傳方向；向左滑為 +1
    pub fn swipe_direction(&self, start: Point, end: Point) -> Option<i32> {
        let diff_x = start.x - end.x;
        let diff_y = (start.y - end.y).abs();
        if diff_x.abs() > self.swipe_threshold && diff_x.abs() > diff_y {
            Some(if diff_x > 0.0 { 1 } else { -1 })
        } else {
            None
        }
    }
}

fn dismiss(ctx: &RouteContext) -> Command {
    match ctx.view {
        ModalView::Post => Command::BackToList,
        ModalView::List => Command::CloseModal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed() -> RouteContext {
        RouteContext {
            modal_open: false,
            view: ModalView::List,
            active_index: 2,
        }
    }

    fn open(view: ModalView) -> RouteContext {
        RouteContext {
            modal_open: true,
            view,
            active_index: 2,
        }
    }

    fn swipe(dx: f32, dy: f32) -> InputEvent {
        InputEvent::Swipe {
            start: Point { x: 200.0, y: 300.0 },
            end: Point {
                x: 200.0 + dx,
                y: 300.0 + dy,
            },
            moved: true,
        }
    }

    #[test]
    fn test_navigation_keys_when_closed() {
        let router = InputRouter::default();
        for (name, expected) in [("ArrowLeft", -1), ("a", -1), ("A", -1), ("ArrowRight", 1), ("d", 1), ("D", 1)] {
            let key = Key::parse(name).unwrap();
            assert_eq!(
                router.route(&InputEvent::KeyDown(key), &closed()),
                Some(Command::Navigate(expected))
            );
        }
        assert_eq!(
            router.route(&InputEvent::KeyDown(Key::Space), &closed()),
            Some(Command::OpenModal(2))
        );
        assert_eq!(router.route(&InputEvent::KeyDown(Key::Escape), &closed()), None);
    }

    #[test]
    fn test_dismiss_depends_on_view() {
        let router = InputRouter::default();
        let escape = InputEvent::KeyDown(Key::Escape);
        assert_eq!(router.route(&escape, &open(ModalView::List)), Some(Command::CloseModal));
        assert_eq!(router.route(&escape, &open(ModalView::Post)), Some(Command::BackToList));
        assert_eq!(
            router.route(&InputEvent::KeyDown(Key::Char('B')), &open(ModalView::Post)),
            Some(Command::BackToList)
        );
        assert_eq!(
            router.route(&InputEvent::BackdropClick, &open(ModalView::List)),
            Some(Command::CloseModal)
        );
        // 開啟時方向鍵無作用
        assert_eq!(router.route(&InputEvent::KeyDown(Key::ArrowLeft), &open(ModalView::List)), None);
    }

    #[test]
    fn test_swipe_threshold_and_dominance() {
        let router = InputRouter::default();
        assert_eq!(router.route(&swipe(-80.0, 10.0), &closed()), Some(Command::Navigate(1)));
        assert_eq!(router.route(&swipe(80.0, 10.0), &closed()), Some(Command::Navigate(-1)));
        assert_eq!(router.route(&swipe(-40.0, 0.0), &closed()), None);
        assert_eq!(router.route(&swipe(-80.0, 120.0), &closed()), None);

        let tap = InputEvent::Swipe {
            start: Point { x: 0.0, y: 0.0 },
            end: Point { x: 100.0, y: 0.0 },
            moved: false,
        };
        assert_eq!(router.route(&tap, &closed()), None);
    }

    #[test]
    fn test_pull_to_refresh_shim() {
        let router = InputRouter::default();
        let pull = InputEvent::TouchMove {
            delta_y: 12.0,
            scroll_y: 0.0,
        };
        assert_eq!(router.route(&pull, &closed()), Some(Command::PreventDefault));
        let scrolled = InputEvent::TouchMove {
            delta_y: 12.0,
            scroll_y: 40.0,
        };
        assert_eq!(router.route(&scrolled, &closed()), None);
    }
}
