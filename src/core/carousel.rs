use crate::domain::model::Viewport;

const BASE_Z_INDEX: i32 = 100;

/// 單一裝置類型的磁貼排版參數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub tile_width: f32,
    pub tile_height: f32,
    pub gap: f32,
    pub depth_step: f32,
    pub scale_step: f32,
    pub opacity_step: f32,
    /// |offset| 超過此值的磁貼完全透明
    pub visible_range: u32,
    /// 隱藏磁貼縮放到固定大小（行動版）
    pub hidden_scale: Option<f32>,
}

impl LayoutParams {
    pub fn desktop() -> Self {
        Self {
            tile_width: 400.0,
            tile_height: 500.0,
            gap: 50.0,
            depth_step: 200.0,
            scale_step: 0.15,
            opacity_step: 0.4,
            visible_range: 2,
            hidden_scale: None,
        }
    }

    pub fn mobile() -> Self {
        Self {
            tile_width: 220.0,
            tile_height: 300.0,
            gap: 20.0,
            depth_step: 100.0,
            scale_step: 0.25,
            opacity_step: 0.4,
            visible_range: 1,
            hidden_scale: Some(0.5),
        }
    }

    pub fn spacing(&self) -> f32 {
        self.tile_width + self.gap
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::desktop()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub initial_index: usize,
    pub mobile_breakpoint: f32,
    pub desktop: LayoutParams,
    pub mobile: LayoutParams,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            initial_index: 1,
            mobile_breakpoint: 768.0,
            desktop: LayoutParams::desktop(),
            mobile: LayoutParams::mobile(),
        }
    }
}

impl CarouselSettings {
    pub fn params_for(&self, viewport: Viewport) -> &LayoutParams {
        match viewport {
            Viewport::Mobile => &self.mobile,
            Viewport::Desktop => &self.desktop,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    tile_count: usize,
}

impl CarouselState {
    pub fn new(tile_count: usize, initial_index: usize) -> Self {
        let tile_count = tile_count.max(1);
        Self {
            active_index: initial_index % tile_count,
            tile_count,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// 往 direction 方向移動一格，超出範圍時繞回另一端
    pub fn navigate(&mut self, direction: i32) -> usize {
        let count = self.tile_count as i64;
        let next = (self.active_index as i64 + direction as i64).rem_euclid(count);
        self.active_index = next as usize;
        self.active_index
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tile_count || index == self.active_index {
            return false;
        }
        self.active_index = index;
        true
    }

    pub fn counter_text(&self) -> String {
        format!("{} of {}", self.active_index + 1, self.tile_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTransform {
    pub offset: i32,
    pub x: f32,
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub interactive: bool,
}

impl TileTransform {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// 依各磁貼與目前磁貼的距離計算其位移、縮放與透明度
pub fn compute_layout(
    active_index: usize,
    tile_count: usize,
    params: &LayoutParams,
) -> Vec<TileTransform> {
    let spacing = params.spacing();

    (0..tile_count)
        .map(|i| {
            let offset = i as i32 - active_index as i32;
            let distance = offset.unsigned_abs();
            let abs = distance as f32;

            let mut scale = 1.0 - abs * params.scale_step;
            let mut opacity = (1.0 - abs * params.opacity_step).max(0.0);
            if distance > params.visible_range {
                opacity = 0.0;
                if let Some(hidden) = params.hidden_scale {
                    scale = hidden;
                }
            }

            TileTransform {
                offset,
                x: offset as f32 * spacing,
                z: -abs * params.depth_step,
                scale,
                opacity,
                z_index: BASE_Z_INDEX - distance as i32,
                interactive: distance <= 1,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// 磁貼在視窗中的外框，以視窗中心為原點
pub fn tile_bounds(
    transform: &TileTransform,
    params: &LayoutParams,
    viewport_width: f32,
    viewport_height: f32,
) -> Rect {
    let center_x = viewport_width / 2.0 + transform.x;
    let center_y = viewport_height / 2.0;
    let half_w = params.tile_width * transform.scale / 2.0;
    let half_h = params.tile_height * transform.scale / 2.0;

    Rect {
        left: center_x - half_w,
        top: center_y - half_h,
        right: center_x + half_w,
        bottom: center_y + half_h,
    }
}

/// 找出指標下方堆疊順序最高的可見磁貼
pub fn hit_test(
    layout: &[TileTransform],
    params: &LayoutParams,
    viewport_width: f32,
    viewport_height: f32,
    x: f32,
    y: f32,
) -> Option<usize> {
    layout
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_visible())
        .filter(|(_, t)| tile_bounds(t, params, viewport_width, viewport_height).contains(x, y))
        .max_by_key(|(_, t)| t.z_index)
        .map(|(i, _)| i)
}
