use std::f64::consts::{FRAC_PI_2, PI, TAU};
use crate::sector_layout::SectorLayout;
use crate::wheel_config::{BackdropStyle, Rgb, RimStyle, SceneConfig, WheelConfig, WheelGeometry};

/// Uniform scale-to-fit of the design scene into the viewport, letterboxed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFit {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SceneFit {
    pub fn fit(viewport_width: f64, viewport_height: f64, scene_width: f64, scene_height: f64) -> Self {
        let scale = (viewport_width / scene_width).min(viewport_height / scene_height);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            scale,
            offset_x: (viewport_width - scene_width * scale) / 2.0,
            offset_y: (viewport_height - scene_height * scale) / 2.0,
        }
    }

    /// Viewport point to scene coordinates.
    pub fn to_scene(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.offset_x) / self.scale, (y - self.offset_y) / self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A straight backdrop line in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Vertical then horizontal lines every `grid_size`, starting at the scene's
/// top-left corner and including the far edge when it lands on the grid.
pub fn grid_lines(scene: &SceneConfig, backdrop: &BackdropStyle) -> Vec<GridLine> {
    let size = backdrop.grid_size;
    if !(size > 0.0 && size.is_finite()) {
        return Vec::new();
    }
    let columns = (scene.width / size).floor() as usize;
    let rows = (scene.height / size).floor() as usize;

    let vertical = (0..=columns).map(|i| {
        let x = i as f64 * size;
        GridLine { x1: x, y1: 0.0, x2: x, y2: scene.height }
    });
    let horizontal = (0..=rows).map(|i| {
        let y = i as f64 * size;
        GridLine { x1: 0.0, y1: y, x2: scene.width, y2: y }
    });
    vertical.chain(horizontal).collect()
}

/// One prize sector in wheel-local coordinates (origin at the hub, unrotated).
#[derive(Debug, Clone, PartialEq)]
pub struct SectorWedge {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub label_rotation: f64,
    pub color: Rgb,
}

pub fn sector_wedges(config: &WheelConfig, layout: &SectorLayout) -> Vec<SectorWedge> {
    let origin = config.start_angle();
    let text_radius = config.geometry().text_radius;
    config
        .prizes
        .iter()
        .enumerate()
        .map(|(index, prize)| {
            let start = origin + layout.start(index);
            let end = start + layout.arc(index);
            let mid = origin + layout.mid(index);
            SectorWedge {
                index,
                start_angle: start,
                end_angle: end,
                label: prize.label.clone(),
                label_x: mid.cos() * text_radius,
                label_y: mid.sin() * text_radius,
                label_rotation: if config.text.rotate_text { mid + PI } else { 0.0 },
                color: prize.color,
            }
        })
        .collect()
}

/// A rim block centred on the rim band, rotated to lie along the tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimTooth {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// Every other block slot is filled, which gives the rim its notched look.
pub fn rim_teeth(rim: &RimStyle, geometry: &WheelGeometry) -> Vec<RimTooth> {
    if !rim.visible || rim.blocks_count == 0 {
        return Vec::new();
    }
    let step = TAU / rim.blocks_count as f64;
    let radius = rim_mid_radius(geometry);
    (0..rim.blocks_count)
        .step_by(2)
        .map(|i| {
            let angle = i as f64 * step;
            RimTooth {
                x: angle.cos() * radius,
                y: angle.sin() * radius,
                rotation: angle + FRAC_PI_2,
            }
        })
        .collect()
}

pub fn rim_mid_radius(geometry: &WheelGeometry) -> f64 {
    geometry.rim_radius + geometry.rim_thickness / 2.0
}

/// Pointer pivot in wheel-local coordinates. The sprite hangs from here, flipped
/// to point at the hub.
pub fn pointer_anchor(config: &WheelConfig) -> (f64, f64) {
    (
        config.pointer.offset_x,
        -(config.geometry().outer_radius + config.pointer.offset_y),
    )
}

/// Spin button bounds in scene coordinates.
pub fn button_rect(config: &WheelConfig) -> Rect {
    Rect::centered(
        config.scene.center_x + config.button.offset_x,
        config.scene.center_y + config.geometry().outer_radius + config.button.offset_y,
        config.button.width,
        config.button.height,
    )
}
