use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use shared::scene_layout::{
    button_rect, grid_lines, pointer_anchor, rim_mid_radius, rim_teeth, sector_wedges, GridLine, RimTooth,
    SceneFit, SectorWedge,
};
use shared::{WheelConfig, WheelGame, WheelGeometry};
use crate::styles;

/// Draws the wheel scene onto a canvas. Geometry is computed once; only the
/// rotations change between frames.
pub struct WheelPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    config: WheelConfig,
    geometry: WheelGeometry,
    grid: Vec<GridLine>,
    wedges: Vec<SectorWedge>,
    teeth: Vec<RimTooth>,
    fit: SceneFit,
    pixel_ratio: f64,
}

impl WheelPainter {
    pub fn new(canvas: HtmlCanvasElement, game: &WheelGame) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let config = game.config().clone();
        let geometry = config.geometry();
        let grid = grid_lines(&config.scene, &config.backdrop);
        let wedges = sector_wedges(&config, game.layout());
        let teeth = rim_teeth(&config.rim, &geometry);

        let mut painter = Self {
            canvas,
            context,
            config,
            geometry,
            grid,
            wedges,
            teeth,
            fit: SceneFit { scale: 1.0, offset_x: 0.0, offset_y: 0.0 },
            pixel_ratio: 1.0,
        };
        painter.resize();
        Ok(painter)
    }

    pub fn fit(&self) -> SceneFit {
        self.fit
    }

    /// Matches the backing store to the element's CSS size and refits the scene.
    pub fn resize(&mut self) {
        let css_width = self.canvas.client_width().max(1) as f64;
        let css_height = self.canvas.client_height().max(1) as f64;
        self.pixel_ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);

        self.canvas.set_width((css_width * self.pixel_ratio).round() as u32);
        self.canvas.set_height((css_height * self.pixel_ratio).round() as u32);
        self.fit = SceneFit::fit(css_width, css_height, self.config.scene.width, self.config.scene.height);
    }

    pub fn paint(&self, rotation: f64, pointer_rotation: f64, spinning: bool) -> Result<(), JsValue> {
        let ctx = &self.context;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);

        let scale = self.pixel_ratio * self.fit.scale;
        ctx.set_transform(
            scale,
            0.0,
            0.0,
            scale,
            self.pixel_ratio * self.fit.offset_x,
            self.pixel_ratio * self.fit.offset_y,
        )?;

        self.draw_backdrop();

        ctx.save();
        ctx.translate(self.config.scene.center_x, self.config.scene.center_y)?;
        self.draw_shadow()?;

        ctx.save();
        ctx.rotate(rotation)?;
        self.draw_sectors()?;
        self.draw_rim()?;
        self.draw_center_cap()?;
        ctx.restore();

        self.draw_pointer(pointer_rotation)?;
        ctx.restore();

        self.draw_button(spinning)
    }

    fn draw_backdrop(&self) {
        let ctx = &self.context;
        let backdrop = &self.config.backdrop;
        ctx.set_fill_style_str(&backdrop.background.css());
        ctx.fill_rect(0.0, 0.0, self.config.scene.width, self.config.scene.height);

        ctx.begin_path();
        for line in &self.grid {
            ctx.move_to(line.x1, line.y1);
            ctx.line_to(line.x2, line.y2);
        }
        ctx.set_global_alpha(backdrop.grid_alpha);
        ctx.set_line_width(backdrop.grid_line_width);
        ctx.set_stroke_style_str(&backdrop.grid_color.css());
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    /// Soft disc under the wheel, drawn in wheel-local coordinates.
    fn draw_shadow(&self) -> Result<(), JsValue> {
        let ctx = &self.context;
        let backdrop = &self.config.backdrop;
        ctx.begin_path();
        ctx.arc(0.0, 0.0, backdrop.shadow_radius, 0.0, TAU)?;
        ctx.set_global_alpha(backdrop.shadow_alpha);
        ctx.set_fill_style_str(&backdrop.shadow_color.css());
        ctx.fill();
        ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_sectors(&self) -> Result<(), JsValue> {
        let ctx = &self.context;
        let sectors = &self.config.sectors;

        for wedge in &self.wedges {
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.arc(0.0, 0.0, self.geometry.outer_radius, wedge.start_angle, wedge.end_angle)?;
            ctx.close_path();
            ctx.set_fill_style_str(&wedge.color.css());
            ctx.fill();

            ctx.set_global_alpha(sectors.stroke_alpha);
            ctx.set_line_width(sectors.stroke_width);
            ctx.set_stroke_style_str(&sectors.stroke_color.css());
            ctx.stroke();
            ctx.set_global_alpha(1.0);
        }

        let text = &self.config.text;
        ctx.set_font(&text.css_font());
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&text.color.css());
        for wedge in &self.wedges {
            ctx.save();
            ctx.translate(wedge.label_x, wedge.label_y)?;
            ctx.rotate(wedge.label_rotation)?;
            ctx.fill_text(&wedge.label, 0.0, 0.0)?;
            ctx.restore();
        }
        Ok(())
    }

    fn draw_rim(&self) -> Result<(), JsValue> {
        let rim = &self.config.rim;
        if !rim.visible {
            return Ok(());
        }
        let ctx = &self.context;

        // Stroked rather than filled so the sectors stay visible inside
        ctx.begin_path();
        ctx.arc(0.0, 0.0, rim_mid_radius(&self.geometry), 0.0, TAU)?;
        ctx.set_line_width(self.geometry.rim_thickness);
        ctx.set_stroke_style_str(&rim.color.css());
        ctx.stroke();

        ctx.set_fill_style_str(&rim.block_color.css());
        for tooth in &self.teeth {
            ctx.save();
            ctx.translate(tooth.x, tooth.y)?;
            ctx.rotate(tooth.rotation)?;
            ctx.fill_rect(-rim.block_width / 2.0, -rim.block_height / 2.0, rim.block_width, rim.block_height);
            ctx.restore();
        }
        Ok(())
    }

    fn draw_center_cap(&self) -> Result<(), JsValue> {
        let cap = &self.config.center_cap;
        if !cap.visible {
            return Ok(());
        }
        let ctx = &self.context;
        ctx.begin_path();
        ctx.arc(0.0, 0.0, self.geometry.center_cap_radius, 0.0, TAU)?;
        ctx.set_fill_style_str(&cap.color.css());
        ctx.fill();
        ctx.set_line_width(cap.border_width);
        ctx.set_stroke_style_str(&cap.border_color.css());
        ctx.stroke();
        Ok(())
    }

    /// Pointer pivots on its base; at rest (π) the tip hangs down into the wheel.
    fn draw_pointer(&self, pointer_rotation: f64) -> Result<(), JsValue> {
        let ctx = &self.context;
        let pointer = &self.config.pointer;
        let (x, y) = pointer_anchor(&self.config);
        let half = pointer.width / 2.0;
        let shoulder = -pointer.height * 0.45;

        ctx.save();
        ctx.translate(x, y)?;
        ctx.rotate(pointer_rotation)?;

        ctx.begin_path();
        ctx.move_to(0.0, -pointer.height);
        ctx.line_to(half, shoulder);
        ctx.quadratic_curve_to(half, 0.0, 0.0, 0.0);
        ctx.quadratic_curve_to(-half, 0.0, -half, shoulder);
        ctx.close_path();
        ctx.set_fill_style_str(&pointer.color.css());
        ctx.fill();
        ctx.set_line_width(2.0);
        ctx.set_stroke_style_str(styles::POINTER_OUTLINE);
        ctx.stroke();

        ctx.restore();
        Ok(())
    }

    fn draw_button(&self, spinning: bool) -> Result<(), JsValue> {
        let ctx = &self.context;
        let button = &self.config.button;
        let rect = button_rect(&self.config);
        let (cx, cy) = rect.center();

        ctx.set_global_alpha(if spinning { shared::constants::BUTTON_DISABLED_ALPHA } else { 1.0 });
        ctx.set_fill_style_str(&button.color.css());
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);

        ctx.set_font(&format!("bold {}px {}", (rect.height * 0.4).round(), self.config.text.font_family));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&self.config.text.color.css());
        ctx.fill_text(&button.label, cx, cy)?;
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}
