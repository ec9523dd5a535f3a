use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::constants::*;
use crate::easing::Easing;
use crate::error::WheelError;
use crate::validation::*;

/// 24-bit RGB colour. Accepts `2434341`, `"#252525"` or `"0x252525"` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "u32")]
pub struct Rgb(pub u32);

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Int(u32),
    Hex(String),
}

impl TryFrom<ColorRepr> for Rgb {
    type Error = String;

    fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
        let raw = match value {
            ColorRepr::Int(v) => v,
            ColorRepr::Hex(s) => {
                let digits = s
                    .trim()
                    .trim_start_matches('#')
                    .trim_start_matches("0x")
                    .trim_start_matches("0X");
                u32::from_str_radix(digits, 16).map_err(|_| format!("Invalid colour '{}'", s))?
            }
        };
        if raw > 0xFF_FFFF {
            return Err(format!("Colour {:#x} is wider than 24 bits", raw));
        }
        Ok(Rgb(raw))
    }
}

impl From<Rgb> for u32 {
    fn from(rgb: Rgb) -> Self {
        rgb.0
    }
}

impl Rgb {
    pub fn css(&self) -> String {
        format!("#{:06x}", self.0 & 0xFF_FFFF)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: u32,
    #[serde(alias = "text")]
    pub label: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub color: Rgb,
}

fn default_weight() -> f64 {
    1.0
}

impl Prize {
    pub fn new(id: u32, label: impl Into<String>, color: u32) -> Self {
        Self {
            id,
            label: label.into(),
            weight: default_weight(),
            color: Rgb(color),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SceneConfig {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            center_x: WHEEL_CENTER_X,
            center_y: WHEEL_CENTER_Y,
        }
    }
}

/// Scene fill, the faint grid over it and the round shadow under the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BackdropStyle {
    pub background: Rgb,
    pub grid_color: Rgb,
    #[validate(range(min = 0.0, max = 1.0))]
    pub grid_alpha: f64,
    #[validate(range(min = 1.0))]
    pub grid_size: f64,
    #[validate(range(min = 0.0))]
    pub grid_line_width: f64,
    pub shadow_color: Rgb,
    #[validate(range(min = 0.0))]
    pub shadow_radius: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub shadow_alpha: f64,
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self {
            background: Rgb(0x050505),
            grid_color: Rgb(0xFFFFFF),
            grid_alpha: BACKDROP_GRID_ALPHA,
            grid_size: BACKDROP_GRID_SIZE,
            grid_line_width: BACKDROP_GRID_LINE_WIDTH,
            shadow_color: Rgb(0x000000),
            shadow_radius: BACKDROP_SHADOW_RADIUS,
            shadow_alpha: BACKDROP_SHADOW_ALPHA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SectorStyle {
    #[validate(range(min = 1.0))]
    pub outer_radius: f64,
    #[validate(range(min = 0.0))]
    pub text_radius: f64,
    /// Screen angle where sector 0 begins (canvas convention, y down).
    pub start_angle_deg: f64,
    pub stroke_color: Rgb,
    #[validate(range(min = 0.0))]
    pub stroke_width: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub stroke_alpha: f64,
}

impl Default for SectorStyle {
    fn default() -> Self {
        Self {
            outer_radius: SECTOR_OUTER_RADIUS,
            text_radius: SECTOR_TEXT_RADIUS,
            start_angle_deg: SECTOR_START_ANGLE_DEG,
            stroke_color: Rgb(0xFFFFFF),
            stroke_width: SECTOR_STROKE_WIDTH,
            stroke_alpha: SECTOR_STROKE_ALPHA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RimStyle {
    pub visible: bool,
    #[validate(range(min = 0.0))]
    pub radius: f64,
    #[validate(range(min = 0.0))]
    pub thickness: f64,
    pub color: Rgb,
    pub blocks_count: u32,
    pub block_color: Rgb,
    pub block_width: f64,
    pub block_height: f64,
}

impl Default for RimStyle {
    fn default() -> Self {
        Self {
            visible: true,
            radius: RIM_RADIUS,
            thickness: RIM_THICKNESS,
            color: Rgb(0x222222),
            blocks_count: RIM_BLOCKS_COUNT,
            block_color: Rgb(0x555555),
            block_width: RIM_BLOCK_WIDTH,
            block_height: RIM_BLOCK_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CenterCapStyle {
    pub visible: bool,
    #[validate(range(min = 0.0))]
    pub radius: f64,
    pub color: Rgb,
    pub border_color: Rgb,
    pub border_width: f64,
}

impl Default for CenterCapStyle {
    fn default() -> Self {
        Self {
            visible: true,
            radius: CENTER_CAP_RADIUS,
            color: Rgb(0x151515),
            border_color: Rgb(0x888888),
            border_width: CENTER_CAP_BORDER_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PointerStyle {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Screen angle the pointer indicates (canvas convention, -90 is straight up).
    pub angle_deg: f64,
    pub color: Rgb,
}

impl Default for PointerStyle {
    fn default() -> Self {
        Self {
            width: POINTER_WIDTH,
            height: POINTER_HEIGHT,
            offset_x: 0.0,
            offset_y: POINTER_OFFSET_Y,
            angle_deg: POINTER_ANGLE_DEG,
            color: Rgb(0xF59E0B),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ButtonStyle {
    #[validate(range(min = 1.0))]
    pub width: f64,
    #[validate(range(min = 1.0))]
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub label: String,
    pub color: Rgb,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            offset_x: 0.0,
            offset_y: BUTTON_OFFSET_Y,
            label: "SPIN".to_string(),
            color: Rgb(0x8B5CF6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TextStyle {
    #[validate(range(min = 1.0))]
    pub font_size: f64,
    pub font_family: String,
    pub color: Rgb,
    pub bold: bool,
    pub rotate_text: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: TEXT_FONT_SIZE,
            font_family: "Arial".to_string(),
            color: Rgb(0xFFFFFF),
            bold: true,
            rotate_text: true,
        }
    }
}

impl TextStyle {
    pub fn css_font(&self) -> String {
        format!(
            "{}{}px {}",
            if self.bold { "bold " } else { "" },
            self.font_size,
            self.font_family
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnimationConfig {
    #[validate(range(min = 1.0))]
    pub duration_ms: f64,
    /// Whole turns added on top of the offset to the winning sector.
    #[validate(range(min = 1))]
    pub spins: u32,
    pub ease: Easing,
    /// Random stop offset as a fraction of half the winning sector.
    #[validate(range(min = 0.0, max = 0.95))]
    pub jitter: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            spins: SPIN_TURNS,
            ease: Easing::default(),
            jitter: SPIN_JITTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_intensity_range"))]
pub struct TickerConfig {
    pub angle_deg: f64,
    #[validate(range(min = 1.0))]
    pub base_duration_ms: f64,
    #[validate(range(min = 1.0))]
    pub min_duration_ms: f64,
    #[validate(range(min = 0.0))]
    pub intensity_scale: f64,
    #[validate(range(min = 0.0))]
    pub min_intensity: f64,
    #[validate(range(min = 0.0))]
    pub max_intensity: f64,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            angle_deg: TICK_ANGLE_DEG,
            base_duration_ms: TICK_BASE_DURATION_MS,
            min_duration_ms: TICK_MIN_DURATION_MS,
            intensity_scale: TICK_INTENSITY_SCALE,
            min_intensity: TICK_MIN_INTENSITY,
            max_intensity: TICK_MAX_INTENSITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClickConfig {
    pub enabled: bool,
    #[validate(range(min = 1.0))]
    pub base_freq: f64,
    #[validate(range(min = 0.0))]
    pub freq_range: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub max_gain: f64,
    #[validate(range(min = 0.0))]
    pub attack_ms: f64,
    #[validate(range(min = 1.0))]
    pub duration_ms: f64,
    /// Exponential ramps cannot reach zero, so the decay stops here.
    #[validate(range(min = 0.000001))]
    pub floor_gain: f64,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_freq: CLICK_BASE_FREQ,
            freq_range: CLICK_FREQ_RANGE,
            max_gain: CLICK_MAX_GAIN,
            attack_ms: CLICK_ATTACK_MS,
            duration_ms: CLICK_DURATION_MS,
            floor_gain: CLICK_FLOOR_GAIN,
        }
    }
}

/// Everything the wheel needs, loaded once when the component is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WheelConfig {
    #[validate]
    pub scene: SceneConfig,
    #[validate]
    pub backdrop: BackdropStyle,
    #[validate]
    pub sectors: SectorStyle,
    #[validate]
    pub rim: RimStyle,
    #[validate]
    pub center_cap: CenterCapStyle,
    #[validate]
    pub pointer: PointerStyle,
    #[validate]
    pub button: ButtonStyle,
    #[validate]
    pub text: TextStyle,
    #[validate]
    pub animation: AnimationConfig,
    #[validate]
    pub ticker: TickerConfig,
    #[validate]
    pub audio: ClickConfig,
    #[validate(custom = "validate_prizes")]
    pub prizes: Vec<Prize>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            backdrop: BackdropStyle::default(),
            sectors: SectorStyle::default(),
            rim: RimStyle::default(),
            center_cap: CenterCapStyle::default(),
            pointer: PointerStyle::default(),
            button: ButtonStyle::default(),
            text: TextStyle::default(),
            animation: AnimationConfig::default(),
            ticker: TickerConfig::default(),
            audio: ClickConfig::default(),
            prizes: default_prizes(),
        }
    }
}

pub fn default_prizes() -> Vec<Prize> {
    ["100$", "BONUS", "TICKET", "EMPTY", "500$", "SPIN", "NFT", "JACKPOT"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = if i % 2 == 0 { 0x252525 } else { 0x3D3D3D };
            Prize::new(i as u32 + 1, *label, color)
        })
        .collect()
}

/// Static radii of the wheel, derived from the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub outer_radius: f64,
    pub rim_radius: f64,
    pub rim_thickness: f64,
    pub center_cap_radius: f64,
    pub text_radius: f64,
    pub sector_count: usize,
}

impl WheelConfig {
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate_config()?;
        Ok(config)
    }

    pub fn validate_config(&self) -> Result<(), WheelError> {
        self.validate()?;
        Ok(())
    }

    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry {
            outer_radius: self.sectors.outer_radius,
            rim_radius: self.rim.radius,
            rim_thickness: self.rim.thickness,
            center_cap_radius: self.center_cap.radius,
            text_radius: self.sectors.text_radius,
            sector_count: self.prizes.len(),
        }
    }

    /// Angle from the start of sector 0 to the pointer, in radians.
    pub fn alignment(&self) -> f64 {
        (self.pointer.angle_deg - self.sectors.start_angle_deg).to_radians()
    }

    pub fn start_angle(&self) -> f64 {
        self.sectors.start_angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate_config().is_ok());
        assert_eq!(config.prizes.len(), 8);
        assert_eq!(config.geometry().sector_count, 8);
        assert_eq!(config.alignment(), 0.0);
        assert_eq!(config.animation.spins, 15);
    }

    #[test]
    fn test_empty_prizes_rejected() {
        let config = WheelConfig { prizes: vec![], ..WheelConfig::default() };
        match config.validate_config() {
            Err(WheelError::InvalidConfiguration(msg)) => assert!(msg.contains("prize")),
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_weights_and_duplicates_rejected() {
        let mut config = WheelConfig::default();
        config.prizes[2].weight = 0.0;
        assert!(config.validate_config().is_err());

        let mut config = WheelConfig::default();
        config.prizes[2].weight = f64::INFINITY;
        assert!(config.validate_config().is_err());

        let mut config = WheelConfig::default();
        config.prizes[3].id = config.prizes[0].id;
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_animation_limits() {
        let mut config = WheelConfig::default();
        config.animation.spins = 0;
        assert!(config.validate_config().is_err());

        let mut config = WheelConfig::default();
        config.animation.jitter = 1.0;
        assert!(config.validate_config().is_err());

        let mut config = WheelConfig::default();
        config.ticker.min_intensity = 2.0;
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_backdrop_limits() {
        let config = WheelConfig::default();
        assert_eq!(config.backdrop.background, Rgb(0x050505));
        assert_eq!(config.backdrop.grid_size, 100.0);
        assert_eq!(config.backdrop.shadow_radius, 420.0);

        let mut config = WheelConfig::default();
        config.backdrop.grid_size = 0.0;
        assert!(config.validate_config().is_err());

        let mut config = WheelConfig::default();
        config.backdrop.grid_alpha = 1.5;
        assert!(config.validate_config().is_err());
    }

    #[test]
    fn test_from_json_accepts_partial_config() {
        let json = r##"{
            "animation": { "duration_ms": 5000, "spins": 5, "ease": "power4.out" },
            "prizes": [
                { "id": 1, "text": "100$", "color": 2434341 },
                { "id": 2, "label": "BONUS", "color": "#3d3d3d", "weight": 3 }
            ]
        }"##;
        let config = WheelConfig::from_json(json).unwrap();
        assert_eq!(config.animation.spins, 5);
        assert_eq!(config.animation.ease, Easing::PowerOut(5));
        assert_eq!(config.prizes[0].label, "100$");
        assert_eq!(config.prizes[0].color, Rgb(0x252525));
        assert_eq!(config.prizes[1].color.css(), "#3d3d3d");
        assert_eq!(config.prizes[1].weight, 3.0);
        assert_eq!(config.sectors.outer_radius, SECTOR_OUTER_RADIUS);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            WheelConfig::from_json("{\"prizes\": []}"),
            Err(WheelError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            WheelConfig::from_json("not json"),
            Err(WheelError::InvalidConfiguration(_))
        ));
        assert!(WheelConfig::from_json(r##"{"prizes":[{"id":1,"label":"x","color":"#zzzzzz"}]}"##).is_err());
    }

    #[test]
    fn test_css_font() {
        assert_eq!(TextStyle::default().css_font(), "bold 36px Arial");
    }
}
