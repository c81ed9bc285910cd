use glam::Vec2;
use serde::{Deserialize, Serialize};

/// How the host is currently presenting the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Controls panel visible over the surface.
    #[default]
    Normal,
    /// Controls panel hidden, surface fills the viewport.
    ControlsHidden,
    /// Host is in fullscreen.
    Fullscreen,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::ControlsHidden => "controlsHidden",
            Self::Fullscreen => "fullscreen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "controlsHidden" => Some(Self::ControlsHidden),
            "fullscreen" => Some(Self::Fullscreen),
            _ => None,
        }
    }

    /// Whether the controls panel overlaps the surface.
    pub fn shows_controls(self) -> bool {
        self == Self::Normal
    }
}

/// Raw viewport size reported by the host, in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Small-device rule: in normal mode, narrow viewports get a shorter surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRule {
    pub small_device_width: f32,
    pub small_device_height_ratio: f32,
}

impl Default for SurfaceRule {
    fn default() -> Self {
        Self {
            small_device_width: 768.0,
            small_device_height_ratio: 0.6,
        }
    }
}

impl SurfaceRule {
    /// Non-finite values fall back to defaults, the width is floored at 0
    /// and the ratio is kept in (0, 1].
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let width = if self.small_device_width.is_finite() {
            self.small_device_width.max(0.0)
        } else {
            d.small_device_width
        };
        let ratio = self.small_device_height_ratio;
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio.min(1.0)
        } else {
            d.small_device_height_ratio
        };
        Self {
            small_device_width: width,
            small_device_height_ratio: ratio,
        }
    }
}

/// Surface dimensions for a display mode and viewport.
///
/// Fullscreen and controls-hidden always take the full viewport. Normal
/// mode does too, unless the viewport is at most `small_device_width`
/// wide, in which case the height shrinks by `small_device_height_ratio`.
pub fn surface_size(mode: DisplayMode, viewport: Viewport, rule: SurfaceRule) -> Vec2 {
    let width = viewport.width.max(0.0);
    let height = viewport.height.max(0.0);
    let size = if mode == DisplayMode::Normal && width <= rule.small_device_width {
        Vec2::new(width, height * rule.small_device_height_ratio)
    } else {
        Vec2::new(width, height)
    };
    size.max(Vec2::ZERO)
}
