//! The tunable parameter set and the named color palettes.

use serde::{Deserialize, Serialize};

use crate::renderer::color::Color;

/// Largest accepted pointer force magnitude.
pub const POINTER_FORCE_LIMIT: f32 = 10.0;

/// Largest accepted particle count.
pub const PARTICLE_COUNT_LIMIT: usize = 10_000;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 7;

/// Named 7-color palettes the particles draw their colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Galaxy,
    Nebula,
    Cosmic,
    Stardust,
    Aurora,
}

const GALAXY: [Color; PALETTE_SIZE] = [
    Color::hex(0x8b5cf6),
    Color::hex(0xa855f7),
    Color::hex(0xc084fc),
    Color::hex(0xd8b4fe),
    Color::hex(0xe9d5ff),
    Color::hex(0xf3e8ff),
    Color::hex(0xfaf5ff),
];

const NEBULA: [Color; PALETTE_SIZE] = [
    Color::hex(0x06b6d4),
    Color::hex(0x0891b2),
    Color::hex(0x0e7490),
    Color::hex(0x155e75),
    Color::hex(0x164e63),
    Color::hex(0x0f172a),
    Color::hex(0x020617),
];

const COSMIC: [Color; PALETTE_SIZE] = [
    Color::hex(0xf59e0b),
    Color::hex(0xd97706),
    Color::hex(0xb45309),
    Color::hex(0x92400e),
    Color::hex(0x78350f),
    Color::hex(0x451a03),
    Color::hex(0x7c2d12),
];

const STARDUST: [Color; PALETTE_SIZE] = [
    Color::hex(0xec4899),
    Color::hex(0xdb2777),
    Color::hex(0xbe185d),
    Color::hex(0x9d174d),
    Color::hex(0x831843),
    Color::hex(0x500724),
    Color::hex(0x1f2937),
];

const AURORA: [Color; PALETTE_SIZE] = [
    Color::hex(0x10b981),
    Color::hex(0x059669),
    Color::hex(0x047857),
    Color::hex(0x065f46),
    Color::hex(0x064e3b),
    Color::hex(0x022c22),
    Color::hex(0x0f172a),
];

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        Self::Galaxy,
        Self::Nebula,
        Self::Cosmic,
        Self::Stardust,
        Self::Aurora,
    ];

    pub fn palette(self) -> &'static [Color; PALETTE_SIZE] {
        match self {
            Self::Galaxy => &GALAXY,
            Self::Nebula => &NEBULA,
            Self::Cosmic => &COSMIC,
            Self::Stardust => &STARDUST,
            Self::Aurora => &AURORA,
        }
    }

    /// Widget value for this scheme.
    pub fn name(self) -> &'static str {
        match self {
            Self::Galaxy => "galaxy",
            Self::Nebula => "nebula",
            Self::Cosmic => "cosmic",
            Self::Stardust => "stardust",
            Self::Aurora => "aurora",
        }
    }

    /// Look up a scheme by its widget value. Returns None if unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Everything the host can tune while the field runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    pub particle_count: usize,
    /// Initial velocity magnitude scale.
    pub particle_speed: f32,
    /// Base radius in px.
    pub particle_size: f32,
    /// Radius jitter fraction, 0.0 - 1.0.
    pub size_randomness: f32,
    pub connection_distance: f32,
    #[serde(alias = "mouseConnectionDistance")]
    pub pointer_connection_distance: f32,
    /// Positive attracts, negative repels, zero is inert.
    #[serde(alias = "mouseForce")]
    pub pointer_force: f32,
    pub color_scheme: ColorScheme,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            particle_count: 200,
            particle_speed: 1.0,
            particle_size: 3.0,
            size_randomness: 0.0,
            connection_distance: 100.0,
            pointer_connection_distance: 200.0,
            pointer_force: 0.0,
            color_scheme: ColorScheme::Galaxy,
        }
    }
}

impl ParameterSet {
    /// Pull every field back into its domain. Non-finite values fall back
    /// to the defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            particle_count: self.particle_count.clamp(1, PARTICLE_COUNT_LIMIT),
            particle_speed: finite_or(self.particle_speed, d.particle_speed).max(0.0),
            particle_size: finite_or(self.particle_size, d.particle_size).max(1.0),
            size_randomness: finite_or(self.size_randomness, d.size_randomness).clamp(0.0, 1.0),
            connection_distance: finite_or(self.connection_distance, d.connection_distance)
                .max(1.0),
            pointer_connection_distance: finite_or(
                self.pointer_connection_distance,
                d.pointer_connection_distance,
            )
            .max(1.0),
            pointer_force: finite_or(self.pointer_force, d.pointer_force)
                .clamp(-POINTER_FORCE_LIMIT, POINTER_FORCE_LIMIT),
            color_scheme: self.color_scheme,
        }
    }
}
