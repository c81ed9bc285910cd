pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::FieldConfig;
pub use api::params::{ColorScheme, ParameterSet, PARTICLE_COUNT_LIMIT, POINTER_FORCE_LIMIT};
pub use crate::core::field::ParticleField;
pub use crate::core::layout::{surface_size, DisplayMode, SurfaceRule, Viewport};
pub use crate::core::particle::{Particle, PointerParticle};
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameLoop;
pub use renderer::{Color, CommandBuffer, DrawCommand, Glow, GradientStop, Surface};
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{
    decode_message, fullscreen_label, pause_label, BridgeMessage, Command, ConfigError,
    FullscreenRequest, ParamUpdate, KEY_ESCAPE,
};
pub use systems::physics::{MAX_SPEED, POINTER_RADIUS};
