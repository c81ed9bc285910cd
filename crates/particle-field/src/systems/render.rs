//! Glow rendering for particles and the pointer.

use crate::core::particle::{Particle, PointerParticle, POINTER_COLOR};
use crate::renderer::color::Color;
use crate::renderer::surface::{Glow, GradientStop, Surface};

/// Inner core radius as a fraction of the particle radius.
pub const CORE_RATIO: f32 = 0.5;
pub const CORE_BLUR: f32 = 10.0;

/// Pointer look, fixed across all color schemes.
pub const POINTER_ACCENT: Color = Color::hex(0xa855f7);
pub const POINTER_CORE_RATIO: f32 = 0.7;
pub const POINTER_BLUR: f32 = 20.0;

/// Two layers: a soft radial falloff to transparent at full radius, then
/// a bright glowing core at half radius, both in the particle's color.
pub fn draw_particle<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    surface.fill_radial(
        particle.position,
        particle.size,
        &[
            GradientStop::new(0.0, particle.color),
            GradientStop::new(1.0, Color::TRANSPARENT_WHITE),
        ],
    );
    surface.fill_glow(
        particle.position,
        particle.size * CORE_RATIO,
        particle.color,
        Glow { color: particle.color, blur: CORE_BLUR },
    );
}

pub fn draw_particles<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S) {
    for particle in particles {
        draw_particle(particle, surface);
    }
}

/// Fixed gradient and wider glow; `pointer.particle.color` is not consulted.
pub fn draw_pointer<S: Surface + ?Sized>(pointer: &PointerParticle, surface: &mut S) {
    let p = &pointer.particle;
    surface.fill_radial(
        p.position,
        p.size,
        &[
            GradientStop::new(0.0, POINTER_COLOR),
            GradientStop::new(0.5, POINTER_ACCENT),
            GradientStop::new(1.0, POINTER_COLOR.with_alpha(0.0)),
        ],
    );
    surface.fill_glow(
        p.position,
        p.size * POINTER_CORE_RATIO,
        POINTER_ACCENT,
        Glow { color: POINTER_COLOR, blur: POINTER_BLUR },
    );
}
