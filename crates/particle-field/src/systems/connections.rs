//! Proximity links between particles.
//!
//! Every unordered pair closer than `connectionDistance` gets a thin white
//! line; every particle closer than `pointerConnectionDistance` to a
//! present pointer gets a thicker one. Opacity falls linearly with
//! distance. The pair pass is O(n²), which is fine for tens to low
//! hundreds of particles and is the scaling limit beyond that.

use glam::Vec2;

use crate::core::particle::Particle;
use crate::renderer::color::Color;
use crate::renderer::surface::Surface;

/// Peak alpha of a particle-particle link.
pub const LINK_ALPHA: f32 = 0.3;
pub const LINK_WIDTH: f32 = 1.0;
/// Peak alpha of a pointer link.
pub const POINTER_LINK_ALPHA: f32 = 0.6;
pub const POINTER_LINK_WIDTH: f32 = 2.0;

/// Linear opacity ramp: 1 at distance 0, exactly 0 at `threshold` and beyond.
pub fn link_strength(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / threshold).max(0.0)
}

/// Call `f(i, j, distance)` for every pair `i < j` closer than `threshold`.
pub fn for_each_link(particles: &[Particle], threshold: f32, mut f: impl FnMut(usize, usize, f32)) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let distance = particles[i].position.distance(particles[j].position);
            if distance < threshold {
                f(i, j, distance);
            }
        }
    }
}

/// Draw particle-particle links.
pub fn draw_links<S: Surface + ?Sized>(particles: &[Particle], threshold: f32, surface: &mut S) {
    for_each_link(particles, threshold, |i, j, distance| {
        let alpha = link_strength(distance, threshold) * LINK_ALPHA;
        surface.stroke_line(
            particles[i].position,
            particles[j].position,
            Color::WHITE.with_alpha(alpha),
            LINK_WIDTH,
        );
    });
}

/// Draw links from the pointer to every particle within `threshold`.
pub fn draw_pointer_links<S: Surface + ?Sized>(
    pointer: Vec2,
    particles: &[Particle],
    threshold: f32,
    surface: &mut S,
) {
    for particle in particles {
        let distance = pointer.distance(particle.position);
        if distance < threshold {
            let alpha = link_strength(distance, threshold) * POINTER_LINK_ALPHA;
            surface.stroke_line(
                pointer,
                particle.position,
                Color::WHITE.with_alpha(alpha),
                POINTER_LINK_WIDTH,
            );
        }
    }
}
