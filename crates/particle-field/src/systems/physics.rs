//! Per-frame motion for regular particles.
//!
//! One call to [`step_particle`] runs, in order: pointer force, position
//! integration, wall bounce, isotropic jitter, speed cap. Force lands
//! before integration; jitter and the cap apply after the bounce, every
//! frame. Motion is a stylized approximation, not a physical model.

use glam::Vec2;

use crate::core::particle::Particle;
use crate::core::rng::Rng;

/// Particles farther than this from the pointer feel no force (px).
pub const POINTER_RADIUS: f32 = 150.0;
/// Scale applied to `pointerForce` before it reaches the velocity.
pub const POINTER_FORCE_SCALE: f32 = 0.5;
/// Velocity factor on wall contact (sign flips, magnitude shrinks).
pub const WALL_RESTITUTION: f32 = 0.8;
/// Peak-to-peak per-axis jitter added to velocity each frame.
pub const JITTER: f32 = 0.1;
/// Hard speed limit after every step (px per frame).
pub const MAX_SPEED: f32 = 3.0;

/// Pointer input to a step, present only when the pointer can push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPull {
    pub position: Vec2,
    /// Signed: positive attracts, negative repels.
    pub force: f32,
}

/// Accelerate `particle` toward (force > 0) or away from (force < 0) the
/// pointer, with linear falloff to zero at [`POINTER_RADIUS`].
pub fn apply_pointer_force(particle: &mut Particle, pull: PointerPull) {
    let delta = pull.position - particle.position;
    let distance = delta.length();
    if distance >= POINTER_RADIUS {
        return;
    }

    let falloff = (POINTER_RADIUS - distance) / POINTER_RADIUS;
    let angle = delta.y.atan2(delta.x);
    let direction = Vec2::new(angle.cos(), angle.sin());
    let magnitude = falloff * pull.force.abs() * POINTER_FORCE_SCALE;

    if pull.force > 0.0 {
        particle.velocity += direction * magnitude;
    } else if pull.force < 0.0 {
        particle.velocity -= direction * magnitude;
    }
}

pub fn integrate(particle: &mut Particle) {
    particle.position += particle.velocity;
}

/// Reflect off the surface edges with damping and clamp back inside.
pub fn bounce(particle: &mut Particle, bounds: Vec2) {
    let p = &mut particle.position;
    let v = &mut particle.velocity;

    if p.x <= 0.0 || p.x >= bounds.x {
        v.x *= -WALL_RESTITUTION;
        p.x = p.x.clamp(0.0, bounds.x);
    }
    if p.y <= 0.0 || p.y >= bounds.y {
        v.y *= -WALL_RESTITUTION;
        p.y = p.y.clamp(0.0, bounds.y);
    }
}

pub fn jitter(particle: &mut Particle, rng: &mut Rng) {
    particle.velocity.x += rng.centered() * JITTER;
    particle.velocity.y += rng.centered() * JITTER;
}

/// Rescale the velocity to exactly [`MAX_SPEED`] when it exceeds it.
pub fn cap_speed(particle: &mut Particle) {
    let speed = particle.velocity.length();
    if speed > MAX_SPEED {
        particle.velocity = particle.velocity / speed * MAX_SPEED;
    }
}

/// Run the full per-frame pipeline on one particle.
pub fn step_particle(
    particle: &mut Particle,
    bounds: Vec2,
    pull: Option<PointerPull>,
    rng: &mut Rng,
) {
    if let Some(pull) = pull {
        apply_pointer_force(particle, pull);
    }
    integrate(particle);
    bounce(particle, bounds);
    jitter(particle, rng);
    cap_speed(particle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::Color;

    fn still(x: f32, y: f32) -> Particle {
        Particle::at_rest(Vec2::new(x, y), 3.0, Color::WHITE)
    }

    #[test]
    fn attract_pulls_toward_pointer() {
        let mut p = still(50.0, 100.0);
        apply_pointer_force(
            &mut p,
            PointerPull { position: Vec2::new(100.0, 100.0), force: 5.0 },
        );
        // falloff (150 - 50) / 150 * 5 * 0.5
        assert!((p.velocity.x - 5.0 / 3.0).abs() < 1e-4, "vx = {}", p.velocity.x);
        assert!(p.velocity.y.abs() < 1e-4);
    }

    #[test]
    fn repel_pushes_away_from_pointer() {
        let mut p = still(50.0, 100.0);
        apply_pointer_force(
            &mut p,
            PointerPull { position: Vec2::new(100.0, 100.0), force: -5.0 },
        );
        assert!(p.velocity.x < 0.0);
    }

    #[test]
    fn no_force_outside_radius() {
        let mut p = still(0.0, 0.0);
        apply_pointer_force(
            &mut p,
            PointerPull { position: Vec2::new(POINTER_RADIUS, 0.0), force: 5.0 },
        );
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn bounce_reflects_and_clamps() {
        let mut p = still(-4.0, 50.0);
        p.velocity = Vec2::new(-2.0, 1.0);
        bounce(&mut p, Vec2::new(100.0, 100.0));
        assert_eq!(p.position.x, 0.0);
        assert!((p.velocity.x - 1.6).abs() < 1e-6);
        assert_eq!(p.velocity.y, 1.0);

        let mut p = still(30.0, 130.0);
        p.velocity = Vec2::new(0.0, 2.5);
        bounce(&mut p, Vec2::new(100.0, 100.0));
        assert_eq!(p.position.y, 100.0);
        assert!((p.velocity.y + 2.0).abs() < 1e-6);
    }

    #[test]
    fn cap_rescales_to_exact_limit() {
        let mut p = still(0.0, 0.0);
        p.velocity = Vec2::new(30.0, 40.0);
        cap_speed(&mut p);
        assert!((p.velocity.length() - MAX_SPEED).abs() < 1e-5);
        assert!((p.velocity.x / p.velocity.y - 0.75).abs() < 1e-5);

        p.velocity = Vec2::new(1.0, 1.0);
        cap_speed(&mut p);
        assert_eq!(p.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn jitter_is_small() {
        let mut rng = Rng::new(9);
        let mut p = still(0.0, 0.0);
        jitter(&mut p, &mut rng);
        assert!(p.velocity.x.abs() <= JITTER / 2.0);
        assert!(p.velocity.y.abs() <= JITTER / 2.0);
    }

    #[test]
    fn step_keeps_particle_in_bounds_under_large_velocity() {
        let mut rng = Rng::new(1);
        let bounds = Vec2::new(200.0, 200.0);
        let mut p = still(199.0, 1.0);
        p.velocity = Vec2::new(500.0, -500.0);
        step_particle(&mut p, bounds, None, &mut rng);
        assert!(p.position.x >= 0.0 && p.position.x <= bounds.x);
        assert!(p.position.y >= 0.0 && p.position.y <= bounds.y);
        assert!(p.speed_now() <= MAX_SPEED + 1e-4);
    }
}
