//! Particle entities: the regular drifting points and the pointer focus.

use glam::Vec2;

use super::rng::Rng;
use crate::renderer::color::Color;

/// Core color of the pointer particle, independent of the active palette.
pub const POINTER_COLOR: Color = Color::hex(0x8b5cf6);
/// Radius multiplier of the pointer particle relative to `particleSize`.
pub const POINTER_SIZE_FACTOR: f32 = 1.5;

/// A simulated point-mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Radius in px, never below 1.
    pub size: f32,
    /// Speed scale used to seed the velocity at creation.
    pub speed: f32,
    pub color: Color,
}

impl Particle {
    /// Each velocity component starts independently in `[-speed, speed)`.
    pub fn new(position: Vec2, size: f32, speed: f32, color: Color, rng: &mut Rng) -> Self {
        Particle {
            position,
            velocity: random_velocity(speed, rng),
            size: size.max(1.0),
            speed,
            color,
        }
    }

    /// A particle that does not move on its own.
    pub fn at_rest(position: Vec2, size: f32, color: Color) -> Self {
        Particle {
            position,
            velocity: Vec2::ZERO,
            size: size.max(1.0),
            speed: 0.0,
            color,
        }
    }

    pub fn speed_now(&self) -> f32 {
        self.velocity.length()
    }
}

/// Velocity with each component drawn from `[-1, 1) * speed`.
pub fn random_velocity(speed: f32, rng: &mut Rng) -> Vec2 {
    Vec2::new(rng.signed_unit() * speed, rng.signed_unit() * speed)
}

/// Radius for a base size, jittered by up to `randomness` in either direction.
pub fn jittered_size(base: f32, randomness: f32, rng: &mut Rng) -> f32 {
    let factor = 1.0 + rng.centered() * 2.0 * randomness;
    (base * factor).max(1.0)
}

/// The input-device focal point.
///
/// `target` is the raw pointer position; it is zeroed when the pointer
/// leaves, and a zero target means "no pointer". The particle itself is
/// recentred on leave so it always sits somewhere sensible.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerParticle {
    pub particle: Particle,
    pub target: Vec2,
}

impl PointerParticle {
    pub fn new(center: Vec2, base_size: f32) -> Self {
        Self {
            particle: Particle::at_rest(center, base_size * POINTER_SIZE_FACTOR, POINTER_COLOR),
            target: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.particle.position
    }

    pub fn is_present(&self) -> bool {
        self.target != Vec2::ZERO
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.target = position;
        self.particle.position = position;
    }

    pub fn leave(&mut self, center: Vec2) {
        self.target = Vec2::ZERO;
        self.particle.position = center;
    }

    /// Move the drawn particle back to `center` at the given base size.
    /// The pointer target is left alone.
    pub fn recenter(&mut self, center: Vec2, base_size: f32) {
        self.particle = Particle::at_rest(center, base_size * POINTER_SIZE_FACTOR, POINTER_COLOR);
    }

    pub fn resize(&mut self, base_size: f32) {
        self.particle.size = (base_size * POINTER_SIZE_FACTOR).max(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_velocity_within_speed_box() {
        let mut rng = Rng::new(11);
        for _ in 0..500 {
            let p = Particle::new(Vec2::ZERO, 3.0, 2.0, Color::WHITE, &mut rng);
            assert!(p.velocity.x >= -2.0 && p.velocity.x < 2.0);
            assert!(p.velocity.y >= -2.0 && p.velocity.y < 2.0);
        }
    }

    #[test]
    fn zero_speed_particle_is_still() {
        let mut rng = Rng::new(11);
        let p = Particle::new(Vec2::ONE, 3.0, 0.0, Color::WHITE, &mut rng);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn size_never_below_one() {
        let mut rng = Rng::new(5);
        for _ in 0..1000 {
            assert!(jittered_size(1.0, 1.0, &mut rng) >= 1.0);
        }
        assert_eq!(Particle::at_rest(Vec2::ZERO, 0.1, Color::WHITE).size, 1.0);
    }

    #[test]
    fn jitter_bounded_by_randomness() {
        let mut rng = Rng::new(5);
        for _ in 0..1000 {
            let s = jittered_size(10.0, 0.5, &mut rng);
            assert!((5.0..=15.0).contains(&s), "size {} out of range", s);
        }
        assert_eq!(jittered_size(4.0, 0.0, &mut rng), 4.0);
    }

    #[test]
    fn pointer_presence_follows_target() {
        let mut pointer = PointerParticle::new(Vec2::new(50.0, 50.0), 3.0);
        assert!(!pointer.is_present());
        assert_eq!(pointer.particle.size, 4.5);

        pointer.move_to(Vec2::new(10.0, 20.0));
        assert!(pointer.is_present());
        assert_eq!(pointer.position(), Vec2::new(10.0, 20.0));

        pointer.leave(Vec2::new(50.0, 50.0));
        assert!(!pointer.is_present());
        assert_eq!(pointer.position(), Vec2::new(50.0, 50.0));
    }
}
