//! The particle field: particle collection, pointer, parameters, and the
//! per-frame update and draw passes.
//!
//! The field knows nothing about scheduling. A driver (see
//! [`FrameLoop`](super::time::FrameLoop)) calls [`ParticleField::update`]
//! and [`ParticleField::draw`] once per frame, and the host mutates it
//! only through the named setters below.

use std::f32::consts::TAU;

use glam::Vec2;

use super::layout::{surface_size, DisplayMode, SurfaceRule, Viewport};
use super::particle::{jittered_size, random_velocity, Particle, PointerParticle};
use super::rng::Rng;
use crate::api::config::FieldConfig;
use crate::api::params::{ColorScheme, ParameterSet, PALETTE_SIZE};
use crate::renderer::color::Color;
use crate::renderer::surface::Surface;
use crate::systems::connections::{draw_links, draw_pointer_links};
use crate::systems::physics::{step_particle, PointerPull};
use crate::systems::render::{draw_particles, draw_pointer};

pub struct ParticleField {
    params: ParameterSet,
    particles: Vec<Particle>,
    pointer: PointerParticle,
    size: Vec2,
    mode: DisplayMode,
    viewport: Viewport,
    rule: SurfaceRule,
    paused: bool,
    rng: Rng,
}

impl ParticleField {
    /// Build a populated field for the given viewport and display mode.
    pub fn new(config: &FieldConfig, viewport: Viewport, mode: DisplayMode) -> Self {
        let params = config.params.clone().sanitized();
        let rule = SurfaceRule {
            small_device_width: config.small_device_width,
            small_device_height_ratio: config.small_device_height_ratio,
        }
        .sanitized();
        let size = surface_size(mode, viewport, rule);
        let mut field = Self {
            pointer: PointerParticle::new(size / 2.0, params.particle_size),
            params,
            particles: Vec::new(),
            size,
            mode,
            viewport,
            rule,
            paused: false,
            rng: Rng::new(config.seed),
        };
        field.rebuild();
        field
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> &PointerParticle {
        &self.pointer
    }

    /// Surface dimensions in px.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // -- Rebuild triggers --

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild();
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        log::info!("display mode: {}", mode.as_str());
        self.rebuild();
    }

    /// Discard every particle, recompute the surface size, and recreate the
    /// collection. The pointer particle is recentred; the pointer target is kept.
    fn rebuild(&mut self) {
        self.size = surface_size(self.mode, self.viewport, self.rule);
        let count = self.params.particle_count;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let size = jittered_size(
                self.params.particle_size,
                self.params.size_randomness,
                &mut self.rng,
            );
            let position = Vec2::new(self.rng.up_to(self.size.x), self.rng.up_to(self.size.y));
            let color = self.random_color();
            particles.push(Particle::new(
                position,
                size,
                self.params.particle_speed,
                color,
                &mut self.rng,
            ));
        }
        self.particles = particles;
        let center = self.center();
        self.pointer.recenter(center, self.params.particle_size);
        log::info!(
            "field rebuilt: {} particles on {}x{}",
            count,
            self.size.x,
            self.size.y
        );
    }

    fn random_color(&mut self) -> Color {
        let palette = self.params.color_scheme.palette();
        palette[self.rng.next_int(PALETTE_SIZE as u32) as usize]
    }

    fn commit(&mut self, params: ParameterSet) {
        self.params = params.sanitized();
    }

    // -- Pointer --

    /// Pointer moved to `position` in surface-local px.
    pub fn pointer_move(&mut self, position: Vec2) {
        self.pointer.move_to(position);
    }

    /// Pointer left the interactive area.
    pub fn pointer_leave(&mut self) {
        let center = self.center();
        self.pointer.leave(center);
    }

    fn pointer_pull(&self) -> Option<PointerPull> {
        let force = self.params.pointer_force;
        (self.pointer.is_present() && force != 0.0).then(|| PointerPull {
            position: self.pointer.target,
            force,
        })
    }

    // -- Mutation API --

    pub fn set_particle_count(&mut self, count: usize) {
        let mut params = self.params.clone();
        params.particle_count = count;
        self.commit(params);
        log::debug!("particleCount = {}", self.params.particle_count);
        self.rebuild();
    }

    /// Rescale every velocity to the new magnitude. A particle at rest gets
    /// a random heading instead, since it has no direction to keep.
    pub fn set_particle_speed(&mut self, speed: f32) {
        let mut params = self.params.clone();
        params.particle_speed = speed;
        self.commit(params);
        let speed = self.params.particle_speed;
        log::debug!("particleSpeed = {}", speed);

        for particle in &mut self.particles {
            let current = particle.velocity.length();
            if current > 0.0 {
                particle.velocity *= speed / current;
            } else {
                let angle = self.rng.up_to(TAU);
                particle.velocity = Vec2::new(angle.cos(), angle.sin()) * speed;
            }
            particle.speed = speed;
        }
    }

    pub fn set_particle_size(&mut self, size: f32) {
        let mut params = self.params.clone();
        params.particle_size = size;
        self.commit(params);
        log::debug!("particleSize = {}", self.params.particle_size);
        self.resize_particles();
    }

    pub fn set_size_randomness(&mut self, randomness: f32) {
        let mut params = self.params.clone();
        params.size_randomness = randomness;
        self.commit(params);
        log::debug!("sizeRandomness = {}", self.params.size_randomness);
        self.resize_particles();
    }

    /// Re-roll every radius once from the current size parameters.
    fn resize_particles(&mut self) {
        let base = self.params.particle_size;
        let randomness = self.params.size_randomness;
        for particle in &mut self.particles {
            particle.size = jittered_size(base, randomness, &mut self.rng);
        }
        self.pointer.resize(base);
    }

    pub fn set_connection_distance(&mut self, distance: f32) {
        let mut params = self.params.clone();
        params.connection_distance = distance;
        self.commit(params);
        log::debug!("connectionDistance = {}", self.params.connection_distance);
    }

    pub fn set_pointer_connection_distance(&mut self, distance: f32) {
        let mut params = self.params.clone();
        params.pointer_connection_distance = distance;
        self.commit(params);
        log::debug!(
            "pointerConnectionDistance = {}",
            self.params.pointer_connection_distance
        );
    }

    pub fn set_pointer_force(&mut self, force: f32) {
        let mut params = self.params.clone();
        params.pointer_force = force;
        self.commit(params);
        log::debug!("pointerForce = {}", self.params.pointer_force);
    }

    /// Switch palettes and resample every particle's color, even when the
    /// scheme is unchanged. The pointer keeps its own look.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.params.color_scheme = scheme;
        log::debug!("colorScheme = {}", scheme.name());
        for i in 0..self.particles.len() {
            let color = self.random_color();
            self.particles[i].color = color;
        }
    }

    /// Scatter particles to random positions with fresh velocities at the
    /// current speed. The pointer is left alone.
    pub fn reset_positions(&mut self) {
        let speed = self.params.particle_speed;
        for particle in &mut self.particles {
            particle.position =
                Vec2::new(self.rng.up_to(self.size.x), self.rng.up_to(self.size.y));
            particle.velocity = random_velocity(speed, &mut self.rng);
            particle.speed = speed;
        }
        log::debug!("positions reset");
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    // -- Frame passes --

    /// Advance every regular particle by one frame. Does not look at the
    /// pause flag; the driver decides whether to call this.
    pub fn update(&mut self) {
        let pull = self.pointer_pull();
        let bounds = self.size;
        for particle in &mut self.particles {
            step_particle(particle, bounds, pull, &mut self.rng);
        }
    }

    /// Links first, then particles on top, then the pointer.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        draw_links(&self.particles, self.params.connection_distance, surface);
        if self.pointer.is_present() {
            draw_pointer_links(
                self.pointer.position(),
                &self.particles,
                self.params.pointer_connection_distance,
                surface,
            );
        }

        draw_particles(&self.particles, surface);
        if self.pointer.is_present() {
            draw_pointer(&self.pointer, surface);
        }
    }
}
