//! Drawable-surface contract.
//!
//! The field never talks to a canvas directly. It issues the handful of
//! primitives below, and each host provides an implementation: the web
//! crate maps them onto `CanvasRenderingContext2d`, while [`CommandBuffer`]
//! records them for headless runs and tests.

use glam::Vec2;

use super::color::Color;

/// One stop of a radial gradient. `offset` runs 0.0 (center) to 1.0 (rim).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A soft glow around a filled shape (canvas `shadowColor` / `shadowBlur`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

/// Drawing primitives the field needs from its host.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self, size: Vec2);

    /// Straight line segment with a solid stroke.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Disc filled with a radial gradient from `center` out to `radius`.
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]);

    /// Solid disc with an additive glow.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Color, glow: Glow);
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { size: Vec2 },
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Radial { center: Vec2, radius: f32, stops: Vec<GradientStop> },
    Glow { center: Vec2, radius: f32, color: Color, glow: Glow },
}

/// Surface that records every command instead of rasterizing.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded line segments, in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl Surface for CommandBuffer {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop]) {
        self.commands.push(DrawCommand::Radial {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Color, glow: Glow) {
        self.commands.push(DrawCommand::Glow { center, radius, color, glow });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut buf = CommandBuffer::new();
        buf.clear(Vec2::new(10.0, 10.0));
        buf.stroke_line(Vec2::ZERO, Vec2::ONE, Color::WHITE, 1.0);
        buf.fill_glow(
            Vec2::ONE,
            2.0,
            Color::WHITE,
            Glow { color: Color::WHITE, blur: 10.0 },
        );
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.line_count(), 1);
        assert!(matches!(buf.commands[0], DrawCommand::Clear { .. }));

        buf.clear_commands();
        assert!(buf.is_empty());
    }
}
