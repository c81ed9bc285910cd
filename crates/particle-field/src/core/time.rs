use crate::core::field::ParticleField;
use crate::renderer::surface::Surface;

/// Frame driver for a field.
///
/// Every call to [`tick`](FrameLoop::tick) counts as one scheduled frame,
/// paused or not. The pause flag only skips the clear/update/draw body, so
/// resuming takes effect on the very next tick.
#[derive(Debug, Default)]
pub struct FrameLoop {
    frames: u64,
    rendered: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one frame. Returns true when the body ran (field not paused).
    pub fn tick<S: Surface + ?Sized>(&mut self, field: &mut ParticleField, surface: &mut S) -> bool {
        self.frames += 1;
        if field.is_paused() {
            return false;
        }

        surface.clear(field.size());
        field.update();
        field.draw(surface);
        self.rendered += 1;
        true
    }

    /// Tick repeatedly until `keep_going` returns false. The predicate sees
    /// the field and the number of frames scheduled so far, and is checked
    /// before each tick. Returns the number of ticks run by this call.
    pub fn run<S: Surface + ?Sized>(
        &mut self,
        field: &mut ParticleField,
        surface: &mut S,
        mut keep_going: impl FnMut(&ParticleField, u64) -> bool,
    ) -> u64 {
        let start = self.frames;
        while keep_going(field, self.frames) {
            self.tick(field, surface);
        }
        self.frames - start
    }

    /// Frames scheduled since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames whose body actually ran.
    pub fn rendered(&self) -> u64 {
        self.rendered
    }
}
