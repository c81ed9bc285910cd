use glam::Vec2;
use particle_field::{
    fullscreen_label, pause_label, Command, DisplayMode, FieldConfig, FrameLoop,
    FullscreenRequest, InputEvent, InputQueue, ParticleField, Surface, Viewport, KEY_ESCAPE,
};

/// Wires a field, its frame loop, queued input and a drawing surface
/// together.
///
/// The browser host calls [`tick`](FieldRunner::tick) once per animation
/// frame. Pointer, key and resize events are queued and drained at the
/// start of the next tick; control changes go through
/// [`apply_input`](FieldRunner::apply_input) right away so labels read back
/// by the host are always current.
pub struct FieldRunner<S: Surface> {
    field: ParticleField,
    frame_loop: FrameLoop,
    input: InputQueue,
    surface: S,
    /// Right edge of the controls panel in viewport px, if the host reported one.
    controls_edge: Option<f32>,
    /// Fullscreen change the host still has to carry out.
    pending_fullscreen: Option<FullscreenRequest>,
}

impl<S: Surface> FieldRunner<S> {
    pub fn new(config: &FieldConfig, viewport: Viewport, mode: DisplayMode, surface: S) -> Self {
        Self {
            field: ParticleField::new(config, viewport, mode),
            frame_loop: FrameLoop::new(),
            input: InputQueue::new(),
            surface,
            controls_edge: None,
            pending_fullscreen: None,
        }
    }

    /// Queue an event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation frame. Returns true when the field was drawn.
    pub fn tick(&mut self) -> bool {
        for event in self.input.drain() {
            self.apply_input(event);
        }
        self.frame_loop.tick(&mut self.field, &mut self.surface)
    }

    /// Route an event: control changes apply now, everything else waits for
    /// the next tick.
    pub fn submit(&mut self, event: InputEvent) {
        match event {
            InputEvent::Param(_) | InputEvent::Command(_) | InputEvent::DisplayMode(_) => {
                self.apply_input(event)
            }
            _ => self.push_input(event),
        }
    }

    /// Apply an event immediately.
    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.field.pointer_move(Vec2::new(x, y)),
            InputEvent::PointerLeave => self.field.pointer_leave(),
            InputEvent::PagePointerMove { x } => {
                let over_controls = self.field.display_mode().shows_controls()
                    && self.controls_edge.is_some_and(|edge| x < edge);
                if over_controls {
                    self.field.pointer_leave();
                }
            }
            InputEvent::Resize { width, height } => {
                self.field.resize(Viewport::new(width, height));
            }
            InputEvent::DisplayMode(mode) => {
                if mode != self.field.display_mode() {
                    self.field.set_display_mode(mode);
                }
            }
            InputEvent::KeyDown { key_code } => {
                if key_code == KEY_ESCAPE && self.field.display_mode() == DisplayMode::Fullscreen {
                    self.request_fullscreen(FullscreenRequest::Exit);
                }
            }
            InputEvent::Param(update) => update.apply(&mut self.field),
            InputEvent::Command(command) => self.run_command(command),
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Reset => self.field.reset_positions(),
            Command::TogglePause => {
                let paused = self.field.toggle_paused();
                log::debug!("paused = {}", paused);
            }
            Command::ToggleFullscreen => {
                let request = FullscreenRequest::toggle_from(self.field.display_mode());
                self.request_fullscreen(request);
            }
        }
    }

    fn request_fullscreen(&mut self, request: FullscreenRequest) {
        log::debug!("fullscreen request: {}", request.as_str());
        self.pending_fullscreen = Some(request);
    }

    /// Hand the pending fullscreen request to the host. The host reports the
    /// outcome back as a `DisplayMode` event once the browser has switched.
    pub fn take_fullscreen_request(&mut self) -> Option<FullscreenRequest> {
        self.pending_fullscreen.take()
    }

    pub fn set_controls_edge(&mut self, edge: Option<f32>) {
        self.controls_edge = edge;
    }

    pub fn pause_label(&self) -> &'static str {
        pause_label(self.field.is_paused())
    }

    pub fn fullscreen_label(&self) -> &'static str {
        fullscreen_label(self.field.display_mode())
    }

    pub fn display_mode(&self) -> &'static str {
        self.field.display_mode().as_str()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use particle_field::{CommandBuffer, ParamUpdate, ParameterSet};

    fn runner(mode: DisplayMode) -> FieldRunner<CommandBuffer> {
        let params = ParameterSet {
            particle_count: 20,
            ..ParameterSet::default()
        };
        FieldRunner::new(
            &FieldConfig::default().with_params(params),
            Viewport::new(1024.0, 768.0),
            mode,
            CommandBuffer::new(),
        )
    }

    #[test]
    fn queued_input_applies_on_tick() {
        let mut r = runner(DisplayMode::Normal);
        r.push_input(InputEvent::PointerMove { x: 100.0, y: 50.0 });
        assert!(!r.field().pointer().is_present());

        assert!(r.tick());
        assert!(r.field().pointer().is_present());
        assert_eq!(r.field().pointer().position(), Vec2::new(100.0, 50.0));
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn pause_command_stops_drawing_and_flips_label() {
        let mut r = runner(DisplayMode::Normal);
        assert_eq!(r.pause_label(), "Pause");
        r.apply_input(InputEvent::Command(Command::TogglePause));
        assert_eq!(r.pause_label(), "Resume");

        let drawn_before = r.surface().len();
        assert!(!r.tick());
        assert_eq!(r.surface().len(), drawn_before);
        assert_eq!(r.frames(), 1);

        r.apply_input(InputEvent::Command(Command::TogglePause));
        assert!(r.tick());
    }

    #[test]
    fn fullscreen_round_trip() {
        let mut r = runner(DisplayMode::Normal);
        r.apply_input(InputEvent::Command(Command::ToggleFullscreen));
        let request = r.take_fullscreen_request();
        assert_eq!(request, Some(FullscreenRequest::Enter));
        assert_eq!(r.take_fullscreen_request(), None);

        // Host entered fullscreen and reports back.
        let mode = request.map(FullscreenRequest::resulting_mode).unwrap();
        r.apply_input(InputEvent::DisplayMode(mode));
        assert_eq!(r.display_mode(), "fullscreen");
        assert_eq!(r.fullscreen_label(), "Show Menu");

        r.push_input(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        r.tick();
        assert_eq!(r.take_fullscreen_request(), Some(FullscreenRequest::Exit));
    }

    #[test]
    fn submit_applies_controls_now_and_queues_pointer() {
        let mut r = runner(DisplayMode::Normal);
        r.submit(InputEvent::Command(Command::TogglePause));
        assert!(r.field().is_paused());

        r.submit(InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert!(!r.field().pointer().is_present());
        r.tick();
        assert!(r.field().pointer().is_present());
    }

    #[test]
    fn escape_outside_fullscreen_is_ignored() {
        let mut r = runner(DisplayMode::Normal);
        r.apply_input(InputEvent::KeyDown { key_code: KEY_ESCAPE });
        assert_eq!(r.take_fullscreen_request(), None);
    }

    #[test]
    fn pointer_over_controls_counts_as_leaving() {
        let mut r = runner(DisplayMode::Normal);
        r.set_controls_edge(Some(320.0));
        r.apply_input(InputEvent::PointerMove { x: 400.0, y: 300.0 });
        r.apply_input(InputEvent::PagePointerMove { x: 500.0 });
        assert!(r.field().pointer().is_present());

        r.apply_input(InputEvent::PagePointerMove { x: 200.0 });
        assert!(!r.field().pointer().is_present());
        assert_eq!(r.field().pointer().position(), r.field().center());
    }

    #[test]
    fn controls_edge_ignored_when_controls_hidden() {
        let mut r = runner(DisplayMode::ControlsHidden);
        r.set_controls_edge(Some(320.0));
        r.apply_input(InputEvent::PointerMove { x: 100.0, y: 100.0 });
        r.apply_input(InputEvent::PagePointerMove { x: 100.0 });
        assert!(r.field().pointer().is_present());
    }

    #[test]
    fn params_and_resize_reach_the_field() {
        let mut r = runner(DisplayMode::Fullscreen);
        r.apply_input(InputEvent::Param(ParamUpdate::ParticleCount(7)));
        assert_eq!(r.field().particles().len(), 7);

        r.push_input(InputEvent::Resize { width: 300.0, height: 200.0 });
        r.tick();
        assert_eq!(r.field().size(), Vec2::new(300.0, 200.0));
        assert_eq!(r.field().particles().len(), 7);
    }
}
