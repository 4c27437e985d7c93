use egui::{Context, Pos2, Rect};

use crate::canvas::Canvas;
use crate::session::DrawingSession;

/// Press, drag and release of the primary button, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Pos2),
    Drag(Pos2),
    Release(Pos2),
}

/// Primary-button state read from egui for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

/// Turns per-frame pointer state into gesture events for the canvas.
///
/// A gesture starts only with a press inside the canvas. Once started, drags
/// and the release are reported even when the pointer wanders outside, so a
/// stroke can't get stuck half-finished.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
    in_gesture: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
            in_gesture: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    /// Read the primary button from egui and convert it into events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let sample = ctx.input(|input| PointerSample {
            pos: input.pointer.interact_pos().or(input.pointer.latest_pos()),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        });
        self.process(sample)
    }

    pub fn process(&mut self, sample: PointerSample) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pos = sample.pos.or(self.last_pos);

        if sample.pressed && !self.in_gesture {
            if let Some(pos) = pos.filter(|p| self.canvas_rect.contains(*p)) {
                self.in_gesture = true;
                self.last_pos = Some(pos);
                events.push(PointerEvent::Press(self.to_local(pos)));
            }
        } else if self.in_gesture && sample.down {
            if let Some(pos) = pos.filter(|p| Some(*p) != self.last_pos) {
                self.last_pos = Some(pos);
                events.push(PointerEvent::Drag(self.to_local(pos)));
            }
        }

        if self.in_gesture && (sample.released || (!sample.down && !sample.pressed)) {
            let pos = pos.unwrap_or(self.canvas_rect.min);
            self.in_gesture = false;
            self.last_pos = None;
            events.push(PointerEvent::Release(self.to_local(pos)));
        }

        events
    }

    /// Forget a gesture in progress without reporting a release, e.g. when a modal opens
    pub fn reset(&mut self) {
        self.in_gesture = false;
        self.last_pos = None;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }
}

/// Forward gesture events to the session, drawing into `canvas`
pub fn route(events: &[PointerEvent], session: &mut DrawingSession, canvas: &mut Canvas) {
    for event in events {
        match *event {
            PointerEvent::Press(pos) => session.on_press(pos, canvas),
            PointerEvent::Drag(pos) => session.on_drag(pos, canvas),
            PointerEvent::Release(pos) => session.on_release(pos, canvas),
        }
    }
}
