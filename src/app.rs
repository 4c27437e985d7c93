use egui::Rect;

use crate::canvas::Canvas;
use crate::config::SessionConfig;
use crate::error::ConfigResult;
use crate::input::{self, InputHandler, PointerEvent};
use crate::panels::prompts::{IntegerTarget, Modal};
use crate::panels::{central_panel, modal_window, tools_panel};
use crate::renderer::Renderer;
use crate::session::{DrawingSession, SizeChoice, TEXT_PROMPT};
use crate::tools::ToolMode;

/// The eframe shell around a [`DrawingSession`]: toolbar, canvas and dialogs.
pub struct PaintApp {
    session: DrawingSession,
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
    modal: Option<Modal>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SessionConfig) -> ConfigResult<Self> {
        Self::with_config(config)
    }

    /// Build the app without a window, e.g. for tests
    pub fn with_config(config: SessionConfig) -> ConfigResult<Self> {
        let session = DrawingSession::new(config)?;
        let mut canvas = Canvas::new();
        session.sync_surface(&mut canvas);
        log::info!(
            "Starting {:?} edition with tools {:?}",
            session.config().edition,
            session.config().tools
        );

        Ok(Self {
            renderer: Renderer::new(session.background_color()),
            session,
            canvas,
            input: InputHandler::new(Rect::NOTHING),
            modal: None,
        })
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub fn select_tool(&mut self, mode: ToolMode) {
        self.session.set_mode(mode, &mut self.canvas);
    }

    pub fn set_width(&mut self, choice: SizeChoice) {
        self.session.set_width(choice, &mut self.canvas);
    }

    pub fn clear(&mut self) {
        self.session.clear(&mut self.canvas);
    }

    /// Open a dialog; any gesture in progress is abandoned without a release.
    pub fn open_modal(&mut self, modal: Modal) {
        self.input.reset();
        self.modal = Some(modal);
    }

    /// Close the open dialog and replay the command it was collecting input for.
    ///
    /// The answer is queued on the canvas first, so the session's synchronous
    /// prompt returns it straight away. A cancelled dialog queues `None`.
    pub fn close_modal(&mut self, confirmed: bool) {
        let Some(modal) = self.modal.take() else {
            return;
        };

        match modal {
            Modal::Color { value } => {
                if confirmed {
                    self.session.set_color(value, &mut self.canvas);
                }
            }
            Modal::Integer { target, value, .. } => {
                self.canvas.answer_integer(confirmed.then_some(value));
                match target {
                    IntegerTarget::Width => {
                        self.session.set_width(SizeChoice::PromptCustom, &mut self.canvas);
                    }
                    IntegerTarget::FontSize => {
                        self.session
                            .set_font_size(SizeChoice::PromptCustom, &mut self.canvas);
                    }
                }
            }
            Modal::Text { at, buffer, .. } => {
                self.canvas.answer_text(confirmed.then_some(buffer));
                self.session.on_press(at, &mut self.canvas);
            }
        }
    }

    /// Read this frame's pointer input and forward it to the session.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);
        let events = self.input.process_input(ctx);
        self.dispatch(&events);
    }

    /// Route pointer events, diverting a text-tool press into the text dialog.
    pub fn dispatch(&mut self, events: &[PointerEvent]) {
        for event in events {
            if let PointerEvent::Press(at) = *event {
                if self.session.mode().prompts_on_press() {
                    self.open_modal(Modal::text(at, TEXT_PROMPT));
                    return;
                }
            }
            input::route(std::slice::from_ref(event), &mut self.session, &mut self.canvas);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        modal_window(self, ctx);
    }
}
