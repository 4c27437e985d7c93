use egui::{Align2, Color32, Key, Pos2};

use crate::PaintApp;
use crate::surface::{IntegerPrompt, TextPrompt};

/// Which setting an integer dialog feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerTarget {
    Width,
    FontSize,
}

/// A modal dialog collecting input for the session.
///
/// While one is open the canvas receives no pointer events.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Color {
        value: Color32,
    },
    Integer {
        target: IntegerTarget,
        prompt: IntegerPrompt,
        value: u32,
    },
    Text {
        at: Pos2,
        prompt: TextPrompt,
        buffer: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Open,
    Confirmed,
    Cancelled,
}

impl Modal {
    pub fn integer(target: IntegerTarget, prompt: IntegerPrompt) -> Self {
        Self::Integer {
            target,
            value: prompt.initial,
            prompt,
        }
    }

    pub fn text(at: Pos2, prompt: TextPrompt) -> Self {
        Self::Text {
            at,
            prompt,
            buffer: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Color { .. } => "Choose Color for Humming Paint",
            Self::Integer { prompt, .. } => prompt.title,
            Self::Text { prompt, .. } => prompt.title,
        }
    }

    /// Draw the dialog body and report whether the user finished with it
    pub fn ui(&mut self, ui: &mut egui::Ui) -> ModalOutcome {
        match self {
            Self::Color { value } => {
                egui::color_picker::color_picker_color32(
                    ui,
                    value,
                    egui::color_picker::Alpha::Opaque,
                );
            }
            Self::Integer { prompt, value, .. } => {
                ui.label(prompt.label);
                ui.add(egui::DragValue::new(value).range(prompt.min..=prompt.max));
            }
            Self::Text { prompt, buffer, .. } => {
                ui.label(prompt.label);
                ui.text_edit_singleline(buffer).request_focus();
            }
        }

        let mut outcome = ModalOutcome::Open;
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                outcome = ModalOutcome::Confirmed;
            }
            if ui.button("Cancel").clicked() {
                outcome = ModalOutcome::Cancelled;
            }
        });
        if outcome == ModalOutcome::Open {
            ui.input(|input| {
                if input.key_pressed(Key::Enter) {
                    outcome = ModalOutcome::Confirmed;
                } else if input.key_pressed(Key::Escape) {
                    outcome = ModalOutcome::Cancelled;
                }
            });
        }
        outcome
    }
}

/// Show the open modal, if any, and hand the result back to the app once it closes
pub fn modal_window(app: &mut PaintApp, ctx: &egui::Context) {
    let mut outcome = ModalOutcome::Open;
    let Some(modal) = app.modal_mut() else {
        return;
    };

    egui::Window::new(modal.title())
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            outcome = modal.ui(ui);
        });

    match outcome {
        ModalOutcome::Open => {}
        ModalOutcome::Confirmed => app.close_modal(true),
        ModalOutcome::Cancelled => app.close_modal(false),
    }
}
