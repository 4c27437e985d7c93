use crate::PaintApp;
use crate::components::{ToolButton, color_button};
use crate::panels::prompts::{IntegerTarget, Modal};
use crate::session::SizeChoice;

/// Top toolbar: tool buttons, color, widths, font size and "Clear All"
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_enabled_ui(app.modal().is_none(), |ui| {
            ui.horizontal(|ui| {
                // Collect tool names first to avoid borrowing issues
                let tools = app.session().config().tools.clone();
                let active = app.canvas().active_tool();

                for tool in tools {
                    if ToolButton::new(tool, active == Some(tool)).show(ui).clicked() {
                        log::debug!("Tool selected from UI: {tool}");
                        app.select_tool(tool);
                    }
                }
                ui.separator();

                if color_button(ui, app.canvas().color_indicator()).clicked() {
                    let value = app.session().stroke_color();
                    app.open_modal(Modal::Color { value });
                }
                ui.separator();

                let presets = app.session().config().width_presets.clone();
                let current = app.session().stroke_width();
                for width in presets {
                    if ui
                        .selectable_label(current == width, format!("{width}px"))
                        .clicked()
                    {
                        app.set_width(SizeChoice::Fixed(width));
                    }
                }
                if ui.button("Custom").clicked() {
                    let prompt = app.session().width_prompt();
                    app.open_modal(Modal::integer(IntegerTarget::Width, prompt));
                }

                if let Some(prompt) = app.session().font_size_prompt() {
                    ui.separator();
                    if ui.button(format!("Font {}pt", prompt.initial)).clicked() {
                        app.open_modal(Modal::integer(IntegerTarget::FontSize, prompt));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear All").clicked() {
                        app.clear();
                    }
                    ui.label(format!("Width: {current}px"));
                });
            });
        });
    });
}
