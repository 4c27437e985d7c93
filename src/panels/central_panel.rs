use crate::PaintApp;

/// The drawing area: routes pointer input to the session and paints the canvas
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            // Modal semantics: nothing reaches the canvas while a dialog is open
            if app.modal().is_none() {
                app.handle_input(ctx, canvas_rect);
                if response.hovered() {
                    ctx.set_cursor_icon(app.canvas().cursor().to_egui());
                }
            }

            app.renderer().render(&painter, canvas_rect, app.canvas());
        });
}
