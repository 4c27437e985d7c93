use eframe::egui;

use crate::canvas::ColorIndicator;

/// "Color" button filled with the stroke color, captioned in a readable foreground
pub fn color_button(ui: &mut egui::Ui, indicator: ColorIndicator) -> egui::Response {
    let caption = egui::RichText::new("Color").color(indicator.foreground);
    ui.add(
        egui::Button::new(caption)
            .fill(indicator.fill)
            .min_size(egui::vec2(64.0, 24.0)),
    )
}
