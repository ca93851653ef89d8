// src/gui/components/range_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Print range");
    ui.small(format!("Catalog positions 1 to {}", app.session.catalog().len()));

    ui.horizontal(|ui| {
        ui.label("From");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.range_from_text).desired_width(60.0));
        ui.label("To");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.range_to_text).desired_width(60.0));
    });

    if ui.button("Print range").clicked() {
        actions::print_range(app);
    }
}
