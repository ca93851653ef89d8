// src/gui/components/selection_panel.rs
//
// Selected entries in click order, with per-entry remove, reset and print.

use eframe::egui::{self, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Selected");
        ui.label(RichText::new(app.session.selection().counter()).strong());
    });

    let mut remove: Option<usize> = None;
    egui::ScrollArea::vertical()
        .id_salt("selection_scroll")
        .max_height(260.0)
        .show(ui, |ui| {
            if app.session.selection().is_empty() {
                ui.weak("Nothing selected");
            }
            for (i, row) in app.session.selection().rows().iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("✖").on_hover_text("Remove").clicked() {
                        remove = Some(i);
                    }
                    ui.label(format!("{}. {}", i + 1, row.display_name()));
                });
            }
        });

    // indices shift after a removal, so only one per frame
    if let Some(i) = remove {
        match app.session.deselect(i) {
            Ok(row) => app.status(format!("Removed {}", row.display_name())),
            Err(e) => app.notify(e.to_string()),
        }
    }

    ui.horizontal(|ui| {
        if ui.button("Reset").clicked() {
            if let Err(e) = app.session.request_reset() {
                app.notify(e.to_string());
            }
        }
        if ui.button("Print selected").clicked() {
            actions::open_price_editor(app);
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Output:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.out_path_text)
                .desired_width(180.0)
                .font(egui::TextStyle::Monospace),
        );
        if resp.lost_focus() {
            app.state.options.print.set_out_path(&app.out_path_text);
            app.out_path_text = app.state.options.print.out_path.to_string_lossy().into_owned();
            logf!("UI: out_path → {}", app.out_path_text);
        }
    });
    ui.checkbox(&mut app.state.options.print.open_after_write, "Open after writing");
}
