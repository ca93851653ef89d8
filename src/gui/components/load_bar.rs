// src/gui/components/load_bar.rs
//
// File path + load buttons on the left, search box on the right.

use std::{path::PathBuf, time::Instant};

use eframe::egui::{self, Align, Layout};

use crate::{gui::{actions, app::App}, store::LoadOrigin};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        ui.label("File:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.file_path_text)
                .hint_text("itemmaster.csv / .xlsx (or drop a file here)")
                .desired_width(320.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Load file").clicked() || enter {
            let text = app.state.gui.file_path_text.trim().to_string();
            if text.is_empty() {
                app.notify("Please select a valid CSV or Excel file");
            } else {
                actions::load_path(app, &ctx, PathBuf::from(text), LoadOrigin::UserFile);
            }
        }

        if ui.button("Load default").clicked() {
            let path = app.state.options.catalog.default_path.clone();
            actions::load_path(app, &ctx, path, LoadOrigin::DefaultButton);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.search_text)
                    .hint_text("Search name, ITEM_ID or EAN")
                    .desired_width(260.0),
            );
            if resp.changed() {
                app.debouncer.trigger(Instant::now());
            }
            ui.label("Search:");
        });
    });

    if let Some(p) = &app.state.gui.last_loaded {
        ui.small(format!("Catalog: {} ({} items)", p.display(), app.session.catalog().len()));
    }
}
