// src/gui/components/price_dialog.rs
//
// Per-entry MRP / sale price editing with a live discount preview.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};

const OK_GREEN: Color32 = Color32::from_rgb(0x2e, 0x9e, 0x44);
const BAD_RED: Color32 = Color32::from_rgb(0xd0, 0x30, 0x30);

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(editor) = app.price_editor.as_mut() else { return };

    // The table stays clickable while the editor is open.
    let selection = app.session.selection();
    if selection.is_empty() {
        logd!("Print: selection emptied, closing price editor");
        app.price_editor = None;
        return;
    }
    if !selection.matches_drafts(&editor.drafts) {
        logd!("Print: selection changed, re-keying {} draft(s)", editor.drafts.len());
        editor.drafts = selection.resync_drafts(&editor.drafts);
        editor.errors.clear();
    }

    let mut open = true;
    let mut submit = false;
    let mut cancel = false;
    let names: Vec<String> = app
        .session
        .selection()
        .rows()
        .iter()
        .map(|r| s!(r.display_name()))
        .collect();

    egui::Window::new("Edit prices")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .show(ctx, |ui| {
            egui::Grid::new("price_grid").striped(true).num_columns(4).show(ui, |ui| {
                ui.strong("Item");
                ui.strong("MRP");
                ui.strong("Sale price");
                ui.strong("Discount");
                ui.end_row();

                for (draft, name) in editor.drafts.iter_mut().zip(&names) {
                    ui.label(name);
                    ui.add(egui::TextEdit::singleline(&mut draft.mrp).desired_width(80.0));
                    ui.add(egui::TextEdit::singleline(&mut draft.sale_price).desired_width(80.0));
                    match draft.preview() {
                        Some(p) => ui.label(RichText::new(p).color(OK_GREEN)),
                        None => ui.label(RichText::new("Invalid").color(BAD_RED)),
                    };
                    ui.end_row();
                }
            });

            for e in &editor.errors {
                ui.colored_label(BAD_RED, e);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Print").clicked() { submit = true; }
                if ui.button("Cancel").clicked() { cancel = true; }
            });
        });

    if submit {
        actions::submit_prices(app);
    } else if cancel || !open {
        logd!("Print: price editor closed without printing");
        app.price_editor = None;
    }
}
