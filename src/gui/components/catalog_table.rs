// src/gui/components/catalog_table.rs
//
// Search results as a virtualized table. `#` is the 1-based catalog
// position (what range print takes), not the row in the filtered view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let catalog = app.session.catalog();
    if catalog.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No catalog loaded. Load a CSV/Excel file or drop one onto the window.");
        });
        return;
    }

    let headers = catalog.headers.clone();
    let view: Vec<usize> = app.session.view().to_vec();
    ui.label(format!("Showing {} of {} item(s)", view.len(), catalog.len()));

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut clicked: Option<usize> = None;
    let session = &app.session;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("catalog_table", headers.len()))
        .column(Column::exact(48.0))
        .column(Column::auto().at_least(56.0));
    for _ in &headers {
        table = table.column(Column::initial(120.0).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(24.0, |mut header| {
            header.col(|ui| { ui.strong(""); });
            header.col(|ui| { ui.strong("#"); });
            for h in &headers {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(22.0, view.len(), |mut row| {
                let ix = view[row.index()];
                let Some(item) = session.catalog().get(ix) else { return };
                let selected = session.selection().contains(item.item_id());

                row.col(|ui| {
                    let text = if selected { RichText::new("✔") } else { RichText::new("Add") };
                    if ui.add_enabled(!selected, egui::Button::new(text).small()).clicked() {
                        clicked = Some(ix);
                    }
                });
                row.col(|ui| { ui.monospace((ix + 1).to_string()); });
                for h in &headers {
                    row.col(|ui| { ui.label(item.get(h).unwrap_or("")); });
                }
            });
        });

    if let Some(ix) = clicked {
        match app.session.select(ix) {
            Ok(()) => {
                let counter = app.session.selection().counter();
                app.status(format!("Selected {}", counter));
            }
            Err(e) => app.notify(e.to_string()),
        }
    }
}
