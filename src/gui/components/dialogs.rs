// src/gui/components/dialogs.rs
//
// Modal yes/no for pending actions, and the single-button notice.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    confirm(ctx, app);
    notice(ctx, app);
}

fn confirm(ctx: &egui::Context, app: &mut App) {
    let Some(prompt) = app.session.pending().map(|p| p.prompt()) else { return };

    let mut answer: Option<bool> = None;
    let modal = egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading("Confirm");
        ui.label(&prompt);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() { answer = Some(true); }
            if ui.button("No").clicked() { answer = Some(false); }
        });
    });
    if answer.is_none() && modal.should_close() {
        answer = Some(false);
    }

    match answer {
        Some(true) => actions::confirm_pending(app),
        Some(false) => app.session.cancel_pending(),
        None => {}
    }
}

fn notice(ctx: &egui::Context, app: &mut App) {
    // a pending confirmation takes the screen first
    if app.session.pending().is_some() { return; }
    let Some(msg) = app.notice.clone() else { return };

    let mut close = false;
    let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(&msg);
        ui.add_space(8.0);
        if ui.button("OK").clicked() { close = true; }
    });
    if close || modal.should_close() {
        app.notice = None;
    }
}
