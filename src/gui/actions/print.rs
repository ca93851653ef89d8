// src/gui/actions/print.rs
use crate::{
    config::consts::SELECTION_CHANGED_MESSAGE,
    catalog::RangeSelection,
    gui::app::{App, PriceEditor},
    label::{self, LabelOptions},
    print,
    session::{Confirmed, RangeRequest, CLEARED_MESSAGE},
    template::Template,
};

fn label_options(app: &App) -> LabelOptions {
    LabelOptions { price_label: app.state.options.print.price_label.clone() }
}

fn dispatch(app: &mut App, html: String) -> bool {
    match print::dispatch(&html, &app.state.options.print) {
        Ok(receipt) => {
            let line = receipt.status_line();
            app.status(line);
            true
        }
        Err(e) => {
            loge!("Print: {}", e);
            app.notify(format!("Could not write labels: {e}"));
            false
        }
    }
}

/// "Print selected": start the price editor for the current selection.
pub fn open_price_editor(app: &mut App) {
    match app.session.price_drafts() {
        Ok(drafts) => {
            logd!("Print: editing prices for {} item(s)", drafts.len());
            app.price_editor = Some(PriceEditor { drafts, errors: Vec::new() });
        }
        Err(e) => app.notify(e.to_string()),
    }
}

/// Commit the editor. Valid entries are kept even when others fail; the
/// editor stays open until every entry is accepted.
pub fn submit_prices(app: &mut App) {
    let Some(editor) = app.price_editor.as_mut() else { return };

    let Some(report) = app.session.apply_price_drafts(&editor.drafts) else {
        editor.drafts = app.session.selection().resync_drafts(&editor.drafts);
        editor.errors.clear();
        app.notify(SELECTION_CHANGED_MESSAGE);
        return;
    };

    if !report.is_clean() {
        editor.errors = report.rejected.iter().map(|e| e.to_string()).collect();
        let first = editor.errors.first().cloned().unwrap_or_default();
        app.notify(first);
        return;
    }

    app.price_editor = None;
    let template = Template::load_or_builtin(&app.state.options.print.template_path);
    let opts = label_options(app);
    match app.session.render_selection(&template, &opts) {
        Ok(html) => { dispatch(app, html); }
        Err(e) => app.notify(e.to_string()),
    }
}

/// "Print range": validate, ask first for large ranges.
pub fn print_range(app: &mut App) {
    let from = app.state.gui.range_from_text.clone();
    let to = app.state.gui.range_to_text.clone();

    match app.session.request_range(&from, &to) {
        Ok(RangeRequest::Ready(range)) => print_rows(app, range),
        Ok(RangeRequest::NeedsConfirmation(prompt)) => {
            logd!("Print: range waiting for confirmation ({})", prompt);
        }
        Err(e) => app.notify(e.to_string()),
    }
}

/// "Yes" on the confirmation dialog.
pub fn confirm_pending(app: &mut App) {
    match app.session.confirm() {
        Some(Confirmed::Cleared) => {
            app.price_editor = None;
            app.status(CLEARED_MESSAGE);
        }
        Some(Confirmed::RangePrint(range)) => print_rows(app, range),
        None => {}
    }
}

fn print_rows(app: &mut App, range: RangeSelection) {
    let template = Template::load_or_builtin(&app.state.options.print.template_path);
    let html = label::render_document(&range.rows, &template, &label_options(app));
    if dispatch(app, html) {
        app.notify(range.done_message());
    }
}
