// src/gui/actions/load.rs
use std::path::PathBuf;

use eframe::egui;

use crate::{
    gui::app::App,
    store::{self, LoadOrigin, LoadOutcome},
};

/// Start a background load. Any load already in flight becomes stale.
pub fn load_path(app: &mut App, ctx: &egui::Context, path: PathBuf, origin: LoadOrigin) {
    let generation = app.session.begin_load();
    logf!("Load: begin {:?} {} (generation {})", origin, path.display(), generation);

    app.loading = true;
    if !origin.is_silent() {
        app.status(format!("Loading {}…", path.display()));
    }

    let repaint = ctx.clone();
    store::spawn_load(path, generation, origin, app.loads_tx.clone(), move || repaint.request_repaint());
}

/// Drain finished loads; only the newest generation may touch the catalog.
pub fn poll_loads(app: &mut App) {
    while let Ok(outcome) = app.loads_rx.try_recv() {
        apply_outcome(app, outcome);
    }
}

fn apply_outcome(app: &mut App, outcome: LoadOutcome) {
    let LoadOutcome { generation, origin, path, result } = outcome;

    if !app.session.is_current(generation) {
        logd!("Load: ignoring stale result for {} (generation {})", path.display(), generation);
        return;
    }
    app.loading = false;

    match result {
        Ok(catalog) => {
            let n = catalog.len();
            if app.session.commit_load(generation, catalog) {
                app.state.gui.last_loaded = Some(path.clone());
                app.status(format!("Loaded {} item(s) from {}", n, path.display()));
                if let Some(msg) = origin.success_notice() {
                    app.notify(msg);
                }
            }
        }
        Err(e) => {
            loge!("Load: {:?} {} failed: {}", origin, path.display(), e);
            match origin.failure_notice(&e) {
                Some(msg) => app.notify(msg),
                None => app.status("No catalog loaded"),
            }
        }
    }
}

/// Files dropped onto the window load like "Load file".
pub fn take_dropped_files(app: &mut App, ctx: &egui::Context) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    let Some(file) = dropped.into_iter().next() else { return };

    if let Some(path) = file.path {
        app.state.gui.file_path_text = path.to_string_lossy().into_owned();
        load_path(app, ctx, path, LoadOrigin::UserFile);
        return;
    }

    // Web-style drops carry bytes instead of a path; small enough to parse inline.
    if let Some(bytes) = file.bytes {
        let generation = app.session.begin_load();
        match store::load_catalog_bytes(&file.name, &bytes) {
            Ok(catalog) => {
                let n = catalog.len();
                if app.session.commit_load(generation, catalog) {
                    app.loading = false;
                    app.status(format!("Loaded {} item(s) from {}", n, file.name));
                }
            }
            Err(e) => {
                loge!("Load: dropped {} failed: {}", file.name, e);
                app.loading = false;
                if let Some(msg) = LoadOrigin::UserFile.failure_notice(&e) {
                    app.notify(msg);
                }
            }
        }
    }
}
