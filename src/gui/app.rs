// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{consts::SEARCH_DEBOUNCE_MS, state::AppState},
    debounce::Debouncer,
    selection::PriceDraft,
    session::Session,
    store::{LoadOrigin, LoadOutcome},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Shelf Labels",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::default(), &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// Open price editor: one draft per selected entry plus the last rejections.
pub struct PriceEditor {
    pub drafts: Vec<PriceDraft>,
    pub errors: Vec<String>,
}

pub struct App {
    pub state: AppState,
    pub session: Session,

    // bottom bar text, and the blocking alert (if any)
    pub status: String,
    pub notice: Option<String>,

    // search box text; applied to the session after the quiet period
    pub search_text: String,
    pub debouncer: Debouncer,

    // background loads report back here
    pub loads_tx: Sender<LoadOutcome>,
    pub loads_rx: Receiver<LoadOutcome>,
    pub loading: bool,

    pub price_editor: Option<PriceEditor>,

    // output text field (mapped onto PrintOptions on commit)
    pub out_path_text: String,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let (loads_tx, loads_rx) = mpsc::channel();
        let out_path_text = state.options.print.out_path.to_string_lossy().into_owned();

        let mut app = Self {
            state,
            session: Session::new(),
            status: s!("Idle"),
            notice: None,
            search_text: s!(),
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            loads_tx,
            loads_rx,
            loading: false,
            price_editor: None,
            out_path_text,
        };

        logf!("Init: default catalog {}", app.state.options.catalog.default_path.display());
        let path = app.state.options.catalog.default_path.clone();
        actions::load_path(&mut app, ctx, path, LoadOrigin::Startup);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Blocking alert; also mirrored to the status bar.
    pub fn notify<T: Into<String>>(&mut self, msg: T) {
        let msg = msg.into();
        logd!("UI: notice \"{}\"", msg);
        self.status = msg.clone();
        self.notice = Some(msg);
    }

    fn tick_search(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.debouncer.poll(now) {
            let shown = self.session.search(&self.search_text).len();
            logd!("Search: \"{}\" → {} row(s)", self.search_text, shown);
        } else if let Some(left) = self.debouncer.remaining(now) {
            ctx.request_repaint_after(left);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_loads(self);
        actions::take_dropped_files(self, ctx);
        self.tick_search(ctx);

        egui::TopBottomPanel::top("load_bar").show(ctx, |ui| {
            components::load_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loading {
                    ui.add(egui::Spinner::new());
                }
                ui.label(&self.status);
            });
        });

        egui::SidePanel::right("selection")
            .resizable(false)
            .min_width(300.0)
            .show(ctx, |ui| {
                components::selection_panel::draw(ui, self);
                ui.separator();
                components::range_bar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::catalog_table::draw(ui, self);
        });

        components::price_dialog::draw(ctx, self);
        components::dialogs::draw(ctx, self);
    }
}
