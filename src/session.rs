// src/session.rs
//
// The one owner of operator state: catalog, search view, selection and any
// action waiting for confirmation. Frontends mutate only through these
// methods, so capacity/uniqueness/generation rules live in one place.

use crate::catalog::{Catalog, RangeSelection, Row};
use crate::error::{RangeError, SelectError};
use crate::label::{self, LabelOptions};
use crate::selection::{OverrideReport, PriceDraft, PriceOverride, Selection};
use crate::template::Template;

/// An action that needs a yes/no from the operator before it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Reset { count: usize },
    RangePrint(RangeSelection),
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Reset { count } => {
                format!("Are you sure you want to remove all {count} selected items?")
            }
            PendingAction::RangePrint(range) => range.confirm_prompt(),
        }
    }
}

/// What a confirmed action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Confirmed {
    Cleared,
    RangePrint(RangeSelection),
}

/// Range request outcome: print now, or ask first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeRequest {
    Ready(RangeSelection),
    NeedsConfirmation(String),
}

pub const CLEARED_MESSAGE: &str = "All selected items have been cleared";

#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    /// Catalog positions matching `term`, in catalog order.
    view: Vec<usize>,
    term: String,
    selection: Selection,
    generation: u64,
    pending: Option<PendingAction>,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    /* ---------- catalog + loads ---------- */

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    /// Start a load; the returned generation must be handed back on commit.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        logd!("Session: load generation {}", self.generation);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool { generation == self.generation }

    /// Commit a finished load only if no newer load has started since.
    pub fn commit_load(&mut self, generation: u64, catalog: Catalog) -> bool {
        if !self.is_current(generation) {
            logw!("Session: dropping stale load (generation {} < {})", generation, self.generation);
            return false;
        }
        self.replace_catalog(catalog);
        true
    }

    /// Replace the catalog outright; any load still in flight becomes stale.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.generation += 1;
        self.replace_catalog(catalog);
    }

    fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.view = self.catalog.search(&self.term);
        logf!("Session: catalog replaced ({} items, {} shown)", self.catalog.len(), self.view.len());
    }

    /* ---------- search ---------- */

    pub fn term(&self) -> &str { &self.term }

    pub fn search(&mut self, term: &str) -> &[usize] {
        self.term = s!(term);
        self.view = self.catalog.search(term);
        &self.view
    }

    /// Catalog positions currently displayed.
    pub fn view(&self) -> &[usize] { &self.view }

    /// Displayed rows with their catalog position.
    pub fn view_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.view.iter().filter_map(|&ix| self.catalog.get(ix).map(|r| (ix, r)))
    }

    /* ---------- selection ---------- */

    pub fn selection(&self) -> &Selection { &self.selection }

    /// Add a copy of the catalog row at `catalog_ix`.
    pub fn select(&mut self, catalog_ix: usize) -> Result<(), SelectError> {
        let row = self
            .catalog
            .get(catalog_ix)
            .cloned()
            .ok_or(SelectError::NotInCatalog { index: catalog_ix })?;
        let id = s!(row.item_id());
        self.selection.add(row)?;
        logd!("Session: selected {} ({})", id, self.selection.counter());
        Ok(())
    }

    pub fn deselect(&mut self, index: usize) -> Result<Row, SelectError> {
        self.selection.remove(index)
    }

    /* ---------- confirmations ---------- */

    pub fn pending(&self) -> Option<&PendingAction> { self.pending.as_ref() }

    /// Ask to clear the selection; the prompt must be confirmed.
    pub fn request_reset(&mut self) -> Result<String, SelectError> {
        if self.selection.is_empty() {
            return Err(SelectError::NothingToReset);
        }
        let action = PendingAction::Reset { count: self.selection.len() };
        let prompt = action.prompt();
        self.pending = Some(action);
        Ok(prompt)
    }

    /// Validate a 1-based range over the full catalog. Large ranges are
    /// parked until confirmed.
    pub fn request_range(&mut self, from: &str, to: &str) -> Result<RangeRequest, RangeError> {
        let range = self.catalog.select_range(from, to)?;
        if range.needs_confirmation() {
            let prompt = range.confirm_prompt();
            self.pending = Some(PendingAction::RangePrint(range));
            Ok(RangeRequest::NeedsConfirmation(prompt))
        } else {
            Ok(RangeRequest::Ready(range))
        }
    }

    pub fn confirm(&mut self) -> Option<Confirmed> {
        match self.pending.take()? {
            PendingAction::Reset { .. } => {
                self.selection.clear();
                logf!("Session: selection cleared");
                Some(Confirmed::Cleared)
            }
            PendingAction::RangePrint(range) => Some(Confirmed::RangePrint(range)),
        }
    }

    pub fn cancel_pending(&mut self) {
        if let Some(p) = self.pending.take() {
            logd!("Session: cancelled \"{}\"", p.prompt());
        }
    }

    /* ---------- pricing + rendering ---------- */

    /// Editor rows for the current selection.
    pub fn price_drafts(&self) -> Result<Vec<PriceDraft>, SelectError> {
        if self.selection.is_empty() {
            return Err(SelectError::NothingSelected);
        }
        Ok(self.selection.drafts())
    }

    /// Commit editor drafts. `None` means the selection changed since the
    /// drafts were made; nothing is applied.
    pub fn apply_price_drafts(&mut self, drafts: &[PriceDraft]) -> Option<OverrideReport> {
        let Some(overrides) = self.selection.align_drafts(drafts) else {
            logw!("Price: drafts no longer match the selection ({} draft(s), {} selected)", drafts.len(), self.selection.len());
            return None;
        };
        Some(self.apply_price_overrides(&overrides))
    }

    pub fn apply_price_overrides(&mut self, overrides: &[PriceOverride]) -> OverrideReport {
        let report = self.selection.apply_price_overrides(overrides);
        logf!("Price: applied={} rejected={}", report.applied.len(), report.rejected.len());
        report
    }

    pub fn render_selection(&self, template: &Template, opts: &LabelOptions) -> Result<String, SelectError> {
        if self.selection.is_empty() {
            return Err(SelectError::NothingSelected);
        }
        Ok(label::render_document(self.selection.rows(), template, opts))
    }
}
