// src/selection.rs
//
// The operator's picks: at most MAX_SELECTED rows, unique by ITEM_ID, in
// click order. Entries are copies; price edits never reach the catalog.

use crate::catalog::Row;
use crate::config::consts::{COL_MRP, COL_SALE_PRICE, MAX_SELECTED};
use crate::error::{PriceError, SelectError};
use crate::price::{Amount, Pricing};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<Row>,
}

/// New prices for one entry, as entered in the editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceOverride {
    pub mrp: f64,
    pub sale_price: f64,
}

impl PriceOverride {
    /// Parse editor text; blanks and junk become 0 and fail validation later.
    pub fn from_text(mrp: &str, sale_price: &str) -> Self {
        let num = |t: &str| Amount::parse(t).map(Amount::as_f64).unwrap_or(0.0);
        Self { mrp: num(mrp), sale_price: num(sale_price) }
    }

    fn pricing(&self) -> Option<Pricing> {
        Some(Pricing {
            mrp: Amount::from_f64(self.mrp)?,
            sale: Amount::from_f64(self.sale_price)?,
        })
    }
}

/// Editable text for one entry in the price editor, tied to its entry by
/// ITEM_ID so a reordered selection can't receive another item's prices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceDraft {
    pub item_id: String,
    pub mrp: String,
    pub sale_price: String,
}

impl PriceDraft {
    /// Current prices as numbers; unparseable cells start at 0.
    pub fn from_row(row: &Row) -> Self {
        let p = Pricing::of_row(row);
        Self { item_id: s!(row.item_id()), mrp: p.mrp.to_string(), sale_price: p.sale.to_string() }
    }

    pub fn to_override(&self) -> PriceOverride {
        PriceOverride::from_text(&self.mrp, &self.sale_price)
    }

    /// `"25.0% OFF"`, or `None` while the pair is invalid.
    pub fn preview(&self) -> Option<String> {
        crate::price::preview_discount(&self.mrp, &self.sale_price)
    }
}

/// Per-entry result of `apply_price_overrides`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OverrideReport {
    pub applied: Vec<usize>,
    pub rejected: Vec<PriceError>,
}

impl OverrideReport {
    /// Printing goes ahead only when every entry was accepted.
    pub fn is_clean(&self) -> bool { self.rejected.is_empty() }
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn is_full(&self) -> bool { self.entries.len() >= MAX_SELECTED }
    pub fn rows(&self) -> &[Row] { &self.entries }
    pub fn get(&self, index: usize) -> Option<&Row> { self.entries.get(index) }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.iter().any(|r| r.item_id() == item_id)
    }

    /// `"3/10"`
    pub fn counter(&self) -> String { format!("{}/{}", self.entries.len(), MAX_SELECTED) }

    pub fn add(&mut self, row: Row) -> Result<(), SelectError> {
        let item_id = row.item_id();
        if self.contains(item_id) {
            return Err(SelectError::Duplicate { item_id: s!(item_id) });
        }
        if self.is_full() {
            return Err(SelectError::Full);
        }
        self.entries.push(row);
        Ok(())
    }

    /// Positions shift after removal; callers re-resolve by current index.
    pub fn remove(&mut self, index: usize) -> Result<Row, SelectError> {
        if index >= self.entries.len() {
            return Err(SelectError::NoSuchEntry { index });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn drafts(&self) -> Vec<PriceDraft> {
        self.entries.iter().map(PriceDraft::from_row).collect()
    }

    /// True when `drafts` line up with the entries one-to-one, in order.
    pub fn matches_drafts(&self, drafts: &[PriceDraft]) -> bool {
        drafts.len() == self.entries.len()
            && self.entries.iter().zip(drafts).all(|(e, d)| e.item_id() == d.item_id)
    }

    /// Drafts for the current entries, keeping typed text for items that
    /// are still selected. Removed items are dropped, new ones start fresh.
    pub fn resync_drafts(&self, drafts: &[PriceDraft]) -> Vec<PriceDraft> {
        self.entries
            .iter()
            .map(|e| match drafts.iter().find(|d| d.item_id == e.item_id()) {
                Some(d) => d.clone(),
                None => PriceDraft::from_row(e),
            })
            .collect()
    }

    /// Overrides for the entries, or `None` when the drafts were made for a
    /// different selection.
    pub fn align_drafts(&self, drafts: &[PriceDraft]) -> Option<Vec<PriceOverride>> {
        self.matches_drafts(drafts).then(|| drafts.iter().map(PriceDraft::to_override).collect())
    }

    /// Validate and commit each entry independently. A rejected entry keeps
    /// its previous prices; the others are still updated.
    pub fn apply_price_overrides(&mut self, overrides: &[PriceOverride]) -> OverrideReport {
        let mut report = OverrideReport::default();

        if overrides.len() != self.entries.len() {
            report.rejected.push(PriceError::Misaligned {
                expected: self.entries.len(),
                got: overrides.len(),
            });
            return report;
        }

        for (index, (entry, ov)) in self.entries.iter_mut().zip(overrides).enumerate() {
            match ov.pricing().filter(Pricing::is_valid) {
                Some(p) => {
                    entry.set(COL_MRP, p.mrp.to_string());
                    entry.set(COL_SALE_PRICE, p.sale.to_string());
                    report.applied.push(index);
                }
                None => {
                    let name = s!(entry.display_name());
                    logd!("Price: rejected entry {} ({}) mrp={} sale={}", index, name, ov.mrp, ov.sale_price);
                    report.rejected.push(PriceError::Invalid { index, name });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Row {
        row! { "ITEM_ID" => id, "SHORT_NAME" => format!("Item {id}"), "MRP" => "100", "SALE_PRICE" => "90" }
    }

    #[test]
    fn duplicate_and_capacity_are_rejected() {
        let mut sel = Selection::new();
        sel.add(item("1")).unwrap();
        assert_eq!(sel.add(item("1")), Err(SelectError::Duplicate { item_id: s!("1") }));
        for i in 2..=10 {
            sel.add(item(&i.to_string())).unwrap();
        }
        assert_eq!(sel.add(item("11")), Err(SelectError::Full));
        assert_eq!(sel.len(), 10);
        assert_eq!(sel.counter(), "10/10");
    }

    #[test]
    fn duplicate_check_uses_trimmed_id() {
        let mut sel = Selection::new();
        sel.add(item("7")).unwrap();
        assert!(sel.add(item(" 7 ")).is_err());
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let mut sel = Selection::new();
        sel.add(item("1")).unwrap();
        assert_eq!(sel.remove(3), Err(SelectError::NoSuchEntry { index: 3 }));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn misaligned_overrides_change_nothing() {
        let mut sel = Selection::new();
        sel.add(item("1")).unwrap();
        let report = sel.apply_price_overrides(&[]);
        assert!(!report.is_clean());
        assert!(report.applied.is_empty());
        assert_eq!(sel.rows()[0].mrp(), Some("100"));
    }

    #[test]
    fn drafts_start_from_current_prices() {
        let d = PriceDraft::from_row(&row! { "ITEM_ID" => "1", "MRP" => "100.50", "SALE_PRICE" => "x" });
        assert_eq!(d, PriceDraft { item_id: s!("1"), mrp: s!("100.5"), sale_price: s!("0") });
        assert_eq!(d.preview().as_deref(), Some("100.0% OFF"));
    }

    #[test]
    fn override_text_parsing() {
        let ov = PriceOverride::from_text("120", "junk");
        assert_eq!(ov, PriceOverride { mrp: 120.0, sale_price: 0.0 });
    }
}
