// src/catalog.rs
//
// Catalog rows and the read-only queries over them.
//
// - Row: one record keyed by column name, in source column order.
// - Catalog: the full loaded set of rows plus the header list. Replaced
//            wholesale on every load; never merged.
// - search / select_range: pure queries returning row positions or copies.

use crate::config::consts::*;
use crate::error::RangeError;

/// One catalog record. Column order follows the source header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self { Self { cells: Vec::new() } }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Insert or overwrite a column, keeping its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Trimmed `ITEM_ID`, empty when missing.
    pub fn item_id(&self) -> &str { self.get(COL_ITEM_ID).unwrap_or("").trim() }
    pub fn short_name(&self) -> Option<&str> { self.get(COL_SHORT_NAME) }
    pub fn mrp(&self) -> Option<&str> { self.get(COL_MRP) }
    pub fn sale_price(&self) -> Option<&str> { self.get(COL_SALE_PRICE) }
    pub fn eancode(&self) -> Option<&str> { self.get(COL_EANCODE) }

    /// Rows without an `ITEM_ID` never enter a catalog.
    pub fn has_item_id(&self) -> bool { !self.item_id().is_empty() }

    /// Name shown on cards and labels.
    pub fn display_name(&self) -> &str {
        match self.short_name() {
            Some(n) if !n.is_empty() => n,
            _ => "N/A",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Catalog {
    /// Build from parsed rows, dropping any without an `ITEM_ID`.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let total = rows.len();
        let rows: Vec<Row> = rows.into_iter().filter(Row::has_item_id).collect();
        if rows.len() != total {
            logd!("Catalog: dropped {} row(s) without {}", total - rows.len(), COL_ITEM_ID);
        }
        Self { headers, rows }
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Row> { self.rows.get(ix) }

    /// Positions of rows matching `term` (case-insensitive substring over
    /// `SHORT_NAME`, `ITEM_ID`, `MAIN_EANCODE`). Blank term keeps everything.
    pub fn search(&self, term: &str) -> Vec<usize> {
        // only an all-blank term means "everything"; other spaces are part of the needle
        if term.trim().is_empty() {
            return (0..self.rows.len()).collect();
        }
        let needle = term.to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| row_matches(r, &needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Owned rows for a search; convenience over `search`.
    pub fn search_rows(&self, term: &str) -> Vec<Row> {
        self.search(term).into_iter().map(|i| self.rows[i].clone()).collect()
    }

    /// 1-based inclusive slice of the full catalog, validated in order.
    pub fn select_range(&self, from: &str, to: &str) -> Result<RangeSelection, RangeError> {
        let (from, to) = parse_bounds(from, to)?;

        if from > to { return Err(RangeError::Reversed); }
        if self.rows.is_empty() { return Err(RangeError::EmptyCatalog); }

        let max = self.rows.len();
        if from > max || to > max {
            return Err(RangeError::OutOfBounds { max });
        }

        let rows = self.rows[from - 1..to].to_vec();
        if rows.is_empty() {
            return Err(RangeError::NothingInRange { from, to });
        }
        Ok(RangeSelection { from, to, rows })
    }
}

fn row_matches(row: &Row, needle: &str) -> bool {
    [row.short_name(), row.get(COL_ITEM_ID), row.eancode()]
        .into_iter()
        .flatten()
        .any(|v| v.to_lowercase().contains(needle))
}

fn parse_bounds(from: &str, to: &str) -> Result<(usize, usize), RangeError> {
    let from: i64 = from.trim().parse().map_err(|_| RangeError::NotANumber)?;
    let to: i64 = to.trim().parse().map_err(|_| RangeError::NotANumber)?;
    if from < 1 || to < 1 {
        return Err(RangeError::BelowOne);
    }
    Ok((from as usize, to as usize))
}

/// A validated range, ready to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSelection {
    pub from: usize,
    pub to: usize,
    pub rows: Vec<Row>,
}

impl RangeSelection {
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Large ranges are printed only after the operator agrees.
    pub fn needs_confirmation(&self) -> bool { self.rows.len() > RANGE_CONFIRM_ABOVE }

    pub fn confirm_prompt(&self) -> String {
        format!(
            "This will print {} items (index {} to {}). This might take a while. Continue?",
            self.rows.len(), self.from, self.to
        )
    }

    pub fn done_message(&self) -> String {
        format!(
            "Range print completed for {} items (index {} to {})",
            self.rows.len(), self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let rows = vec![
            row! { "ITEM_ID" => "A1", "SHORT_NAME" => "Basmati Rice 5kg", "MAIN_EANCODE" => "890100" },
            row! { "ITEM_ID" => "B2", "SHORT_NAME" => "Sunflower Oil" },
            row! { "ITEM_ID" => "C3", "SHORT_NAME" => "Rice Flakes", "MAIN_EANCODE" => "890222" },
        ];
        Catalog::from_rows(vec![s!("ITEM_ID"), s!("SHORT_NAME"), s!("MAIN_EANCODE")], rows)
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut r = row! { "ITEM_ID" => "1", "MRP" => "10", "SALE_PRICE" => "8" };
        r.set("MRP", "12");
        let keys: Vec<&str> = r.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["ITEM_ID", "MRP", "SALE_PRICE"]);
        assert_eq!(r.mrp(), Some("12"));
    }

    #[test]
    fn search_matches_any_designated_field() {
        let c = sample();
        assert_eq!(c.search("RICE"), vec![0, 2]);
        assert_eq!(c.search("b2"), vec![1]);
        assert_eq!(c.search("8902"), vec![2]);
        assert!(c.search("zzz").is_empty());
    }

    #[test]
    fn search_keeps_inner_and_edge_spaces() {
        let c = sample();
        assert_eq!(c.search("rice 5"), vec![0]);
        assert_eq!(c.search(" flakes"), vec![2]);
        assert!(c.search("5kg ").is_empty());
        assert_eq!(c.search("   ").len(), 3);
    }

    #[test]
    fn search_ignores_other_columns() {
        let c = Catalog::from_rows(
            vec![s!("ITEM_ID"), s!("BRAND")],
            vec![row! { "ITEM_ID" => "1", "BRAND" => "Acme" }],
        );
        assert!(c.search("acme").is_empty());
    }

    #[test]
    fn range_bounds_are_validated_in_order() {
        let c = sample();
        assert_eq!(c.select_range("x", "2"), Err(RangeError::NotANumber));
        assert_eq!(c.select_range("0", "2"), Err(RangeError::BelowOne));
        assert_eq!(c.select_range("3", "1"), Err(RangeError::Reversed));
        assert_eq!(c.select_range("2", "4"), Err(RangeError::OutOfBounds { max: 3 }));
        assert_eq!(Catalog::default().select_range("1", "1"), Err(RangeError::EmptyCatalog));

        let r = c.select_range(" 2 ", "3").unwrap();
        assert_eq!((r.from, r.to, r.len()), (2, 3, 2));
        assert_eq!(r.rows[0].item_id(), "B2");
        assert!(!r.needs_confirmation());
    }
}
