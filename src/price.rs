// src/price.rs
//
// Prices are held in hundredths (paise) so that differences like
// `100 - 99.9` come out as `0.1` instead of float noise.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);
    /// Largest magnitude accepted from text or floats; well inside both the
    /// exact-integer range of f64 and i64.
    pub const LIMIT: i64 = 1_000_000_000_000_000;

    pub fn from_hundredths(h: i64) -> Self { Amount(h) }
    pub fn hundredths(self) -> i64 { self.0 }

    /// Rounded to the nearest hundredth; non-finite or oversized input is rejected.
    pub fn from_f64(v: f64) -> Option<Self> {
        let h = (v * 100.0).round();
        if !h.is_finite() || h.abs() > Self::LIMIT as f64 { return None; }
        Some(Amount(h as i64))
    }

    /// Lenient parse of a catalog cell: surrounding whitespace, a leading
    /// currency sign and thousands separators are ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let t = text.trim().trim_start_matches(crate::config::consts::CURRENCY).trim();
        if t.is_empty() { return None; }
        let t = t.replace(',', "");
        t.parse::<f64>().ok().and_then(Amount::from_f64)
    }

    /// Missing or unparseable cells count as zero.
    pub fn parse_or_zero(text: Option<&str>) -> Self {
        text.and_then(Amount::parse).unwrap_or(Amount::ZERO)
    }

    pub fn is_whole(self) -> bool { self.0 % 100 == 0 }
    pub fn is_negative(self) -> bool { self.0 < 0 }

    pub fn as_f64(self) -> f64 { self.0 as f64 / 100.0 }
}

impl std::ops::Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Amount) -> Amount { Amount(self.0.saturating_sub(rhs.0)) }
}

/// `10`, `20.5`, `0.25`: no trailing zeros, no trailing dot.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 100, abs % 100);
        match frac {
            0 => write!(f, "{sign}{whole}"),
            x if x % 10 == 0 => write!(f, "{sign}{whole}.{}", x / 10),
            x => write!(f, "{sign}{whole}.{x:02}"),
        }
    }
}

/// MRP/sale pair as printed on a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pricing {
    pub mrp: Amount,
    pub sale: Amount,
}

impl Pricing {
    pub fn of_row(row: &crate::catalog::Row) -> Self {
        Self {
            mrp: Amount::parse_or_zero(row.mrp()),
            sale: Amount::parse_or_zero(row.sale_price()),
        }
    }

    /// `mrp > 0 ∧ 0 ≤ sale ≤ mrp`
    pub fn is_valid(&self) -> bool {
        self.mrp > Amount::ZERO && !self.sale.is_negative() && self.sale <= self.mrp
    }

    /// Absolute discount in currency units; this is what the label shows.
    pub fn discount_amount(&self) -> Amount { self.mrp - self.sale }

    /// Percent off, one decimal place. `None` when the pair is not valid.
    pub fn discount_percent(&self) -> Option<f64> {
        if !self.is_valid() { return None; }
        let pct = self.discount_amount().hundredths() as f64 / self.mrp.hundredths() as f64 * 100.0;
        Some((pct * 10.0).round() / 10.0)
    }
}

/// Live preview for the price editor: `"17.1% OFF"` or `"Invalid"`.
pub fn preview_discount(mrp_text: &str, sale_text: &str) -> Option<String> {
    let p = Pricing {
        mrp: Amount::parse(mrp_text).unwrap_or(Amount::ZERO),
        sale: Amount::parse(sale_text).unwrap_or(Amount::ZERO),
    };
    p.discount_percent().map(|pct| format!("{pct:.1}% OFF"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount { Amount::parse(s).unwrap() }

    #[test]
    fn display_trims_zeros() {
        assert_eq!(amt("10").to_string(), "10");
        assert_eq!(amt("20.50").to_string(), "20.5");
        assert_eq!(amt("0.25").to_string(), "0.25");
        assert_eq!((amt("1") - amt("1.05")).to_string(), "-0.05");
    }

    #[test]
    fn parse_is_lenient_about_decoration() {
        assert_eq!(amt(" ₹1,250.5 "), Amount::from_hundredths(125_050));
        assert_eq!(Amount::parse(""), None);
        assert_eq!(Amount::parse("abc"), None);
        assert_eq!(Amount::parse("NaN"), None);
        assert_eq!(Amount::parse_or_zero(None), Amount::ZERO);
    }

    #[test]
    fn huge_cells_are_rejected_and_differences_saturate() {
        assert_eq!(Amount::parse("1e17"), None);
        assert_eq!(Amount::parse("-1e17"), None);
        assert_eq!(Amount::from_f64(f64::MAX), None);
        assert!(Amount::parse("10000000000000").is_some());

        let low = Amount::from_hundredths(i64::MIN + 1);
        let high = Amount::from_hundredths(i64::MAX);
        assert_eq!(low - high, Amount::from_hundredths(i64::MIN));
        assert_eq!(high - low, Amount::from_hundredths(i64::MAX));
    }

    #[test]
    fn discount_amount_avoids_float_noise() {
        let p = Pricing { mrp: amt("100"), sale: amt("99.9") };
        assert_eq!(p.discount_amount().to_string(), "0.1");
    }

    #[test]
    fn percent_is_one_decimal_and_guards_invalid_pairs() {
        let p = Pricing { mrp: amt("120"), sale: amt("99.5") };
        assert_eq!(p.discount_percent(), Some(17.1));
        assert_eq!(Pricing { mrp: amt("0"), sale: amt("0") }.discount_percent(), None);
        assert_eq!(Pricing { mrp: amt("10"), sale: amt("11") }.discount_percent(), None);
        assert_eq!(preview_discount("200", "150").as_deref(), Some("25.0% OFF"));
        assert_eq!(preview_discount("", "5"), None);
    }
}
