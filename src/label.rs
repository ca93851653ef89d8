// src/label.rs
//
// Priced rows → label boxes. One box per row; the sheet is padded with
// blank boxes up to a whole number of pages (LABELS_PER_PAGE per page).

use crate::catalog::Row;
use crate::config::consts::*;
use crate::core::html::{self, Element, Node};
use crate::price::{Amount, Pricing};
use crate::template::Template;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelOptions {
    pub price_label: String,
}

impl Default for LabelOptions {
    fn default() -> Self { Self { price_label: s!(DEFAULT_PRICE_LABEL) } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameStyle {
    Standard,
    /// Long names get the smaller font.
    Compact,
}

impl NameStyle {
    pub fn for_name(name: &str) -> Self {
        if name.chars().count() >= COMPACT_NAME_CHARS { NameStyle::Compact } else { NameStyle::Standard }
    }

    pub fn class(self) -> &'static str {
        match self {
            NameStyle::Standard => "product-name",
            NameStyle::Compact => "product-name-sm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountSize {
    Whole,
    Fraction,
}

impl DiscountSize {
    pub fn for_amount(amount: Amount) -> Self {
        if amount.is_whole() { DiscountSize::Whole } else { DiscountSize::Fraction }
    }

    pub fn font_size(self) -> &'static str {
        match self {
            DiscountSize::Whole => DISCOUNT_FONT_WHOLE,
            DiscountSize::Fraction => DISCOUNT_FONT_FRACTION,
        }
    }
}

/// Everything a label shows, derived from one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelData {
    pub name: String,
    pub name_style: NameStyle,
    pub mrp_text: String,
    pub sale_text: String,
    pub discount: Amount,
    pub discount_size: DiscountSize,
}

impl LabelData {
    pub fn from_row(row: &Row) -> Self {
        let name = s!(row.display_name());
        let pricing = Pricing::of_row(row);
        let discount = pricing.discount_amount();
        Self {
            name_style: NameStyle::for_name(row.short_name().unwrap_or("")),
            name,
            mrp_text: price_text(row.mrp()),
            sale_text: price_text(row.sale_price()),
            discount,
            discount_size: DiscountSize::for_amount(discount),
        }
    }
}

fn price_text(cell: Option<&str>) -> String {
    match cell.map(str::trim) {
        Some(v) if !v.is_empty() => s!(v),
        _ => s!("0"),
    }
}

pub fn label_box(data: &LabelData, opts: &LabelOptions) -> Element {
    let discount = Element::new("div").class("product-discount").child(
        Element::new("div")
            .class("discount-line")
            .child(Element::new("span").class("currency").text(CURRENCY))
            .child(
                Element::new("span")
                    .class("discount-amount")
                    .style(format!("font-size:{};", data.discount_size.font_size()))
                    .text(data.discount.to_string()),
            )
            .child(Element::new("span").class("off").text("OFF")),
    );

    let prices = Element::new("div")
        .class("price-line")
        .child(Element::new("span").class("mrp-price").text(format!("MRP {CURRENCY}{}", data.mrp_text)))
        .child(Element::new("span").class("price-divider"))
        .child(
            Element::new("span")
                .class("sale-price")
                .text(format!("{} {CURRENCY}{}", opts.price_label, data.sale_text)),
        );

    Element::new("div")
        .class("product-box")
        .child(discount)
        .child(Element::new("div").class(data.name_style.class()).text(data.name.as_str()))
        .child(prices)
}

pub fn blank_box() -> Element {
    Element::new("div").class("product-box blank")
}

/// Cells needed for `n` labels: whole pages, nothing for no labels.
pub fn padded_len(n: usize) -> usize {
    n.div_ceil(LABELS_PER_PAGE) * LABELS_PER_PAGE
}

/// All boxes for `rows`, padded with blanks to full pages.
pub fn build_boxes(rows: &[Row], opts: &LabelOptions) -> Vec<Element> {
    let mut boxes: Vec<Element> = rows
        .iter()
        .map(|r| label_box(&LabelData::from_row(r), opts))
        .collect();
    let target = padded_len(boxes.len());
    boxes.resize_with(target, blank_box);
    boxes
}

/// Label markup only (what replaces the template placeholder).
pub fn render_markup(rows: &[Row], opts: &LabelOptions) -> String {
    let nodes: Vec<Node> = build_boxes(rows, opts).into_iter().map(Node::from).collect();
    html::render(&nodes, 1)
}

/// Full printable document.
pub fn render_document(rows: &[Row], template: &Template, opts: &LabelOptions) -> String {
    let markup = render_markup(rows, opts);
    logd!("Render: {} label(s), {} bytes of markup, builtin template={}", rows.len(), markup.len(), template.is_builtin());
    template.inject(&markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_rounds_up_to_pages() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 8);
        assert_eq!(padded_len(8), 8);
        assert_eq!(padded_len(9), 16);
    }

    #[test]
    fn name_style_threshold_counts_chars() {
        assert_eq!(NameStyle::for_name(&"x".repeat(29)), NameStyle::Standard);
        assert_eq!(NameStyle::for_name(&"x".repeat(30)), NameStyle::Compact);
        // 29 multi-byte chars are still short
        assert_eq!(NameStyle::for_name(&"é".repeat(29)), NameStyle::Standard);
    }

    #[test]
    fn missing_prices_show_zero() {
        let data = LabelData::from_row(&row! { "ITEM_ID" => "1" });
        assert_eq!(data.name, "N/A");
        assert_eq!((data.mrp_text.as_str(), data.sale_text.as_str()), ("0", "0"));
        assert_eq!(data.discount, Amount::ZERO);
        assert_eq!(data.discount_size, DiscountSize::Whole);
    }

    #[test]
    fn box_structure() {
        let data = LabelData::from_row(&row! {
            "ITEM_ID" => "1", "SHORT_NAME" => "Tea", "MRP" => "120", "SALE_PRICE" => "99.5"
        });
        let el = label_box(&data, &LabelOptions::default());
        let amount = el.find_class("discount-amount").unwrap();
        assert_eq!(amount.text_content(), "20.5");
        assert_eq!(amount.get_attr("style"), Some("font-size:6.5rem;"));
        assert_eq!(el.find_class("sale-price").unwrap().text_content(), "Mauli Mart Price ₹99.5");
        assert_eq!(el.find_class("mrp-price").unwrap().text_content(), "MRP ₹120");
    }
}
