// tests/render_labels.rs
use std::path::Path;

use shelf_labels::catalog::Row;
use shelf_labels::config::consts::TEMPLATE_PLACEHOLDER;
use shelf_labels::label::{render_document, render_markup, LabelOptions};
use shelf_labels::row;
use shelf_labels::template::Template;

fn priced(name: &str, mrp: &str, sale: &str) -> Row {
    row! { "ITEM_ID" => name, "SHORT_NAME" => name, "MRP" => mrp, "SALE_PRICE" => sale }
}

fn box_count(html: &str) -> usize {
    html.matches("class=\"product-box").count()
}

fn blank_count(html: &str) -> usize {
    html.matches("class=\"product-box blank\"").count()
}

#[test]
fn fractional_discount_uses_smaller_font() {
    let html = render_markup(&[priced("Tea", "120", "99.5")], &LabelOptions::default());
    assert!(html.contains("font-size:6.5rem;\">20.5</span>"), "{html}");
}

#[test]
fn whole_discount_uses_larger_font() {
    let html = render_markup(&[priced("Dal", "110", "100")], &LabelOptions::default());
    assert!(html.contains("font-size:8rem;\">10</span>"), "{html}");
}

#[test]
fn absurd_catalog_prices_render_as_zero() {
    let html = render_markup(&[priced("Bad", "1e17", "-1e17")], &LabelOptions::default());
    assert!(html.contains("font-size:8rem;\">0</span>"), "{html}");
}

#[test]
fn three_rows_fill_one_page() {
    let rows: Vec<Row> = (0..3).map(|i| priced(&format!("P{i}"), "10", "9")).collect();
    let html = render_markup(&rows, &LabelOptions::default());
    assert_eq!(box_count(&html), 8);
    assert_eq!(blank_count(&html), 5);
}

#[test]
fn nine_rows_spill_onto_second_page() {
    let rows: Vec<Row> = (0..9).map(|i| priced(&format!("P{i}"), "10", "9")).collect();
    let html = render_markup(&rows, &LabelOptions::default());
    assert_eq!(box_count(&html), 16);
    assert_eq!(blank_count(&html), 7);
}

#[test]
fn long_names_get_compact_style() {
    let long = "Extra Long Premium Basmati Rice 5kg";
    let html = render_markup(&[priced(long, "10", "9")], &LabelOptions::default());
    assert!(html.contains("class=\"product-name-sm\""));
    assert!(!html.contains("class=\"product-name\""));
}

#[test]
fn names_and_caption_are_escaped() {
    let opts = LabelOptions { price_label: "Our <b>price</b>".into() };
    let html = render_markup(&[priced("Salt & <Pepper>", "10", "9")], &opts);
    assert!(html.contains("Salt &amp; &lt;Pepper&gt;"));
    assert!(html.contains("Our &lt;b&gt;price&lt;/b&gt;"));
    assert!(!html.contains("<Pepper>"));
}

#[test]
fn missing_template_falls_back_to_builtin() {
    let t = Template::load_or_builtin(Path::new("no/such/print-template.html"));
    assert!(t.is_builtin());
    let doc = render_document(&[priced("Tea", "120", "99.5")], &t, &LabelOptions::default());
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(!doc.contains(TEMPLATE_PLACEHOLDER));
    assert_eq!(box_count(&doc), 8);
}

#[test]
fn external_template_receives_boxes_at_placeholder() {
    let html = format!("<html><body><main>{TEMPLATE_PLACEHOLDER}</main></body></html>");
    let t = Template::from_html(html, Path::new("custom.html")).unwrap();
    let doc = render_document(&[priced("Tea", "100", "90")], &t, &LabelOptions::default());
    assert!(doc.starts_with("<html><body><main>"));
    assert!(doc.ends_with("</main></body></html>"));
    assert_eq!(box_count(&doc), 8);

    assert!(Template::from_html(s("<html></html>"), Path::new("bad.html")).is_err());
}

fn s(v: &str) -> String { v.to_string() }
