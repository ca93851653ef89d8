// benches/search.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use shelf_labels::{csv::parse_catalog, label::{render_markup, LabelOptions}, s};

/// A few thousand rows shaped like a real item master.
fn synthetic_item_master(n: usize) -> String {
    let mut out = s!("ITEM_ID,SHORT_NAME,MRP,SALE_PRICE,MAIN_EANCODE\n");
    for i in 0..n {
        let mrp = 50 + (i % 400);
        out.push_str(&format!(
            "{},\"Product {} {}g, pack\",{},{}.5,890{:010}\n",
            10_000 + i,
            ["Tea", "Rice", "Dal", "Soap", "Oil"][i % 5],
            100 + i % 900,
            mrp,
            mrp - 5,
            i
        ));
    }
    out
}

fn bench_catalog(c: &mut Criterion) {
    let text = synthetic_item_master(5_000);
    let catalog = parse_catalog(&text);

    c.bench_function("parse_item_master_5k", |b| {
        b.iter(|| black_box(parse_catalog(black_box(&text)).len()))
    });

    c.bench_function("search_5k", |b| {
        b.iter(|| black_box(catalog.search(black_box("rice 25")).len()))
    });

    c.bench_function("search_5k_ean", |b| {
        b.iter(|| black_box(catalog.search(black_box("89000000042")).len()))
    });

    let rows = catalog.rows[..50].to_vec();
    c.bench_function("render_50_labels", |b| {
        let opts = LabelOptions::default();
        b.iter(|| black_box(render_markup(black_box(&rows), &opts).len()))
    });
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
