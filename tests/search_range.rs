// tests/search_range.rs
use shelf_labels::catalog::Catalog;
use shelf_labels::csv::parse_catalog;
use shelf_labels::error::RangeError;
use shelf_labels::row;

fn catalog(n: usize) -> Catalog {
    let rows = (1..=n)
        .map(|i| row! {
            "ITEM_ID" => format!("ID{i:03}"),
            "SHORT_NAME" => format!("Product {i}"),
            "MRP" => "100",
            "SALE_PRICE" => "80",
        })
        .collect();
    Catalog::from_rows(vec![], rows)
}

#[test]
fn blank_term_returns_everything_in_order() {
    let cat = catalog(5);
    assert_eq!(cat.search(""), vec![0, 1, 2, 3, 4]);
    assert_eq!(cat.search("   "), vec![0, 1, 2, 3, 4]);
}

#[test]
fn search_is_case_insensitive_over_name_id_and_ean() {
    let cat = parse_catalog(
        "ITEM_ID,SHORT_NAME,MRP,MAIN_EANCODE\n\
         A1,Green TEA,10,8901\n\
         B2,Coffee,10,7700\n\
         C3,Tea Biscuits,10,\n",
    );
    assert_eq!(cat.search("tea"), vec![0, 2]);
    assert_eq!(cat.search("b2"), vec![1]);
    assert_eq!(cat.search("770"), vec![1]);
    // MRP is not searched
    assert!(cat.search("10").is_empty());
}

#[test]
fn search_never_changes_the_catalog() {
    let cat = catalog(3);
    let before = cat.clone();
    let _ = cat.search_rows("product 2");
    assert_eq!(cat, before);
}

#[test]
fn full_range_returns_every_row() {
    let cat = catalog(12);
    let range = cat.select_range("1", "12").unwrap();
    assert_eq!(range.len(), 12);
    assert_eq!(range.rows.first().map(|r| r.item_id()), Some("ID001"));
    assert_eq!(range.rows.last().map(|r| r.item_id()), Some("ID012"));
    assert!(!range.needs_confirmation());
}

#[test]
fn range_uses_full_catalog_positions() {
    let cat = catalog(10);
    let range = cat.select_range(" 3 ", "4").unwrap();
    let ids: Vec<&str> = range.rows.iter().map(|r| r.item_id()).collect();
    assert_eq!(ids, vec!["ID003", "ID004"]);
}

#[test]
fn range_rejections_follow_validation_order() {
    let cat = catalog(10);
    assert_eq!(cat.select_range("a", "3"), Err(RangeError::NotANumber));
    assert_eq!(cat.select_range("0", "3"), Err(RangeError::BelowOne));
    assert_eq!(cat.select_range("5", "3"), Err(RangeError::Reversed));
    assert_eq!(cat.select_range("1", "11"), Err(RangeError::OutOfBounds { max: 10 }));
    assert_eq!(Catalog::default().select_range("1", "2"), Err(RangeError::EmptyCatalog));
    assert_eq!(
        RangeError::OutOfBounds { max: 10 }.to_string(),
        "Index numbers must be between 1 and 10 (total available items)"
    );
}

#[test]
fn large_ranges_need_confirmation() {
    let cat = catalog(60);
    assert!(!cat.select_range("1", "50").unwrap().needs_confirmation());
    let big = cat.select_range("1", "51").unwrap();
    assert!(big.needs_confirmation());
    assert!(big.confirm_prompt().contains("51 items"));
}
