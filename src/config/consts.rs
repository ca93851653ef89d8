// src/config/consts.rs

// Catalog
pub const DEFAULT_CATALOG_FILE: &str = "itemmaster.csv";
pub const DEFAULT_LOADED_MESSAGE: &str = "Default ItemMaster.csv loaded successfully!";
pub const DEFAULT_LOAD_FAILED_MESSAGE: &str =
    "Error loading default ItemMaster.csv file. Please upload a file manually.";
pub const COL_ITEM_ID: &str = "ITEM_ID";
pub const COL_SHORT_NAME: &str = "SHORT_NAME";
pub const COL_MRP: &str = "MRP";
pub const COL_SALE_PRICE: &str = "SALE_PRICE";
pub const COL_EANCODE: &str = "MAIN_EANCODE";

// Selection
pub const MAX_SELECTED: usize = 10;
pub const SELECTION_CHANGED_MESSAGE: &str = "Selection changed; review prices before printing";

// Range print
pub const RANGE_CONFIRM_ABOVE: usize = 50;

// Search
pub const SEARCH_DEBOUNCE_MS: u64 = 200;

// Labels
pub const LABELS_PER_PAGE: usize = 8;
pub const COMPACT_NAME_CHARS: usize = 30;
pub const DISCOUNT_FONT_WHOLE: &str = "8rem";
pub const DISCOUNT_FONT_FRACTION: &str = "6.5rem";
pub const CURRENCY: &str = "₹";
pub const DEFAULT_PRICE_LABEL: &str = "Mauli Mart Price";

// Print
pub const DEFAULT_TEMPLATE_FILE: &str = "print-template.html";
pub const TEMPLATE_PLACEHOLDER: &str = "<!-- Product boxes will be dynamically inserted here -->";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_OUT_FILE: &str = "labels.html";

// Local state
pub const LOG_FILE: &str = ".labels/debug.log";
