// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! row {
    // Row shorthand: row!{ "ITEM_ID" => "1", "MRP" => "100" }
    ($($key:expr => $val:expr),* $(,)?) => {{
        let mut r = $crate::catalog::Row::new();
        $(
            r.set($key, $val);
        )*
        r
    }};
}
