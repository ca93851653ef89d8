// src/csv.rs
use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

use crate::catalog::{Catalog, Row};

/* ---------------- Parsing ---------------- */

/// CSV tokenizer (quotes + CRLF tolerant).
///
/// A `"` opens a quoted section only while the field holds nothing but
/// whitespace; inside it, commas and newlines are literal and `""` is an
/// escaped quote. A quote that is never closed is treated as stray and the
/// text after it is read again unquoted, so one bad cell cannot swallow the
/// rest of the file. Stray quotes are dropped. Blank lines produce no row.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    // byte offset of the open quote, with the row/field as they were before it
    let mut opened: Option<(usize, Vec<String>, String)> = None;
    let mut resume = 0;

    loop {
        let mut chars = text[resume..].char_indices().map(move |(i, c)| (i + resume, c)).peekable();

        while let Some((at, ch)) = chars.next() {
            match ch {
                '"' if in_quotes => {
                    if matches!(chars.peek(), Some((_, '"'))) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                        opened = None;
                    }
                }
                '"' => {
                    // opening quote only counts at the start of a field
                    if field.trim().is_empty() {
                        opened = Some((at, row.clone(), take(&mut field)));
                        in_quotes = true;
                    }
                }
                c if c == sep && !in_quotes => {
                    row.push(take(&mut field));
                }
                '\n' | '\r' if !in_quotes => {
                    if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) { chars.next(); }
                    row.push(take(&mut field));
                    flush_row(&mut rows, &mut row);
                }
                _ => field.push(ch),
            }
        }

        // Unterminated quote: drop it and re-read from just after it.
        match opened.take() {
            Some((at, saved_row, saved_field)) if in_quotes => {
                logd!("CSV: unterminated quote at byte {}, reading on unquoted", at);
                row = saved_row;
                field = saved_field;
                in_quotes = false;
                resume = at + 1;
            }
            _ => break,
        }
    }

    row.push(field);
    flush_row(&mut rows, &mut row);

    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().all(|c| c.trim().is_empty()) {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

fn clean(cell: &str) -> String {
    cell.trim().replace('"', "")
}

/// Header line + data lines → catalog. Values map to headers by position;
/// missing trailing fields become empty, extras are ignored, and rows without
/// an `ITEM_ID` are dropped.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut rows = parse_rows(text, ',').into_iter();

    let Some(header_row) = rows.next() else {
        logd!("CSV: empty input");
        return Catalog::default();
    };
    let headers: Vec<String> = header_row.iter().map(|h| clean(h)).collect();

    let records = rows
        .map(|cells| {
            let mut row = Row::new();
            for (i, h) in headers.iter().enumerate() {
                let value = cells.get(i).map(|c| clean(c)).unwrap_or_default();
                row.set(h.as_str(), value);
            }
            row
        })
        .collect();

    Catalog::from_rows(headers, records)
}

/* ---------------- Writing ---------------- */

/// Quote a field when it holds the separator, a quote or a line break.
fn quoted(field: &str, sep: char) -> Cow<'_, str> {
    if field.contains(|c: char| c == sep || c == '"' || c == '\n' || c == '\r') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[&str], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{sep}")?; }
        w.write_all(quoted(cell, sep).as_bytes())?;
    }
    writeln!(w)
}

/// Write catalog rows (header first) in header column order.
pub fn write_catalog_rows<'a, W, I>(mut w: W, headers: &[String], rows: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    let hs: Vec<&str> = headers.iter().map(String::as_str).collect();
    write_row(&mut w, &hs, ',')?;
    for r in rows {
        let cells: Vec<&str> = hs.iter().map(|h| r.get(h).unwrap_or("")).collect();
        write_row(&mut w, &cells, ',')?;
    }
    Ok(())
}
