// src/cli.rs
use std::{env, io::{self, BufRead, Write}, path::PathBuf};

use crate::config::consts::SELECTION_CHANGED_MESSAGE;
use crate::config::options::AppOptions;
use crate::csv::write_catalog_rows;
use crate::label::LabelOptions;
use crate::print;
use crate::session::{Confirmed, RangeRequest, Session};
use crate::store::{self, LoadOrigin};
use crate::template::Template;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub catalog: Option<PathBuf>,
    pub search: Option<String>,
    pub list: bool,
    pub range: Option<(String, String)>,
    pub ids: Vec<String>,
    /// `ITEM_ID=MRP:SALE`
    pub prices: Vec<(String, String, String)>,
    pub yes: bool,
    pub verbose: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AppOptions::default();
    let args = parse_args(env::args().skip(1), &mut options)?;
    crate::log::set_echo(args.verbose);
    execute(&args, &options)
}

/// Everything after argument parsing; split out for tests.
pub fn execute(args: &CliArgs, options: &AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (path, origin) = match &args.catalog {
        Some(p) => (p.clone(), LoadOrigin::UserFile),
        None => (options.catalog.default_path.clone(), LoadOrigin::DefaultButton),
    };
    let catalog = store::load_catalog(&path).map_err(|e| {
        loge!("Load: {:?} {} failed: {}", origin, path.display(), e);
        origin.failure_notice(&e).unwrap_or_else(|| e.to_string())
    })?;

    let mut session = Session::new();
    session.set_catalog(catalog);
    eprintln!("Loaded {} item(s) from {}", session.catalog().len(), path.display());

    if args.list || args.search.is_some() {
        session.search(args.search.as_deref().unwrap_or(""));
        // "#" is the 1-based catalog position, as --range expects it
        let mut headers = vec![s!("#")];
        headers.extend(session.catalog().headers.iter().cloned());
        let rows: Vec<_> = session
            .view_rows()
            .map(|(ix, r)| {
                let mut r = r.clone();
                r.set("#", (ix + 1).to_string());
                r
            })
            .collect();
        write_catalog_rows(io::stdout().lock(), &headers, &rows)?;
    }

    let label_opts = LabelOptions { price_label: options.print.price_label.clone() };

    if let Some((from, to)) = &args.range {
        let range = match session.request_range(from, to)? {
            RangeRequest::Ready(range) => range,
            RangeRequest::NeedsConfirmation(prompt) => {
                if !(args.yes || ask(&prompt)?) {
                    session.cancel_pending();
                    eprintln!("Range print cancelled");
                    return Ok(());
                }
                match session.confirm() {
                    Some(Confirmed::RangePrint(range)) => range,
                    _ => return Err("Range confirmation lost".into()),
                }
            }
        };
        let template = Template::load_or_builtin(&options.print.template_path);
        let html = crate::label::render_document(&range.rows, &template, &label_opts);
        let receipt = print::dispatch(&html, &options.print)?;
        println!("{}", receipt.status_line());
        println!("{}", range.done_message());
        return Ok(());
    }

    if args.ids.is_empty() {
        if !(args.list || args.search.is_some()) {
            return Err("Nothing to do: use --search, --list, --range or --ids (see --help)".into());
        }
        return Ok(());
    }

    for id in &args.ids {
        let found = session.catalog().rows.iter().position(|r| r.item_id() == id.trim());
        let outcome = match found {
            Some(ix) => session.select(ix).map_err(|e| e.to_string()),
            None => Err(format!("No item with ITEM_ID {id}")),
        };
        if let Err(msg) = outcome {
            eprintln!("Skipped {id}: {msg}");
        }
    }

    let mut drafts = session.price_drafts()?;
    for (id, mrp, sale) in &args.prices {
        match drafts.iter_mut().find(|d| d.item_id == id.trim()) {
            Some(d) => {
                d.mrp = mrp.clone();
                d.sale_price = sale.clone();
            }
            None => eprintln!("Price for {id} ignored: item not selected"),
        }
    }
    let report = session.apply_price_drafts(&drafts).ok_or(SELECTION_CHANGED_MESSAGE)?;
    if !report.is_clean() {
        for e in &report.rejected {
            eprintln!("{e}");
        }
        return Err("Fix the prices above before printing".into());
    }

    let template = Template::load_or_builtin(&options.print.template_path);
    let html = session.render_selection(&template, &label_opts)?;
    let receipt = print::dispatch(&html, &options.print)?;
    println!("{}", receipt.status_line());
    Ok(())
}

fn ask(prompt: &str) -> io::Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;
    let mut line = s!();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub fn parse_args<I>(args: I, options: &mut AppOptions) -> Result<CliArgs, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-c" | "--catalog" => out.catalog = Some(PathBuf::from(args.next().ok_or("Missing catalog path")?)),
            "-s" | "--search" => out.search = Some(args.next().ok_or("Missing search term")?),
            "--list" => out.list = true,
            "-r" | "--range" => {
                let v = args.next().ok_or("Missing value for --range")?;
                out.range = Some(parse_range(&v)?);}
            "--ids" => {
                let v = args.next().ok_or("Missing value for --ids")?;
                out.ids.extend(v.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from));}
            "-p" | "--price" => {
                let v = args.next().ok_or("Missing value for --price")?;
                out.prices.push(parse_price_arg(&v)?);}
            "-t" | "--template" => options.print.template_path = PathBuf::from(args.next().ok_or("Missing template path")?),
            "-o" | "--out" => options.print.set_out_path(&args.next().ok_or("Missing output path")?),
            "--price-label" => options.print.price_label = args.next().ok_or("Missing value for --price-label")?,
            "--no-open" => options.print.open_after_write = false,
            "-y" | "--yes" => out.yes = true,
            "-v" | "--verbose" => out.verbose = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(out)
}

/// `"5-12"` → ("5", "12"). Bounds are validated later against the catalog.
fn parse_range(s: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let (a, b) = s.split_once('-').ok_or_else(|| format!("Invalid range: {s} (expected FROM-TO)"))?;
    Ok((s!(a.trim()), s!(b.trim())))
}

/// `"A12=120:99.5"` → ("A12", "120", "99.5")
fn parse_price_arg(s: &str) -> Result<(String, String, String), Box<dyn std::error::Error>> {
    let (id, prices) = s.split_once('=').ok_or_else(|| format!("Invalid price: {s} (expected ITEM_ID=MRP:SALE)"))?;
    let (mrp, sale) = prices.split_once(':').ok_or_else(|| format!("Invalid price: {s} (expected ITEM_ID=MRP:SALE)"))?;
    Ok((s!(id.trim()), s!(mrp.trim()), s!(sale.trim())))
}
