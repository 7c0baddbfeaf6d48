#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use genbind_cli::args::{CliArgs, Command, OutputFormat};
use genbind_cli::check::check_table;
use genbind_cli::table_file::load_table;
use genbind_resolver::{BindingResolver, TypeTable};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if GENBIND_LOG or RUST_LOG is set.
    genbind_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let code = match args.command {
        Command::Resolve {
            table,
            subtype,
            ancestor,
            index,
        } => handle_resolve(&table, &subtype, &ancestor, index)?,
        Command::Check { table, format } => handle_check(&table, format)?,
    };
    std::process::exit(code);
}

fn handle_resolve(path: &Path, subtype: &str, ancestor: &str, index: usize) -> Result<i32> {
    let table = load_table(path)?;
    let subtype = lookup(&table, subtype)?;
    let ancestor = lookup(&table, ancestor)?;

    let resolver = BindingResolver::new(&table);
    match resolver.resolve(subtype, ancestor, index) {
        Ok(resolved) => {
            let name = table
                .get_name(resolved)
                .context("resolved type is missing from the table")?;
            println!("{name}");
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!(
                "{}: {}",
                format!("error[GB{}]", err.code()).red().bold(),
                err
            );
            Ok(EXIT_DIAGNOSTICS)
        }
    }
}

fn handle_check(path: &Path, format: OutputFormat) -> Result<i32> {
    let table = load_table(path)?;
    let resolver = BindingResolver::new(&table);
    let report = check_table(&resolver);

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    let stats = resolver.cache().stats();
    tracing::debug!(
        bindings = report.bindings.len(),
        diagnostics = report.diagnostics.len(),
        cache_hits = stats.hits,
        cache_misses = stats.misses,
        "check finished"
    );

    Ok(if report.has_errors() {
        EXIT_DIAGNOSTICS
    } else {
        EXIT_SUCCESS
    })
}

fn lookup(table: &TypeTable, name: &str) -> Result<genbind_common::DefId> {
    table
        .lookup(name)
        .with_context(|| format!("unknown type '{name}'"))
}
