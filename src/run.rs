use anyhow::{Context, Result};
use std::path::Path;

use crate::analysis;
use crate::categorize::{Classifier, RuleTable};
use crate::db::{Database, StatementRecord};
use crate::extract::{self, JsonFileSource, PageSource, StatementData};
use crate::models::{AnalysisSummary, ExtractedPageData};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "analyze" | "a" => cli_analyze(&args[2..]),
        "records" => cli_records(),
        "summary" | "s" => cli_summary(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgerlens {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("LedgerLens — categorized summaries from extracted bank statements");
    println!();
    println!("Usage: ledgerlens <command>");
    println!();
    println!("Commands:");
    println!("  analyze <pages.json>          Analyze extracted statement pages");
    println!("    --balance <amount>          Override the statement's initial balance");
    println!("    --account <label>           Label the stored record");
    println!("    --no-store                  Skip forwarding to the local store");
    println!("  records                       List stored statement records");
    println!("  summary                       Combined stats across stored records");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

// ── analyze ───────────────────────────────────────────────────

fn cli_analyze(args: &[String]) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!(
            "Usage: ledgerlens analyze <pages.json> [--balance <amount>] [--account <label>] [--no-store]"
        );
    }

    let file_path = shellexpand(&args[0]);
    let path = Path::new(&file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let balance_override = args
        .windows(2)
        .find(|w| w[0] == "--balance")
        .map(|w| {
            w[1].parse::<f64>()
                .with_context(|| format!("Invalid --balance value: {}", w[1]))
        })
        .transpose()?;
    let account = args
        .windows(2)
        .find(|w| w[0] == "--account")
        .map(|w| w[1].clone())
        .unwrap_or_default();
    let no_store = args.iter().any(|a| a == "--no-store");

    let pages = JsonFileSource::new(path).pages()?;
    let data = extract::collect_pages(&pages)?;
    let classifier = Classifier::new(RuleTable::builtin());
    let summary = extract::analyze_statement(&data, &classifier, balance_override);

    print_report(&summary);

    if !no_store {
        // Forwarding is best effort: the printed summary stands either way.
        match forward_to_store(&account, &data, &summary) {
            Ok(id) => {
                println!();
                println!("Stored as record #{id}");
            }
            Err(e) => eprintln!("Warning: could not store statement: {e}"),
        }
    }

    Ok(())
}

fn forward_to_store(account: &str, data: &StatementData, summary: &AnalysisSummary) -> Result<i64> {
    let raw = ExtractedPageData {
        initial_balance: data.initial_balance,
        transactions: data.transactions.clone(),
    };
    let raw_json = serde_json::to_string(&raw).context("Failed to serialize raw statement")?;
    let mut db = Database::open(&Database::default_path()?)?;
    db.insert_record(&StatementRecord::from_summary(
        account.to_string(),
        summary,
        raw_json,
    ))
}

fn print_report(summary: &AnalysisSummary) {
    let txns = &summary.transaction_details;

    println!("Statement Analysis");
    println!("{}", "─".repeat(64));
    if let Some((earliest, latest)) = summary.date_range() {
        println!("  Period:            {earliest} to {latest}");
    }
    println!(
        "  Initial Balance:   {}",
        format_amount(summary.initial_balance)
    );
    println!("  Total Income:      {}", format_amount(summary.total_income));
    println!(
        "  Total Expenditure: {}",
        format_amount(summary.total_expenditure)
    );
    println!(
        "  Final Balance:     {}",
        format_amount(summary.final_balance)
    );
    println!(
        "  Transactions:      {} ({} income, {} expenditure)",
        txns.len(),
        analysis::income_count(txns),
        analysis::expenditure_count(txns)
    );

    let counts = analysis::counts_by_category(txns);
    println!();
    println!("Expenditure by Category:");
    for (category, total) in &summary.expenditure_by_category {
        if *total == 0.0 && counts[category] == 0 {
            continue;
        }
        println!(
            "  {category:<14} {:>14}  ({} txns)",
            format_amount(*total),
            counts[category]
        );
    }

    let months = analysis::monthly_totals(txns);
    if months.len() > 1 {
        println!();
        println!("Monthly Activity:");
        for (month, count, total) in &months {
            println!("  {month}  {count:>4} txns  {:>14}", format_amount(*total));
        }
    }

    println!();
    println!("{:<12} {:<14} {:>12}  Description", "Date", "Category", "Amount");
    println!("{}", "─".repeat(64));
    for t in txns {
        println!(
            "{:<12} {:<14} {:>12}  {}",
            t.date,
            t.category,
            format_amount(t.amount),
            truncate(&t.description, 40)
        );
    }
}

// ── records / summary ─────────────────────────────────────────

fn cli_records() -> Result<()> {
    let db = Database::open(&Database::default_path()?)?;
    let records = db.get_records()?;
    if records.is_empty() {
        println!("No stored statements");
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:<24} {:>6} {:>14}",
        "ID", "Account", "Period", "Txns", "Final"
    );
    println!("{}", "─".repeat(70));
    for r in &records {
        let period = if r.date_earliest.is_empty() {
            String::new()
        } else {
            format!("{} to {}", r.date_earliest, r.date_latest)
        };
        println!(
            "{:<4} {:<16} {:<24} {:>6} {:>14}",
            r.id.unwrap_or(0),
            truncate(&r.account, 16),
            period,
            r.transaction_count,
            format_amount(r.final_balance),
        );
    }
    Ok(())
}

fn cli_summary() -> Result<()> {
    let db = Database::open(&Database::default_path()?)?;
    let overview = db.get_overview()?;

    println!("LedgerLens Store");
    println!("{}", "─".repeat(40));
    println!("  Statements:       {}", overview.statement_count);
    println!("  Transactions:     {}", overview.total_transactions);
    println!(
        "  Combined Balance: {}",
        format_amount(overview.combined_balance)
    );
    Ok(())
}

// ── Formatting helpers ────────────────────────────────────────

/// Format an amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: f64) -> String {
    let formatted = format!("{:.2}", val.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < 0.0 {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
