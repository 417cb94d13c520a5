#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::{AnalysisSummary, Category, CategoryTotals, Transaction};

fn make_summary() -> AnalysisSummary {
    let mut buckets: CategoryTotals = Category::all().iter().map(|c| (*c, 0.0)).collect();
    buckets.insert(Category::Food, -4.5);
    AnalysisSummary {
        initial_balance: 100.0,
        final_balance: 95.5,
        total_income: 0.0,
        total_expenditure: -4.5,
        expenditure_by_category: buckets,
        transaction_details: vec![Transaction {
            date: "2024-01-05".into(),
            description: "Starbucks Coffee".into(),
            amount: -4.5,
            category: Category::Food,
        }],
    }
}

fn make_record(account: &str) -> StatementRecord {
    StatementRecord::from_summary(account.into(), &make_summary(), "{}".into())
}

// ── StatementRecord ───────────────────────────────────────────

#[test]
fn test_record_from_summary() {
    let record = make_record("checking");
    assert!(record.id.is_none());
    assert_eq!(record.account, "checking");
    assert_eq!(record.initial_balance, 100.0);
    assert_eq!(record.final_balance, 95.5);
    assert_eq!(record.transaction_count, 1);
    assert_eq!(record.date_earliest, "2024-01-05");
    assert_eq!(record.date_latest, "2024-01-05");
    assert!(!record.created_at.is_empty());
}

#[test]
fn test_record_from_empty_summary() {
    let summary = AnalysisSummary {
        transaction_details: vec![],
        ..make_summary()
    };
    let record = StatementRecord::from_summary(String::new(), &summary, "{}".into());
    assert_eq!(record.transaction_count, 0);
    assert!(record.date_earliest.is_empty());
    assert!(record.date_latest.is_empty());
}

// ── Round trips ───────────────────────────────────────────────

#[test]
fn test_insert_and_list() {
    let mut db = Database::open_in_memory().unwrap();
    let id = db.insert_record(&make_record("checking")).unwrap();
    assert!(id > 0);

    let records = db.get_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, Some(id));
    assert_eq!(records[0].account, "checking");
    assert_eq!(records[0].final_balance, 95.5);
    assert_eq!(records[0].raw_json, "{}");
}

#[test]
fn test_records_newest_first() {
    let mut db = Database::open_in_memory().unwrap();
    let mut first = make_record("a");
    first.created_at = "2024-01-01T00:00:00Z".into();
    let mut second = make_record("b");
    second.created_at = "2024-02-01T00:00:00Z".into();
    db.insert_record(&first).unwrap();
    db.insert_record(&second).unwrap();

    let records = db.get_records().unwrap();
    assert_eq!(records[0].account, "b");
    assert_eq!(records[1].account, "a");
}

#[test]
fn test_overview_empty() {
    let db = Database::open_in_memory().unwrap();
    let overview = db.get_overview().unwrap();
    assert_eq!(overview.statement_count, 0);
    assert_eq!(overview.combined_balance, 0.0);
    assert_eq!(overview.total_transactions, 0);
}

#[test]
fn test_overview_sums() {
    let mut db = Database::open_in_memory().unwrap();
    db.insert_record(&make_record("a")).unwrap();
    db.insert_record(&make_record("b")).unwrap();
    let overview = db.get_overview().unwrap();
    assert_eq!(overview.statement_count, 2);
    assert!((overview.combined_balance - 191.0).abs() < 1e-9);
    assert_eq!(overview.total_transactions, 2);
}

// ── On-disk open + migration ──────────────────────────────────

#[test]
fn test_open_on_disk_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledgerlens.db");

    {
        let mut db = Database::open(&path).unwrap();
        db.insert_record(&make_record("checking")).unwrap();
    }

    // Reopening migrates in place and keeps data.
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_records().unwrap().len(), 1);
}
