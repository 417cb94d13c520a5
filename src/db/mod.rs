mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use crate::models::AnalysisSummary;

/// One stored statement analysis: summary metadata for listing plus the
/// raw `(initial_balance, transactions)` pair forwarded as JSON.
#[derive(Debug, Clone)]
pub(crate) struct StatementRecord {
    pub(crate) id: Option<i64>,
    pub(crate) account: String,
    pub(crate) initial_balance: f64,
    pub(crate) final_balance: f64,
    pub(crate) total_income: f64,
    pub(crate) total_expenditure: f64,
    pub(crate) transaction_count: i64,
    pub(crate) date_earliest: String,
    pub(crate) date_latest: String,
    pub(crate) raw_json: String,
    pub(crate) created_at: String,
}

impl StatementRecord {
    pub(crate) fn from_summary(account: String, summary: &AnalysisSummary, raw_json: String) -> Self {
        let (earliest, latest) = summary
            .date_range()
            .map(|(e, l)| (e.to_string(), l.to_string()))
            .unwrap_or_default();
        Self {
            id: None,
            account,
            initial_balance: summary.initial_balance,
            final_balance: summary.final_balance,
            total_income: summary.total_income,
            total_expenditure: summary.total_expenditure,
            transaction_count: summary.transaction_details.len() as i64,
            date_earliest: earliest,
            date_latest: latest,
            raw_json,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Combined stats across every stored statement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Overview {
    pub(crate) statement_count: i64,
    pub(crate) combined_balance: f64,
    pub(crate) total_transactions: i64,
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    /// Default store location under the platform data directory.
    pub(crate) fn default_path() -> Result<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "ledgerlens", "LedgerLens")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(data_dir.join("ledgerlens.db"))
    }

    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    pub(crate) fn insert_record(&mut self, record: &StatementRecord) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO statements (account, initial_balance, final_balance, total_income,
                     total_expenditure, transaction_count, date_earliest, date_latest, raw_json, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    record.account,
                    record.initial_balance,
                    record.final_balance,
                    record.total_income,
                    record.total_expenditure,
                    record.transaction_count,
                    record.date_earliest,
                    record.date_latest,
                    record.raw_json,
                    record.created_at,
                ],
            )
            .context("Failed to insert statement record")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Stored records, newest first.
    pub(crate) fn get_records(&self) -> Result<Vec<StatementRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, account, initial_balance, final_balance, total_income,
                    total_expenditure, transaction_count, date_earliest, date_latest,
                    raw_json, created_at
             FROM statements ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StatementRecord {
                id: Some(row.get(0)?),
                account: row.get(1)?,
                initial_balance: row.get(2)?,
                final_balance: row.get(3)?,
                total_income: row.get(4)?,
                total_expenditure: row.get(5)?,
                transaction_count: row.get(6)?,
                date_earliest: row.get(7)?,
                date_latest: row.get(8)?,
                raw_json: row.get(9)?,
                created_at: row.get(10)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    pub(crate) fn get_overview(&self) -> Result<Overview> {
        self.conn
            .query_row(
                "SELECT COUNT(*),
                        COALESCE(SUM(final_balance), 0),
                        COALESCE(SUM(transaction_count), 0)
                 FROM statements",
                [],
                |row| {
                    Ok(Overview {
                        statement_count: row.get(0)?,
                        combined_balance: row.get(1)?,
                        total_transactions: row.get(2)?,
                    })
                },
            )
            .context("Failed to read store overview")
    }
}

#[cfg(test)]
mod tests;
