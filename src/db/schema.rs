pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS statements (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    account           TEXT NOT NULL DEFAULT '',
    initial_balance   REAL NOT NULL,
    final_balance     REAL NOT NULL,
    total_income      REAL NOT NULL,
    total_expenditure REAL NOT NULL,
    transaction_count INTEGER NOT NULL,
    date_earliest     TEXT NOT NULL DEFAULT '',
    date_latest       TEXT NOT NULL DEFAULT '',
    raw_json          TEXT NOT NULL,
    created_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_statements_account ON statements(account);
CREATE INDEX IF NOT EXISTS idx_statements_created ON statements(created_at);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
