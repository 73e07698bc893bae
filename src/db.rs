// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::PathBuf;

use crate::models::{Currency, Transaction, TransactionStatus, TransactionType};
use crate::utils::parse_decimal;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("pe.soles", "Soles", "soles"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("soles.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    -- Registry ids the user has connected; an empty table means the user
    -- never narrowed the set (the extraction pipeline treats that as all).
    CREATE TABLE IF NOT EXISTS enabled_apps(
        app_id TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        operation_code TEXT,
        amount TEXT NOT NULL,
        currency TEXT NOT NULL,
        type TEXT NOT NULL,
        entity TEXT NOT NULL,
        origin_app_id TEXT,
        sender_or_receiver TEXT NOT NULL,
        description TEXT,
        date TEXT NOT NULL,
        timestamp INTEGER NOT NULL,
        status TEXT NOT NULL,
        is_expense INTEGER NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_timestamp ON transactions(timestamp);
    "#,
    )?;
    Ok(())
}

pub const TRANSACTION_COLUMNS: &str = "id, operation_code, amount, currency, type, entity, \
     origin_app_id, sender_or_receiver, description, date, timestamp, status, is_expense";

pub fn insert_transaction(conn: &Connection, t: &Transaction) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions(id, operation_code, amount, currency, type, entity,
            origin_app_id, sender_or_receiver, description, date, timestamp, status, is_expense)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            t.id,
            t.operation_code,
            t.amount.to_string(),
            t.currency.symbol(),
            t.r#type.label(),
            t.entity,
            t.origin_app_id,
            t.sender_or_receiver,
            t.description,
            t.date,
            t.timestamp,
            t.status.label(),
            t.is_expense as i64,
        ],
    )?;
    Ok(())
}

pub fn remove_transaction(conn: &Connection, id: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    Ok(n > 0)
}

fn row_to_transaction(r: &Row) -> Result<Transaction> {
    // Column order follows TRANSACTION_COLUMNS.
    let amount_raw: String = r.get(2)?;
    let currency: String = r.get(3)?;
    let ty: String = r.get(4)?;
    let status: String = r.get(11)?;
    Ok(Transaction {
        id: r.get(0)?,
        operation_code: r.get(1)?,
        amount: parse_decimal(&amount_raw)?,
        currency: Currency::parse(&currency)
            .with_context(|| format!("Unknown stored currency '{}'", currency))?,
        r#type: TransactionType::parse(&ty).unwrap_or(TransactionType::Unknown),
        entity: r.get(5)?,
        origin_app_id: r.get(6)?,
        sender_or_receiver: r.get(7)?,
        description: r.get(8)?,
        date: r.get(9)?,
        timestamp: r.get(10)?,
        status: TransactionStatus::parse(&status).unwrap_or(TransactionStatus::Pending),
        is_expense: r.get::<_, i64>(12)? != 0,
    })
}

/// Newest-first listing filter. All fields are conjunctive.
#[derive(Debug, Default, Clone)]
pub struct TxFilter {
    /// Case-insensitive needle over counterparty and entity.
    pub search: Option<String>,
    pub r#type: Option<TransactionType>,
    /// Inclusive lower bound on the unix-millis timestamp.
    pub since_millis: Option<i64>,
    pub limit: Option<usize>,
}

pub fn query_transactions(conn: &Connection, filter: &TxFilter) -> Result<Vec<Transaction>> {
    let mut sql = format!(
        "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE 1=1"
    );
    let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(ref needle) = filter.search {
        sql.push_str(
            " AND (lower(sender_or_receiver) LIKE '%'||?||'%' OR lower(entity) LIKE '%'||?||'%')",
        );
        let n = needle.to_lowercase();
        args.push(Box::new(n.clone()));
        args.push(Box::new(n));
    }
    if let Some(ty) = filter.r#type {
        sql.push_str(" AND type=?");
        args.push(Box::new(ty.label().to_string()));
    }
    if let Some(since) = filter.since_millis {
        sql.push_str(" AND timestamp>=?");
        args.push(Box::new(since));
    }
    sql.push_str(" ORDER BY timestamp DESC, id");
    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        args.push(Box::new(limit as i64));
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(args.iter().map(|a| a.as_ref())))?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(row_to_transaction(r)?);
    }
    Ok(out)
}

pub fn all_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    query_transactions(conn, &TxFilter::default())
}

// Enabled-apps set. Stored explicitly; interpretation of the empty set is the
// extraction pipeline's concern, not the store's.
pub fn enabled_app_ids(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT app_id FROM enabled_apps ORDER BY rowid")?;
    let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn enable_app(conn: &Connection, app_id: &str) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO enabled_apps(app_id) VALUES (?1)",
        params![app_id],
    )?;
    Ok(())
}

pub fn disable_app(conn: &Connection, app_id: &str) -> Result<()> {
    conn.execute("DELETE FROM enabled_apps WHERE app_id=?1", params![app_id])?;
    Ok(())
}

pub fn replace_enabled_apps(conn: &mut Connection, app_ids: &[String]) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM enabled_apps", [])?;
    for id in app_ids {
        tx.execute(
            "INSERT OR IGNORE INTO enabled_apps(app_id) VALUES (?1)",
            params![id],
        )?;
    }
    tx.commit()?;
    Ok(())
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}
