// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::db;
use crate::registry::find_by_id;
use crate::utils::{parse_decimal, pretty_table};

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Stored origin_app_id values the registry no longer knows
    let mut stmt = conn.prepare(
        "SELECT DISTINCT origin_app_id FROM transactions WHERE origin_app_id IS NOT NULL",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: String = r.get(0)?;
        if find_by_id(&id).is_none() {
            rows.push(vec!["origin_app_not_in_registry".into(), id]);
        }
    }

    // 2) Connected apps that dropped out of the registry
    for id in db::enabled_app_ids(conn)? {
        if find_by_id(&id).is_none() {
            rows.push(vec!["enabled_app_not_in_registry".into(), id]);
        }
    }

    // 3) Amounts that no longer parse as decimals
    let mut stmt2 = conn.prepare("SELECT id, amount FROM transactions")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: String = r.get(0)?;
        let amount: String = r.get(1)?;
        if parse_decimal(&amount).is_err() {
            rows.push(vec!["bad_amount".into(), format!("{} '{}'", id, amount)]);
        }
    }

    // 4) Parsing is unavailable without the API key
    if std::env::var("GEMINI_API_KEY").is_err() {
        rows.push(vec![
            "missing_api_key".into(),
            "GEMINI_API_KEY is not set; `soles parse` will fail".into(),
        ]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
