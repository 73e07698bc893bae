// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::db;
use crate::extract::{self, GeminiClient, GenerationClient};
use crate::models::Transaction;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let client = GeminiClient::from_env()?;
    run(conn, m, &client)
}

/// The analyze action: one pipeline invocation per call. No retry here; on an
/// absent result the user re-runs or falls back to `tx add`.
pub fn run(conn: &Connection, m: &clap::ArgMatches, client: &dyn GenerationClient) -> Result<()> {
    let text = m.get_one::<String>("text").unwrap();
    let enabled = db::enabled_app_ids(conn)?;

    match extract::parse_notification(client, text, &enabled) {
        Some(t) => {
            let json_flag = m.get_flag("json");
            let jsonl_flag = m.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &t)? {
                print_draft(&t);
            }
            if m.get_flag("save") {
                db::insert_transaction(conn, &t)?;
                println!("Saved as {}", t.id);
            } else {
                println!("Dry run; pass --save to store it.");
            }
        }
        None => {
            println!("Could not extract a transaction from that text.");
            println!("Check the notification or record it manually with `soles tx add`.");
        }
    }
    Ok(())
}

fn print_draft(t: &Transaction) {
    let rows = vec![vec![
        t.entity.clone(),
        t.origin_app_id.clone().unwrap_or_else(|| "-".into()),
        t.r#type.label().to_string(),
        t.sender_or_receiver.clone(),
        if t.is_expense { "Egreso" } else { "Ingreso" }.to_string(),
        fmt_money(&t.amount, t.currency.symbol()),
        t.operation_code.clone().unwrap_or_else(|| "-".into()),
    ]];
    println!(
        "{}",
        pretty_table(
            &["Entity", "App", "Type", "Counterparty", "Flow", "Amount", "Op. code"],
            rows,
        )
    );
}
