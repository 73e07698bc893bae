// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

use crate::db;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let data = db::all_transactions(conn)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "entity",
                "type",
                "counterparty",
                "flow",
                "amount",
                "currency",
                "status",
                "operation_code",
            ])?;
            for t in &data {
                wtr.write_record([
                    t.date.clone(),
                    t.entity.clone(),
                    t.r#type.label().to_string(),
                    t.description
                        .clone()
                        .unwrap_or_else(|| t.sender_or_receiver.clone()),
                    if t.is_expense { "Egreso" } else { "Ingreso" }.to_string(),
                    format!("{:.2}", t.amount),
                    t.currency.symbol().to_string(),
                    t.status.label().to_string(),
                    t.operation_code.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date,
                        "entity": t.entity,
                        "type": t.r#type.label(),
                        "counterparty": t.sender_or_receiver,
                        "flow": if t.is_expense { "Egreso" } else { "Ingreso" },
                        "amount": format!("{:.2}", t.amount),
                        "currency": t.currency.symbol(),
                        "status": t.status.label(),
                        "operation_code": t.operation_code,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transaction(s) to {}", data.len(), out);
    Ok(())
}
