// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::{Duration, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{self, TxFilter};
use crate::models::{Currency, Transaction, TransactionStatus, TransactionType};
use crate::registry::{match_entity, BANK_APPS};
use crate::utils::{fmt_money, maybe_print_json, now_pair, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            if db::remove_transaction(conn, id)? {
                println!("Removed {}", id);
            } else {
                println!("No record with id {}", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        bail!("Amount is a magnitude; use --income for inflows");
    }
    let currency = sub.get_one::<String>("currency").unwrap();
    let currency = Currency::parse(currency)
        .ok_or_else(|| anyhow::anyhow!("Unknown currency '{}', use S/ or $", currency))?;
    let ty = sub.get_one::<String>("type").unwrap();
    let ty = TransactionType::parse(ty)
        .ok_or_else(|| anyhow::anyhow!("Unknown type '{}'", ty))?;
    let entity = sub.get_one::<String>("entity").unwrap().clone();

    // Manual entries go through the same reconciliation as parsed ones.
    let origin_app_id = match_entity(&entity, &BANK_APPS).map(|a| a.id.to_string());
    let (date, timestamp) = now_pair();
    let t = Transaction {
        id: Uuid::new_v4().to_string(),
        operation_code: sub.get_one::<String>("code").cloned(),
        amount,
        currency,
        r#type: ty,
        entity,
        origin_app_id,
        sender_or_receiver: sub.get_one::<String>("counterparty").unwrap().clone(),
        description: sub.get_one::<String>("description").cloned(),
        date,
        timestamp,
        status: TransactionStatus::Success,
        is_expense: !sub.get_flag("income"),
    };
    db::insert_transaction(conn, &t)?;
    println!(
        "Recorded {} {} '{}' ({})",
        fmt_money(&t.amount, t.currency.symbol()),
        if t.is_expense { "to" } else { "from" },
        t.sender_or_receiver,
        t.id
    );
    Ok(())
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let range = sub.get_one::<String>("range").unwrap();
    let since_millis = match range.as_str() {
        "all" => None,
        "today" => {
            let midnight = Utc::now()
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .expect("midnight is valid")
                .and_utc();
            Some(midnight.timestamp_millis())
        }
        "week" => Some((Utc::now() - Duration::days(7)).timestamp_millis()),
        "month" => Some((Utc::now() - Duration::days(30)).timestamp_millis()),
        other => bail!("Unknown range '{}', use all|today|week|month", other),
    };
    let r#type = match sub.get_one::<String>("type") {
        Some(s) => Some(
            TransactionType::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown type '{}'", s))?,
        ),
        None => None,
    };
    Ok(TxFilter {
        search: sub.get_one::<String>("search").cloned(),
        r#type,
        since_millis,
        limit: sub.get_one::<usize>("limit").copied(),
    })
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(sub)?;
    let data = db::query_transactions(conn, &filter)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.date.clone(),
                    t.entity.clone(),
                    t.r#type.label().to_string(),
                    t.sender_or_receiver.clone(),
                    if t.is_expense { "Egreso" } else { "Ingreso" }.to_string(),
                    fmt_money(&t.amount, t.currency.symbol()),
                    t.status.label().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Entity", "Type", "Counterparty", "Flow", "Amount", "Status"],
                rows,
            )
        );
    }
    Ok(())
}
