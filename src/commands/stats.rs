// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::db;
use crate::models::Transaction;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary_cmd(conn, sub)?,
        Some(("by-entity", sub)) => by_entity_cmd(conn, sub)?,
        Some(("daily", sub)) => daily_cmd(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// One-pass reduction over the whole list; amounts are magnitudes, direction
/// comes from the expense flag.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for t in transactions {
        if t.is_expense {
            expenses += t.amount;
        } else {
            income += t.amount;
        }
    }
    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Expense totals per entity, largest first.
pub fn expenses_by_entity(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut agg: Vec<(String, Decimal)> = Vec::new();
    for t in transactions.iter().filter(|t| t.is_expense) {
        match agg.iter_mut().find(|(name, _)| *name == t.entity) {
            Some((_, total)) => *total += t.amount,
            None => agg.push((t.entity.clone(), t.amount)),
        }
    }
    agg.sort_by(|a, b| b.1.cmp(&a.1));
    agg
}

/// Expense totals per day for the last 7 days, oldest day first. Days with no
/// spending still appear, so the trend has a fixed width.
pub fn daily_trend(transactions: &[Transaction], now: DateTime<Utc>) -> Vec<(String, Decimal)> {
    let mut out = Vec::with_capacity(7);
    for back in (0..7).rev() {
        let day = (now - Duration::days(back)).date_naive();
        let total = transactions
            .iter()
            .filter(|t| {
                t.is_expense
                    && DateTime::from_timestamp_millis(t.timestamp)
                        .map(|d| d.date_naive() == day)
                        .unwrap_or(false)
            })
            .map(|t| t.amount)
            .sum();
        out.push((day.format("%a").to_string(), total));
    }
    out
}

fn summary_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let s = summarize(&db::all_transactions(conn)?);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        let rows = vec![vec![
            format!("{:.2}", s.income),
            format!("{:.2}", s.expenses),
            format!("{:.2}", s.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], rows));
    }
    Ok(())
}

fn by_entity_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let agg = expenses_by_entity(&db::all_transactions(conn)?);
    let data: Vec<Vec<String>> = agg
        .into_iter()
        .map(|(name, total)| vec![name, format!("{:.2}", total)])
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", pretty_table(&["Entity", "Spent"], data));
    }
    Ok(())
}

fn daily_cmd(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let trend = daily_trend(&db::all_transactions(conn)?, Utc::now());
    let data: Vec<Vec<String>> = trend
        .into_iter()
        .map(|(day, total)| vec![day, format!("{:.2}", total)])
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", pretty_table(&["Day", "Spent"], data));
    }
    Ok(())
}
