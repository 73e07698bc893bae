// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use soles::commands::stats::{daily_trend, expenses_by_entity, summarize};
use soles::models::{Currency, Transaction, TransactionStatus, TransactionType};

fn tx(entity: &str, amount: i64, is_expense: bool, timestamp: i64) -> Transaction {
    Transaction {
        id: format!("{entity}-{amount}-{timestamp}"),
        operation_code: None,
        amount: Decimal::from(amount),
        currency: Currency::Pen,
        r#type: TransactionType::Yape,
        entity: entity.to_string(),
        origin_app_id: None,
        sender_or_receiver: String::new(),
        description: None,
        date: String::new(),
        timestamp,
        status: TransactionStatus::Success,
        is_expense,
    }
}

#[test]
fn summary_is_a_single_pass_reduction() {
    let txs = vec![
        tx("Yape", 100, false, 1),
        tx("Yape", 30, true, 2),
        tx("Plin", 20, true, 3),
    ];
    let s = summarize(&txs);
    assert_eq!(s.income, Decimal::from(100));
    assert_eq!(s.expenses, Decimal::from(50));
    assert_eq!(s.balance, Decimal::from(50));
}

#[test]
fn empty_list_summarizes_to_zero() {
    let s = summarize(&[]);
    assert_eq!(s.income, Decimal::ZERO);
    assert_eq!(s.expenses, Decimal::ZERO);
    assert_eq!(s.balance, Decimal::ZERO);
}

#[test]
fn by_entity_aggregates_expenses_only_largest_first() {
    let txs = vec![
        tx("Yape", 10, true, 1),
        tx("Yape", 15, true, 2),
        tx("Plin", 40, true, 3),
        tx("Plin", 999, false, 4), // income is excluded
    ];
    let agg = expenses_by_entity(&txs);
    assert_eq!(agg.len(), 2);
    assert_eq!(agg[0], ("Plin".to_string(), Decimal::from(40)));
    assert_eq!(agg[1], ("Yape".to_string(), Decimal::from(25)));
}

#[test]
fn daily_trend_has_seven_buckets_oldest_first() {
    let now = Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap();
    let yesterday = (now - Duration::days(1)).timestamp_millis();
    let txs = vec![
        tx("Yape", 5, true, now.timestamp_millis()),
        tx("Yape", 7, true, yesterday),
        tx("Yape", 3, true, yesterday),
        // Outside the window
        tx("Plin", 100, true, (now - Duration::days(10)).timestamp_millis()),
    ];
    let trend = daily_trend(&txs, now);
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[6].1, Decimal::from(5));
    assert_eq!(trend[5].1, Decimal::from(10));
    assert_eq!(trend[0].1, Decimal::ZERO);
}
