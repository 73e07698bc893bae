// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use soles::cli;
use soles::commands::exporter;
use soles::db;
use soles::models::{Currency, Transaction, TransactionStatus, TransactionType};
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn seed(conn: &Connection) {
    let t = Transaction {
        id: "e1".to_string(),
        operation_code: Some("123456".to_string()),
        amount: Decimal::new(1550, 2),
        currency: Currency::Pen,
        r#type: TransactionType::Yape,
        entity: "Yape".to_string(),
        origin_app_id: Some("yape".to_string()),
        sender_or_receiver: "Juan Pérez".to_string(),
        description: Some("Pago almuerzo".to_string()),
        date: "2025-08-01T12:00:00.000Z".to_string(),
        timestamp: 1_754_049_600_000,
        status: TransactionStatus::Success,
        is_expense: true,
    };
    db::insert_transaction(conn, &t).unwrap();
}

fn run_export(conn: &Connection, format: &str, out: &str) {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "soles",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m).unwrap();
    } else {
        panic!("export command not parsed");
    }
}

#[test]
fn csv_export_has_header_and_rows() {
    let conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.csv");
    run_export(&conn, "csv", out.to_str().unwrap());

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "date");
    assert_eq!(&headers[1], "entity");
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "Yape");
    // Description wins over counterparty in the export, as in the app
    assert_eq!(&rows[0][3], "Pago almuerzo");
    assert_eq!(&rows[0][4], "Egreso");
    assert_eq!(&rows[0][5], "15.50");
    assert_eq!(&rows[0][7], "Exitoso");
}

#[test]
fn json_export_is_a_complete_array() {
    let conn = setup();
    seed(&conn);
    let dir = tempdir().unwrap();
    let out = dir.path().join("tx.json");
    run_export(&conn, "json", out.to_str().unwrap());

    let body = std::fs::read_to_string(&out).unwrap();
    let items: serde_json::Value = serde_json::from_str(&body).unwrap();
    let arr = items.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["entity"], "Yape");
    assert_eq!(arr[0]["currency"], "S/");
    assert_eq!(arr[0]["operation_code"], "123456");
}
