// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rusqlite::Connection;

use crate::db;
use crate::registry::{find_by_id, BANK_APPS};
use crate::utils::pretty_table;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("setup", sub)) => setup(conn, sub)?,
        Some(("list", _)) => list(conn)?,
        Some(("enable", sub)) => {
            let id = checked_id(sub)?;
            db::enable_app(conn, &id)?;
            println!("Connected '{}'", id);
        }
        Some(("disable", sub)) => {
            let id = checked_id(sub)?;
            db::disable_app(conn, &id)?;
            println!("Disconnected '{}'", id);
        }
        _ => {}
    }
    Ok(())
}

fn checked_id(sub: &clap::ArgMatches) -> Result<String> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_lowercase();
    if find_by_id(&id).is_none() {
        bail!(
            "Unknown app id '{}'. Supported: {}",
            id,
            BANK_APPS.iter().map(|a| a.id).collect::<Vec<_>>().join(", ")
        );
    }
    Ok(id)
}

fn setup(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ids: Vec<String> = if sub.get_flag("all") {
        BANK_APPS.iter().map(|a| a.id.to_string()).collect()
    } else {
        let given: Vec<String> = sub
            .get_many::<String>("ids")
            .map(|v| v.map(|s| s.trim().to_lowercase()).collect())
            .unwrap_or_default();
        if given.is_empty() {
            bail!("Nothing to connect; pass app ids or --all");
        }
        for id in &given {
            if find_by_id(id).is_none() {
                bail!("Unknown app id '{}'", id);
            }
        }
        given
    };
    db::replace_enabled_apps(conn, &ids)?;
    db::set_setting(conn, "setup_complete", "true")?;
    println!("Connected {} app(s): {}", ids.len(), ids.join(", "));
    Ok(())
}

fn list(conn: &Connection) -> Result<()> {
    let enabled = db::enabled_app_ids(conn)?;
    let mut rows = Vec::new();
    for app in &BANK_APPS {
        let state = if enabled.is_empty() {
            // No explicit selection yet: the parser treats every app as known.
            "default"
        } else if enabled.iter().any(|id| id == app.id) {
            "connected"
        } else {
            "-"
        };
        rows.push(vec![
            app.id.to_string(),
            app.name.to_string(),
            app.package_name.to_string(),
            state.to_string(),
        ]);
    }
    println!("{}", pretty_table(&["Id", "Name", "Package", "State"], rows));
    Ok(())
}
