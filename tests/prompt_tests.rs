// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use soles::extract::prompt::{build, known_apps};
use soles::registry::BANK_APPS;

#[test]
fn instruction_embeds_raw_text_verbatim() {
    let raw = "Yapeaste S/ 15.00 a Juan Perez el 12/08";
    let req = build(raw, &["yape".to_string()]);
    assert!(req.instruction.contains(raw));
}

#[test]
fn enabled_apps_appear_by_display_name() {
    let enabled = vec!["yape".to_string(), "plin".to_string()];
    let req = build("Pagaste S/ 20.00", &enabled);
    assert!(req.instruction.contains("Yape, Plin"));
    assert!(!req.instruction.contains("Scotiabank"));
}

#[test]
fn empty_enabled_set_fails_open_to_full_registry() {
    let req = build("Recibiste S/ 50.00", &[]);
    for app in &BANK_APPS {
        assert!(
            req.instruction.contains(app.name),
            "missing '{}' in hint list",
            app.name
        );
    }
}

#[test]
fn known_apps_filters_in_registry_order() {
    let enabled = vec!["bcp".to_string(), "yape".to_string()];
    let names: Vec<&str> = known_apps(&enabled).iter().map(|a| a.name).collect();
    // Registry order, not request order
    assert_eq!(names, vec!["Yape", "Banca Móvil BCP"]);
}

#[test]
fn schema_requires_the_contractual_fields() {
    let req = build("texto", &[]);
    let required = req.schema["required"]
        .as_array()
        .expect("schema has a required list")
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(required, vec!["amount", "currency", "isExpense", "entity"]);
    assert_eq!(req.schema["properties"]["currency"]["enum"][0], "S/");
    assert_eq!(req.schema["properties"]["currency"]["enum"][1], "$");
}

#[test]
fn instruction_carries_direction_cues() {
    let req = build("texto", &[]);
    assert!(req.instruction.contains("Yapeaste"));
    assert!(req.instruction.contains("Recibiste"));
    assert!(req.instruction.contains("isExpense: true"));
    assert!(req.instruction.contains("isExpense: false"));
}
