// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use soles::registry::{match_entity, BankApp, IconKind, BANK_APPS};

fn app(id: &'static str, name: &'static str) -> BankApp {
    BankApp {
        id,
        name,
        package_name: "",
        color: "#000000",
        icon: IconKind::Wallet,
    }
}

#[test]
fn matches_when_input_contains_name() {
    let found = match_entity("Yape Perú", &BANK_APPS).unwrap();
    assert_eq!(found.id, "yape");
}

#[test]
fn matches_when_name_contains_input() {
    // "BCP" is a fragment of "Banca Móvil BCP"
    let found = match_entity("bcp", &BANK_APPS).unwrap();
    assert_eq!(found.id, "bcp");
}

#[test]
fn match_is_case_insensitive() {
    assert_eq!(match_entity("YAPE", &BANK_APPS).unwrap().id, "yape");
    assert_eq!(match_entity("interbank app", &BANK_APPS).unwrap().id, "interbank");
}

#[test]
fn blank_input_never_matches() {
    assert!(match_entity("", &BANK_APPS).is_none());
    assert!(match_entity("   ", &BANK_APPS).is_none());
}

#[test]
fn unknown_entity_returns_none() {
    assert!(match_entity("Nubank", &BANK_APPS).is_none());
}

#[test]
fn first_match_wins_in_candidate_order() {
    // Both names are substrings of the input; the earlier candidate takes it.
    let candidates = [app("pago", "Pago"), app("pagoya", "PagoYa")];
    let found = match_entity("PagoYa: operación exitosa", &candidates).unwrap();
    assert_eq!(found.id, "pago");

    let reversed = [app("pagoya", "PagoYa"), app("pago", "Pago")];
    let found = match_entity("PagoYa: operación exitosa", &reversed).unwrap();
    assert_eq!(found.id, "pagoya");
}

#[test]
fn matcher_is_pure_and_idempotent() {
    let a = match_entity("Plin", &BANK_APPS);
    let b = match_entity("Plin", &BANK_APPS);
    assert_eq!(a.map(|x| x.id), b.map(|x| x.id));
    assert_eq!(a.map(|x| x.id), Some("plin"));
}
