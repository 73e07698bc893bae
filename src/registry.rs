// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static catalog of supported Peruvian financial apps, plus the entity
//! matcher used to reconcile free-text entity names against it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Smartphone,
    Bank,
    Wallet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankApp {
    pub id: &'static str,
    pub name: &'static str,
    pub package_name: &'static str,
    pub color: &'static str,
    pub icon: IconKind,
}

/// Registry order matters: the entity matcher returns the first match, so
/// more specific or more popular apps come first.
pub const BANK_APPS: [BankApp; 9] = [
    BankApp { id: "yape", name: "Yape", package_name: "com.bcp.innovacxion.yape", color: "#6b21a8", icon: IconKind::Smartphone },
    BankApp { id: "plin", name: "Plin", package_name: "com.plin.app", color: "#0ea5e9", icon: IconKind::Smartphone },
    BankApp { id: "bcp", name: "Banca Móvil BCP", package_name: "com.bcp.bank.bcp", color: "#0033A1", icon: IconKind::Bank },
    BankApp { id: "interbank", name: "Interbank APP", package_name: "pe.com.interbank.mobilebanking", color: "#009a3e", icon: IconKind::Bank },
    BankApp { id: "bbva", name: "BBVA Perú", package_name: "com.bbva.bbvacontinental", color: "#004481", icon: IconKind::Bank },
    BankApp { id: "scotia", name: "Scotiabank", package_name: "pe.com.scotiabank.banca.movil", color: "#ec111a", icon: IconKind::Bank },
    BankApp { id: "izipay", name: "IzipayYa", package_name: "pe.com.interbank.izipayya", color: "#ff0055", icon: IconKind::Wallet },
    BankApp { id: "agora", name: "Agora", package_name: "pe.com.agora", color: "#5C2D91", icon: IconKind::Wallet },
    BankApp { id: "bn", name: "Banco de la Nación", package_name: "pe.bn.bancamovil", color: "#9d1d22", icon: IconKind::Bank },
];

pub fn find_by_id(id: &str) -> Option<&'static BankApp> {
    BANK_APPS.iter().find(|app| app.id == id)
}

/// Reconcile a free-text entity name against a candidate list.
///
/// An entry matches when its display name contains the input or the input
/// contains the display name, case-insensitively. First-match-wins: when
/// several candidates match, the earliest in candidate order is returned and
/// the rest are ignored. Blank input never matches.
pub fn match_entity<'a>(free_text: &str, candidates: &'a [BankApp]) -> Option<&'a BankApp> {
    let needle = free_text.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    candidates.iter().find(|app| {
        let name = app.name.to_lowercase();
        name.contains(&needle) || needle.contains(&name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        for (i, a) in BANK_APPS.iter().enumerate() {
            for b in &BANK_APPS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        assert_eq!(find_by_id("yape").map(|a| a.name), Some("Yape"));
        assert!(find_by_id("nubank").is_none());
    }
}
