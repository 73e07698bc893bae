// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currencies handled by the tracker. Wire values are the display symbols
/// used by Peruvian banking notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "S/")]
    Pen,
    #[serde(rename = "$")]
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Pen => "S/",
            Currency::Usd => "$",
        }
    }

    pub fn parse(s: &str) -> Option<Currency> {
        match s {
            "S/" | "PEN" => Some(Currency::Pen),
            "$" | "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "Yape")]
    Yape,
    #[serde(rename = "Plin")]
    Plin,
    #[serde(rename = "Transferencia")]
    BankTransfer,
    #[serde(rename = "Pago Servicio")]
    Payment,
    #[serde(rename = "Otro")]
    Unknown,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        TransactionType::Yape,
        TransactionType::Plin,
        TransactionType::BankTransfer,
        TransactionType::Payment,
        TransactionType::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Yape => "Yape",
            TransactionType::Plin => "Plin",
            TransactionType::BankTransfer => "Transferencia",
            TransactionType::Payment => "Pago Servicio",
            TransactionType::Unknown => "Otro",
        }
    }

    pub fn parse(s: &str) -> Option<TransactionType> {
        TransactionType::ALL.into_iter().find(|t| t.label() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    #[serde(rename = "Exitoso")]
    Success,
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Fallido")]
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "Exitoso",
            TransactionStatus::Pending => "Pendiente",
            TransactionStatus::Failed => "Fallido",
        }
    }

    pub fn parse(s: &str) -> Option<TransactionStatus> {
        match s {
            "Exitoso" => Some(TransactionStatus::Success),
            "Pendiente" => Some(TransactionStatus::Pending),
            "Fallido" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

/// A recorded money movement. Records are immutable once stored: corrections
/// are new records, never edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub operation_code: Option<String>,
    /// Magnitude only; direction lives in `is_expense`.
    pub amount: Decimal,
    pub currency: Currency,
    pub r#type: TransactionType,
    /// Display name of the institution or wallet involved.
    pub entity: String,
    /// Registry id of the matched app, when the entity matcher found one.
    pub origin_app_id: Option<String>,
    pub sender_or_receiver: String,
    pub description: Option<String>,
    /// RFC 3339 creation instant, paired with `timestamp` (unix millis).
    pub date: String,
    pub timestamp: i64,
    pub status: TransactionStatus,
    pub is_expense: bool,
}

/// Wire schema the generation service is required to return. Required per the
/// response schema: amount, currency, isExpense, entity. Everything else is
/// best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNotification {
    pub amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub r#type: Option<TransactionType>,
    pub entity: String,
    #[serde(default)]
    pub sender_or_receiver: Option<String>,
    #[serde(default)]
    pub operation_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_expense: bool,
}
