// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Notification-to-transaction extraction: build the instruction, make one
//! schema-constrained generation call, validate the reply, and reconcile the
//! returned entity name against the app registry.

pub mod gemini;
pub mod prompt;

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

pub use gemini::{GeminiClient, GenerationClient};
pub use prompt::{build, ExtractionRequest};

use crate::models::{ParsedNotification, Transaction, TransactionStatus, TransactionType};
use crate::registry::{match_entity, BANK_APPS};
use crate::utils::now_pair;

/// Internal failure taxonomy. None of these cross the pipeline boundary:
/// every variant collapses to `None` for the caller, who falls back to
/// manual entry.
#[derive(Debug, Error)]
enum ExtractError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("service returned no text payload")]
    EmptyBody,
    #[error("response body is not valid for the schema: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("rejected parsed fields: {0}")]
    Validation(&'static str),
}

/// Turn a pasted notification into a complete transaction draft.
///
/// Blank input returns `None` without touching the transport. Exactly one
/// generation call is made per invocation; there is no retry and no
/// cancellation. Any transport, schema, or validation failure is logged and
/// collapses to `None`. A `Some` result always carries the contractual
/// fields (amount, currency, direction, entity) plus a fresh id, the
/// creation instant, and `Success` status.
pub fn parse_notification(
    client: &dyn GenerationClient,
    raw_text: &str,
    enabled_ids: &[String],
) -> Option<Transaction> {
    if raw_text.trim().is_empty() {
        return None;
    }
    match run(client, raw_text, enabled_ids) {
        Ok(t) => Some(t),
        Err(e) => {
            eprintln!("parse failed: {e}");
            None
        }
    }
}

fn run(
    client: &dyn GenerationClient,
    raw_text: &str,
    enabled_ids: &[String],
) -> Result<Transaction, ExtractError> {
    let request = prompt::build(raw_text, enabled_ids);
    let body = client
        .generate(&request)
        .map_err(|e| ExtractError::Transport(format!("{e:#}")))?
        .ok_or(ExtractError::EmptyBody)?;
    let parsed: ParsedNotification = serde_json::from_str(&body)?;
    let amount = validate(&parsed)?;
    Ok(complete(parsed, amount))
}

/// Local validation pass over the required fields. The remote contract is not
/// assumed bit-exact across provider versions, so reject what serde alone
/// cannot catch.
fn validate(parsed: &ParsedNotification) -> Result<Decimal, ExtractError> {
    if !parsed.amount.is_finite() || parsed.amount < 0.0 {
        return Err(ExtractError::Validation("amount must be a non-negative number"));
    }
    if parsed.entity.trim().is_empty() {
        return Err(ExtractError::Validation("entity must be non-empty"));
    }
    Decimal::try_from(parsed.amount)
        .map_err(|_| ExtractError::Validation("amount is not representable as a decimal"))
}

/// Merge the parsed fields with generated metadata into a full record. Entity
/// reconciliation runs against the FULL registry, not the enabled subset: a
/// notification from a non-connected app should still link up. An entity the
/// matcher does not recognize simply leaves `origin_app_id` unset.
fn complete(parsed: ParsedNotification, amount: Decimal) -> Transaction {
    let matched = match_entity(&parsed.entity, &BANK_APPS);
    let (date, timestamp) = now_pair();
    Transaction {
        id: Uuid::new_v4().to_string(),
        operation_code: parsed.operation_code,
        amount,
        currency: parsed.currency,
        r#type: parsed.r#type.unwrap_or(TransactionType::Unknown),
        entity: parsed.entity,
        origin_app_id: matched.map(|app| app.id.to_string()),
        sender_or_receiver: parsed.sender_or_receiver.unwrap_or_default(),
        description: parsed.description,
        date,
        timestamp,
        status: TransactionStatus::Success,
        is_expense: parsed.is_expense,
    }
}
