// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::{json, Value};

use crate::registry::{BankApp, BANK_APPS};

/// Instruction plus response schema, ready for the generation transport.
/// Building one performs no I/O.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub instruction: String,
    pub schema: Value,
}

/// Registry entries the user has opted into. An empty id set fails open to
/// the full registry, so a first-time or misconfigured user still gets
/// parsing instead of an empty hint list.
pub fn known_apps(enabled_ids: &[String]) -> Vec<&'static BankApp> {
    BANK_APPS
        .iter()
        .filter(|app| enabled_ids.is_empty() || enabled_ids.iter().any(|id| id == app.id))
        .collect()
}

pub fn build(raw_text: &str, enabled_ids: &[String]) -> ExtractionRequest {
    let app_names = known_apps(enabled_ids)
        .iter()
        .map(|app| app.name)
        .collect::<Vec<_>>()
        .join(", ");

    let instruction = format!(
        r#"Actúa como un parser inteligente de notificaciones financieras peruanas.
Analiza el siguiente texto (SMS, notificación push o correo) de una transacción.

El usuario tiene estas aplicaciones activas: {app_names}. Prioriza reconocer estas entidades.

Texto a analizar: "{raw_text}"

Reglas Estrictas:
1. Determina si es ingreso (isExpense: false) o egreso (isExpense: true).
   - "Yapeaste", "Pagaste", "Transferencia realizada", "Pago exitoso" => Egreso (isExpense: true)
   - "Recibiste", "Te enviaron", "Abono", "Ingreso" => Ingreso (isExpense: false)
2. Extrae el monto numérico exacto.
3. Identifica la entidad financiera (Yape, Plin, BCP, BBVA, etc.) basándote en el texto.
4. Extrae el código de operación si existe.
5. Extrae el nombre de la persona o empresa relacionada.
"#
    );

    ExtractionRequest {
        instruction,
        schema: response_schema(),
    }
}

/// JSON schema the service is asked to conform to. Only amount, currency,
/// isExpense and entity are required; the rest is best-effort.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "amount": { "type": "NUMBER" },
            "currency": { "type": "STRING", "enum": ["S/", "$"] },
            "type": {
                "type": "STRING",
                "enum": ["Yape", "Plin", "Transferencia", "Pago Servicio", "Otro"]
            },
            "entity": { "type": "STRING" },
            "senderOrReceiver": { "type": "STRING" },
            "operationCode": { "type": "STRING" },
            "description": { "type": "STRING" },
            "isExpense": { "type": "BOOLEAN" }
        },
        "required": ["amount", "currency", "isExpense", "entity"]
    })
}
