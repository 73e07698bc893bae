// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prompt::ExtractionRequest;
use crate::utils::http_client;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// One-shot, schema-constrained text generation. `Ok(None)` means the service
/// answered but produced no text payload.
pub trait GenerationClient {
    fn generate(&self, req: &ExtractionRequest) -> Result<Option<String>>;
}

/// Gemini `generateContent` transport. The shared blocking client carries a
/// 15 s timeout, so a stalled service ends the request instead of hanging the
/// caller.
pub struct GeminiClient {
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("missing {API_KEY_VAR}; export it to enable parsing"))?;
        Ok(GeminiClient {
            model: DEFAULT_MODEL.to_string(),
            api_key,
        })
    }

    pub fn with_model(model: &str, api_key: &str) -> Self {
        GeminiClient {
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Req {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct Resp {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<RespContent>,
}

#[derive(Deserialize)]
struct RespContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerationClient for GeminiClient {
    fn generate(&self, req: &ExtractionRequest) -> Result<Option<String>> {
        let body = Req {
            contents: vec![Content {
                parts: vec![Part {
                    text: req.instruction.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: req.schema.clone(),
            },
        };

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );
        let client = http_client()?;
        let resp = client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .context("gemini request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().unwrap_or_default();
            bail!("gemini error: {status} {txt}");
        }

        let out: Resp = resp.json().context("parse gemini response")?;
        let text = out
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|s| !s.trim().is_empty());
        Ok(text)
    }
}
