use serde::{Deserialize, Serialize};

use crate::recommend::types::{RecommendContext, Recommendation};

/// Context parameter names, echoed to callers of invalid requests.
pub const CONTEXT_PARAMETERS: [&str; 5] =
    ["deal_stage", "persona", "industry", "company_size", "context"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Recommend {
        context: RecommendContext,
        limit: Option<i64>,
    },
    Exit,
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    #[serde(rename = "type")]
    kind: WireMessageType,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum WireMessageType {
    Recommend,
    Exit,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireExit {
    #[serde(rename = "type")]
    _kind: WireMessageType,
}

// Context fields are spelled out because serde does not allow flatten
// together with deny_unknown_fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireRecommend {
    #[serde(rename = "type")]
    _kind: WireMessageType,
    #[serde(default)]
    deal_stage: Option<String>,
    #[serde(default)]
    persona: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    company_size: Option<String>,
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    limit: Option<i64>,
}

// Two-pass parse: the envelope picks the message type, the typed struct then
// rejects unknown fields (serde cannot combine internal tagging with
// deny_unknown_fields).
pub fn parse_client_message(line: &str) -> Result<ClientMessage, serde_json::Error> {
    let envelope: WireEnvelope = serde_json::from_str(line)?;
    let message = match envelope.kind {
        WireMessageType::Exit => {
            let _exit: WireExit = serde_json::from_str(line)?;
            ClientMessage::Exit
        }
        WireMessageType::Recommend => {
            let wire: WireRecommend = serde_json::from_str(line)?;
            ClientMessage::Recommend {
                context: RecommendContext {
                    deal_stage: wire.deal_stage,
                    persona: wire.persona,
                    industry: wire.industry,
                    company_size: wire.company_size,
                    context: wire.context,
                },
                limit: wire.limit,
            }
        }
    };
    Ok(message)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireErrorCode {
    InvalidRequest,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Recommendations {
        context: RecommendContext,
        count: usize,
        items: Vec<Recommendation>,
    },
    Error {
        code: WireErrorCode,
        message: String,
    },
}

impl ServerMessage {
    pub fn missing_context() -> Self {
        Self::Error {
            code: WireErrorCode::InvalidRequest,
            message: format!(
                "at least one of {} must be provided",
                CONTEXT_PARAMETERS.join(", ")
            ),
        }
    }

    pub fn internal() -> Self {
        Self::Error {
            code: WireErrorCode::Internal,
            message: "internal error".to_string(),
        }
    }
}
