use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the user is interacting with the assistant.
///
/// Voice and hybrid are tags only at this layer — audio capture and
/// transcription happen entirely in the front-end that produces the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Text,
    Voice,
    Hybrid,
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Envelope wrapping one captured utterance on its way into the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Unique request ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Interaction mode the text was captured in.
    pub mode: InteractionMode,
    /// The raw sentence, exactly as typed or transcribed.
    pub raw_text: String,
    /// When the request entered the pipeline.
    pub submitted_at: DateTime<Utc>,
}

impl RequestEnvelope {
    pub fn new(mode: InteractionMode, raw_text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            mode,
            raw_text: raw_text.into(),
            submitted_at: Utc::now(),
        }
    }
}
