//! Structure domain: documents and the ordered segments they are made of

use super::entity::{insert_optional, require};
use crate::graph::{GraphError, GraphResult, Properties};
use serde::{Deserialize, Serialize};

/// Role assigned to a segment when the ingestion side gives none
pub const DEFAULT_SEGMENT_ROLE: &str = "content";

fn default_role() -> String {
    DEFAULT_SEGMENT_ROLE.to_string()
}

/// Root of a structural graph: a text, recording or transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    /// e.g. "audio", "text", "video"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            media_type: None,
            uri: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("title".into(), require("Document", "title", &self.title)?.into());
        insert_optional(&mut props, "media_type", self.media_type.as_deref());
        insert_optional(&mut props, "uri", self.uri.as_deref());
        Ok(props)
    }
}

/// One ordered piece of a document (a heading, a paragraph, a transcript line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-based position within the document
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub text: String,
    /// e.g. "title", "content"
    #[serde(default = "default_role")]
    pub role: String,
    /// Offset in seconds for transcribed media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
}

impl Segment {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            role: default_role(),
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_timing(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("index".into(), (self.index as i64).into());
        props.insert("text".into(), require("Segment", "text", &self.text)?.into());
        props.insert("role".into(), require("Segment", "role", &self.role)?.into());

        for (field, value) in [("start_time", self.start_time), ("end_time", self.end_time)] {
            if let Some(t) = value.filter(|t| !t.is_finite()) {
                return Err(GraphError::validation(
                    "Segment",
                    format!("{field} must be a finite number, got {t}"),
                ));
            }
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(GraphError::validation(
                    "Segment",
                    format!("end_time {end} precedes start_time {start}"),
                ));
            }
        }
        if let Some(start) = self.start_time {
            props.insert("start_time".into(), start.into());
        }
        if let Some(end) = self.end_time {
            props.insert("end_time".into(), end.into());
        }
        Ok(props)
    }
}
