//! Knowledge domain: people, their works, concepts and quotations

use super::entity::{insert_optional, require};
use crate::graph::{GraphResult, Properties};
use serde::{Deserialize, Serialize};

/// A historical or contemporary person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            era: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("name".into(), require("Person", "name", &self.name)?.into());
        insert_optional(&mut props, "role", self.role.as_deref());
        insert_optional(&mut props, "era", self.era.as_deref());
        Ok(props)
    }
}

/// A written or recorded work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Publication year; negative for BCE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl Work {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_name: None,
            year: None,
        }
    }

    pub fn with_author(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("title".into(), require("Work", "title", &self.title)?.into());
        insert_optional(&mut props, "author_name", self.author_name.as_deref());
        if let Some(year) = self.year {
            props.insert("year".into(), year.into());
        }
        Ok(props)
    }
}

/// An abstract idea discussed across works
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl Concept {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: None,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("name".into(), require("Concept", "name", &self.name)?.into());
        insert_optional(&mut props, "definition", self.definition.as_deref());
        Ok(props)
    }
}

/// A verbatim passage, optionally attributed to a speaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub(crate) fn fields(&self) -> GraphResult<Properties> {
        let mut props = Properties::new();
        props.insert("text".into(), require("Quote", "text", &self.text)?.into());
        insert_optional(&mut props, "speaker", self.speaker.as_deref());
        Ok(props)
    }
}
