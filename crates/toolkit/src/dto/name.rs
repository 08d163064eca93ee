use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::Result;
use crate::models::{NameFormat, ParsedName};

/// Request payload for formatting a name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FormatNameRequest {
    #[validate(length(max = 1024, message = "Full name must be at most 1024 characters"))]
    pub full_name: String,

    /// Format identifiers to render; all formats when omitted or empty
    #[serde(default)]
    pub formats: Vec<String>,
}

impl FormatNameRequest {
    pub fn requested_formats(&self) -> Result<Vec<NameFormat>> {
        self.formats.iter().map(|f| f.parse()).collect()
    }
}

/// The parts a name was split into
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NameParts {
    pub first: String,
    pub middle: Vec<String>,
    pub last: String,
}

impl From<&ParsedName> for NameParts {
    fn from(name: &ParsedName) -> Self {
        Self {
            first: name.first().to_string(),
            middle: name.middle().to_vec(),
            last: name.last().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NameStatistics {
    pub total_characters: usize,
    pub word_count: usize,
    pub format_count: usize,
    pub initial_count: usize,
}

/// Response with every requested rendering of a name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormatNameResponse {
    pub original: String,
    pub parts: NameParts,
    #[schema(value_type = Object)]
    pub formats: BTreeMap<NameFormat, String>,
    pub statistics: NameStatistics,
}

/// Identifier and label of a supported format
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormatInfo {
    pub format: NameFormat,
    pub label: String,
}

impl From<NameFormat> for FormatInfo {
    fn from(format: NameFormat) -> Self {
        Self {
            format,
            label: format.label().to_string(),
        }
    }
}
