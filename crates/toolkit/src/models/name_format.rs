use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ToolkitError;

/// Display styles a parsed name can be rendered in.
///
/// Variants are declared in canonical display order, so `Ord` (and therefore
/// any `BTreeMap` keyed by format) follows that order too.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NameFormat {
    Original,
    FirstLast,
    LastFirst,
    LastFirstMiddle,
    FirstMiddleLast,
    InitialsOnly,
    FirstInitialLast,
    FirstMiddleInitialLast,
    Uppercase,
    Lowercase,
    TitleCase,
    Formal,
}

impl NameFormat {
    pub const ALL: [NameFormat; 12] = [
        Self::Original,
        Self::FirstLast,
        Self::LastFirst,
        Self::LastFirstMiddle,
        Self::FirstMiddleLast,
        Self::InitialsOnly,
        Self::FirstInitialLast,
        Self::FirstMiddleInitialLast,
        Self::Uppercase,
        Self::Lowercase,
        Self::TitleCase,
        Self::Formal,
    ];

    /// Stable identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::FirstLast => "first_last",
            Self::LastFirst => "last_first",
            Self::LastFirstMiddle => "last_first_middle",
            Self::FirstMiddleLast => "first_middle_last",
            Self::InitialsOnly => "initials_only",
            Self::FirstInitialLast => "first_initial_last",
            Self::FirstMiddleInitialLast => "first_middle_initial_last",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::TitleCase => "title_case",
            Self::Formal => "formal",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::FirstLast => "First Last",
            Self::LastFirst => "Last, First",
            Self::LastFirstMiddle => "Last, First Middle",
            Self::FirstMiddleLast => "First Middle Last",
            Self::InitialsOnly => "Initials Only",
            Self::FirstInitialLast => "First Initial Last",
            Self::FirstMiddleInitialLast => "First Middle Initial Last",
            Self::Uppercase => "Uppercase",
            Self::Lowercase => "Lowercase",
            Self::TitleCase => "Title Case",
            Self::Formal => "Formal",
        }
    }

    fn parse_str(s: &str) -> Result<Self, ToolkitError> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| {
                ToolkitError::UnknownFormat(format!(
                    "'{}'. Available: {}",
                    s,
                    Self::ALL
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl TryFrom<&str> for NameFormat {
    type Error = ToolkitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_str(value)
    }
}

impl std::str::FromStr for NameFormat {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for NameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
