use std::collections::BTreeMap;

use crate::dto::name::NameStatistics;
use crate::models::{NameFormat, ParsedName};

/// Quick-test names offered by the name tool.
pub const SAMPLE_NAMES: [&str; 6] = [
    "John Doe",
    "Mary Jane Smith",
    "Alexander Hamilton",
    "Elizabeth Mary Johnson Brown",
    "Madonna",
    "Jean-Claude Van Damme",
];

/// Renders a [`ParsedName`] in every supported [`NameFormat`].
///
/// Every method is total: empty parts contribute nothing to the output, so
/// an empty input renders as an empty string in every format.
#[derive(Debug, Clone)]
pub struct NameFormatter {
    name: ParsedName,
}

impl NameFormatter {
    pub fn new(full_name: &str) -> Self {
        Self {
            name: ParsedName::parse(full_name),
        }
    }

    pub fn parsed(&self) -> &ParsedName {
        &self.name
    }

    pub fn format(&self, format: NameFormat) -> String {
        match format {
            NameFormat::Original => self.name.original().to_string(),
            NameFormat::FirstLast => self.first_last(),
            NameFormat::LastFirst => self.last_first(),
            NameFormat::LastFirstMiddle => self.last_first_middle(),
            NameFormat::FirstMiddleLast => self.first_middle_last(),
            NameFormat::InitialsOnly => self.initials_only(),
            NameFormat::FirstInitialLast => self.first_initial_last(),
            NameFormat::FirstMiddleInitialLast => self.first_middle_initial_last(),
            NameFormat::Uppercase => self.uppercase(),
            NameFormat::Lowercase => self.lowercase(),
            NameFormat::TitleCase => self.title_case(),
            NameFormat::Formal => self.formal(),
        }
    }

    /// Renders the requested formats, or all of them when none are requested.
    pub fn format_many(&self, formats: &[NameFormat]) -> BTreeMap<NameFormat, String> {
        let requested: &[NameFormat] = if formats.is_empty() {
            &NameFormat::ALL
        } else {
            formats
        };

        requested
            .iter()
            .map(|&format| (format, self.format(format)))
            .collect()
    }

    pub fn all_formats(&self) -> BTreeMap<NameFormat, String> {
        self.format_many(&NameFormat::ALL)
    }

    pub fn first_last(&self) -> String {
        if self.name.last().is_empty() {
            return self.name.first().to_string();
        }
        format!("{} {}", self.name.first(), self.name.last())
    }

    pub fn last_first(&self) -> String {
        if self.name.last().is_empty() {
            return self.name.first().to_string();
        }
        format!("{}, {}", self.name.last(), self.name.first())
    }

    pub fn last_first_middle(&self) -> String {
        let mut result = self.last_first();
        if !self.name.middle().is_empty() {
            result.push(' ');
            result.push_str(&self.name.middle().join(" "));
        }
        result
    }

    pub fn first_middle_last(&self) -> String {
        self.name.original().to_string()
    }

    pub fn initials_only(&self) -> String {
        let initials: Vec<String> = self.name.tokens().into_iter().map(initial).collect();
        if initials.is_empty() {
            return String::new();
        }
        format!("{}.", initials.join("."))
    }

    pub fn first_initial_last(&self) -> String {
        let (first, last) = (self.name.first(), self.name.last());
        if first.is_empty() {
            return last.to_string();
        }
        if last.is_empty() {
            return format!("{}.", initial(first));
        }
        format!("{}. {}", initial(first), last)
    }

    pub fn first_middle_initial_last(&self) -> String {
        let middle = self.middle_initials();
        [self.name.first(), middle.as_str(), self.name.last()]
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn uppercase(&self) -> String {
        self.name.original().to_uppercase()
    }

    pub fn lowercase(&self) -> String {
        self.name.original().to_lowercase()
    }

    pub fn title_case(&self) -> String {
        title_case(self.name.original())
    }

    pub fn formal(&self) -> String {
        let mut result = self.last_first();
        if self.name.last().is_empty() {
            return result;
        }

        let middle = self.middle_initials();
        if !middle.is_empty() {
            result.push(' ');
            result.push_str(&middle);
        }
        result
    }

    /// `"M. J."` style initials for the middle tokens.
    fn middle_initials(&self) -> String {
        self.name
            .middle()
            .iter()
            .map(|token| format!("{}.", initial(token)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn statistics(&self, format_count: usize) -> NameStatistics {
        NameStatistics {
            total_characters: self.name.original().chars().count(),
            word_count: self.name.tokens().len(),
            format_count,
            initial_count: self.initials_only().chars().filter(|&c| c != '.').count(),
        }
    }
}

/// Upper-cased first character of a token, as-is for non-letters.
fn initial(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Title-cases a cased character that follows an uncased one and
/// lower-cases every other cased character.
fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_cased = false;

    for c in input.chars() {
        let cased = is_cased(c);
        if cased && !previous_cased {
            push_titlecase(&mut result, c);
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

/// Upper, lower and titlecase letters (`ǅ` has neither case flag set).
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || !c.to_lowercase().eq(c.to_uppercase())
}

/// Latin digraphs map to their single-character titlecase form; every other
/// letter is upper-cased.
fn push_titlecase(result: &mut String, c: char) {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => result.push('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => result.push('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => result.push('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => result.push('ǲ'),
        _ => result.extend(c.to_uppercase()),
    }
}
