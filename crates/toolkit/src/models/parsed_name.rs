/// A name split into first, middle and last parts.
///
/// Tokens are never altered, only regrouped: joining `first`, every `middle`
/// token and `last` with single spaces gives back the trimmed input whenever
/// that input was single-space separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    original: String,
    first: String,
    middle: Vec<String>,
    last: String,
}

impl ParsedName {
    /// Trims the input and groups its whitespace-separated tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit::ParsedName;
    ///
    /// let name = ParsedName::parse("  John Michael Smith ");
    ///
    /// assert_eq!(name.first(), "John");
    /// assert_eq!(name.middle(), ["Michael"]);
    /// assert_eq!(name.last(), "Smith");
    /// assert_eq!(name.original(), "John Michael Smith");
    /// ```
    pub fn parse(full_name: &str) -> Self {
        let original = full_name.trim().to_string();
        let tokens: Vec<&str> = original.split_whitespace().collect();

        let (first, middle, last): (&str, &[&str], &str) = match tokens.as_slice() {
            [] => ("", &[], ""),
            [only] => (*only, &[], ""),
            [first, middle @ .., last] => (*first, middle, *last),
        };

        Self {
            first: first.to_string(),
            middle: middle.iter().map(|token| token.to_string()).collect(),
            last: last.to_string(),
            original,
        }
    }

    /// The trimmed input, verbatim.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn middle(&self) -> &[String] {
        &self.middle
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// All non-empty parts in order.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.first.as_str())
            .chain(self.middle.iter().map(String::as_str))
            .chain(std::iter::once(self.last.as_str()))
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Rejoins the parts with single spaces.
    pub fn reconstruct(&self) -> String {
        self.tokens().join(" ")
    }
}
