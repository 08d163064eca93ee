use toolkit::{
    NameFormat, NameFormatter,
    dto::name::{FormatInfo, FormatNameResponse, NameParts},
    services::name_formatting::SAMPLE_NAMES,
};

/// List every supported format in display order
pub fn list_formats() -> Vec<FormatInfo> {
    NameFormat::ALL.into_iter().map(FormatInfo::from).collect()
}

/// Quick-test sample names
pub fn list_samples() -> Vec<String> {
    SAMPLE_NAMES.iter().map(|name| name.to_string()).collect()
}

/// Parse a name and render the requested formats
pub fn format_name(full_name: &str, formats: &[NameFormat]) -> FormatNameResponse {
    let formatter = NameFormatter::new(full_name);
    let rendered = formatter.format_many(formats);

    FormatNameResponse {
        original: formatter.parsed().original().to_string(),
        parts: NameParts::from(formatter.parsed()),
        statistics: formatter.statistics(rendered.len()),
        formats: rendered,
    }
}
