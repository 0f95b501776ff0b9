const PLATFORM_MAP: &[(&str, &str)] = &[
    ("pc", "pc"),
    ("ps5", "playstation-5"),
    ("ps4", "playstation-4"),
    ("xbox-series-x", "xbox-series-x"),
    ("xbox-one", "xbox-one"),
    ("switch", "switch"),
];

/// Short platform code to the aggregator's path segment. Unknown codes pass
/// through lower-cased.
pub fn canonical_platform(code: &str) -> String {
    let lowered = code.trim().to_lowercase();
    PLATFORM_MAP
        .iter()
        .find(|(short, _)| *short == lowered)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lowered)
}

/// "xbox-series-x" -> "XBOX SERIES X"
pub fn display_platform(code: &str) -> String {
    code.trim().to_uppercase().replace('-', " ")
}

pub fn is_all(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case("all")
}

/// Whether a card's free-text platform label mentions the given platform code.
pub fn label_matches(label: &str, code: &str) -> bool {
    let normalized = label.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
    let canonical = canonical_platform(code);
    normalized.contains(&canonical) || normalized.contains(&code.trim().to_lowercase())
}
