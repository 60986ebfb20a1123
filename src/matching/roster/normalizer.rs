use std::collections::HashSet;

/// Splits a semicolon-separated cell into trimmed tags, dropping empties and
/// duplicates. First occurrence wins; insertion order is kept.
pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for part in raw.split(';') {
        let tag = part.trim();
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag.to_string()) {
            tags.push(tag.to_string());
        }
    }

    tags
}

/// Splits a semicolon-separated cell into trimmed words, keeping order and
/// repeats. Used for personality words, which are an ordered sequence.
pub(crate) fn split_words(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps an onboarding timezone name to an offset in hours from UTC.
/// Unrecognized names (including plain "UTC") map to 0.
pub(crate) fn timezone_offset_hours(timezone: &str) -> i32 {
    match timezone.trim() {
        "America/Los_Angeles" => -8,
        "America/Denver" => -7,
        "America/Chicago" => -6,
        "America/New_York" => -5,
        _ => 0,
    }
}

/// Keeps an offset inside the valid UTC offset range.
pub(crate) fn clamp_offset(offset: i32) -> i32 {
    offset.clamp(-12, 14)
}
