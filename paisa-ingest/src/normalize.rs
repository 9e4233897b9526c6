//! Counterparty label cleanup.

/// Collapse whitespace runs to single spaces, trim, and strip leading
/// case-insensitive "VPA " tags left by bank formats that expose the raw
/// handle prefix. Idempotent, never fails.
pub fn normalize(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut rest = collapsed.as_str();
    while let Some(tag) = rest.get(..4) {
        if !tag.eq_ignore_ascii_case("vpa ") {
            break;
        }
        rest = &rest[4..];
    }
    rest.to_string()
}
