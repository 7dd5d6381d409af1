//! Input normalization and structural validation
//!
//! Rewrites every accepted hydrate separator glyph to [`HYDRATE_SEPARATOR`] and strips
//! whitespace (including zero-width and bidi-control characters). Validation then rejects
//! empty input and separators at the boundaries or next to each other.
//!
//! The parser runs validation again on every substring it slices out, because slicing
//! can expose a separator that was interior in the parent as leading or trailing.

use crate::error::{Error, Result};

/// Canonical hydrate separator (U+00B7 MIDDLE DOT)
pub const HYDRATE_SEPARATOR: char = '\u{00B7}';

/// Glyphs rewritten to [`HYDRATE_SEPARATOR`]
pub const SEPARATOR_ALIASES: &[char] = &[
    '.',        // legacy ASCII period
    '\u{0387}', // GREEK ANO TELEIA
    '\u{2022}', // BULLET
    '\u{2027}', // HYPHENATION POINT
    '\u{2219}', // BULLET OPERATOR
    '\u{22C5}', // DOT OPERATOR
    '\u{30FB}', // KATAKANA MIDDLE DOT
    '\u{FF65}', // HALFWIDTH KATAKANA MIDDLE DOT
];

/// Check whether `c` is the canonical separator or one of its aliases
pub fn is_separator(c: char) -> bool {
    c == HYDRATE_SEPARATOR || SEPARATOR_ALIASES.contains(&c)
}

/// Whitespace plus the invisible formatting characters `char::is_whitespace` misses
fn is_ignorable(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{2069}'
                | '\u{FEFF}'
        )
}

/// Unify separators and strip whitespace. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !is_ignorable(*c))
        .map(|c| if is_separator(c) { HYDRATE_SEPARATOR } else { c })
        .collect()
}

/// Normalize `raw`, then reject structurally invalid separator placement.
pub fn normalize_and_validate(raw: &str) -> Result<String> {
    let formula = normalize(raw);
    validate_structure(&formula)?;
    Ok(formula)
}

/// Structural checks on an already normalized formula.
pub fn validate_structure(formula: &str) -> Result<()> {
    let (Some(first), Some(last)) = (formula.chars().next(), formula.chars().next_back()) else {
        return Err(Error::InvalidFormula);
    };

    if is_separator(first) {
        return Err(Error::LeadingSeparator);
    }
    if is_separator(last) {
        return Err(Error::TrailingSeparator);
    }

    let mut previous_was_separator = false;
    for c in formula.chars() {
        let separator = is_separator(c);
        if separator && previous_was_separator {
            return Err(Error::ConsecutiveSeparators);
        }
        previous_was_separator = separator;
    }

    Ok(())
}
