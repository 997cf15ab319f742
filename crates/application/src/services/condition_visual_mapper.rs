//! Condition visual mapper
//!
//! Pure lookups from a condition label to the icon glyph and the backdrop
//! gradient of a weather card. Matching is exact; there is no trimming or
//! case folding. Any label missing from the table resolves to the defaults,
//! so the lookups are total over all input text.

use std::collections::HashMap;
use std::sync::LazyLock;

use domain::VisualAttributes;

/// Glyph used for labels that are not in the table
pub const DEFAULT_ICON: &str = "🌤️";

/// Backdrop used for labels that are not in the table
pub const DEFAULT_BACKGROUND: &str = "from-blue-400 to-blue-600";

/// Known conditions as `(label, icon, background)`, in display order
const CONDITION_VISUALS: [(&str, &str, &str); 7] = [
    ("晴天", "☀️", "from-yellow-400 to-orange-500"),
    ("多云", "⛅", "from-gray-400 to-gray-600"),
    ("阴天", "☁️", "from-gray-500 to-gray-700"),
    ("小雨", "🌧️", "from-blue-400 to-blue-600"),
    ("大雨", "🌧️", "from-blue-600 to-blue-800"),
    ("雪", "❄️", "from-blue-200 to-white"),
    ("雾", "🌫️", "from-gray-300 to-gray-500"),
];

static ICON_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    CONDITION_VISUALS
        .iter()
        .map(|&(label, icon, _)| (label, icon))
        .collect()
});

static BACKGROUND_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    CONDITION_VISUALS
        .iter()
        .map(|&(label, _, background)| (label, background))
        .collect()
});

/// Icon glyph for a condition label
#[must_use]
pub fn icon_for(condition: &str) -> &'static str {
    ICON_TABLE.get(condition).copied().unwrap_or(DEFAULT_ICON)
}

/// Backdrop gradient for a condition label
#[must_use]
pub fn background_for(condition: &str) -> &'static str {
    BACKGROUND_TABLE
        .get(condition)
        .copied()
        .unwrap_or(DEFAULT_BACKGROUND)
}

/// Both derived attributes for a condition label
#[must_use]
pub fn visuals_for(condition: &str) -> VisualAttributes {
    VisualAttributes::new(icon_for(condition), background_for(condition))
}

/// Whether the label has its own table entry
#[must_use]
pub fn is_known_condition(condition: &str) -> bool {
    ICON_TABLE.contains_key(condition)
}

/// All table entries in display order
pub fn known_conditions() -> impl Iterator<Item = (&'static str, VisualAttributes)> {
    CONDITION_VISUALS
        .iter()
        .map(|&(label, icon, background)| (label, VisualAttributes::new(icon, background)))
}
