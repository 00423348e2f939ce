//! Accent- and case-insensitive label handling
//!
//! Rate tables and form inputs mix Vietnamese display text ("Nữ", "Toàn diện")
//! with ASCII tags ("female", "toan_dien"). Everything is compared in a folded
//! form: lowercase, diacritics stripped, whitespace collapsed.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a label into its comparison form
///
/// "Nữ" -> "nu", "  Toàn   Diện " -> "toan dien", "Đồng" -> "dong"
pub fn normalize_label(label: &str) -> String {
    let folded: String = label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Loose label match: either folded label contains the other
///
/// Empty labels never match.
pub fn labels_overlap(a: &str, b: &str) -> bool {
    let a = normalize_label(a);
    let b = normalize_label(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Treat underscores and hyphens as spaces so tags and display text compare equal
pub fn normalize_tag(label: &str) -> String {
    normalize_label(&label.replace(['_', '-'], " "))
}
