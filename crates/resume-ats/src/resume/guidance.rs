//! Inline bullet-writing hints. Non-blocking: the score never depends on
//! these, they only annotate individual description fields in the form.

use super::scoring::ACTION_VERBS;

/// Detects a measurable-impact figure in bullet text: `$` followed by a
/// digit, a digit immediately followed by `%`, `x`, or `k`, or any run of two
/// or more digits.
pub fn has_measurable_impact(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }

        if i - start >= 2 {
            return true;
        }
        if start > 0 && chars[start - 1] == '$' {
            return true;
        }
        if matches!(chars.get(i), Some('%' | 'x' | 'k')) {
            return true;
        }
    }
    false
}

/// Blank text passes; otherwise the first word, lower-cased, must be one of
/// the known action verbs.
pub fn starts_with_action_verb(text: &str) -> bool {
    let Some(first_word) = text.split_whitespace().next() else {
        return true;
    };
    let lowered = first_word.to_lowercase();
    ACTION_VERBS.contains(&lowered.as_str())
}

/// Hints for one bullet. Empty input yields no hints, clean bullets yield an
/// empty list.
pub fn bullet_suggestions(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut hints = Vec::new();
    if !starts_with_action_verb(text) {
        hints.push("Start with a strong action verb.".to_string());
    }
    if !has_measurable_impact(text) {
        hints.push("Add measurable impact (numbers).".to_string());
    }
    hints
}
