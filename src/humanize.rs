//! Turn method identifiers into readable phrases.

/// Humanise a `snake_case` or `camelCase` identifier.
///
/// Words are split on underscores and on case boundaries, lower-cased, and
/// joined with single spaces. Only the first character of the phrase is
/// upper-cased. A run of capitals is kept as one word up to the capital that
/// starts the next lower-case word.
///
/// # Examples
///
/// ```
/// use annotated_steps::humanize;
///
/// assert_eq!(humanize("a_step_group"), "A step group");
/// assert_eq!(humanize("aStepGroup"), "A step group");
/// assert_eq!(humanize("parseURLQuery"), "Parse url query");
/// ```
#[must_use]
pub fn humanize(identifier: &str) -> String {
    let words: Vec<String> = identifier
        .split('_')
        .flat_map(split_camel_case)
        .map(|word| word.to_lowercase())
        .collect();
    capitalize_first(&words.join(" "))
}

fn split_camel_case(segment: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = segment.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;
    for (pos, &(idx, ch)) in chars.iter().enumerate().skip(1) {
        if !ch.is_uppercase() {
            continue;
        }
        let prev = chars[pos - 1].1;
        let next_is_lower = chars.get(pos + 1).is_some_and(|&(_, c)| c.is_lowercase());
        if !prev.is_uppercase() || next_is_lower {
            words.push(&segment[start..idx]);
            start = idx;
        }
    }
    words.push(&segment[start..]);
    words.retain(|word| !word.is_empty());
    words
}

/// Upper-case the first character of `text`, leaving the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lower-case the first character of `text`, leaving the rest untouched.
///
/// Text opening with an acronym (`URL`) or the pronoun `I` is returned as is.
pub(crate) fn uncapitalize_first(text: &str) -> String {
    let first_word = text.split_whitespace().next().unwrap_or_default();
    if keeps_capital(first_word) {
        return text.to_owned();
    }
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

fn keeps_capital(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some('I'), None | Some('\'')) => true,
        (Some(first), Some(second)) => first.is_uppercase() && second.is_uppercase(),
        _ => false,
    }
}
