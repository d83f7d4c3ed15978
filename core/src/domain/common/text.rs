//! Text normalization applied to catalog input before it is persisted.

/// Turns `"samsung galaxy_s5"` or `"samsungGalaxy"` into `"Samsung Galaxy S5"` /
/// `"Samsung Galaxy"`.
pub fn headline(value: &str) -> String {
    let words: Vec<&str> = value
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .collect();

    let words: Vec<String> = if words.len() > 1 {
        words.into_iter().map(title).collect()
    } else {
        words
            .into_iter()
            .flat_map(split_camel_case)
            .map(|word| title(&word))
            .collect()
    };

    words.join(" ")
}

/// Trims the value and upper-cases its first letter. Blank input yields `None`.
pub fn sentence(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    Some(first.to_uppercase().chain(chars).collect())
}

/// First `max_chars` characters of `value`.
pub fn excerpt(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn title(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn split_camel_case(word: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for c in word.chars() {
        if c.is_uppercase() && previous_lower && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        previous_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}
