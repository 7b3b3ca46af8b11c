//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hide a word behind one underscore per letter
#[must_use]
pub fn mask_word(word: &str) -> String {
    vec!["_"; word.len()].join(" ")
}

/// Space out the letters of a scramble for display
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Group words by length, shortest group first
///
/// Input order is kept within each group.
#[must_use]
pub fn group_by_length<'a, I>(words: I) -> Vec<(usize, Vec<&'a str>)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<(usize, Vec<&'a str>)> = Vec::new();
    for word in words {
        match groups.iter_mut().find(|(len, _)| *len == word.len()) {
            Some((_, group)) => group.push(word),
            None => groups.push((word.len(), vec![word])),
        }
    }
    groups.sort_by_key(|(len, _)| *len);
    groups
}
