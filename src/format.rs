//! Analysis and editing of date format patterns.
//!
//! A pattern is a string of PHP `date()` style characters. Characters that
//! render a [`TimePart`] are recognised through their alias sets; everything
//! else is literal. Escaping is look-back-one: a character is escaped when the
//! character right before it is [`ESCAPE_CHARACTER`], whatever precedes that.

use crate::{ESCAPE_CHARACTER, TimePart};

/// Whether a character renders a time part.
pub fn is_known_time_part_character(character: char) -> bool {
    TimePart::of(character).is_some()
}

/// Whether the character at `index` is escaped.
///
/// Only the immediately preceding character is inspected, so the `Y` in
/// `\\Y` counts as escaped even though the first backslash escapes the second.
pub fn is_escaped_character(characters: &[char], index: usize) -> bool {
    index >= 1 && characters.get(index - 1) == Some(&ESCAPE_CHARACTER)
}

/// Returns the unescaped time part characters of a pattern, deduplicated and
/// in order of first appearance.
pub fn time_part_characters(format: &str) -> Vec<char> {
    let characters: Vec<char> = format.chars().collect();
    let mut sanitized: Vec<char> = Vec::new();

    for (index, &character) in characters.iter().enumerate() {
        if is_known_time_part_character(character)
            && !is_escaped_character(&characters, index)
            && !sanitized.contains(&character)
        {
            sanitized.push(character);
        }
    }

    sanitized
}

/// Whether the character after `index` renders the same or a smaller time
/// part than the character at `index`.
///
/// Returns `false` when `index` is the last position.
pub fn next_character_is_same_or_smaller(time_part_characters: &[char], index: usize) -> bool {
    let current = time_part_characters.get(index).copied().and_then(TimePart::of);
    let next = time_part_characters.get(index + 1).copied().and_then(TimePart::of);

    match (current, next) {
        (Some(current), Some(next)) => current <= next,
        _ => false,
    }
}

/// Removes the characters that render a smaller time part than `character`.
///
/// Given `M` (month), day and time characters go, month and year characters
/// stay. An unknown `character` has nothing to rank against and leaves the
/// list untouched.
pub fn remove_smaller_time_part_characters(time_part_characters: &[char], character: char) -> Vec<char> {
    let Some(pivot) = TimePart::of(character) else {
        return time_part_characters.to_vec();
    };

    time_part_characters
        .iter()
        .copied()
        .filter(|&c| TimePart::of(c).is_none_or(|part| !part.is_smaller_than(pivot)))
        .collect()
}

/// Removes a time part character and all of its aliases from a pattern.
///
/// An unknown character leaves the pattern untouched.
pub fn remove_time_part_character(character: char, format: &str) -> String {
    TimePart::of(character).map_or_else(
        || format.to_owned(),
        |part| remove_time_part_aliases(part.aliases(), format),
    )
}

/// Removes every occurrence of the given characters from a pattern.
///
/// This is plain text removal: escaped occurrences go too.
pub fn remove_time_part_aliases(aliases: &[char], format: &str) -> String {
    format.chars().filter(|c| !aliases.contains(c)).collect()
}
