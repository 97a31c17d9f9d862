use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_REMOVABLE_DELIMITERS, DEFAULT_SEPARATOR, Formattable,
    format::{
        next_character_is_same_or_smaller, remove_smaller_time_part_characters, remove_time_part_character,
        time_part_characters,
    },
    prelude::*,
};

/// Error type for date range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// No start date was supplied.
    #[error("Invalid date range: missing start date")]
    MissingStart,

    /// No end date was supplied.
    #[error("Invalid date range: missing end date")]
    MissingEnd,
}

/// Cosmetic settings for joining the two halves of a range.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOptions {
    /// Text between the start and end dates.
    pub separator:            String,
    /// Characters trimmed from both ends of a pattern after parts are removed.
    pub removable_delimiters: String,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            separator:            DEFAULT_SEPARATOR.to_owned(),
            removable_delimiters: DEFAULT_REMOVABLE_DELIMITERS.to_owned(),
        }
    }
}

/// The start and end patterns derived from a single end date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start} | {end}")]
pub struct ConsolidatedFormats {
    pub start: String,
    pub end:   String,
}

/// Two dates formatted as a range, without repeating the parts they share.
///
/// `format` only borrows the range, so it can run from several threads at once
/// when `D: Sync`. The setters need `&mut self` and so never overlap a
/// `format` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange<D> {
    start:   D,
    end:     D,
    options: RangeOptions,
}

impl<D> DateRange<D> {
    /// Creates a date range with the default separator and delimiters.
    ///
    /// The start date is not required to come before the end date.
    pub fn new(start: D, end: D) -> Self {
        Self::with_options(start, end, RangeOptions::default())
    }

    /// Creates a date range with the given options.
    pub const fn with_options(start: D, end: D, options: RangeOptions) -> Self {
        Self { start, end, options }
    }

    /// Creates a date range from dates that may be absent.
    ///
    /// # Errors
    /// Returns `RangeError::MissingStart` or `RangeError::MissingEnd` when
    /// either date is `None`, checking the start first.
    pub fn try_new(start: Option<D>, end: Option<D>) -> Result<Self, RangeError> {
        let start = start.ok_or(RangeError::MissingStart)?;
        let end = end.ok_or(RangeError::MissingEnd)?;
        Ok(Self::new(start, end))
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> &D {
        &self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> &D {
        &self.end
    }

    /// Returns the text placed between the start and end dates
    pub fn separator(&self) -> &str {
        &self.options.separator
    }

    /// Returns the characters trimmed from the ends of both patterns
    pub fn removable_delimiters(&self) -> &str {
        &self.options.removable_delimiters
    }

    /// Returns the separator and removable delimiters together
    pub const fn options(&self) -> &RangeOptions {
        &self.options
    }

    /// Changes the text placed between the start and end dates.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.options.separator = separator.into();
    }

    /// Changes the characters trimmed from the ends of both patterns.
    ///
    /// Avoids `d/M/Y` leaving a start pattern of `d//` once month and year are
    /// consolidated.
    pub fn set_removable_delimiters(&mut self, removable_delimiters: impl Into<String>) {
        self.options.removable_delimiters = removable_delimiters.into();
    }

    /// Replaces the separator and removable delimiters together.
    pub fn set_options(&mut self, options: RangeOptions) {
        self.options = options;
    }
}

impl<D: Formattable> DateRange<D> {
    /// Formats the date range.
    ///
    /// `format` is the pattern for the end date. Time parts are consolidated
    /// from the largest down, so dates sharing a year drop it from the start
    /// date:
    ///
    /// 14th May – 5th June 2018
    ///
    /// and dates sharing both year and month drop both:
    ///
    /// 14th – 15th May 2018
    ///
    /// The same goes for the day of the month, whatever order the pattern puts
    /// the parts in (`Jun 23rd – 28th 2018`). Hours, minutes and seconds (see
    /// [`TimePart::is_time`](crate::TimePart::is_time)) are consolidated by
    /// the same rules, but `:` is not a removable delimiter by default. When
    /// both dates render the same with `format`, a single date is returned.
    pub fn format(&self, format: &str) -> String {
        if self.formatted_dates_match(format) {
            return self.end.format(format);
        }

        let formats = self.consolidate(format);
        let mut output = self.start.format(&formats.start);
        output.push_str(&self.options.separator);
        output.push_str(&self.end.format(&formats.end));
        output
    }

    /// Derives the start and end patterns `format` would render with.
    ///
    /// Each time part shared by both dates, together with every larger part,
    /// is removed from one side. It goes from the end pattern when the next
    /// time part in the pattern is the same size or smaller, and from the
    /// start pattern otherwise.
    pub fn consolidate(&self, format: &str) -> ConsolidatedFormats {
        let mut end = format.trim().to_owned();
        let mut start = end.clone();
        let characters = time_part_characters(&start);

        for (index, &character) in characters.iter().enumerate() {
            if !self.time_part_value_is_consistent(&characters, character) {
                trace!("{character:?} differs between the dates, keeping it on both sides");
                continue;
            }
            trace!(
                "{} part {character:?} is shared",
                if crate::TimePart::of(character).is_some_and(crate::TimePart::is_time) { "time of day" } else { "date" }
            );
            if next_character_is_same_or_smaller(&characters, index) {
                trace!("removing {character:?} from the end format");
                end = remove_time_part_character(character, &end);
            } else {
                trace!("removing {character:?} from the start format");
                start = remove_time_part_character(character, &start);
            }
        }

        let formats = ConsolidatedFormats {
            start: trim_delimiters(&start, &self.options.removable_delimiters).to_owned(),
            end:   trim_delimiters(&end, &self.options.removable_delimiters).to_owned(),
        };
        debug!("consolidated {format:?} into {formats}");
        formats
    }

    fn formatted_dates_match(&self, format: &str) -> bool {
        self.start.format(format) == self.end.format(format)
    }

    /// Whether both dates agree on the time part of `character` and every
    /// larger time part in the pattern.
    ///
    /// Parts are compared through a space separated pattern so that adjacent
    /// numbers cannot run together (`jn` renders 11 January and 1 November
    /// both as `111`).
    fn time_part_value_is_consistent(&self, time_part_characters: &[char], character: char) -> bool {
        let kept = remove_smaller_time_part_characters(time_part_characters, character);
        let format = kept.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
        self.formatted_dates_match(&format)
    }
}

impl<D> TryFrom<(Option<D>, Option<D>)> for DateRange<D> {
    type Error = RangeError;

    fn try_from((start, end): (Option<D>, Option<D>)) -> Result<Self, Self::Error> {
        Self::try_new(start, end)
    }
}

/// Trims removable delimiters, then whitespace.
///
/// A delimiter followed by whitespace stays, so `j.  ` keeps its period.
fn trim_delimiters<'a>(format: &'a str, delimiters: &str) -> &'a str {
    let is_delimiter = |c: char| delimiters.contains(c);
    format.trim_matches(is_delimiter).trim_matches(is_delimiter).trim()
}
