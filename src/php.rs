//! PHP `date()` style rendering for `jiff` values.
//!
//! Civil values have no time zone and render their zone fields as UTC.
//! `B` (Swatch time) and `I` (daylight saving flag) are not supported and pass
//! through as literals, like any other unknown character.

use std::fmt::{self, Write};

use jiff::{
    Zoned,
    civil::{Date, DateTime, Time},
    fmt::strtime,
    tz::Offset,
};

use crate::{
    ESCAPE_CHARACTER, Formattable,
    consts::{MONTHS, MONTHS_ABBREV, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, WEEKDAYS, WEEKDAYS_ABBREV},
};

/// ISO 8601 date, as rendered by `c`
const ISO_8601: &str = r"Y-m-d\TH:i:sP";
/// RFC 2822 date, as rendered by `r`
const RFC_2822: &str = "D, d M Y H:i:s O";

/// Zone fields of the value being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Zone {
    name:           String,
    abbreviation:   String,
    offset_seconds: i32,
    unix_seconds:   i64,
}

impl Zone {
    fn utc(datetime: DateTime) -> Self {
        let unix_seconds = Offset::UTC
            .to_timestamp(datetime)
            .map_or(0, |timestamp| timestamp.as_second());
        Self {
            name: "UTC".to_owned(),
            abbreviation: "UTC".to_owned(),
            offset_seconds: 0,
            unix_seconds,
        }
    }

    /// Zones without an IANA name are named by their offset, `+02:00`.
    fn of(zoned: &Zoned) -> Self {
        let mut zone = Self {
            name:           String::new(),
            abbreviation:   String::new(),
            offset_seconds: zoned.offset().seconds(),
            unix_seconds:   zoned.timestamp().as_second(),
        };
        let mut offset = String::new();
        let _ = zone.write_offset(&mut offset, true);

        zone.name = zoned
            .time_zone()
            .iana_name()
            .map_or_else(|| offset.clone(), str::to_owned);
        zone.abbreviation = strtime::format("%Z", zoned).unwrap_or(offset);
        zone
    }

    /// `+0200` or, with `colon`, `+02:00`
    fn write_offset(&self, buf: &mut impl Write, colon: bool) -> fmt::Result {
        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let seconds = self.offset_seconds.abs();
        let hours = seconds / SECONDS_PER_HOUR;
        let minutes = seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        if colon {
            write!(buf, "{sign}{hours:02}:{minutes:02}")
        } else {
            write!(buf, "{sign}{hours:02}{minutes:02}")
        }
    }
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: i8) -> &'static str {
    let n = match day % 100 {
        10..=19 => 0,
        _ => day % 10,
    };
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn write_year(buf: &mut impl Write, year: i16) -> fmt::Result {
    if year < 0 {
        write!(buf, "-{:04}", year.unsigned_abs())
    } else {
        write!(buf, "{year:04}")
    }
}

fn render(datetime: DateTime, zone: &Zone, pattern: &str) -> String {
    let mut buf = String::with_capacity(pattern.len() * 2);
    // Writing into a `String` never fails.
    let _ = render_into(&mut buf, datetime, zone, pattern);
    buf
}

fn render_into(buf: &mut impl Write, datetime: DateTime, zone: &Zone, pattern: &str) -> fmt::Result {
    let mut characters = pattern.chars();
    while let Some(character) = characters.next() {
        if character == ESCAPE_CHARACTER {
            if let Some(literal) = characters.next() {
                buf.write_char(literal)?;
            }
            continue;
        }
        render_character(buf, datetime, zone, character)?;
    }
    Ok(())
}

fn render_character(buf: &mut impl Write, dt: DateTime, zone: &Zone, character: char) -> fmt::Result {
    let date = dt.date();
    let weekday = usize::try_from(dt.weekday().to_sunday_zero_offset()).unwrap_or_default();
    let month = usize::try_from(dt.month() - 1).unwrap_or_default();
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    match character {
        // Day
        'd' => write!(buf, "{:02}", dt.day()),
        'D' => buf.write_str(WEEKDAYS_ABBREV[weekday]),
        'j' => write!(buf, "{}", dt.day()),
        'l' => buf.write_str(WEEKDAYS[weekday]),
        'N' => write!(buf, "{}", dt.weekday().to_monday_one_offset()),
        'S' => buf.write_str(ordinal_suffix(dt.day())),
        'w' => write!(buf, "{weekday}"),
        'z' => write!(buf, "{}", date.day_of_year() - 1),
        // Week
        'W' => write!(buf, "{:02}", date.iso_week_date().week()),
        // Month
        'F' => buf.write_str(MONTHS[month]),
        'm' => write!(buf, "{:02}", dt.month()),
        'M' => buf.write_str(MONTHS_ABBREV[month]),
        'n' => write!(buf, "{}", dt.month()),
        't' => write!(buf, "{}", date.days_in_month()),
        // Year
        'L' => buf.write_char(if date.in_leap_year() { '1' } else { '0' }),
        'o' => write_year(buf, date.iso_week_date().year()),
        'Y' => write_year(buf, dt.year()),
        'y' => write!(buf, "{:02}", (dt.year() % 100).unsigned_abs()),
        // Time
        'a' => buf.write_str(if dt.hour() < 12 { "am" } else { "pm" }),
        'A' => buf.write_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        'g' => write!(buf, "{hour12}"),
        'G' => write!(buf, "{}", dt.hour()),
        'h' => write!(buf, "{hour12:02}"),
        'H' => write!(buf, "{:02}", dt.hour()),
        'i' => write!(buf, "{:02}", dt.minute()),
        's' => write!(buf, "{:02}", dt.second()),
        'u' => write!(buf, "{:06}", dt.subsec_nanosecond() / 1_000),
        'v' => write!(buf, "{:03}", dt.subsec_nanosecond() / 1_000_000),
        // Time zone
        'e' => buf.write_str(&zone.name),
        'T' => buf.write_str(&zone.abbreviation),
        'O' => zone.write_offset(buf, false),
        'P' => zone.write_offset(buf, true),
        'p' if zone.offset_seconds == 0 => buf.write_char('Z'),
        'p' => zone.write_offset(buf, true),
        'Z' => write!(buf, "{}", zone.offset_seconds),
        // Full date/time
        'c' => render_into(buf, dt, zone, ISO_8601),
        'r' => render_into(buf, dt, zone, RFC_2822),
        'U' => write!(buf, "{}", zone.unix_seconds),
        literal => buf.write_char(literal),
    }
}

impl Formattable for DateTime {
    fn format(&self, pattern: &str) -> String {
        render(*self, &Zone::utc(*self), pattern)
    }
}

impl Formattable for Date {
    fn format(&self, pattern: &str) -> String {
        self.to_datetime(Time::midnight()).format(pattern)
    }
}

impl Formattable for Zoned {
    fn format(&self, pattern: &str) -> String {
        render(self.datetime(), &Zone::of(self), pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, datetime};
    use jiff::tz::{self, TimeZone};

    #[test]
    fn test_day_characters() {
        let d = date(2018, 6, 25);
        assert_eq!(d.format("d D j l N S w z"), "25 Mon 25 Monday 1 th 1 175");
        assert_eq!(date(2018, 6, 3).format("d j"), "03 3");
        assert_eq!(date(2018, 6, 24).format("D N w"), "Sun 7 0");
    }

    #[test]
    fn test_ordinal_suffix() {
        struct TestCase {
            day:      i8,
            expected: &'static str,
        }

        let cases = [
            TestCase { day: 1, expected: "1st" },
            TestCase { day: 2, expected: "2nd" },
            TestCase { day: 3, expected: "3rd" },
            TestCase { day: 4, expected: "4th" },
            TestCase { day: 11, expected: "11th" },
            TestCase { day: 12, expected: "12th" },
            TestCase { day: 13, expected: "13th" },
            TestCase { day: 21, expected: "21st" },
            TestCase { day: 22, expected: "22nd" },
            TestCase { day: 23, expected: "23rd" },
            TestCase { day: 31, expected: "31st" },
        ];

        for case in &cases {
            assert_eq!(date(2018, 1, case.day).format("jS"), case.expected);
        }
    }

    #[test]
    fn test_month_and_year_characters() {
        let d = date(2018, 2, 7);
        assert_eq!(d.format("F m M n t"), "February 02 Feb 2 28");
        assert_eq!(d.format("L Y y o W"), "0 2018 18 2018 06");
        assert_eq!(date(2020, 2, 7).format("L t"), "1 29");
        assert_eq!(date(5, 1, 1).format("Y y"), "0005 05");
    }

    #[test]
    fn test_iso_week_year_differs_from_calendar_year() {
        // Monday 31 December 2018 falls in ISO week 1 of 2019.
        assert_eq!(date(2018, 12, 31).format("Y o W"), "2018 2019 01");
    }

    #[test]
    fn test_time_characters() {
        let dt = datetime(2018, 6, 23, 15, 4, 9);
        assert_eq!(dt.format("a A g G h H i s"), "pm PM 3 15 03 15 04 09");

        let midnight = datetime(2018, 6, 23, 0, 0, 0);
        assert_eq!(midnight.format("a g h H"), "am 12 12 00");

        let precise = date(2018, 6, 23).at(1, 2, 3, 456_789_000);
        assert_eq!(precise.format("u v"), "456789 456");
    }

    #[test]
    fn test_escapes() {
        let d = date(2018, 6, 25);
        assert_eq!(d.format(r"d\\M\\y"), r"25\Jun\18");
        assert_eq!(d.format(r"j<\s\up>S</\s\up>"), "25<sup>th</sup>");
        assert_eq!(d.format(r"\Y Y"), "Y 2018");
        assert_eq!(d.format("d\\"), "25");
    }

    #[test]
    fn test_unknown_characters_are_literal() {
        let d = date(2018, 6, 25);
        assert_eq!(d.format("d~M~Y!"), "25~Jun~2018!");
        assert_eq!(d.format("B I"), "B I");
        assert_eq!(d.format("Y – é"), "2018 – é");
        assert_eq!(d.format(""), "");
    }

    #[test]
    fn test_civil_values_render_as_utc() {
        let dt = datetime(2018, 6, 25, 12, 0, 0);
        assert_eq!(dt.format("e T O P p Z U"), "UTC UTC +0000 +00:00 Z 0 1529928000");
    }

    #[test]
    fn test_full_date_characters() {
        let dt = datetime(2018, 2, 7, 9, 30, 0);
        assert_eq!(dt.format("c"), "2018-02-07T09:30:00+00:00");
        assert_eq!(dt.format("r"), "Wed, 07 Feb 2018 09:30:00 +0000");
    }

    #[test]
    fn test_zoned_offsets() {
        let zoned = datetime(2018, 6, 25, 14, 0, 0)
            .to_zoned(TimeZone::fixed(tz::offset(2)))
            .expect("failed to attach fixed offset for zoned test");

        assert_eq!(zoned.format("H:i O P p Z"), "14:00 +0200 +02:00 +02:00 7200");
        assert_eq!(zoned.format("U"), "1529928000");
        assert_eq!(zoned.format("c"), "2018-06-25T14:00:00+02:00");
    }

    #[test]
    fn test_zoned_negative_offset() {
        let zoned = datetime(2018, 6, 25, 14, 0, 0)
            .to_zoned(TimeZone::fixed(tz::offset(-5)))
            .expect("failed to attach negative offset for zoned test");

        assert_eq!(zoned.format("O P Z"), "-0500 -05:00 -18000");
    }

    #[test]
    fn test_zoned_utc() {
        let zoned = datetime(2018, 6, 25, 14, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("failed to attach UTC for zoned test");

        assert_eq!(zoned.format("e p jS F Y"), "UTC Z 25th June 2018");
    }

    #[test]
    fn test_date_renders_midnight() {
        assert_eq!(date(2018, 6, 25).format("H:i:s"), "00:00:00");
    }
}
