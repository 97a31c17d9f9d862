/// Character that makes the following pattern character a literal
pub const ESCAPE_CHARACTER: char = '\\';

/// Default text placed between the start and end dates (en dash with spaces)
pub const DEFAULT_SEPARATOR: &str = " – ";

/// Default delimiters trimmed from the ends of a pattern once parts are removed
pub const DEFAULT_REMOVABLE_DELIMITERS: &str = "/-.";

/// Year: ISO week-numbering year, four digit year, two digit year
pub const YEAR_CHARACTERS: &[char] = &['o', 'Y', 'y'];
/// Month: full name, zero padded number, short name, number
pub const MONTH_CHARACTERS: &[char] = &['F', 'm', 'M', 'n'];
/// Day of the month: zero padded, not padded
pub const DAY_CHARACTERS: &[char] = &['d', 'j'];
/// Hour: 12 hour, 24 hour, 12 hour padded, 24 hour padded
pub const HOUR_CHARACTERS: &[char] = &['g', 'G', 'h', 'H'];
/// Minutes, zero padded
pub const MINUTE_CHARACTERS: &[char] = &['i'];
/// Seconds, zero padded
pub const SECOND_CHARACTERS: &[char] = &['s'];

/// Every alias set, ordered from the largest time part to the smallest.
pub const TIME_PART_CHARACTERS: [&[char]; 6] = [
    YEAR_CHARACTERS,
    MONTH_CHARACTERS,
    DAY_CHARACTERS,
    HOUR_CHARACTERS,
    MINUTE_CHARACTERS,
    SECOND_CHARACTERS,
];

pub(crate) const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const WEEKDAYS_ABBREV: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const MONTHS_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seconds per hour, used to split a UTC offset into hours and minutes
pub(crate) const SECONDS_PER_HOUR: i32 = 3600;
/// Seconds per minute
pub(crate) const SECONDS_PER_MINUTE: i32 = 60;
