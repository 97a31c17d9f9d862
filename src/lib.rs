//! Display a range of dates with consolidated time parts.
//!
//! ```
//! use date_range_format::DateRange;
//! use jiff::civil::date;
//!
//! let range = DateRange::new(date(2018, 6, 18), date(2018, 6, 23));
//! assert_eq!(range.format("jS F Y"), "18th – 23rd June 2018");
//! ```
//!
//! Patterns use the PHP `date()` characters. Any type that can render such a
//! pattern can be put in a [`DateRange`] by implementing [`Formattable`];
//! implementations for `jiff` dates, datetimes and zoned datetimes are
//! included.

#[macro_use]
mod logging;

mod consts;
pub mod format;
mod php;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use range::{ConsolidatedFormats, DateRange, RangeError, RangeOptions};
pub use types::TimePart;

/// A date value that renders itself from a PHP `date()` style pattern.
///
/// Unknown pattern characters must pass through unchanged, and
/// [`ESCAPE_CHARACTER`] must make the character after it literal.
pub trait Formattable {
    fn format(&self, pattern: &str) -> String;
}

impl<T: Formattable + ?Sized> Formattable for &T {
    fn format(&self, pattern: &str) -> String {
        (**self).format(pattern)
    }
}
