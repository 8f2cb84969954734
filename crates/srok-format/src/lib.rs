//! Human-readable duration phrases, in Russian.
//!
//! The formatter reports only the most significant nonzero unit of a
//! span, rendered through a fixed translation table: 5400 seconds is
//! "1 час" in long form and "1ч" in concise form.

mod lang;

pub mod formatter;
pub mod unit;

pub use formatter::{DurationFormatter, NegativeDuration};
pub use unit::{DAY_UNITS, FULL_UNITS, Unit};
