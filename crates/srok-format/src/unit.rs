/// One granularity of time, with a fixed length in seconds used for
/// integer division when deciding which unit to report.
///
/// The lengths are calendar approximations (a year is 365.2425 days and
/// a month is one twelfth of that), not calendar-exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// The full unit ordering, largest to smallest.
pub const FULL_UNITS: [Unit; 7] = [
    Unit::Years,
    Unit::Months,
    Unit::Weeks,
    Unit::Days,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
];

/// Alternate ordering that never reports a unit larger than days.
pub const DAY_UNITS: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];

impl Unit {
    /// The length of this unit in whole seconds.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Years => 31_556_952, // 365.2425d
            Self::Months => 2_629_746, // a twelfth of a year
            Self::Weeks => 604_800,
            Self::Days => 86_400,
            Self::Hours => 3_600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }
}
