use core::fmt;
use std::time::Duration;

use typed_builder::TypedBuilder;

use crate::lang::{self, Form};
use crate::unit::{FULL_UNITS, Unit};

/// Formats a `Duration` into a human-readable phrase, showing only the
/// most significant time unit.
///
/// Examples, in the long-form preset:
/// - 125 seconds -> "2 минут"
/// - 60 seconds -> "1 минута"
/// - 0 duration -> "0 секунд"
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct DurationFormatter {
    /// Use the compact suffix notation instead of full words.
    #[builder(default = false)]
    concise: bool,

    /// Reserved bound on how many units deep the output may go. The
    /// selection below emits only the most significant unit, so this
    /// currently has no effect on output.
    #[builder(default = usize::MAX)]
    accuracy: usize,
}

impl DurationFormatter {
    /// Long-form preset: full words with singular/plural selection.
    pub const LONG: Self = Self {
        concise: false,
        accuracy: usize::MAX,
    };

    /// Concise preset: compact suffix notation, one template per unit.
    pub const CONCISE: Self = Self {
        concise: true,
        accuracy: usize::MAX,
    };

    /// Concise preset bounded to three units of precision.
    pub const CONCISE_LOW_ACCURACY: Self = Self {
        concise: true,
        accuracy: 3,
    };

    #[must_use]
    pub const fn is_concise(&self) -> bool {
        self.concise
    }

    #[must_use]
    pub const fn accuracy(&self) -> usize {
        self.accuracy
    }

    /// Formats `duration` using the full unit ordering, years down to
    /// seconds.
    #[must_use]
    pub fn format(&self, duration: Duration) -> String {
        self.format_with_units(&FULL_UNITS, duration)
    }

    /// Formats `duration`, reporting the most significant unit from
    /// `units` that divides into at least one.
    ///
    /// `units` must be ordered largest to smallest. A span shorter than
    /// the smallest listed unit formats as zero seconds.
    #[must_use]
    pub fn format_with_units(&self, units: &[Unit], duration: Duration) -> String {
        let secs = duration.as_secs();

        for &unit in units {
            let count = secs / unit.seconds();

            if count == 0 {
                continue;
            }

            return self.part(count, unit);
        }

        self.part(0, Unit::Seconds)
    }

    /// Formats a signed span.
    ///
    /// # Errors
    ///
    /// Returns [`NegativeDuration`] if the span is negative; negative
    /// spans are rejected outright rather than clamped.
    pub fn format_signed(&self, duration: time::Duration) -> Result<String, NegativeDuration> {
        let span: Duration = duration.try_into().map_err(|_| NegativeDuration)?;
        Ok(self.format(span))
    }

    fn part(&self, count: u64, unit: Unit) -> String {
        let form = if self.concise {
            Form::Short
        } else if count == 1 {
            Form::Singular
        } else {
            Form::Plural
        };
        lang::render_part(count, unit, form)
    }
}

/// A signed span turned out to be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeDuration;

impl fmt::Display for NegativeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duration is negative")
    }
}

impl std::error::Error for NegativeDuration {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::DAY_UNITS;
    use insta::assert_snapshot;

    const LONG: DurationFormatter = DurationFormatter::LONG;
    const CONCISE: DurationFormatter = DurationFormatter::CONCISE;

    #[test]
    fn zero_duration_is_formatted_explicitly() {
        assert_eq!(LONG.format(Duration::ZERO), "0 секунд");
        assert_eq!(CONCISE.format(Duration::ZERO), "0с");
    }

    #[test]
    fn sub_minute_spans_pick_singular_or_plural() {
        assert_eq!(LONG.format(Duration::from_secs(1)), "1 секунда");
        assert_eq!(LONG.format(Duration::from_secs(2)), "2 секунд");
        assert_eq!(LONG.format(Duration::from_secs(59)), "59 секунд");
        assert_eq!(CONCISE.format(Duration::from_secs(1)), "1с");
        assert_eq!(CONCISE.format(Duration::from_secs(59)), "59с");
    }

    #[test]
    fn minutes_take_precedence_at_the_threshold() {
        assert_eq!(LONG.format(Duration::from_secs(60)), "1 минута");
        assert_eq!(CONCISE.format(Duration::from_secs(60)), "1м");
    }

    #[test]
    fn largest_unit_wins_without_composition() {
        // 1 hour, 1 minute, 1 second: only the hour is reported.
        assert_eq!(LONG.format(Duration::from_secs(3661)), "1 час");
        assert_eq!(CONCISE.format(Duration::from_secs(3661)), "1ч");
    }

    #[test]
    fn concise_template_does_not_vary_by_count() {
        assert_eq!(CONCISE.format(Duration::from_secs(60)), "1м");
        assert_eq!(CONCISE.format(Duration::from_secs(300)), "5м");
    }

    #[test]
    fn day_capped_ordering_falls_through_to_days() {
        let three_weeks = Duration::from_secs(3 * 7 * 86_400);
        assert_eq!(LONG.format(three_weeks), "3 недель");
        assert_eq!(LONG.format_with_units(&DAY_UNITS, three_weeks), "21 дней");
        assert_eq!(CONCISE.format_with_units(&DAY_UNITS, three_weeks), "21д");
    }

    #[test]
    fn accuracy_has_no_observable_effect_on_output() {
        let span = Duration::from_secs(90_061);
        assert_eq!(DurationFormatter::CONCISE_LOW_ACCURACY.accuracy(), 3);
        assert_eq!(
            DurationFormatter::CONCISE_LOW_ACCURACY.format(span),
            CONCISE.format(span)
        );
    }

    #[test]
    fn builder_defaults_match_the_long_preset() {
        assert_eq!(DurationFormatter::builder().build(), LONG);
        assert_eq!(
            DurationFormatter::builder().concise(true).accuracy(3).build(),
            DurationFormatter::CONCISE_LOW_ACCURACY
        );
    }

    #[test]
    fn signed_spans_are_rejected_when_negative() {
        assert_eq!(
            LONG.format_signed(time::Duration::seconds(-5)),
            Err(NegativeDuration)
        );
        assert_eq!(
            LONG.format_signed(time::Duration::seconds(75)).as_deref(),
            Ok("1 минута")
        );
    }

    #[test]
    fn one_of_each_unit_in_the_long_form() {
        let lines: Vec<String> = FULL_UNITS
            .iter()
            .map(|unit| LONG.format(Duration::from_secs(unit.seconds())))
            .collect();
        assert_snapshot!(lines.join("\n"), @r"
        1 год
        1 месяц
        1 неделя
        1 день
        1 час
        1 минута
        1 секунда
        ");
    }

    #[test]
    fn one_of_each_unit_in_the_concise_form() {
        let lines: Vec<String> = FULL_UNITS
            .iter()
            .map(|unit| CONCISE.format(Duration::from_secs(unit.seconds())))
            .collect();
        assert_snapshot!(lines.join("\n"), @r"
        1г
        1мес
        1нед
        1д
        1ч
        1м
        1с
        ");
    }
}
