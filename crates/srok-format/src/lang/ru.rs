//! Russian unit names.
//!
//! Singular covers a count of exactly one, plural everything else. This
//! is the two-way split the table was written for; it does not model
//! the full set of Russian plural categories.

use super::Form;
use crate::unit::Unit;

/// Looks up the template for a (unit, form) pair.
///
/// The match is exhaustive over both enumerations, so an entry cannot
/// go missing at runtime.
pub(crate) const fn template(unit: Unit, form: Form) -> &'static str {
    match (unit, form) {
        (Unit::Years, Form::Plural) => "{} лет",
        (Unit::Years, Form::Singular) => "{} год",
        (Unit::Years, Form::Short) => "{}г",
        (Unit::Months, Form::Plural) => "{} месяцев",
        (Unit::Months, Form::Singular) => "{} месяц",
        (Unit::Months, Form::Short) => "{}мес",
        (Unit::Weeks, Form::Plural) => "{} недель",
        (Unit::Weeks, Form::Singular) => "{} неделя",
        (Unit::Weeks, Form::Short) => "{}нед",
        (Unit::Days, Form::Plural) => "{} дней",
        (Unit::Days, Form::Singular) => "{} день",
        (Unit::Days, Form::Short) => "{}д",
        (Unit::Hours, Form::Plural) => "{} часов",
        (Unit::Hours, Form::Singular) => "{} час",
        (Unit::Hours, Form::Short) => "{}ч",
        (Unit::Minutes, Form::Plural) => "{} минут",
        (Unit::Minutes, Form::Singular) => "{} минута",
        (Unit::Minutes, Form::Short) => "{}м",
        (Unit::Seconds, Form::Plural) => "{} секунд",
        (Unit::Seconds, Form::Singular) => "{} секунда",
        (Unit::Seconds, Form::Short) => "{}с",
    }
}
