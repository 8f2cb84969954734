//! Translation data for rendering a (count, unit) pair.

use crate::unit::Unit;

mod ru;

/// Which template variant a part is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Plural,
    Singular,
    Short,
}

/// Renders a single (count, unit) part by substituting the count into
/// the matching template.
pub(crate) fn render_part(count: u64, unit: Unit, form: Form) -> String {
    ru::template(unit, form).replacen("{}", &count.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::FULL_UNITS;

    #[test]
    fn every_unit_and_form_resolves_to_one_placeholder_template() {
        for unit in FULL_UNITS {
            for form in [Form::Plural, Form::Singular, Form::Short] {
                let template = ru::template(unit, form);
                assert_eq!(
                    template.matches("{}").count(),
                    1,
                    "template for {unit:?}/{form:?}"
                );
            }
        }
    }

    #[test]
    fn render_substitutes_the_count() {
        assert_eq!(render_part(5, Unit::Minutes, Form::Plural), "5 минут");
        assert_eq!(render_part(1, Unit::Minutes, Form::Singular), "1 минута");
        assert_eq!(render_part(5, Unit::Minutes, Form::Short), "5м");
    }
}
