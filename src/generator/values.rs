//! Per-variable value perturbation and placeholder substitution.

use crate::constants::{VALUE_FLOOR, VALUE_LOWER_FACTOR, VALUE_UPPER_FACTOR};
use crate::generator::rng::SeededRng;
use crate::types::{GeneratedValues, Variable};

/// Inclusive perturbation range for an original value:
/// `[max(1, floor(0.5v)), ceil(1.5v)]`.
pub fn perturbation_range(original: f64) -> (i64, i64) {
    let min = ((original * VALUE_LOWER_FACTOR).floor() as i64).max(VALUE_FLOOR);
    let max = (original * VALUE_UPPER_FACTOR).ceil() as i64;
    (min, max)
}

/// Draw a fresh integer for every numeric variable, in template order.
///
/// Ordering matters: each numeric variable consumes exactly one draw from
/// the stream, so reordering variables changes every downstream value.
/// Non-numeric variables consume nothing and produce nothing.
pub fn generate_values(variables: &[Variable], rng: &mut SeededRng) -> GeneratedValues {
    let mut values = GeneratedValues::new();
    for variable in variables {
        let Some(original) = variable.value else {
            continue;
        };
        let (min, max) = perturbation_range(original);
        // max saturates at i64::MAX for huge originals; the inclusive
        // upper bound must not wrap when widened to exclusive.
        values.insert(
            variable.name.clone(),
            rng.next_int(min, max.saturating_add(1)),
        );
    }
    values
}

/// Replace every `{name}` placeholder with the generated integer's decimal
/// form. Placeholders of skipped (non-numeric) variables are left in place;
/// that is accepted behavior, not an error.
pub fn render_question(template_text: &str, values: &GeneratedValues) -> String {
    let mut question = template_text.to_string();
    for (name, value) in values {
        question = question.replace(&format!("{{{name}}}"), &value.to_string());
    }
    question
}
