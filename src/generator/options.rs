//! Distractor assembly and option shuffling.

use crate::constants::{DISTRACTOR_COUNT, FALLBACK_OFFSET_MAX, FALLBACK_OFFSET_MIN};
use crate::generator::formula;
use crate::generator::rng::SeededRng;
use crate::types::GeneratedValues;

/// Evaluate the distractor formulas, dropping failures and values equal to
/// the correct answer, deduplicating on first occurrence.
fn evaluate_distractors(
    formulas: &[String],
    values: &GeneratedValues,
    correct: f64,
) -> Vec<f64> {
    let mut distractors: Vec<f64> = Vec::with_capacity(DISTRACTOR_COUNT);
    for formula_text in formulas {
        let Some(candidate) = formula::evaluate(formula_text, values) else {
            continue;
        };
        if candidate == correct || distractors.contains(&candidate) {
            continue;
        }
        distractors.push(candidate);
    }
    distractors
}

/// Top up the distractor list with synthesized values when the template's
/// own formulas produced fewer than three usable ones.
///
/// The candidates run in a fixed order and the first two consume the shared
/// PRNG stream, so this must happen after formula evaluation and before the
/// shuffle. Candidates colliding with existing options are skipped; in the
/// degenerate case fewer than three distractors remain, which callers
/// tolerate.
fn synthesize_fallbacks(distractors: &mut Vec<f64>, correct: f64, rng: &mut SeededRng) {
    let push_unique = |distractors: &mut Vec<f64>, candidate: f64| {
        if candidate != correct && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    };

    if distractors.len() < DISTRACTOR_COUNT {
        let offset = rng.next_int(FALLBACK_OFFSET_MIN, FALLBACK_OFFSET_MAX);
        push_unique(distractors, correct + offset as f64);
    }
    if distractors.len() < DISTRACTOR_COUNT {
        let offset = rng.next_int(FALLBACK_OFFSET_MIN, FALLBACK_OFFSET_MAX);
        push_unique(distractors, (correct - offset as f64).abs());
    }
    if distractors.len() < DISTRACTOR_COUNT {
        push_unique(distractors, correct * 2.0);
    }
    if distractors.len() < DISTRACTOR_COUNT {
        push_unique(distractors, rounded_half(correct));
    }
}

/// `round(correct / 2)` with halves rounding toward positive infinity, so
/// a regenerated question matches one produced by an earlier deployment
/// even on a negative odd answer.
fn rounded_half(correct: f64) -> f64 {
    (correct / 2.0 + 0.5).floor()
}

/// In-place Fisher–Yates driven by the shared stream.
fn shuffle<T>(items: &mut [T], rng: &mut SeededRng) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_float() * (i + 1) as f64).floor() as usize;
        items.swap(i, j);
    }
}

/// Build the shuffled option list for a question: correct answer plus up to
/// three distractors, deduplicated, as decimal strings.
pub fn assemble_options(
    correct: f64,
    distractor_formulas: &[String],
    values: &GeneratedValues,
    rng: &mut SeededRng,
) -> Vec<String> {
    let mut distractors = evaluate_distractors(distractor_formulas, values, correct);
    synthesize_fallbacks(&mut distractors, correct, rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let mut options: Vec<f64> = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(correct);
    for candidate in distractors {
        // 干扰项已相互去重并与正确答案比对过，这里再兜底一次
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    shuffle(&mut options, rng);
    options.iter().map(|v| v.to_string()).collect()
}
