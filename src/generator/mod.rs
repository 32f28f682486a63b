//! 个性化题目生成核心：按学号 + 题序派生种子，扰动变量、渲染题面、
//! 求值公式并组装选项。整个流程是一条线性管道，唯一的失败出口是
//! 正确答案公式求值失败。

pub mod formula;
pub mod options;
pub mod rng;
pub mod seed;
pub mod values;

use crate::types::{GenerationResult, QuestionTemplate};

/// Generate one student-specific question instance from a template.
///
/// Fully reproducible: the same `(roll_number, question_index, template)`
/// triple always yields the same result. Each call owns a private PRNG
/// seeded from its own inputs, so calls are independent and may run in
/// parallel.
///
/// Returns `None` only when the correct-answer formula fails to evaluate
/// (or is the `"null"` sentinel); the caller should skip the question.
pub fn generate(
    template: &QuestionTemplate,
    roll_number: &str,
    question_index: u32,
) -> Option<GenerationResult> {
    let key = seed::seed_key(roll_number, question_index);
    let mut rng = rng::SeededRng::new(seed::derive_seed(&key));

    let values = values::generate_values(&template.variables, &mut rng);
    let question = values::render_question(&template.question_template, &values);

    let Some(correct) = formula::evaluate(&template.correct_answer_formula, &values) else {
        tracing::debug!(
            formula = %template.correct_answer_formula,
            "Correct-answer formula yielded no value, skipping generation"
        );
        return None;
    };

    let options = options::assemble_options(
        correct,
        &template.distractor_formulas,
        &values,
        &mut rng,
    );

    Some(GenerationResult {
        question,
        values,
        correct_answer: correct.to_string(),
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variable;

    fn numeric(name: &str, value: f64) -> Variable {
        Variable {
            name: name.to_string(),
            value: Some(value),
            unit: "".to_string(),
        }
    }

    fn physics_template() -> QuestionTemplate {
        QuestionTemplate {
            question_template:
                "A force of {force} N acts on a mass of {mass} kg. Find the acceleration."
                    .to_string(),
            variables: vec![numeric("force", 50.0), numeric("mass", 5.0)],
            correct_answer_formula: "force / mass".to_string(),
            distractor_formulas: vec![
                "force * mass".to_string(),
                "force + mass".to_string(),
                "force - mass".to_string(),
            ],
            original_text: "A force of 50 N acts on a mass of 5 kg.".to_string(),
        }
    }

    #[test]
    fn generation_is_reproducible() {
        let template = physics_template();
        let first = generate(&template, "R001", 0).unwrap();
        let second = generate(&template, "R001", 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_students_get_different_seeds() {
        let template = physics_template();
        let a = generate(&template, "R001", 0).unwrap();
        let b = generate(&template, "R002", 0).unwrap();
        // Different seed keys; value collision across both variables is
        // possible in principle but not for these seeds.
        assert_ne!(a.values, b.values);
    }

    #[test]
    fn correct_answer_is_among_options() {
        let template = physics_template();
        for index in 0..20 {
            let result = generate(&template, "R042", index).unwrap();
            assert_eq!(
                result
                    .options
                    .iter()
                    .filter(|o| **o == result.correct_answer)
                    .count(),
                1,
                "index {index}"
            );
        }
    }

    #[test]
    fn question_text_contains_generated_values() {
        let template = physics_template();
        let result = generate(&template, "R001", 3).unwrap();
        assert!(result
            .question
            .contains(&result.values["force"].to_string()));
        assert!(result.question.contains(&result.values["mass"].to_string()));
        assert!(!result.question.contains('{'));
    }

    #[test]
    fn null_correct_formula_aborts_generation() {
        let mut template = physics_template();
        template.correct_answer_formula = "null".to_string();
        assert!(generate(&template, "R001", 0).is_none());

        template.correct_answer_formula = "".to_string();
        assert!(generate(&template, "R001", 0).is_none());
    }

    #[test]
    fn huge_variable_values_generate_without_panicking() {
        let template = QuestionTemplate {
            question_template: "How many grains in {n} heaps?".to_string(),
            variables: vec![numeric("n", 1e19)],
            correct_answer_formula: "n".to_string(),
            distractor_formulas: vec![],
            original_text: "".to_string(),
        };
        let result = generate(&template, "R001", 0).unwrap();
        assert!(result.values["n"] >= 5_000_000_000_000_000_000);
        assert!(result.options.contains(&result.correct_answer));
    }

    #[test]
    fn broken_distractor_formulas_do_not_abort() {
        let mut template = physics_template();
        template.distractor_formulas = vec![
            "force / nothing".to_string(),
            "((".to_string(),
            "null".to_string(),
        ];
        let result = generate(&template, "R001", 0).unwrap();
        // All distractor formulas failed; fallbacks fill the gap.
        assert_eq!(result.options.len(), 4);
    }
}
