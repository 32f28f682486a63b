use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A template variable. `value` is `None` for non-numeric variables (e.g. a
/// unit name extracted from the source text); those are skipped during
/// perturbation and their placeholders survive in the rendered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: String,
}

/// An approved question template as persisted by the platform. Read-only to
/// the generation core. Variable order is significant: it fixes the PRNG
/// draw sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTemplate {
    /// Question text containing `{name}` placeholders.
    pub question_template: String,
    pub variables: Vec<Variable>,
    /// Arithmetic expression over variable names, or the `"null"` sentinel.
    pub correct_answer_formula: String,
    #[serde(default)]
    pub distractor_formulas: Vec<String>,
    /// Source text the template was mined from, kept for diagnostics.
    #[serde(default)]
    pub original_text: String,
}

/// Per-generation variable values. BTreeMap keeps serialization stable so a
/// stored result is byte-identical across regenerations.
pub type GeneratedValues = BTreeMap<String, i64>;

/// One personalized question instance. The caller persists this alongside
/// the student-answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub question: String,
    pub values: GeneratedValues,
    pub correct_answer: String,
    pub options: Vec<String>,
}
