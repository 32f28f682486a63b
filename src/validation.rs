//! 模板预检模块
//! 模板在审批入库前校验一次，避免把必然生成失败的模板下发给学生。

use std::collections::HashSet;

use thiserror::Error;

use crate::generator::formula;
use crate::types::QuestionTemplate;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("question text is empty")]
    EmptyQuestionText,
    #[error("variable at position {0} has an empty name")]
    EmptyVariableName(usize),
    #[error("duplicate variable name '{0}'")]
    DuplicateVariableName(String),
    #[error("numeric variable '{0}' has no {{{0}}} placeholder in the question text")]
    MissingPlaceholder(String),
    #[error("correct-answer formula is invalid: {0}")]
    InvalidCorrectFormula(#[source] formula::FormulaError),
    #[error("distractor formula {index} is invalid: {source}")]
    InvalidDistractorFormula {
        index: usize,
        #[source]
        source: formula::FormulaError,
    },
}

/// Validate a template before it is approved for test assembly.
///
/// A `"null"` correct-answer formula passes validation: it is how the AI
/// extraction marks a template it could not derive an answer for, and the
/// platform surfaces those to the teacher for manual repair.
pub fn validate_template(template: &QuestionTemplate) -> Result<(), TemplateError> {
    if template.question_template.trim().is_empty() {
        return Err(TemplateError::EmptyQuestionText);
    }

    let mut names: HashSet<&str> = HashSet::with_capacity(template.variables.len());
    for (index, variable) in template.variables.iter().enumerate() {
        if variable.name.is_empty() {
            return Err(TemplateError::EmptyVariableName(index));
        }
        if !names.insert(variable.name.as_str()) {
            return Err(TemplateError::DuplicateVariableName(variable.name.clone()));
        }
        let placeholder = format!("{{{}}}", variable.name);
        if variable.value.is_some() && !template.question_template.contains(&placeholder) {
            return Err(TemplateError::MissingPlaceholder(variable.name.clone()));
        }
    }

    if !formula::is_null_sentinel(&template.correct_answer_formula) {
        formula::check_syntax(&template.correct_answer_formula)
            .map_err(TemplateError::InvalidCorrectFormula)?;
    }

    for (index, distractor) in template.distractor_formulas.iter().enumerate() {
        if formula::is_null_sentinel(distractor) {
            continue;
        }
        formula::check_syntax(distractor)
            .map_err(|source| TemplateError::InvalidDistractorFormula { index, source })?;
    }

    Ok(())
}
