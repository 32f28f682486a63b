//! Test assembly: run the generator over an ordered template list for one
//! student, skipping questions whose correct answer cannot be computed.

use serde::Serialize;

use crate::config::AssemblyConfig;
use crate::generator;
use crate::types::{GenerationResult, QuestionTemplate};

/// One generated question at its position in the test. `question_index` is
/// the template's position, not the position among survivors: it feeds the
/// seed, so a skipped question must not renumber the ones after it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssembledQuestion {
    pub question_index: u32,
    #[serde(flatten)]
    pub result: GenerationResult,
}

/// Generate a personalized test for one student.
///
/// Failed generations are logged and skipped; the caller decides how to
/// present a shortened test. With `abort_on_failure` set, assembly stops at
/// the first failure instead (the platform uses this in its template
/// dry-run endpoint).
pub fn assemble_test(
    templates: &[QuestionTemplate],
    roll_number: &str,
    config: &AssemblyConfig,
) -> Vec<AssembledQuestion> {
    let mut assembled = Vec::with_capacity(templates.len());

    for (index, template) in templates.iter().enumerate() {
        let question_index = index as u32;
        match generator::generate(template, roll_number, question_index) {
            Some(result) => assembled.push(AssembledQuestion {
                question_index,
                result,
            }),
            None => {
                tracing::warn!(
                    roll_number,
                    question_index,
                    "Question generation failed, skipping"
                );
                if config.abort_on_failure {
                    break;
                }
            }
        }
    }

    assembled
}
