use crate::error::{Error, Result};
use crate::models::quiz::{FailedQuestion, Quiz, QuizResult, SkillLevel, NO_ANSWER};

pub struct GradingService;

impl GradingService {
    /// Scores `answers` against the quiz key. `answers[i]` is the option index the
    /// user picked for question `i`; `None` or a missing trailing entry means
    /// the question was left blank.
    pub fn score_quiz(quiz: &Quiz, answers: &[Option<usize>]) -> Result<QuizResult> {
        if answers.len() > quiz.questions.len() {
            return Err(Error::InvalidInput(format!(
                "Got {} answers for a quiz with {} questions",
                answers.len(),
                quiz.questions.len()
            )));
        }

        let mut score: u32 = 0;
        let mut failed_questions = Vec::new();

        for (idx, q) in quiz.questions.iter().enumerate() {
            let selected = answers.get(idx).copied().flatten();

            let user_answer = match selected {
                Some(choice) => q.options.get(choice).cloned().ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "Answer {} for question {} is not one of its {} options",
                        choice,
                        idx + 1,
                        q.options.len()
                    ))
                })?,
                None => NO_ANSWER.to_string(),
            };

            if selected == Some(q.correct_answer) {
                score += 1;
                continue;
            }

            let correct_answer = q.correct_option().map(str::to_string).ok_or_else(|| {
                Error::Internal(format!("Question {} has no option at its answer index", idx + 1))
            })?;

            failed_questions.push(FailedQuestion {
                question: q.question.clone(),
                user_answer,
                correct_answer,
            });
        }

        Ok(QuizResult {
            score,
            level: SkillLevel::from_score(score),
            failed_questions,
        })
    }
}
