use serde::{Deserialize, Serialize};
use validator::Validate;

pub const QUIZ_QUESTION_COUNT: usize = 15;
pub const QUIZ_OPTION_COUNT: usize = 4;

/// Recorded as the user's answer when a question was left blank.
pub const NO_ANSWER: &str = "no answer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(equal = 15), nested)]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    #[validate(range(min = 0, max = 3))]
    pub correct_answer: usize,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FailedQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    pub user_answer: String,
    #[validate(length(min = 1))]
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn from_score(score: u32) -> Self {
        if score > 10 {
            SkillLevel::Advanced
        } else if score > 5 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one submission. Never sent to the model as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: u32,
    pub level: SkillLevel,
    pub failed_questions: Vec<FailedQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(SkillLevel::from_score(0), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_score(5), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_score(6), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_score(10), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from_score(11), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_score(12), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_score(15), SkillLevel::Advanced);
    }

    #[test]
    fn quiz_question_uses_camel_case_wire_names() {
        let raw = serde_json::json!({
            "question": "What does `var` do in C#?",
            "options": ["a", "b", "c", "d"],
            "correctAnswer": 2
        });
        let q: QuizQuestion = serde_json::from_value(raw).unwrap();
        assert_eq!(q.correct_option(), Some("c"));
        assert!(q.validate().is_ok());
    }

    #[test]
    fn question_with_three_options_is_rejected() {
        let q = QuizQuestion {
            question: "Q".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: 0,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn correct_answer_out_of_range_is_rejected() {
        let q = QuizQuestion {
            question: "Q".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: 4,
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn quiz_needs_exactly_fifteen_questions() {
        let question = QuizQuestion {
            question: "Q".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: 1,
        };
        let mut quiz = Quiz {
            title: "C# basics".into(),
            questions: vec![question; QUIZ_QUESTION_COUNT],
        };
        assert!(quiz.validate().is_ok());

        quiz.questions.pop();
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn nested_question_errors_fail_the_quiz() {
        let good = QuizQuestion {
            question: "Q".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: 1,
        };
        let mut questions = vec![good; QUIZ_QUESTION_COUNT];
        questions[7].options.truncate(2);
        let quiz = Quiz {
            title: "C# basics".into(),
            questions,
        };
        assert!(quiz.validate().is_err());
    }

    #[test]
    fn level_serializes_capitalized() {
        assert_eq!(
            serde_json::to_value(SkillLevel::Intermediate).unwrap(),
            serde_json::json!("Intermediate")
        );
    }
}
