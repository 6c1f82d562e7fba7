use crate::dto::flow_dto::{
    ExerciseRequest, QuizRequest, RecommendationsRequest, RefactorAnalysisRequest,
    RefactorChallengeRequest, SoftSkillAnalysisRequest, SoftSkillScenarioRequest,
};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    GenerateExercise,
    GenerateQuiz,
    GenerateRefactorChallenge,
    AnalyzeRefactorSolution,
    GenerateRecommendations,
    GenerateSoftSkillScenario,
    AnalyzeSoftSkillSolution,
}

impl Flow {
    pub fn name(&self) -> &'static str {
        match self {
            Flow::GenerateExercise => "generate_exercise",
            Flow::GenerateQuiz => "generate_quiz",
            Flow::GenerateRefactorChallenge => "generate_refactor_challenge",
            Flow::AnalyzeRefactorSolution => "analyze_refactor_solution",
            Flow::GenerateRecommendations => "generate_recommendations",
            Flow::GenerateSoftSkillScenario => "generate_soft_skill_scenario",
            Flow::AnalyzeSoftSkillSolution => "analyze_soft_skill_solution",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Flow::GenerateExercise | Flow::GenerateQuiz => INSTRUCTOR_SYSTEM_PROMPT,
            Flow::GenerateRefactorChallenge => REFACTOR_SYSTEM_PROMPT,
            Flow::AnalyzeRefactorSolution => REVIEWER_SYSTEM_PROMPT,
            Flow::GenerateRecommendations => TUTOR_SYSTEM_PROMPT,
            Flow::GenerateSoftSkillScenario => TRAINER_SYSTEM_PROMPT,
            Flow::AnalyzeSoftSkillSolution => COACH_SYSTEM_PROMPT,
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const JSON_ONLY: &str = "Respond only with a JSON object that matches the provided schema.";

const INSTRUCTOR_SYSTEM_PROMPT: &str = "You are a software development instructor. \
Respond only with a JSON object that matches the provided schema.";

const REFACTOR_SYSTEM_PROMPT: &str = "You are a senior software development instructor creating code refactoring challenges. \
Respond only with a JSON object that matches the provided schema.";

const REVIEWER_SYSTEM_PROMPT: &str = "You are an expert code reviewer. \
Respond only with a JSON object that matches the provided schema.";

const TUTOR_SYSTEM_PROMPT: &str = "You are an expert software development tutor. \
Respond only with a JSON object that matches the provided schema.";

const TRAINER_SYSTEM_PROMPT: &str = "You are an expert in corporate training and HR. \
Respond only with a JSON object that matches the provided schema.";

const COACH_SYSTEM_PROMPT: &str = "You are an expert corporate coach and HR specialist. \
Respond only with a JSON object that matches the provided schema.";

fn language_line(language: &str) -> String {
    format!(
        "The entire response must be in the language with this ISO 639-1 code: {}.",
        language
    )
}

pub fn exercise_prompt(req: &ExerciseRequest) -> String {
    format!(
        "Generate a coding exercise for the given technology and difficulty level.\n\
{}\n\n\
Technology: {}\n\
Difficulty: {}\n\n\
Put the full exercise statement in the \"exercise\" field.\n{}",
        language_line(&req.language),
        req.technology,
        req.difficulty,
        JSON_ONLY
    )
}

pub fn quiz_prompt(req: &QuizRequest) -> String {
    format!(
        "Generate a 15-question multiple-choice quiz for the given technology. \
The quiz should have a mix of beginner, intermediate, and advanced questions to accurately assess the user's skill level. \
Each question must have exactly 4 options and a \"correctAnswer\" holding the 0-based index of the correct option.\n\
{}\n\n\
Technology: {}\n",
        language_line(&req.language),
        req.technology
    )
}

pub fn refactor_challenge_prompt(req: &RefactorChallengeRequest) -> String {
    let mut prompt = format!(
        "The \"codeToRefactor\" field must be written for the language with this ISO 639-1 code: {}. \
The \"optimalSolution\" must be only code.\n\
Both the \"codeToRefactor\" and \"optimalSolution\" must be well-indented.\n\n\
Generate a code snippet that is a small method, but contains multiple anti-patterns and areas for improvement. \
The code should be functional but poorly written. Focus on things like:\n\
- Bad variable names\n\
- Magic numbers\n\
- Deeply nested logic\n\
- Long methods that could be broken down\n\
- Duplicate code\n\
- Not using language features correctly\n\
- Inefficient algorithms or loops\n\n",
        req.language
    );

    if is_csharp(&req.technology) {
        prompt.push_str(
            "Include poorly optimized Entity Framework queries where applicable \
(e.g., N+1 problems, missing AsNoTracking(), or inefficient filtering).\n\n",
        );
    }

    let _ = write!(
        prompt,
        "Also, provide the optimal, refactored version of the code that addresses all the issues.\n\n\
Technology: {}\n\
Difficulty: {}\n",
        req.technology, req.difficulty
    );
    prompt
}

fn is_csharp(technology: &str) -> bool {
    let t = technology.trim().to_ascii_lowercase();
    t == "c#" || t == "csharp"
}

pub fn refactor_analysis_prompt(req: &RefactorAnalysisRequest) -> String {
    format!(
        "Analyze the user's attempt to refactor a piece of code.\n\
{}\n\n\
Technology: {}\n\n\
Original Code:\n'''\n{}\n'''\n\n\
User's Refactored Solution:\n'''\n{}\n'''\n\n\
Optimal Solution for reference:\n'''\n{}\n'''\n\n\
Provide a constructive analysis of the user's solution. Compare it to the original code and the optimal solution.\n\n\
- Did the user correctly identify and address the main issues in the original code?\n\
- How does the user's solution compare to the optimal one?\n\
- What did they do well?\n\
- What could be improved?\n\
- Provide specific suggestions for improvement.\n\n\
Put the analysis in the \"analysis\" field, formatted in Markdown with headings, lists, and code blocks.\n",
        language_line(&req.language),
        req.technology,
        req.original_code,
        req.user_solution,
        req.optimal_solution
    )
}

pub fn recommendations_prompt(req: &RecommendationsRequest) -> String {
    let mut prompt = format!(
        "A user has just completed a quiz for {} and their skill level has been assessed as {}.\n",
        req.technology, req.level
    );

    if req.failed_questions.is_empty() {
        prompt.push_str("The user answered every question correctly.\n");
    } else {
        prompt.push_str("The user failed the following questions:\n");
        for failed in &req.failed_questions {
            let _ = write!(
                prompt,
                "- Question: {}\n  - User's Answer: {}\n  - Correct Answer: {}\n",
                failed.question, failed.user_answer, failed.correct_answer
            );
        }
    }

    let _ = write!(
        prompt,
        "\nBased on the questions they got wrong and their current skill level, recommend resources to help them improve.\n\n\
1. \"udemy\": Recommend 2 relevant course searches for Udemy. Use a concise search-query title and build the URL by \
encoding the title and appending it to 'https://www.udemy.com/courses/search/?q=' \
(e.g. \"Complete C# Masterclass\" -> \"https://www.udemy.com/courses/search/?q=Complete+C%23+Masterclass\"). \
The description explains specifically how it addresses the concepts they struggled with.\n\
2. \"youtube\": Recommend 3 video searches for YouTube. Build the URL by appending the encoded title to \
'https://www.youtube.com/results?search_query=' \
(e.g. \"C# LINQ Tutorial\" -> \"https://www.youtube.com/results?search_query=C%23+LINQ+Tutorial\"). \
The description explains what concepts the user will find.\n\
3. \"percipio\": Recommend 2 course searches for Percipio. Build the URL by appending the encoded title to \
'https://soprasteria.percipio.com/search?q='. The description explains its relevance.\n\n\
Every URL must be an absolute URL.\n\
{}\n",
        language_line(&req.language)
    );
    prompt
}

pub fn soft_skill_scenario_prompt(req: &SoftSkillScenarioRequest) -> String {
    format!(
        "Create a realistic and challenging workplace scenario to help an employee practice their soft skills.\n\
{}\n\n\
The scenario should focus on the following soft skill: {}.\n\n\
Generate a scenario that:\n\
- Is detailed and sets a clear scene (who is involved, what is the context).\n\
- Presents a problem or a difficult situation that does not have an obvious or easy answer.\n\
- Requires the user to think critically and apply the specified soft skill.\n\
- Ends with a clear question asking the user how they would respond or act.\n\n\
Put the scenario in the \"scenario\" field as a single markdown block.\n",
        language_line(&req.language),
        req.skill_type
    )
}

pub fn soft_skill_analysis_prompt(req: &SoftSkillAnalysisRequest) -> String {
    format!(
        "Provide constructive feedback on a user's response to a workplace scenario.\n\
{}\n\n\
Original Scenario:\n'''\n{}\n'''\n\n\
User's Response:\n'''\n{}\n'''\n\n\
Your analysis should:\n\
1. Start by acknowledging the strengths of the user's approach.\n\
2. Identify areas for improvement, including potential negative consequences or missed considerations.\n\
3. Provide an alternative, ideal way to handle the situation and explain why it is better, referencing principles of good communication, conflict resolution, or leadership.\n\
4. Conclude with a summary of key takeaways the user can apply in the future.\n\n\
Put the feedback in the \"analysis\" field, formatted in Markdown with headings, bold text, and bullet points.\n",
        language_line(&req.language),
        req.scenario,
        req.user_solution
    )
}
