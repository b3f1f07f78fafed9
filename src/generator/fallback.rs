use super::prompts::InterviewContext;
use crate::profile::InterviewMode;
use rand::seq::SliceRandom;

/// Always the first question of an interview
pub const OPENING_QUESTION: &str = "Tell me something about yourself - your background, \
experience, and what interests you about this role.";

/// Feedback when the answer cannot be evaluated
pub const GENERIC_ACKNOWLEDGEMENT: &str =
    "Thank you for your response. Let's continue to the next question.";

pub const QUICK_FEEDBACK_UNAVAILABLE: &str =
    "AI feedback is currently unavailable. Please check your API configuration.";

pub const QUICK_FEEDBACK_FAILED: &str =
    "AI feedback could not be generated right now. Please try again in a moment.";

/// Questions for the single-question quick practice page
pub const QUICK_PRACTICE_QUESTIONS: [&str; 4] = [
    "Tell me about yourself and your professional background.",
    "Describe a challenging project you worked on and how you handled it.",
    "What are your greatest strengths and how do they apply to this role?",
    "What is your biggest weakness and how are you working to improve it?",
];

/// First entry of a comma separated list, or `default`
fn lead_topic<'a>(skills: Option<&'a str>, default: &'a str) -> &'a str {
    skills
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

/// Canned questions for a mode, in asking order
pub fn fallback_questions(ctx: &InterviewContext) -> Vec<String> {
    let skills = ctx.skills.as_deref();

    match ctx.mode {
        InterviewMode::Technical => vec![
            "Tell me something about yourself.".to_string(),
            format!(
                "Walk me through your experience with {}.",
                lead_topic(skills, "programming")
            ),
            "Describe a challenging technical problem you solved recently.".to_string(),
            "How do you approach debugging when something isn't working as expected?".to_string(),
            "What technologies are you most excited to learn or work with?".to_string(),
        ],
        InterviewMode::Hr => vec![
            "Tell me something about yourself.".to_string(),
            "Why are you interested in this position and our company?".to_string(),
            "Describe a time when you had to work under pressure. How did you handle it?"
                .to_string(),
            "What do you consider your greatest professional achievement?".to_string(),
            "How do you handle feedback and criticism?".to_string(),
        ],
        InterviewMode::Gd => vec![
            "Tell me something about yourself.".to_string(),
            format!(
                "What are your thoughts on current trends in {}?",
                lead_topic(skills, "technology")
            ),
            "How do you think remote work has changed the workplace?".to_string(),
            "What role should continuous learning play in a professional's career?".to_string(),
            "How can teams better collaborate in today's work environment?".to_string(),
        ],
    }
}

/// Question `number` (1-based) from the mode's list, wrapping past the end
pub fn fallback_question(number: u32, ctx: &InterviewContext) -> String {
    let mut questions = fallback_questions(ctx);
    let index = (number.saturating_sub(1) as usize) % questions.len();
    questions.swap_remove(index)
}

pub fn quick_practice_question() -> &'static str {
    QUICK_PRACTICE_QUESTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUICK_PRACTICE_QUESTIONS[0])
}
