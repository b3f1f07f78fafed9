use crate::profile::{Difficulty, InterviewConfiguration, InterviewMode};
use serde::Serialize;
use serde_json::{Map, Value};

const DEFAULT_POSITION: &str = "Software Developer";
const DEFAULT_SKILLS: &str = "General skills";

/// What the generator knows about the candidate and the interview
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InterviewContext {
    pub position: Option<String>,
    pub skills: Option<String>,
    pub difficulty: Difficulty,
    pub mode: InterviewMode,
    pub experience: Option<String>,
    pub about_you: Option<String>,
}

fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl InterviewContext {
    /// Read the known keys from a client-supplied context object; unknown keys are ignored
    pub fn from_client(map: &Map<String, Value>) -> Self {
        Self {
            position: text_field(map, "position"),
            skills: text_field(map, "skills"),
            difficulty: text_field(map, "difficulty")
                .and_then(|d| Difficulty::parse(&d))
                .unwrap_or_default(),
            mode: text_field(map, "mode")
                .and_then(|m| InterviewMode::parse(&m))
                .unwrap_or_default(),
            experience: text_field(map, "experience"),
            about_you: text_field(map, "about_you"),
        }
    }

    /// Stored configuration wins over whatever the client sent
    pub fn with_configuration(self, cfg: &InterviewConfiguration) -> Self {
        Self {
            position: Some(cfg.role.clone().unwrap_or_else(|| DEFAULT_POSITION.to_string())),
            skills: Some(if cfg.skills.is_empty() {
                DEFAULT_SKILLS.to_string()
            } else {
                cfg.skills.clone()
            }),
            difficulty: cfg.difficulty,
            mode: cfg.mode.unwrap_or_default(),
            experience: cfg.experience.clone(),
            about_you: cfg.about_you.clone(),
        }
    }

    /// Context used when grading an answer: role, skills, difficulty and mode only
    pub fn for_evaluation(cfg: &InterviewConfiguration) -> Self {
        Self {
            experience: None,
            about_you: None,
            ..Self::default().with_configuration(cfg)
        }
    }

    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or(DEFAULT_POSITION)
    }

    pub fn skills(&self) -> &str {
        self.skills.as_deref().unwrap_or(DEFAULT_SKILLS)
    }
}

pub fn question_prompt(number: u32, ctx: &InterviewContext, previous_answers: &[String]) -> String {
    let mode = ctx.mode.as_str();
    let difficulty = ctx.difficulty.as_str();
    let previous = if previous_answers.is_empty() {
        "None (the first question asked them to introduce themselves)".to_string()
    } else {
        previous_answers
            .iter()
            .enumerate()
            .map(|(i, a)| format!("  {}. {}", i + 1, a))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are an experienced {mode} interviewer interviewing a candidate for a {position} position.

Candidate profile:
- Position: {position}
- Skills: {skills}
- Experience level: {experience}
- Difficulty level: {difficulty}
- Interview type: {mode}

Question number: {number}
Previous candidate responses:
{previous}

Write the next interview question. It must:
1. Follow naturally from the candidate's introduction and earlier responses
2. Match the {difficulty} difficulty level
3. Suit a {mode} interview
4. Exercise relevant skills: {skills}
5. Be professional, clear and engaging
6. Help judge their fit for the {position} role

Reply with the question text only, without any preamble or explanation.",
        position = ctx.position(),
        skills = ctx.skills(),
        experience = ctx.experience.as_deref().unwrap_or("Not specified"),
    )
}

pub fn evaluation_prompt(
    answer: &str,
    number: u32,
    ctx: &InterviewContext,
    question_text: &str,
) -> String {
    let mode = ctx.mode.as_str();

    format!(
        "You are an experienced {mode} interviewer reviewing a candidate's response.

Interview context:
- Position: {position}
- Skills focus: {skills}
- Difficulty level: {difficulty}
- Interview type: {mode}

Question #{number}: \"{question_text}\"
Candidate's answer: \"{answer}\"

Give constructive feedback that:
1. Names specific strengths in the response
2. Points out what could be improved, if anything
3. Stays encouraging and professional
4. Offers concrete suggestions for a stronger answer
5. Is concise: 2-3 sentences at most
6. Prepares them for similar questions in real interviews

Judge content quality, clarity of communication and relevance to the role.
Reply with the feedback text only, without formatting or introductions.",
        position = ctx.position(),
        skills = ctx.skills(),
        difficulty = ctx.difficulty.as_str(),
    )
}

pub fn resume_prompt(resume_text: &str, cfg: &InterviewConfiguration) -> String {
    format!(
        "Analyse this résumé and pull out the candidate's key professional information.

Résumé content:
{resume_text}

Additional details from the candidate:
- Name: {name}
- Education: {education}
- Skills: {skills}
- Experience: {experience}

Answer in exactly this layout:

PROFESSIONAL SUMMARY:
[2-3 sentence summary of the candidate]

KEY STRENGTHS:
- [3-4 key strengths or skills]

EXPERIENCE HIGHLIGHTS:
- [2-3 notable experiences or achievements]

SUGGESTED INTERVIEW FOCUS AREAS:
- [3-4 topics worth covering given their background]

Keep it professional and focused on interview preparation.",
        name = cfg.full_name,
        education = cfg.education,
        skills = cfg.skills,
        experience = cfg.experience.as_deref().unwrap_or("Not provided"),
    )
}

pub fn quick_feedback_prompt(question: &str, answer: &str) -> String {
    format!(
        "You are an experienced interview coach. Give constructive feedback on this interview answer.

Question: {question}

Candidate's answer: {answer}

Cover:
1. What they did well
2. What to improve
3. Specific ways to make the answer stronger
4. A rating out of 10

Be encouraging but honest, in no more than 150 words."
    )
}
