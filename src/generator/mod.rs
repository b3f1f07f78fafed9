//! Question and feedback generation
//!
//! This module provides the `QuestionGenerator`, which turns interview
//! context into question and feedback text:
//! - Question 1 is always the fixed opening question
//! - Later questions and all feedback come from the injected `TextModel`
//! - When the model is unavailable or fails, fixed fallbacks are used

mod fallback;
mod gemini;
mod model;
mod prompts;

pub use fallback::{
    fallback_question, fallback_questions, quick_practice_question, GENERIC_ACKNOWLEDGEMENT,
    OPENING_QUESTION, QUICK_FEEDBACK_FAILED, QUICK_FEEDBACK_UNAVAILABLE, QUICK_PRACTICE_QUESTIONS,
};
pub use gemini::GeminiClient;
pub use model::{TextModel, UnavailableModel};
pub use prompts::InterviewContext;

use crate::config::LlmConfig;
use crate::error::{PracticeError, PracticeResult};
use crate::profile::InterviewConfiguration;
use std::sync::Arc;
use tracing::{info, warn};

/// Build the configured model, or the unavailable stand-in if that fails
pub fn model_from_config(config: &LlmConfig) -> Arc<dyn TextModel> {
    match GeminiClient::new(config) {
        Ok(client) => {
            info!("Using Gemini model {}", config.model);
            Arc::new(client)
        }
        Err(e) => {
            warn!("Gemini unavailable, serving fallback questions: {:#}", e);
            Arc::new(UnavailableModel)
        }
    }
}

/// Stateless generator over a shared text model
#[derive(Clone)]
pub struct QuestionGenerator {
    model: Arc<dyn TextModel>,
}

impl QuestionGenerator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    pub fn unavailable() -> Self {
        Self::new(Arc::new(UnavailableModel))
    }

    pub fn is_available(&self) -> bool {
        self.model.is_available()
    }

    /// Text of question `number` (1-based). Never fails: model errors fall back to the canned list.
    pub async fn generate_question(
        &self,
        number: u32,
        ctx: &InterviewContext,
        previous_answers: &[String],
    ) -> String {
        if number == 1 {
            return OPENING_QUESTION.to_string();
        }

        if !self.model.is_available() {
            return fallback_question(number, ctx);
        }

        let prompt = prompts::question_prompt(number, ctx, previous_answers);
        match self.model.generate(&prompt).await {
            Ok(question) => question.trim().to_string(),
            Err(e) => {
                warn!(
                    "Question {} generation failed on {}, using fallback: {:#}",
                    number,
                    self.model.name(),
                    e
                );
                fallback_question(number, ctx)
            }
        }
    }

    /// Short feedback on an answer; the generic acknowledgement when it cannot be evaluated
    pub async fn evaluate_answer(
        &self,
        answer: &str,
        number: u32,
        ctx: &InterviewContext,
        question_text: &str,
    ) -> String {
        if !self.model.is_available() || answer.trim().is_empty() {
            return GENERIC_ACKNOWLEDGEMENT.to_string();
        }

        let prompt = prompts::evaluation_prompt(answer, number, ctx, question_text);
        match self.model.generate(&prompt).await {
            Ok(feedback) => feedback.trim().to_string(),
            Err(e) => {
                warn!("Answer evaluation failed for question {}: {:#}", number, e);
                GENERIC_ACKNOWLEDGEMENT.to_string()
            }
        }
    }

    /// Professional summary of a résumé
    pub async fn analyze_resume(
        &self,
        resume_text: &str,
        cfg: &InterviewConfiguration,
    ) -> PracticeResult<String> {
        if !self.model.is_available() {
            return Err(PracticeError::external("AI service not available"));
        }

        self.model
            .generate(&prompts::resume_prompt(resume_text, cfg))
            .await
            .map(|summary| summary.trim().to_string())
            .map_err(|e| PracticeError::external(format!("{:#}", e)))
    }

    /// Coaching feedback for the quick practice page, with markdown bold markers removed
    pub async fn quick_feedback(&self, question: &str, answer: &str) -> String {
        if !self.model.is_available() {
            return QUICK_FEEDBACK_UNAVAILABLE.to_string();
        }

        match self
            .model
            .generate(&prompts::quick_feedback_prompt(question, answer))
            .await
        {
            Ok(feedback) => feedback.replace("**", "").trim().to_string(),
            Err(e) => {
                warn!("Quick feedback failed: {:#}", e);
                QUICK_FEEDBACK_FAILED.to_string()
            }
        }
    }
}
