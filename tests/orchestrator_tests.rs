// Integration tests for the interview session lifecycle
//
// These drive the orchestrator over in-memory stores with a manual clock,
// using either no model or a scripted one.

mod common;

use anyhow::Result;
use common::{interview_form, user, Harness, ScriptedModel};
use practice_coach::generator::{
    fallback_question, InterviewContext, GENERIC_ACKNOWLEDGEMENT, OPENING_QUESTION,
};
use practice_coach::session::{
    EndSessionRequest, GenerateQuestionRequest, SessionStatus, SessionStore, SubmitAnswerRequest,
    PLACEHOLDER_SCORES,
};
use practice_coach::{Clock, PracticeError, UserId};
use serde_json::{json, Map};
use std::sync::Arc;
use uuid::Uuid;

fn question(number: u32, session_id: Option<Uuid>) -> GenerateQuestionRequest {
    GenerateQuestionRequest {
        question_number: number,
        context: Map::new(),
        previous_answers: Vec::new(),
        session_id,
    }
}

fn answer(number: u32, session_id: Uuid, text: &str, secs: u32) -> SubmitAnswerRequest {
    SubmitAnswerRequest {
        answer: text.to_string(),
        question_number: number,
        session_id: Some(session_id),
        time_taken: Some(secs),
    }
}

#[tokio::test]
async fn test_start_requires_configuration() -> Result<()> {
    let h = Harness::unavailable();

    let err = h.orchestrator.start(&user()).await.unwrap_err();
    assert_eq!(err, PracticeError::ConfigurationMissing);

    Ok(())
}

#[tokio::test]
async fn test_start_snapshots_question_count() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let session = h.orchestrator.start(&user()).await?;
    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.questions_answered, 0);
    assert_eq!(session.total_questions, 5);

    // Later edits must not reach the running session
    let mut form = interview_form();
    form.num_questions = Some(20);
    h.profiles.save_interview_requirements(&user(), form).await?;

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.total_questions, 5);

    Ok(())
}

#[tokio::test]
async fn test_each_start_creates_independent_session() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let first = h.orchestrator.start(&user()).await?;
    h.clock.advance_secs(1);
    let second = h.orchestrator.start(&user()).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(h.orchestrator.sessions(&user()).await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_first_question_is_fixed() -> Result<()> {
    let model = Arc::new(ScriptedModel::with_replies(&["Should not be used"]));
    let h = Harness::scripted(model.clone());

    let mut req = question(1, None);
    req.context = json!({"position": "Chef", "mode": "hr"})
        .as_object()
        .cloned()
        .unwrap();

    let q = h.orchestrator.generate_question(&user(), req).await?;
    assert_eq!(q, OPENING_QUESTION);
    assert!(model.prompts().is_empty(), "model must not be consulted");

    let unavailable = Harness::unavailable();
    let q = unavailable
        .orchestrator
        .generate_question(&user(), question(1, None))
        .await?;
    assert_eq!(q, OPENING_QUESTION);

    Ok(())
}

#[tokio::test]
async fn test_fallback_question_is_deterministic_and_wraps() -> Result<()> {
    let h = Harness::unavailable();
    let cfg = h
        .profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let a = h.orchestrator.generate_question(&user(), question(3, None)).await?;
    let b = h.orchestrator.generate_question(&user(), question(3, None)).await?;
    let wrapped = h.orchestrator.generate_question(&user(), question(8, None)).await?;

    assert_eq!(a, b);
    assert_eq!(a, wrapped);
    assert_eq!(
        a,
        "Describe a challenging technical problem you solved recently."
    );

    let ctx = InterviewContext::default().with_configuration(&cfg);
    let q2 = h.orchestrator.generate_question(&user(), question(2, None)).await?;
    assert_eq!(q2, fallback_question(2, &ctx));
    assert_eq!(q2, "Walk me through your experience with Rust.");

    Ok(())
}

#[tokio::test]
async fn test_model_question_uses_profile_context() -> Result<()> {
    let model = Arc::new(ScriptedModel::with_replies(&[
        "  How would you design a rate limiter in Rust?\n",
    ]));
    let h = Harness::scripted(model.clone());
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let mut req = question(2, None);
    req.previous_answers = vec!["I build backend services.".to_string()];
    let q = h.orchestrator.generate_question(&user(), req).await?;

    assert_eq!(q, "How would you design a rate limiter in Rust?");
    let prompts = model.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Backend Engineer"));
    assert!(prompts[0].contains("Rust, SQL"));
    assert!(prompts[0].contains("I build backend services."));

    Ok(())
}

#[tokio::test]
async fn test_model_failure_falls_back_to_canned_question() -> Result<()> {
    let model = Arc::new(ScriptedModel::failing());
    let h = Harness::scripted(model.clone());
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let q = h.orchestrator.generate_question(&user(), question(4, None)).await?;

    assert_eq!(model.prompts().len(), 1);
    assert_eq!(
        q,
        "How do you approach debugging when something isn't working as expected?"
    );

    Ok(())
}

#[tokio::test]
async fn test_question_zero_is_invalid() -> Result<()> {
    let h = Harness::unavailable();

    let err = h
        .orchestrator
        .generate_question(&user(), question(0, None))
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    Ok(())
}

#[tokio::test]
async fn test_generated_question_is_stored_on_session() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;

    let q = h
        .orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    let stored = h.session_store.question(session.id, 1).await?;
    assert_eq!(stored.question_text, q);
    assert!(stored.user_answer.is_none());

    Ok(())
}

#[tokio::test]
async fn test_unknown_session_still_returns_question() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;

    // Someone else's session counts as missing
    let stranger = UserId::new("mallory");
    let q = h
        .orchestrator
        .generate_question(&stranger, question(1, Some(session.id)))
        .await?;
    assert_eq!(q, OPENING_QUESTION);

    assert!(h.session_store.questions(session.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_submit_empty_answer_is_invalid_and_mutates_nothing() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    let err = h
        .orchestrator
        .submit_answer(&user(), answer(1, session.id, "", 10))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PracticeError::invalid_input("Answer and session ID are required")
    );

    let mut missing_session = answer(1, session.id, "Hello", 10);
    missing_session.session_id = None;
    let err = h
        .orchestrator
        .submit_answer(&user(), missing_session)
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.questions_answered, 0);
    let q = h.session_store.question(session.id, 1).await?;
    assert!(q.user_answer.is_none());
    assert!(q.answered_at.is_none());

    Ok(())
}

#[tokio::test]
async fn test_blank_answer_is_recorded_with_acknowledgement() -> Result<()> {
    let model = Arc::new(ScriptedModel::with_replies(&["Should not be used"]));
    let h = Harness::scripted(model.clone());
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    let outcome = h
        .orchestrator
        .submit_answer(&user(), answer(1, session.id, "   ", 10))
        .await?;

    assert_eq!(outcome.feedback, GENERIC_ACKNOWLEDGEMENT);
    assert_eq!(outcome.progress.answered, 1);
    assert!(model.prompts().is_empty(), "blank answers are not sent for evaluation");

    let stored = h.session_store.question(session.id, 1).await?;
    assert_eq!(stored.user_answer.as_deref(), Some("   "));
    assert_eq!(stored.ai_feedback.as_deref(), Some(GENERIC_ACKNOWLEDGEMENT));

    Ok(())
}

#[tokio::test]
async fn test_submit_unknown_question_is_not_found_and_mutates_nothing() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    let err = h
        .orchestrator
        .submit_answer(&user(), answer(2, session.id, "An answer", 10))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Session or question not found");

    let err = h
        .orchestrator
        .submit_answer(&user(), answer(1, Uuid::new_v4(), "An answer", 10))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = h
        .orchestrator
        .submit_answer(&UserId::new("mallory"), answer(1, session.id, "Mine now", 10))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.questions_answered, 0);
    assert!(h.session_store.question(session.id, 1).await?.user_answer.is_none());

    Ok(())
}

#[tokio::test]
async fn test_submit_answer_stores_model_feedback() -> Result<()> {
    let model = Arc::new(ScriptedModel::with_replies(&[
        "Clear and specific. Mention measurable impact next time.",
    ]));
    let h = Harness::scripted(model.clone());
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    h.clock.advance_secs(45);
    let outcome = h
        .orchestrator
        .submit_answer(&user(), answer(1, session.id, "I am a backend engineer.", 45))
        .await?;

    assert_eq!(
        outcome.feedback,
        "Clear and specific. Mention measurable impact next time."
    );
    assert_eq!(outcome.progress.answered, 1);
    assert_eq!(outcome.progress.total, 5);

    let stored = h.session_store.question(session.id, 1).await?;
    assert_eq!(stored.user_answer.as_deref(), Some("I am a backend engineer."));
    assert_eq!(stored.time_taken_seconds, Some(45));
    assert_eq!(stored.answered_at, Some(h.clock.now()));
    assert_eq!(stored.ai_feedback.as_deref(), Some(outcome.feedback.as_str()));

    let prompt = &model.prompts()[0];
    assert!(prompt.contains(OPENING_QUESTION));
    assert!(prompt.contains("I am a backend engineer."));

    Ok(())
}

#[tokio::test]
async fn test_evaluation_failure_gives_acknowledgement() -> Result<()> {
    let h = Harness::scripted(Arc::new(ScriptedModel::failing()));
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    let outcome = h
        .orchestrator
        .submit_answer(&user(), answer(1, session.id, "Hello there", 12))
        .await?;

    assert_eq!(outcome.feedback, GENERIC_ACKNOWLEDGEMENT);
    assert_eq!(outcome.progress.answered, 1);

    Ok(())
}

#[tokio::test]
async fn test_resubmitting_counts_twice() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;
    h.orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;

    h.orchestrator
        .submit_answer(&user(), answer(1, session.id, "First try", 20))
        .await?;
    let outcome = h
        .orchestrator
        .submit_answer(&user(), answer(1, session.id, "Second try", 25))
        .await?;

    assert_eq!(outcome.progress.answered, 2);
    let stored = h.session_store.question(session.id, 1).await?;
    assert_eq!(stored.user_answer.as_deref(), Some("Second try"));

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_interview() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    let session = h.orchestrator.start(&user()).await?;

    let q1 = h
        .orchestrator
        .generate_question(&user(), question(1, Some(session.id)))
        .await?;
    assert_eq!(q1, OPENING_QUESTION);

    h.clock.advance_secs(45);
    h.orchestrator
        .submit_answer(
            &user(),
            answer(1, session.id, "I am a backend engineer...", 45),
        )
        .await?;

    let mut req = question(2, Some(session.id));
    req.previous_answers = vec!["I am a backend engineer...".to_string()];
    h.orchestrator.generate_question(&user(), req).await?;

    h.clock.advance_secs(50);
    let outcome = h
        .orchestrator
        .submit_answer(&user(), answer(2, session.id, "...", 50))
        .await?;
    assert_eq!(outcome.progress.answered, 2);

    let summary = h
        .orchestrator
        .end_session(
            &user(),
            EndSessionRequest {
                session_id: Some(session.id),
            },
        )
        .await?;

    assert_eq!(summary.questions_answered, 2);
    assert_eq!(summary.total_questions, session.total_questions);
    assert!(summary.duration_minutes > 0.0);
    assert_eq!(summary.duration_minutes, 1.6); // 95s
    assert_eq!(summary.overall_score, Some(PLACEHOLDER_SCORES.confidence));

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.status, SessionStatus::Completed);
    assert_eq!(stored.communication_score, Some(80.0));
    assert_eq!(stored.technical_score, Some(70.0));
    assert!((stored.duration_minutes() - 95.0 / 60.0).abs() < 1e-9);
    assert!((stored.completion_percentage() - 40.0).abs() < 1e-9);

    let detail = h.orchestrator.session_detail(&user(), session.id).await?;
    assert_eq!(detail.questions.len(), 2);
    assert!(detail.analytics.is_none());

    Ok(())
}

#[tokio::test]
async fn test_end_session_without_questions_leaves_scores_unset() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;

    let summary = h
        .orchestrator
        .end_session(
            &user(),
            EndSessionRequest {
                session_id: Some(session.id),
            },
        )
        .await?;

    assert_eq!(summary.overall_score, None);
    assert_eq!(summary.questions_answered, 0);
    assert_eq!(summary.duration_minutes, 0.0);

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.status, SessionStatus::Completed);
    assert!(stored.completed_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_end_session_errors() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;
    let session = h.orchestrator.start(&user()).await?;

    let err = h
        .orchestrator
        .end_session(&user(), EndSessionRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err, PracticeError::invalid_input("Session ID is required"));

    let err = h
        .orchestrator
        .end_session(
            &UserId::new("mallory"),
            EndSessionRequest {
                session_id: Some(session.id),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Session not found");

    let stored = h.session_store.get(session.id, &user()).await?;
    assert_eq!(stored.status, SessionStatus::Active);

    Ok(())
}

#[tokio::test]
async fn test_overview_aggregates_completed_sessions() -> Result<()> {
    let h = Harness::unavailable();
    h.profiles
        .save_interview_requirements(&user(), interview_form())
        .await?;

    for _ in 0..2 {
        let session = h.orchestrator.start(&user()).await?;
        h.orchestrator
            .generate_question(&user(), question(1, Some(session.id)))
            .await?;
        h.clock.advance_secs(30 * 60);
        h.orchestrator
            .end_session(
                &user(),
                EndSessionRequest {
                    session_id: Some(session.id),
                },
            )
            .await?;
    }
    h.orchestrator.start(&user()).await?;

    let overview = h.orchestrator.overview(&user()).await?;
    assert_eq!(overview.total_sessions, 3);
    assert_eq!(overview.average_score, 75.0);
    assert_eq!(overview.best_score, 75.0);
    assert_eq!(overview.total_practice_hours, 1.0);
    assert_eq!(overview.recent_sessions.len(), 3);
    assert_eq!(
        overview.recent_sessions[0].session.status,
        SessionStatus::Active
    );

    Ok(())
}
