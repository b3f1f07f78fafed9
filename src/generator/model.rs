use anyhow::Result;
use async_trait::async_trait;

/// Text-completion capability backing question and feedback generation
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language REST API
/// - `UnavailableModel`: no model configured; callers use fixed fallbacks
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Complete a prompt, returning the raw text trimmed of surrounding whitespace
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Whether calls can be attempted at all
    fn is_available(&self) -> bool {
        true
    }

    /// Model name for logging
    fn name(&self) -> &str;
}

/// Stand-in used when no model could be configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

#[async_trait]
impl TextModel for UnavailableModel {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("No text model configured")
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
