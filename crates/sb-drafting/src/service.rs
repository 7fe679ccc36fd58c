//! Drafting service seam.
//!
//! Text generation is an external collaborator: anything that turns a
//! prompt into text implements [`DraftingService`].  The [`Drafter`] wraps a
//! service with the prompt builder and degrades to the static templates when
//! the service cannot answer an email request.

use sb_analytics::DayAdvice;
use sb_core::errors::{Error, Result};
use sb_core::Lang;
use sb_holidays::{HolidayRecord, UserEvent};

use crate::prompt::PromptBuilder;
use crate::templates::{draft_for_advice, DraftOrigin, EmailDraft};
use crate::tone::Tone;

/// Label of drafts written by the service.
pub const AI_DRAFT_TITLE: &str = "AI Powered Draft";

/// A text-generation backend.
pub trait DraftingService: Send + Sync {
    /// Human-readable name used in log messages.
    fn name(&self) -> &str;

    /// Generate text for `prompt`.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Subject line of a service-written draft.
pub fn ai_draft_subject(lang: Lang) -> &'static str {
    match lang {
        Lang::Ko => "AI가 생성한 비즈니스 메일 초안입니다.",
        Lang::Ja => "AIが生成したビジネスメールの下書きです。",
    }
}

/// Prompt builder plus a drafting service.
#[derive(Debug, Clone)]
pub struct Drafter<S> {
    service: S,
    prompts: PromptBuilder,
}

impl<S: DraftingService> Drafter<S> {
    /// Create a drafter writing in `lang`.
    pub fn new(service: S, lang: Lang) -> Self {
        Self {
            service,
            prompts: PromptBuilder::new(lang),
        }
    }

    /// The wrapped service.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Email for the day described by `advice`.
    ///
    /// Tries the service first.  If it fails or answers with blank text,
    /// the static template for the day's status is used instead; days
    /// without a template (working days, weekends) then yield `None`.
    pub fn email(&self, advice: &DayAdvice, tone: Tone) -> Option<EmailDraft> {
        let lang = self.prompts.lang();
        let prompt = self.prompts.email(advice, tone);
        match self.generate(&prompt) {
            Ok(body) => Some(EmailDraft {
                title: AI_DRAFT_TITLE.to_string(),
                subject: ai_draft_subject(lang).to_string(),
                body,
                origin: DraftOrigin::Ai,
            }),
            Err(err) => {
                tracing::warn!(
                    service = self.service.name(),
                    date = %advice.date,
                    %tone,
                    error = %err,
                    "AI email draft failed, falling back to the template"
                );
                draft_for_advice(advice, lang)
            }
        }
    }

    /// Monthly strategy briefing.
    ///
    /// # Errors
    /// Returns [`Error::Drafting`] if the service fails or returns blank
    /// text; there is no fallback for briefings.
    pub fn briefing(
        &self,
        year: u16,
        month: u8,
        kr: &[HolidayRecord],
        jp: &[HolidayRecord],
        events: &[UserEvent],
    ) -> Result<String> {
        let prompt = self.prompts.briefing(year, month, kr, jp, events)?;
        self.generate(&prompt)
    }

    fn generate(&self, prompt: &str) -> Result<String> {
        let text = self.service.generate(prompt).map_err(|e| match e {
            Error::Drafting(_) => e,
            other => Error::Drafting(other.to_string()),
        })?;
        if text.trim().is_empty() {
            return Err(Error::Drafting(format!(
                "{} returned an empty response",
                self.service.name()
            )));
        }
        tracing::debug!(service = self.service.name(), chars = text.chars().count(), "draft generated");
        Ok(text)
    }
}
