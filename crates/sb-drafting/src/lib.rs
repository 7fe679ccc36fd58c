//! # sb-drafting
//!
//! Business correspondence around holidays: static bilingual email
//! templates keyed by the advisor's day status, prompts for an AI drafting
//! collaborator, and a [`Drafter`] that prefers the AI text and falls back
//! to the templates.
//!
//! No text-generation client ships with this crate; callers plug one in
//! through [`DraftingService`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Prompt construction for the drafting service.
pub mod prompt;

/// `DraftingService` seam and the `Drafter`.
pub mod service;

/// Static email templates.
pub mod templates;

/// Writing tones.
pub mod tone;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use prompt::PromptBuilder;
pub use service::{Drafter, DraftingService};
pub use templates::{draft_for_advice, render, template_for, DraftOrigin, EmailDraft, TemplateType};
pub use tone::Tone;
