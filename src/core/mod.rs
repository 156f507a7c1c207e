// src/core/mod.rs

// Everything under `core` is free of terminal concerns so it can be tested
// without a UI.

/// Data structures shared across the crate: subjects, verdicts, severities.
pub mod models;

/// The keyword rules that turn a subject into a verdict.
pub mod classifier;

/// Static table of findings and their localized wording.
pub mod knowledge_base;

/// File selection metadata and size formatting.
pub mod media;

/// Registration password policy.
pub mod password;

/// Contact form validation.
pub mod contact;

/// Cancellable delayed tasks.
pub mod task;

/// The simulated scan: artificial delay, then classification.
pub mod scanner;
