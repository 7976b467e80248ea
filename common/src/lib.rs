//! Types and rules shared by the Sarvian site frontend and backend.
//!
//! The contact form in the browser and the lead-intake endpoint screen
//! submissions with the same thresholds, so those live here together with
//! the project content models both sides serialize.

pub mod lead;
pub mod project;
pub mod screening;
pub mod validation;

pub use lead::LeadRequest;
pub use project::{Project, ProjectSize, ProjectSlug, ProjectSummary};
pub use screening::{screen, honeypot_tripped, time_trap_tripped, Screening};
pub use validation::{validate_email, validate_name, validate_phone, Field, FieldError};

/// Minimum characters in a name.
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum digits left in a phone number once formatting is stripped.
pub const MIN_PHONE_DIGITS: usize = 10;
/// Anything submitted faster than this after the form rendered is a bot.
pub const MIN_FILL_MILLIS: f64 = 1200.0;
/// How long the success view stays up before the modal closes itself.
pub const AUTO_CLOSE_MILLIS: u32 = 4800;
