//! Domain logic for the profile form: record types, the validation schema,
//! the tech stack list, the form controller and the display sink.
//!
//! Nothing in here knows about the browser. The frontend crate drives a
//! `FormController` from DOM events and renders a `DisplayState`.

pub mod config;
pub mod date_format;
pub mod display;
pub mod error;
pub mod form;
pub mod profile;
pub mod tech_stack;
pub mod validation;

pub use config::FormConfig;
pub use date_format::format_date_of_birth;
pub use display::{DisplayRow, DisplaySink, DisplayState, RecordingSink};
pub use error::{DateError, FormError, TechStackError, UnknownGender};
pub use form::{
    sanitize_phone_input, FormController, FormPhase, PendingSubmission, SubmissionReceipt,
    SUCCESS_MESSAGE,
};
pub use profile::{Gender, ProfileDraft, SubmittedProfile, TechStackEntry};
pub use tech_stack::TechStack;
pub use validation::{FieldPath, ProfileSchema, ValidationErrors};
