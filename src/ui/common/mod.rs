//! Common reusable UI components
//!
//! Form inputs and buttons shared by the landing page sections.

pub mod button;
pub mod form;

pub use button::{ButtonVariant, LinkButton, SubmitButton};
pub use form::{FormField, SelectField};
