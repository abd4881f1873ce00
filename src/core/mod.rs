//! Core domain models and business logic for lead capture

pub mod analytics;
#[cfg(feature = "ssr")]
pub mod config;
mod counter;
mod lead;
mod menu;
mod message;
mod notice;
mod pipeline;
mod rotator;
mod settings;
mod submit;
mod validation;

pub use analytics::{
    AnalyticsSink, CONTACT_CATEGORY, ERROR_CATEGORY, LEAD_CATEGORY, NoopAnalytics, actions,
    labels, page_analytics, report_fault, report_panics,
};
pub use counter::*;
pub use lead::*;
pub use menu::*;
pub use message::*;
pub use notice::*;
pub use pipeline::*;
pub use rotator::*;
pub use settings::*;
pub use submit::*;
pub use validation::*;
