pub mod browser;
pub mod common;
pub mod icon;
pub mod lead_form;
pub mod notifications;
pub mod pages;
pub mod whatsapp_button;

pub use icon::{Icon, icons};
pub use lead_form::LeadForm;
pub use notifications::{NotificationManager, provide_notifications, use_notifications};
pub use pages::{LandingPage, NotFoundPage};
