//! Lead capture form
//!
//! Collects name, phone, quantity and service, runs them through the
//! [`LeadPipeline`] and reflects its progress: inline field errors, a busy
//! submit button while pending, then a confirmation toast and a cleared form.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    DeepLinkSender, Field, FormInput, LeadPipeline, LeadSettings, Notice, OutboundMessage,
    PipelineError, PipelineObserver, PipelineState, SimulatedSubmitter, SubmitOutcome,
    ValidationResult, page_analytics,
};
use crate::ui::common::{FormField, SelectField, SubmitButton};
use crate::ui::notifications::{NotificationManager, use_notifications};

/// Services offered in the select, as (value, label)
pub const SERVICES: [(&str, &str); 5] = [
    ("Hardcover", "Hardcover binding"),
    ("Paperback", "Paperback printing"),
    ("Spiral", "Spiral binding"),
    ("Thesis", "Thesis & dissertation binding"),
    ("Custom", "Custom printing"),
];

/// Input values of the form
#[derive(Clone, Copy)]
struct FormValues {
    name: RwSignal<String>,
    phone: RwSignal<String>,
    books: RwSignal<String>,
    service: RwSignal<String>,
}

impl FormValues {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            books: RwSignal::new(String::new()),
            service: RwSignal::new(String::new()),
        }
    }

    fn signal(&self, field: Field) -> RwSignal<String> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Books => self.books,
            Field::Service => self.service,
        }
    }

    /// Snapshot of the inputs at submission time
    fn read(&self) -> FormInput {
        FormInput::from_pairs(
            crate::core::REQUIRED_FIELDS
                .iter()
                .map(|f| (f.as_str(), self.signal(*f).get_untracked())),
        )
    }

    fn reset(&self) {
        for field in crate::core::REQUIRED_FIELDS {
            self.signal(field).set(String::new());
        }
    }
}

/// Bridges pipeline events to the form's signals
#[derive(Clone, Copy)]
struct FormObserver {
    values: FormValues,
    errors: RwSignal<ValidationResult>,
    state: RwSignal<PipelineState>,
    notifications: NotificationManager,
    dismiss_ms: u32,
}

impl PipelineObserver for FormObserver {
    fn on_state(&self, state: PipelineState) {
        self.state.set(state);
    }

    fn on_validated(&self, result: &ValidationResult) {
        // Replaces every previous marking, so stale errors never linger
        self.errors.set(result.clone());
    }

    fn on_handoff(&self, _message: &OutboundMessage) {
        self.values.reset();
        self.notifications.notify(Notice::lead_sent(self.dismiss_ms));
    }

    fn on_fault(&self, error: &PipelineError) {
        self.notifications.error(
            "Something went wrong",
            format!("{}. Please try again or call us.", error),
        );
    }
}

/// Lead capture form component
#[component]
pub fn LeadForm(settings: LeadSettings) -> impl IntoView {
    let notifications = use_notifications();
    let values = FormValues::new();
    let errors = RwSignal::new(ValidationResult::new());
    let state = RwSignal::new(PipelineState::Idle);

    let observer = FormObserver {
        values,
        errors,
        state,
        notifications,
        dismiss_ms: settings.notice_dismiss_ms,
    };
    let pipeline = LeadPipeline::new(
        SimulatedSubmitter::new(settings.submit_delay_ms),
        DeepLinkSender::new(settings.messaging_host.clone()),
        settings.recipient.clone(),
    )
    .with_observer(observer)
    .with_analytics(page_analytics());
    let pipeline = StoredValue::new_local(Rc::new(pipeline));

    let pending = Signal::derive(move || state.get() == PipelineState::Pending);
    let error_for = move |field: Field| {
        Signal::derive(move || errors.with(|r| r.error_for(field).map(|e| e.to_string())))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if state.get_untracked().is_busy() {
            return;
        }

        let input = values.read();
        let pipeline = pipeline.get_value();
        spawn_local(async move {
            // Faults are surfaced by the observer
            if let Ok(SubmitOutcome::Rejected(result)) = pipeline.submit(input).await {
                leptos::logging::log!("Lead form rejected: {:?}", result.failed_fields());
            }
        });
    };

    view! {
        <form
            id="lead-form"
            class="space-y-4"
            novalidate=true
            on:submit=on_submit
        >
            <FormField
                field=Field::Name
                placeholder="Your name"
                autocomplete="name"
                value=values.name
                error=error_for(Field::Name)
                disabled=pending
            />
            <FormField
                field=Field::Phone
                input_type="tel"
                placeholder="10-digit mobile number"
                autocomplete="tel-national"
                value=values.phone
                error=error_for(Field::Phone)
                disabled=pending
            />
            <div class="grid sm:grid-cols-2 gap-4">
                <FormField
                    field=Field::Books
                    input_type="number"
                    placeholder="e.g. 50"
                    value=values.books
                    error=error_for(Field::Books)
                    disabled=pending
                />
                <SelectField
                    field=Field::Service
                    value=values.service
                    options=SERVICES.to_vec()
                    placeholder="Choose a service"
                    error=error_for(Field::Service)
                    disabled=pending
                />
            </div>
            <SubmitButton
                pending=pending
                label="Get my quote on WhatsApp"
                busy_label="Preparing your quote..."
                class="w-full"
            />
            <p class="text-xs text-gray-500 text-center">
                "We'll open WhatsApp with your details filled in. Nothing is sent until you press send."
            </p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NoticeKind, REQUIRED_FIELDS, validate_lead};

    fn observer() -> FormObserver {
        FormObserver {
            values: FormValues::new(),
            errors: RwSignal::new(ValidationResult::new()),
            state: RwSignal::new(PipelineState::Idle),
            notifications: NotificationManager::new(),
            dismiss_ms: 5000,
        }
    }

    #[test]
    fn test_revalidation_clears_inline_errors() {
        let owner = Owner::new();
        owner.with(|| {
            let observer = observer();
            let values = observer.values;

            observer.on_validated(&validate_lead(&values.read()));
            for field in REQUIRED_FIELDS {
                assert!(observer.errors.with_untracked(|r| r.error_for(field).is_some()));
            }

            values.name.set("Asha".to_string());
            values.phone.set("98765 43210".to_string());
            values.books.set("40".to_string());
            values.service.set("Thesis".to_string());
            observer.on_validated(&validate_lead(&values.read()));

            for field in REQUIRED_FIELDS {
                assert!(observer.errors.with_untracked(|r| r.error_for(field).is_none()));
            }
        });
    }

    #[test]
    fn test_handoff_resets_form_and_confirms() {
        let owner = Owner::new();
        owner.with(|| {
            let observer = observer();
            let values = observer.values;
            values.name.set("Asha".to_string());
            values.phone.set("9876543210".to_string());
            values.books.set("40".to_string());
            values.service.set("Thesis".to_string());

            let input = values.read();
            let lead = validate_lead(&input).into_lead(&input).unwrap();
            observer.on_handoff(&OutboundMessage::compose(&lead, "919876543210"));

            for field in REQUIRED_FIELDS {
                assert!(values.signal(field).get_untracked().is_empty(), "{field} kept");
            }
            observer.notifications.notifications().with_untracked(|queued| {
                assert_eq!(queued.len(), 1);
                assert_eq!(queued[0].notice.kind, NoticeKind::Success);
                assert_eq!(queued[0].notice.auto_dismiss_ms, Some(5000));
            });
        });
    }

    #[test]
    fn test_fault_keeps_form_values() {
        let owner = Owner::new();
        owner.with(|| {
            let observer = observer();
            observer.values.name.set("Asha".to_string());

            observer.on_fault(&PipelineError::Handoff("popup blocked".to_string()));

            assert_eq!(observer.values.name.get_untracked(), "Asha");
            observer.notifications.notifications().with_untracked(|queued| {
                assert_eq!(queued.len(), 1);
                assert_eq!(queued[0].notice.kind, NoticeKind::Error);
            });
        });
    }

    #[test]
    fn test_services_are_unique() {
        let mut values: Vec<&str> = SERVICES.iter().map(|(v, _)| *v).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), SERVICES.len());
    }

    #[test]
    fn test_service_values_pass_validation() {
        for (value, _) in SERVICES {
            let input = FormInput::new()
                .with(Field::Name, "A")
                .with(Field::Phone, "9876543210")
                .with(Field::Books, "3")
                .with(Field::Service, value);
            assert!(crate::core::validate_lead(&input).is_valid());
        }
    }
}
