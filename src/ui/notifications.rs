//! Toast notifications
//!
//! Confirmation and error toasts shown in the top-right corner. Dismissal,
//! manual or automatic, always plays the fade-out before the toast is removed.

use crate::core::{Notice, NoticeKind, ToastLifecycle};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-2 max-w-sm" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| {
                    view! {
                        <NotificationToast
                            notice=item.notice
                            id=item.id
                            notifications=notifications
                        />
                    }
                }
            />
        </div>
    }
}

/// Single notification toast
#[component]
fn NotificationToast(
    notice: Notice,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let lifecycle = RwSignal::new(ToastLifecycle::new());

    // Both the close button and the timer go through here
    let dismiss = move || {
        let mut started = false;
        let _ = lifecycle.try_update(|l| started = l.dismiss());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::core::FADE_OUT_MS;
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                // Wait for exit animation
                TimeoutFuture::new(FADE_OUT_MS).await;
                finish(lifecycle, notifications, id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        finish(lifecycle, notifications, id);
    };

    if let Some(_ms) = notice.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                dismiss();
            });
        }
    }

    let (bg_class, border_class, icon_class, icon) = match notice.kind {
        NoticeKind::Success => (
            "bg-green-50",
            "border-green-500/40",
            "text-green-600",
            icons::CHECK,
        ),
        NoticeKind::Error => (
            "bg-red-50",
            "border-red-500/40",
            "text-red-600",
            icons::ALERT_CIRCLE,
        ),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <Show when=move || !lifecycle.get().is_removed()>
            <div
                class=container_class.clone()
                style=move || if lifecycle.get().is_exiting() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            >
                <div class=icon_class>
                    <Icon name=icon class="w-5 h-5" />
                </div>
                <div class="flex-1 min-w-0">
                    <h4 class="text-sm font-semibold text-gray-900">{notice.title.clone()}</h4>
                    <p class="text-xs text-gray-600 mt-0.5">{notice.message.clone()}</p>
                </div>
                <button
                    class="text-gray-400 hover:text-gray-700 transition-colors"
                    aria-label="Dismiss notification"
                    on:click=move |_| dismiss()
                >
                    <Icon name=icons::X class="w-4 h-4" />
                </button>
            </div>
        </Show>
    }
}

fn finish(
    lifecycle: RwSignal<ToastLifecycle>,
    notifications: RwSignal<VecDeque<NotificationItem>>,
    id: u64,
) {
    let mut removed = false;
    // The toast may already be gone if the page navigated away
    let _ = lifecycle.try_update(|l| removed = l.finish_exit());
    if removed {
        let _ = notifications.try_update(|n| n.retain(|i| i.id != id));
    }
}

/// Handle for pushing notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notice });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Use the notification manager from anywhere in the component tree
pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}
