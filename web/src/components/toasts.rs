use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::notifications::{use_notifications, NotificationLevel};

fn intent_for(level: NotificationLevel) -> MessageBarIntent {
    match level {
        NotificationLevel::Info => MessageBarIntent::Info,
        NotificationLevel::Success => MessageBarIntent::Success,
        NotificationLevel::Error => MessageBarIntent::Error,
    }
}

#[component]
pub fn NotificationToasts() -> impl IntoView {
    let center = use_notifications();
    let toasts = center.toasts();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toasts__item" on:click=move |_| center.dismiss(id)>
                                <MessageBar intent=intent_for(toast.notification.level)>
                                    {toast.notification.message}
                                </MessageBar>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
