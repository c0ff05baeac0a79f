//! Toast notifications for reporting command outcomes.
//!
//! `ToastService` is provided via context so any component can dispatch an
//! outcome; `ToastHost` renders the queue and expires entries after a few
//! seconds.

use leptos::prelude::*;
use thaw::*;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// App-wide toast dispatcher.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(title, message, ToastVariant::Success);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(title, message, ToastVariant::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, title: &str, message: &str, variant: ToastVariant) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            title: title.to_string(),
            message: message.to_string(),
            variant,
        };
        self.toasts.update(|toasts| toasts.push(toast));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast queue in a fixed overlay. Each toast is dismissed after
/// `TOAST_LIFETIME_MS`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided");

    view! {
        <div
            class="toast-host"
            style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;"
        >
            <For
                each=move || toasts.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    // one expiry timer per toast; For runs this once per id
                    let id = toast.id;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        toasts.dismiss(id);
                    });

                    let intent = match toast.variant {
                        ToastVariant::Success => MessageBarIntent::Success,
                        ToastVariant::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <div style="display: flex; flex-direction: column; gap: 2px;">
                                <strong>{toast.title.clone()}</strong>
                                <span>{toast.message.clone()}</span>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
