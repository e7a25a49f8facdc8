use leptos::prelude::*;

const TOAST_DURATION_MS: u32 = 4_000;
/// Target reveals stay up until the player dismisses them.
const STICKY: Option<u32> = None;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into(), Some(TOAST_DURATION_MS));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into(), Some(TOAST_DURATION_MS));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into(), Some(TOAST_DURATION_MS));
    }

    /// Shown until clicked.
    pub fn sticky(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into(), STICKY);
    }

    fn push(&self, kind: ToastKind, message: String, duration_ms: Option<u32>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        if let Some(ms) = duration_ms {
            let this = *self;
            gloo_timers::callback::Timeout::new(ms, move || this.dismiss(id)).forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items
            .try_update(|items| items.retain(|toast| toast.id != id));
    }
}

fn toast_style(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => {
            "background: #1f2937; color: #f9fafb; padding: 10px 16px; border-radius: 6px; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.25); font-weight: 600;"
        }
        ToastKind::Success => {
            "background: #15803d; color: #f0fdf4; padding: 10px 16px; border-radius: 6px; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.25); font-weight: 600;"
        }
        ToastKind::Error => {
            "background: #b91c1c; color: #fef2f2; padding: 10px 16px; border-radius: 6px; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.25); font-weight: 600;"
        }
    }
}

#[component]
pub(crate) fn ToastStack() -> impl IntoView {
    let toasts: Toasts = expect_context();

    view! {
        <div style="position: fixed; top: 16px; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; gap: 8px; z-index: 50; align-items: center;">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            style=toast_style(toast.kind)
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
