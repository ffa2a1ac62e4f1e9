//! Transient notifications.
//!
//! `Toasts` is provided once at the app root; secondary-action failures
//! (favorite toggles, load-more, navigation, deletes) surface here instead
//! of invalidating page state. Toasts dismiss themselves after three
//! seconds.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tracing::info;

const AUTO_DISMISS: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast stack. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        (self.items)()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        info!(?kind, %message, "toast");
        let id = {
            let mut next = self.next_id;
            let id = next();
            next.set(id + 1);
            id
        };
        self.items.write().push(Toast { id, kind, message });

        // Dismissal runs on the root scope: the raising component may
        // unmount (page navigation) before the timer fires.
        let mut items = self.items;
        spawn_forever(async move {
            sleep(AUTO_DISMISS).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::cell::RefCell;

    thread_local! {
        static HANDLE: RefCell<Option<Toasts>> = const { RefCell::new(None) };
    }

    // Raises a toast on mount, then is unmounted by the parent while the
    // dismiss timer is still pending.
    #[component]
    fn Raiser() -> Element {
        let mut toasts: Toasts = use_context();
        use_hook(move || toasts.success("saved"));
        rsx! {
            div {}
        }
    }

    fn app() -> Element {
        let toasts = use_context_provider(Toasts::new);
        HANDLE.with(|h| *h.borrow_mut() = Some(toasts));

        let mut show = use_signal(|| true);
        use_effect(move || show.set(false));
        rsx! {
            if show() {
                Raiser {}
            }
            ToastHost {}
        }
    }

    #[tokio::test(start_paused = true)]
    async fn auto_dismiss_outlives_the_raising_scope() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let toasts = HANDLE.with(|h| h.borrow().unwrap());
        assert_eq!(toasts.items().len(), 1, "toast raised on mount");

        let drained = tokio::time::timeout(std::time::Duration::from_secs(30), async {
            while !toasts.items().is_empty() {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
        assert!(
            drained.is_ok(),
            "toast should auto-dismiss after its raiser unmounted"
        );
    }
}

/// Renders the toast stack; mounted once in the shell layout.
#[component]
pub fn ToastHost() -> Element {
    let toasts: Toasts = use_context();
    rsx! {
        div { class: "toast-host",
            for toast in toasts.items() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    span { "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        aria_label: "Dismiss",
                        onclick: {
                            let mut toasts = toasts;
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
