//! User-visible notifications (toasts).
//!
//! DESIGN
//! ======
//! Toasts are plain data in a context-provided signal. Producers (guard,
//! credential pages, checkout) push through the `Toasts` handle, which also
//! schedules auto-dismissal in the browser build; the `Toaster` component
//! renders them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

/// At most this many toasts stay on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let excess = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Context handle for raising toasts from anywhere in the tree.
#[derive(Clone, Copy, Debug)]
pub struct Toasts {
    state: RwSignal<ToastState>,
    lifetime_ms: u32,
}

impl Toasts {
    pub fn new(lifetime_ms: u32) -> Self {
        Self { state: RwSignal::new(ToastState::default()), lifetime_ms }
    }

    pub fn provide(config: &ClientConfig) -> Self {
        let toasts = Self::new(config.toast_lifetime_ms);
        provide_context(toasts);
        toasts
    }

    /// # Panics
    ///
    /// Panics if called outside the `App` component tree.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Reactive list of visible toasts.
    pub fn items(&self) -> Vec<Toast> {
        self.state.with(|s| s.items.clone())
    }

    #[cfg(test)]
    pub(crate) fn items_untracked(&self) -> Vec<Toast> {
        self.state.with_untracked(|s| s.items.clone())
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let Some(id) = self.state.try_update(|s| s.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            let lifetime_ms = self.lifetime_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(lifetime_ms).await;
                let _ = state.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, self.lifetime_ms);
        }
    }
}
