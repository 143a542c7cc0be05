//! Browser Shell
//!
//! Side effects the controller needs from its host page: rendering,
//! notifications, popups and timers.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Host-page effects, injected into the controller
#[async_trait(?Send)]
pub trait Shell {
    /// Show the given view state
    fn render(&self, state: &ViewState);

    fn notify(&self, notice: Notice);

    /// Open `url` in a new browsing context
    fn open_in_new_tab(&self, url: &str);

    async fn sleep(&self, delay: Duration);
}

/// Shell backed by a Leptos signal and the `window` object
#[derive(Clone, Copy)]
pub struct BrowserShell {
    set_state: WriteSignal<ViewState>,
}

impl BrowserShell {
    pub fn new(set_state: WriteSignal<ViewState>) -> Self {
        Self { set_state }
    }
}

#[async_trait(?Send)]
impl Shell for BrowserShell {
    fn render(&self, state: &ViewState) {
        self.set_state.set(state.clone());
    }

    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => tracing::info!(message = %notice.message, "success"),
            NoticeKind::Error => tracing::warn!(message = %notice.message, "error"),
        }
        if let Err(err) = window().alert_with_message(&notice.message) {
            tracing::error!(?err, "alert rejected");
        }
    }

    fn open_in_new_tab(&self, url: &str) {
        if let Err(err) = window().open_with_url_and_target(url, "_blank") {
            tracing::error!(?err, %url, "popup rejected");
        }
    }

    async fn sleep(&self, delay: Duration) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
