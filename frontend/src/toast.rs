use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::window;
use yew::Callback;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }

    pub fn class_name(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

/// Appends the toast to `<body>` and removes it after a few seconds.
pub fn show(toast: Toast) {
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("No document to show toast: {}", toast.message);
        return;
    };
    let Some(body) = document.body() else {
        warn!("No body to show toast: {}", toast.message);
        return;
    };

    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(e) => {
            warn!("Failed to create toast element: {:?}", e);
            return;
        }
    };
    element.set_class_name(toast.class_name());
    element.set_text_content(Some(&toast.message));

    if let Err(e) = body.append_child(&element) {
        warn!("Failed to attach toast: {:?}", e);
        return;
    }

    Timeout::new(config::TOAST_DURATION_MS, move || element.remove()).forget();
}

pub fn notifier() -> Callback<Toast> {
    Callback::from(show)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_follows_kind() {
        assert_eq!(Toast::success("sent").class_name(), "toast success");
        assert_eq!(Toast::error("failed").class_name(), "toast error");
    }
}
