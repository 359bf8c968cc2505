//! One-shot success messages that survive a navigation, e.g. "Booking
//! confirmed" shown on the dashboard after the confirmation page redirects.

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flash {
    message: Option<String>,
}

pub fn use_flash_provider() -> Signal<Flash> {
    use_context_provider(|| Signal::new(Flash::default()))
}

pub fn use_flash() -> Signal<Flash> {
    use_context()
}

pub fn set_flash(mut flash: Signal<Flash>, message: impl Into<String>) {
    flash.set(Flash {
        message: Some(message.into()),
    });
}

/// Read and clear the pending message, if any.
pub fn take_flash(mut flash: Signal<Flash>) -> Option<String> {
    let message = flash.peek().message.clone();
    if message.is_some() {
        flash.set(Flash::default());
    }
    message
}
