//! Browser Notification API with `alert()` as the fallback.

use anyhow::{anyhow, Result};
use planner_backend::NotificationHost;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Notification, NotificationOptions, NotificationPermission};

/// Whether this browser exposes `window.Notification` at all
fn notifications_supported() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("Notification")).ok())
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotificationHost;

impl NotificationHost for BrowserNotificationHost {
    fn can_notify(&self) -> bool {
        notifications_supported() && Notification::permission() == NotificationPermission::Granted
    }

    fn show(&self, title: &str, body: &str) -> Result<()> {
        let options = NotificationOptions::new();
        options.set_body(body);
        Notification::new_with_options(title, &options)
            .map(|_| ())
            .map_err(|e| anyhow!("Notification failed: {:?}", e))
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// Ask for notification permission if the user has not decided yet.
///
/// Runs in the background; rendering never waits on the prompt and a
/// rejected request is only logged.
pub fn request_permission_once() {
    if !notifications_supported() || Notification::permission() != NotificationPermission::Default {
        return;
    }

    match Notification::request_permission() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(result) => log::info!("🔔 Notification permission: {:?}", result.as_string()),
                Err(e) => log::debug!("Notification permission request rejected: {:?}", e),
            }
        }),
        Err(e) => log::debug!("Notification permission request failed: {:?}", e),
    }
}
