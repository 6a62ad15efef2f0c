use log::{info, warn};
use web_sys::window;

use crate::config;

/// `https://wa.me/<recipient>?text=<encoded message>`
pub fn build_deep_link(message: &str, recipient_id: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::CHAT_BASE_URL,
        recipient_id,
        urlencoding::encode(message)
    )
}

/// Deep link for the floating contact button, with the generic greeting.
pub fn default_deep_link() -> String {
    build_deep_link(config::DEFAULT_GREETING, config::WHATSAPP_RECIPIENT)
}

/// Opens `url` in a new browsing context without an opener.
///
/// Fire and forget: a blocked pop-up is not detected.
pub fn open(url: &str) {
    match window() {
        Some(window) => {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener");
            info!("Opened WhatsApp hand-off");
        }
        None => warn!("No window available for WhatsApp hand-off"),
    }
}
