pub const BRAND_NAME: &str = "MakeMyFranchise";

// WhatsApp recipient in international format, no leading '+'
pub const WHATSAPP_RECIPIENT: &str = "919168516666";
pub const CHAT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_GREETING: &str =
    "Hi! I am interested in franchise opportunities with MakeMyFranchise. Please guide me.";

pub const NOTIFICATION_DISPLAY_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const SIMULATED_LATENCY_MS: u32 = 800;

pub const STICKY_HEADER_OFFSET: f64 = 50.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const FADE_IN_THRESHOLD: f64 = 0.15;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn get_relay_endpoint() -> Option<&'static str> {
    None  // Local builds simulate the email relay
}

#[cfg(not(debug_assertions))]
pub fn get_relay_endpoint() -> Option<&'static str> {
    Some("https://formsubmit.co/info@makemyfranchise.in")  // Production relay
}
