use log::{info, Level};
use yew::prelude::*;

mod config;
mod handoff;
mod icons;
mod submission;
mod lead {
    pub mod format;
    pub mod record;
    pub mod schema;
}
mod components {
    pub mod fade_in;
    pub mod lead_form;
    pub mod nav;
    pub mod notification;
    pub mod whatsapp_float;
}
mod pages {
    pub mod faq;
    pub mod landing;
}

use components::{
    nav::Header,
    notification::NotificationProvider,
    whatsapp_float::WhatsAppFloat,
};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    // Icon placeholders exist once the first render has committed
    use_effect_with_deps(
        move |_| {
            if icons::create_icons() {
                info!("Icons rendered");
            }
            || ()
        },
        (),
    );

    html! {
        <NotificationProvider>
            <Header />
            <Landing />
            <WhatsAppFloat />
        </NotificationProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting {} site", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
