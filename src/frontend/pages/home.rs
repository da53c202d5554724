//! Main view shown once the splash is gone.

use crate::backend::utils::config::AppConfig;
use crate::frontend::components::common::StandaloneLogo;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        div { class: "home fade-in",
            StandaloneLogo { name: config.window.title.clone() }
            p { class: "home-subtitle", "Everything is ready." }
        }
    }
}
