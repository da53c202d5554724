use crate::backend::utils::css::ResourceLoader;
use dioxus::prelude::*;

#[component]
pub fn StandaloneLogo(name: String) -> Element {
    let logo = ResourceLoader::get_asset("logo");

    rsx! {
        div { class: "standalone-logo-wrapper",
            div { class: "standalone-logo",
                img { src: "{logo}", alt: "Logo", class: "standalone-logo-img" }
            }
            h1 { class: "standalone-app-name", "{name}" }
        }
    }
}
