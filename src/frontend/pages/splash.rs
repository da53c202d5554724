//! Startup page showing the splash, then handing over to the main view.

use crate::backend::utils::config::AppConfig;
use crate::backend::utils::route::Route;
use crate::frontend::components::splash::SplashScreen;
use dioxus::prelude::*;
use dioxus_router::navigator;
use log::info;

#[component]
pub fn Splash() -> Element {
    let nav = navigator();
    let config = use_context::<AppConfig>();
    let enabled = config.splash.enabled;

    use_effect(move || {
        if !enabled {
            info!("Splash disabled, going straight to the main view");
            nav.replace(Route::Home {});
        }
    });

    if !enabled {
        return rsx! { div {} };
    }

    rsx! {
        SplashScreen {
            timing: config.splash.timing(),
            title: config.splash.title.clone(),
            tagline: config.splash.tagline.clone(),
            animated: config.ui.animations_enabled,
            on_complete: move |_| {
                info!("Splash finished, opening the main view");
                nav.replace(Route::Home {});
            },
        }
    }
}
