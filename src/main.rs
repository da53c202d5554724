use anyhow::Context;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use dream_splash::backend::utils::config::{AppConfig, ConfigManager};
use dream_splash::backend::utils::css::ResourceLoader;
use dream_splash::backend::utils::route::Route;
use dream_splash::utils;
use log::{info, warn};
use std::sync::OnceLock;
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    utils::logging::init_from_env();

    let config = load_config();

    // Timers used by the UI need a runtime entered for the whole app lifetime
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create runtime")?;
    let runtime = RUNTIME.get_or_init(|| runtime);
    let _guard = runtime.enter();

    let window = &config.window;
    let size = LogicalSize::new(window.width, window.height);

    let desktop_config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(window.resizable),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop_config)
        .with_context(config)
        .launch(AppRoot);

    Ok(())
}

fn load_config() -> AppConfig {
    match ConfigManager::new() {
        Ok(manager) => {
            info!("Using config at {}", manager.path().display());
            manager.into_config()
        }
        Err(e) => {
            warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        }
    }
}

#[component]
fn AppRoot() -> Element {
    let config = use_context::<AppConfig>();
    let class = if config.ui.animations_enabled {
        "app"
    } else {
        "app no-animations"
    };

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::get_app_css()
        }

        div { class: "{class}", Router::<Route> {} }
    }
}
