//! Asset and CSS loading/caching utilities.

use base64::{Engine as _, engine::general_purpose};
use std::{collections::HashMap, sync::OnceLock};

static ASSET_CACHE: OnceLock<HashMap<&'static str, String>> = OnceLock::new();
static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

macro_rules! embed_asset {
    ($name:expr, $path:expr) => {
        (
            $name,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)),
        )
    };
}

const ASSETS: &[(&str, &[u8])] = &[
    embed_asset!("logo", "assets/images/logo.svg"),
    embed_asset!("sparkle", "assets/images/sparkle.svg"),
    embed_asset!("star", "assets/images/star.svg"),
    embed_asset!("rocket", "assets/images/rocket.svg"),
];

const EMPTY_ASSET: &str = "data:image/svg+xml;base64,";

pub struct ResourceLoader;

impl ResourceLoader {
    fn get_all_assets() -> HashMap<&'static str, String> {
        ASSETS
            .iter()
            .map(|&(n, bytes)| {
                let data = general_purpose::STANDARD.encode(bytes);
                (n, format!("data:image/svg+xml;base64,{data}"))
            })
            .collect()
    }

    /// Data URI for an embedded image; unknown names give an empty image.
    pub fn get_asset(name: &str) -> String {
        ASSET_CACHE
            .get_or_init(Self::get_all_assets)
            .get(name)
            .cloned()
            .unwrap_or_else(|| EMPTY_ASSET.into())
    }

    fn get_all_styles() -> HashMap<&'static str, &'static str> {
        let mut m = HashMap::new();
        macro_rules! style {
            ($n:expr, $p:expr) => {
                m.insert($n, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), $p)));
            };
        }
        style!("base", "/assets/styles/base.css");
        style!("splash", "/assets/styles/splash.css");
        style!("home", "/assets/styles/home.css");
        m
    }

    pub fn get_css(name: &str) -> &'static str {
        CSS_CACHE
            .get_or_init(Self::get_all_styles)
            .get(name)
            .copied()
            .unwrap_or("")
    }

    pub fn combine_css(styles: &[&str]) -> String {
        styles
            .iter()
            .map(|&n| Self::get_css(n))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn get_app_css() -> String {
        Self::combine_css(&["base", "home"])
    }
}
