use crate::frontend::pages::{Home, Splash};

use dioxus::prelude::*;
use dioxus_router::Routable;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Splash {},
    #[route("/home")]
    Home {},
}
