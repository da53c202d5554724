//! Loading indicator component.

use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(#[props(default = 3)] dots: usize) -> Element {
    rsx! {
        div { class: "loading-indicator", role: "progressbar",
            for i in 0..dots {
                span { key: "{i}", class: "loading-dot" }
            }
        }
    }
}
