use crate::backend::splash::{SplashPhase, SplashTiming, drive};
use crate::backend::utils::css::ResourceLoader;
use crate::frontend::components::common::LoadingIndicator;
use dioxus::prelude::*;
use log::debug;

const ICONS: [&str; 3] = ["sparkle", "rocket", "star"];

/// Full-screen branded panel that fades out after `timing.display` and calls
/// `on_complete` once the fade has finished.
#[component]
pub fn SplashScreen(
    on_complete: EventHandler<()>,
    #[props(default)] timing: SplashTiming,
    #[props(default = "Dream Splash".to_string())] title: String,
    #[props(default)] tagline: String,
    #[props(default = true)] animated: bool,
) -> Element {
    let mut phase = use_signal(SplashPhase::default);

    // Both waits run in one scope task, released when the splash unmounts.
    let task = use_hook(move || {
        spawn(async move {
            drive(timing, move |next| {
                phase.set(next);
                if next.is_done() {
                    on_complete.call(());
                }
            })
            .await;
        })
    });
    use_drop(move || {
        debug!("Splash unmounted, releasing its timer");
        task.cancel();
    });

    let logo = ResourceLoader::get_asset("logo");
    let phase_class = phase().css_class();
    let root_class = if animated {
        "splash-screen"
    } else {
        "splash-screen no-animations"
    };
    let fade_ms = timing.fade.as_millis();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::get_css("splash")
        }

        div {
            class: "{root_class} {phase_class}",
            style: "transition-duration: {fade_ms}ms",

            img { class: "splash-logo", src: "{logo}", alt: "Logo" }

            div { class: "splash-icons",
                for name in ICONS {
                    img {
                        key: "{name}",
                        class: "splash-icon",
                        src: ResourceLoader::get_asset(name),
                        alt: ""
                    }
                }
            }

            h1 { class: "splash-title", "{title}" }

            if !tagline.is_empty() {
                p { class: "splash-tagline", "{tagline}" }
            }

            LoadingIndicator {}

            span { class: "splash-version", "v{version}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use tokio::time::Instant;

    #[derive(Clone)]
    struct HostProps {
        mounted: Rc<Cell<bool>>,
        completions: Rc<Cell<usize>>,
    }

    #[allow(non_snake_case)]
    fn Host(props: HostProps) -> Element {
        if !props.mounted.get() {
            return rsx! { div {} };
        }

        let completions = props.completions.clone();
        rsx! {
            SplashScreen {
                on_complete: move |_| completions.set(completions.get() + 1),
            }
        }
    }

    fn mount() -> (VirtualDom, Rc<Cell<bool>>, Rc<Cell<usize>>) {
        let mounted = Rc::new(Cell::new(true));
        let completions = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            Host,
            HostProps {
                mounted: mounted.clone(),
                completions: completions.clone(),
            },
        );
        dom.rebuild_in_place();
        (dom, mounted, completions)
    }

    /// Polls the dom's tasks and re-renders until `duration` of simulated time has passed.
    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let has_work = tokio::select! {
                _ = dom.wait_for_work() => true,
                _ = tokio::time::sleep_until(deadline) => false,
            };
            if !has_work {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }

        // Let anything woken exactly at the deadline run too.
        for _ in 0..4 {
            let has_work = tokio::select! {
                biased;
                _ = dom.wait_for_work() => true,
                _ = tokio::task::yield_now() => false,
            };
            if has_work {
                dom.render_immediate(&mut NoOpMutations);
            }
        }
    }

    fn unmount(dom: &mut VirtualDom, mounted: &Cell<bool>) {
        mounted.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
    }

    #[tokio::test(start_paused = true)]
    async fn completes_once_when_left_mounted() {
        let (mut dom, _mounted, completions) = mount();

        run_for(&mut dom, Duration::from_millis(2200)).await;
        assert_eq!(completions.get(), 0);

        run_for(&mut dom, Duration::from_millis(2800)).await;
        assert_eq!(completions.get(), 1);

        run_for(&mut dom, Duration::from_secs(10)).await;
        assert_eq!(completions.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_before_display_ends_never_completes() {
        let (mut dom, mounted, completions) = mount();

        run_for(&mut dom, Duration::from_millis(500)).await;
        unmount(&mut dom, &mounted);

        run_for(&mut dom, Duration::from_millis(4500)).await;
        assert_eq!(completions.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_during_fade_never_completes() {
        let (mut dom, mounted, completions) = mount();

        run_for(&mut dom, Duration::from_millis(2100)).await;
        unmount(&mut dom, &mounted);

        run_for(&mut dom, Duration::from_secs(5)).await;
        assert_eq!(completions.get(), 0);
    }
}
