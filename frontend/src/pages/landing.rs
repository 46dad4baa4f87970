use log::{debug, info};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::hero::HeroSection;
use crate::components::stats::StatsSection;

/// Smooth-scrolls to an in-page anchor, if the page has one.
fn scroll_to_anchor(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("No #{} section on this page", id),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_contact_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("Contact CTA clicked");
        scroll_to_anchor("contact");
    });

    let on_work_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("Work CTA clicked");
        scroll_to_anchor("work");
    });

    html! {
        <div class="landing-page">
            <HeroSection {on_contact_click} {on_work_click} />
            <StatsSection />
        </div>
    }
}
