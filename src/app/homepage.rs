use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_timeout_fn, use_window, UseTimeoutFnReturn};

use super::{
    about::About, career::Career, contact::Contact, header::Header, hero::Hero,
    projects::Projects,
};
use crate::{
    content::portfolio,
    loading::{mask_fade_style, LOADING_DELAY},
    section::{Section, SectionSpan},
    state::UiState,
};

/// Viewport-relative span of a section's element, if it is mounted.
fn measure_section(section: Section) -> Option<SectionSpan> {
    let el = web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?;
    let rect = el.get_bounding_client_rect();
    Some(SectionSpan::new(rect.top(), rect.bottom()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(UiState::mounted());
    provide_context(state);

    // both listeners are removed again when the page is torn down
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
            return;
        };
        state.maybe_update(|s| s.on_scroll_at(scroll_y, measure_section).is_some());
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        state.update_untracked(UiState::invalidate_layout);
    });

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            state.maybe_update(|s| s.advance(LOADING_DELAY));
        },
        LOADING_DELAY.as_millis() as f64,
    );
    // effects only run in the browser, so the mask is always part of the server render
    Effect::new(move |_| start(()));

    let page_class = move || state.with(|s| s.theme().page_class());

    view! {
        <Title text="Portfolio" />
        <div class=page_class>
            <Show when=move || state.with(UiState::content_visible) fallback=LoadingMask>
                <Header />
                <main class="container mx-auto px-4 py-20">
                    <Hero />
                    <About />
                    <Projects />
                    <Career />
                    <Contact />
                </main>
                <Footer />
            </Show>
        </div>
    }
}

#[component]
fn LoadingMask() -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 bg-black z-50 flex items-center justify-center loading-fade"
            style=mask_fade_style()
        >
            <i class="extra-terminal text-green-500 text-5xl animate-pulse" />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let copyright = portfolio().profile.copyright();
    view! {
        <footer class="bg-black/80 backdrop-blur-sm py-8">
            <div class="container mx-auto px-6 text-center">
                <p class="text-zinc-400">{copyright}</p>
            </div>
        </footer>
    }
}
