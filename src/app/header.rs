use leptos::prelude::*;

use crate::{content::portfolio, section::Section, state::UiState};

const LINK_CLASS: &str = "text-sm uppercase tracking-wider hover:text-green-500 transition-colors";

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let resume_url = portfolio().profile.resume_url.clone();

    let menu_open = move || state.with(UiState::menu_open);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-black/80 backdrop-blur-sm">
            <nav class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <a href=Section::Home.anchor() aria-label="Home">
                        <i class="extra-terminal text-green-500 text-3xl" />
                    </a>
                    <button
                        class="md:hidden text-zinc-400 hover:text-green-500 transition-colors"
                        on:click=move |_| state.update(UiState::toggle_menu)
                        aria-label="Toggle menu"
                    >
                        <span class=move || {
                            if menu_open() {
                                "inline-block text-2xl transform transition-transform rotate-180"
                            } else {
                                "inline-block text-2xl transform transition-transform"
                            }
                        }>"⌄"</span>
                    </button>
                    <ul class=move || {
                        if menu_open() {
                            "md:flex items-center gap-4 text-zinc-400 block"
                        } else {
                            "md:flex items-center gap-4 text-zinc-400 hidden"
                        }
                    }>
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section /> })
                            .collect_view()}
                        <li class="md:ml-4">
                            <a
                                href=resume_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-4 py-2 bg-green-500 text-black font-semibold rounded-full hover:bg-green-400 hover:scale-105 active:scale-95 transition duration-300"
                            >
                                <i class="extra-file" />
                                "Resume"
                            </a>
                        </li>
                        <li>
                            <button
                                on:click=move |_| state.update(UiState::toggle_theme)
                                class="text-zinc-400 hover:text-green-500 transition-colors"
                                aria-label="Toggle dark mode"
                            >
                                {move || state.with(|s| s.theme().toggle_icon())}
                            </button>
                        </li>
                    </ul>
                </div>
            </nav>
        </header>
    }
}

#[component]
fn NavLink(section: Section) -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    view! {
        <li>
            <a
                href=section.anchor()
                class=move || {
                    if state.with(|s| s.is_active(section)) {
                        format!("{LINK_CLASS} text-green-500")
                    } else {
                        LINK_CLASS.to_string()
                    }
                }
            >
                {section.nav_label()}
            </a>
        </li>
    }
}
