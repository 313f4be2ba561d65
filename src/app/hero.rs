use leptos::prelude::*;

use crate::{content::portfolio, section::Section, state::UiState};

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let theme = move || state.with(UiState::theme);
    let p = portfolio();
    let profile = &p.profile;

    let focus = profile
        .focus
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let sep = match i {
                0 => "",
                i if i + 1 == profile.focus.len() => " and ",
                _ => ", ",
            };
            view! {
                {sep}
                <span class="text-green-500 font-semibold">{f.clone()}</span>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Home.id() class="min-h-screen flex items-center justify-center py-20 relative">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-gradient-to-br from-green-500/5 via-transparent to-purple-500/5" />
            </div>
            <div class="text-center z-10 px-4 window-rise">
                <div class="mb-4">
                    <span class=move || format!("text-lg {}", theme().muted_text())>
                        {profile.greeting.clone()}
                    </span>
                </div>
                <h1 class=move || {
                    format!("text-5xl md:text-7xl font-bold mb-6 {}", theme().heading_text())
                }>
                    "Hi, " <span class="text-green-500">"I'm"</span> " "
                    <span class="relative">
                        {profile.name.clone()}
                        <span class="absolute -bottom-2 left-0 h-1 bg-green-500/20 underline-grow" />
                    </span>
                </h1>
                <div class="mb-8">
                    <span class=move || format!("text-xl {}", theme().muted_text())>
                        {profile.role.clone()}
                    </span>
                </div>
                <p class=move || format!("text-xl max-w-2xl mx-auto mb-8 {}", theme().muted_text())>
                    {profile.lead.clone()} " " {focus} ", "
                    {profile.mission.clone()}
                </p>
                <div class="flex justify-center gap-8 mb-12">
                    {p
                        .stats
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class=move || {
                                        format!("text-2xl font-bold mb-1 {}", theme().stat_text())
                                    }>{stat.value.clone()}</div>
                                    <div class=move || {
                                        format!("text-sm {}", theme().muted_text())
                                    }>{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap items-center justify-center gap-4">
                    <a
                        href=Section::Contact.anchor()
                        class="inline-flex items-center gap-2 bg-green-500 text-black font-bold py-3 px-6 rounded-full hover:bg-green-400 hover:scale-105 active:scale-95 transition"
                    >
                        <i class="extra-email" />
                        "Get in touch"
                    </a>
                    <a
                        href=profile.resume_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 py-3 px-6 rounded-full border-2 border-green-500 text-green-500 font-bold hover:bg-green-500/10 hover:scale-105 active:scale-95 transition duration-300"
                    >
                        <i class="extra-file" />
                        "Download Resume"
                    </a>
                </div>
                <div class="mt-12 flex justify-center gap-6">
                    {p
                        .hero_links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-zinc-400 hover:text-green-500 hover:-translate-y-0.5 transition duration-300 text-2xl"
                                    aria-label=link.label.clone()
                                >
                                    <i class=link.icon.clone() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2">
                    <div class="flex flex-col items-center gap-2 animate-bounce">
                        <span class=move || {
                            format!("text-sm {}", theme().muted_text())
                        }>"Scroll to explore"</span>
                        <span class="text-green-500">"⌄"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
