use leptos::prelude::*;

use super::window::WindowFrame;
use crate::{content::portfolio, section::Section, state::UiState};

#[component]
pub fn About() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let p = portfolio();

    view! {
        <section id=Section::About.id() class="py-20">
            <h2 class=move || {
                format!(
                    "text-3xl font-bold mb-8 text-center {}",
                    state.with(|s| s.theme().heading_text()),
                )
            }>"About Me"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <WindowFrame title="about-me.txt" active=true>
                    <div class="font-mono space-y-4 text-zinc-300">
                        {p
                            .profile
                            .intro
                            .iter()
                            .enumerate()
                            .map(|(i, line)| {
                                view! {
                                    <div class="flex gap-4 items-center hover:bg-zinc-800/50 p-2 rounded transition-colors">
                                        <span class="text-zinc-600 select-none">
                                            {format!("{:02}", i + 1)}
                                        </span>
                                        <span>{line.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </WindowFrame>
                <div class="space-y-6">
                    <WindowFrame title="skills.json">
                        <div class="space-y-6">
                            {p
                                .skill_groups
                                .iter()
                                .map(|group| {
                                    view! {
                                        <div>
                                            <h3 class=format!(
                                                "text-{} mb-4 font-semibold flex items-center gap-2",
                                                group.accent,
                                            )>
                                                <span class=format!(
                                                    "w-2 h-2 bg-{} rounded-full",
                                                    group.accent,
                                                ) />
                                                {group.title.clone()}
                                            </h3>
                                            <div class="flex flex-wrap gap-3">
                                                {group
                                                    .skills
                                                    .iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class="px-3 py-1.5 bg-zinc-800/70 rounded-lg text-sm text-zinc-300 hover:bg-zinc-700/70 hover:scale-105 transition cursor-default">
                                                                {skill.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </WindowFrame>
                    <WindowFrame title="achievements.md">
                        <div class="space-y-4">
                            {p
                                .achievements
                                .iter()
                                .map(|a| {
                                    view! {
                                        <div class="flex items-center gap-3 p-2 hover:bg-zinc-800/50 hover:translate-x-1 rounded-lg transition">
                                            <span class="text-xl">{a.icon.clone()}</span>
                                            <span class=format!(
                                                "text-{} font-medium",
                                                a.accent,
                                            )>{a.text.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </WindowFrame>
                </div>
            </div>
        </section>
    }
}
