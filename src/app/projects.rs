use leptos::prelude::*;

use super::window::{Chip, WindowFrame};
use crate::{content::portfolio, section::Section, state::UiState};

#[component]
pub fn Projects() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let theme = move || state.with(UiState::theme);

    view! {
        <section id=Section::Projects.id() class="py-20">
            <h2 class=move || {
                format!("text-3xl font-bold mb-8 text-center {}", theme().heading_text())
            }>"Projects"</h2>
            <WindowFrame title="projects.json" active=true>
                <div class="space-y-8">
                    {portfolio()
                        .projects
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="group hover:scale-[1.02] transition-transform">
                                    <div class="flex items-center justify-between mb-2">
                                        <div class="flex items-center gap-4">
                                            <span class="text-zinc-600 font-mono">{project.id.clone()}</span>
                                            <h3 class=move || {
                                                format!(
                                                    "text-2xl font-bold group-hover:text-green-500 transition-colors {}",
                                                    theme().heading_text(),
                                                )
                                            }>{project.title.clone()}</h3>
                                        </div>
                                        <span class="text-zinc-600">{project.year.clone()}</span>
                                    </div>
                                    <p class=move || {
                                        format!("mb-4 {}", theme().muted_text())
                                    }>{project.description.clone()}</p>
                                    <div class="flex gap-2 flex-wrap">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|t| view! { <Chip text=t.clone() /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </WindowFrame>
        </section>
    }
}
