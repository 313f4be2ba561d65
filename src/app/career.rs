use leptos::prelude::*;

use super::window::{Chip, WindowFrame};
use crate::{
    content::{portfolio, CareerEntry},
    section::Section,
    state::UiState,
};

#[component]
pub fn Career() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let profile = &portfolio().profile;
    let active = Signal::derive(move || state.with(|s| s.is_active(Section::Career)));

    view! {
        <section id=Section::Career.id() class="py-20">
            <div class="flex items-center justify-between mb-8">
                <h2 class=move || {
                    format!(
                        "text-3xl font-bold text-center {}",
                        state.with(|s| s.theme().heading_text()),
                    )
                }>{Section::Career.nav_label()}</h2>
                <a
                    href=profile.resume_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-4 py-2 bg-zinc-800 rounded-lg text-green-500 hover:bg-zinc-700 hover:scale-105 active:scale-95 transition duration-300 border border-green-500/20"
                >
                    <i class="extra-file" />
                    <span class="font-mono text-sm">{profile.resume_file.clone()}</span>
                </a>
            </div>
            <WindowFrame title="career.json" active>
                <div class="space-y-12">
                    {portfolio()
                        .career
                        .iter()
                        .map(|entry| view! { <Milestone entry /> })
                        .collect_view()}
                </div>
            </WindowFrame>
        </section>
    }
}

#[component]
fn Milestone(entry: &'static CareerEntry) -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let theme = move || state.with(UiState::theme);
    let accent = entry.accent.as_str();

    view! {
        <div class=format!(
            "relative pl-8 border-l-2 border-{accent}/20 hover:scale-[1.02] transition-transform",
        )>
            <div class="absolute -left-[9px] top-0">
                <div class=format!("w-4 h-4 rounded-full bg-{accent}") />
            </div>
            <div class="space-y-4">
                <div class="flex justify-between items-center">
                    <h3 class=move || {
                        format!("text-xl font-bold {}", theme().heading_text())
                    }>{entry.title.clone()}</h3>
                    <span class=format!("text-{accent} font-mono text-sm")>{entry.period.clone()}</span>
                </div>
                <div class="flex items-center gap-2">
                    <span class=move || {
                        format!("font-semibold {}", theme().strong_text())
                    }>{entry.organization.clone()}</span>
                    <span class="text-zinc-500">"•"</span>
                    <span class="text-zinc-500">{entry.location.clone()}</span>
                </div>
                {(!entry.highlights.is_empty())
                    .then(|| {
                        view! {
                            <ul class="space-y-3 text-zinc-400">
                                {entry
                                    .highlights
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <li class="flex gap-2">
                                                <span class=format!("text-{accent}")>"→"</span>
                                                <span>{h.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })}
                {entry
                    .detail
                    .as_ref()
                    .map(|d| {
                        view! {
                            <div class="text-zinc-400">
                                <span class=format!(
                                    "text-{accent} font-semibold",
                                )>{d.label.clone()}</span>
                                " "
                                {d.value.clone()}
                            </div>
                        }
                    })}
                <div class="flex flex-wrap gap-2 pt-2">
                    {entry.tags.iter().map(|t| view! { <Chip text=t.clone() /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
