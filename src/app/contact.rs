use leptos::{either::Either, prelude::*};

use super::window::WindowFrame;
use crate::{
    content::{portfolio, ContactEntry, FieldKind, FormField},
    section::Section,
    state::UiState,
};

const FIELD_CLASS: &str = "w-full px-3 py-2 bg-zinc-800 border border-zinc-700 rounded-md text-white focus:outline-none focus:ring-2 focus:ring-green-500 placeholder:text-zinc-600";

#[component]
pub fn Contact() -> impl IntoView {
    let state = expect_context::<RwSignal<UiState>>();
    let p = portfolio();

    view! {
        <section id=Section::Contact.id() class="py-20">
            <h2 class=move || {
                format!(
                    "text-3xl font-bold mb-8 text-center {}",
                    state.with(|s| s.theme().heading_text()),
                )
            }>"Contact"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <WindowFrame title="contact-form.jsx" active=true>
                    // no submit target: delivery belongs to an external form service
                    <form class="space-y-4">
                        {p.form.fields.iter().map(|field| view! { <FormInput field /> }).collect_view()}
                        <button
                            type="submit"
                            class="w-full bg-green-500 text-black font-bold py-3 px-4 rounded-md hover:bg-green-400 hover:scale-[1.02] active:scale-[0.98] transition flex items-center justify-center gap-2"
                        >
                            <i class="extra-email" />
                            {p.form.submit_label.clone()}
                        </button>
                    </form>
                    <div class="pt-4 border-t border-zinc-800 mt-4">
                        <div class="flex items-center gap-2 text-sm text-zinc-400">
                            <i class="extra-clock" />
                            <span>{p.form.response_note.clone()}</span>
                        </div>
                    </div>
                </WindowFrame>
                <WindowFrame title="me-online.sh">
                    <div class="space-y-6">
                        <div class="space-y-4">
                            {p.contact.iter().map(|entry| view! { <ContactLine entry /> }).collect_view()}
                        </div>
                        <div class="pt-4 border-t border-zinc-800">
                            <div class="space-y-4">
                                {p
                                    .socials
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <div class="group flex items-center gap-4 p-2 rounded-md hover:bg-zinc-800/50 hover:translate-x-1 transition">
                                                <i class=format!(
                                                    "{} text-zinc-400 group-hover:text-green-500 transition-colors",
                                                    social.icon,
                                                ) />
                                                <a
                                                    href=social.href.clone()
                                                    class="text-zinc-300 group-hover:text-green-500 transition-colors"
                                                >
                                                    {social.label.clone()}
                                                </a>
                                                <span class="text-zinc-600 group-hover:text-green-500 transition-colors ml-auto">
                                                    "↗"
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="pt-4 border-t border-zinc-800">
                            <div class="flex items-center gap-3 p-2 animate-pulse">
                                <div class="relative">
                                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                                    <div class="absolute inset-0 w-3 h-3 rounded-full bg-green-500 animate-ping"></div>
                                </div>
                                <span class="text-zinc-300">{p.availability.clone()}</span>
                            </div>
                        </div>
                    </div>
                </WindowFrame>
            </div>
        </section>
    }
}

#[component]
fn FormInput(field: &'static FormField) -> impl IntoView {
    let input = match field.kind {
        FieldKind::Textarea => Either::Left(view! {
            <textarea
                id=field.id.clone()
                name=field.id.clone()
                rows="4"
                placeholder=field.placeholder.clone()
                class=FIELD_CLASS
                required=true
            ></textarea>
        }),
        kind => Either::Right(view! {
            <input
                type=kind.input_type()
                id=field.id.clone()
                name=field.id.clone()
                placeholder=field.placeholder.clone()
                class=FIELD_CLASS
                required=true
            />
        }),
    };
    view! {
        <div>
            <label for=field.id.clone() class="block text-sm font-medium text-zinc-400 mb-1">
                {field.label.clone()}
            </label>
            {input}
        </div>
    }
}

#[component]
fn ContactLine(entry: &'static ContactEntry) -> impl IntoView {
    match entry.href.as_ref() {
        Some(href) => Either::Left(view! {
            <div class="group flex items-center gap-4 p-2 rounded-md hover:bg-zinc-800/50 hover:translate-x-1 transition">
                <i class=format!(
                    "{} text-zinc-400 group-hover:text-green-500 transition-colors",
                    entry.icon,
                ) />
                <a href=href.clone() class="text-zinc-300 group-hover:text-green-500 transition-colors">
                    {entry.label.clone()}
                </a>
            </div>
        }),
        None => Either::Right(view! {
            <div class="flex items-center gap-4 p-2 rounded-md">
                <i class=format!("{} text-zinc-400", entry.icon) />
                <span class="text-zinc-300">{entry.label.clone()}</span>
            </div>
        }),
    }
}
