use leptos::prelude::*;

const FRAME_CLASS: &str =
    "bg-black/80 backdrop-blur-sm rounded-lg border border-zinc-800 overflow-hidden window-rise";

/// Faux terminal window: a title bar with three dots around a panel.
#[component]
pub fn WindowFrame(
    #[prop(into)] title: String,
    /// Highlights the frame.
    #[prop(into, optional)]
    active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            if active.get() {
                format!("{FRAME_CLASS} ring-1 ring-green-500/20")
            } else {
                FRAME_CLASS.to_string()
            }
        }>
            <div class="flex items-center justify-between px-4 py-2 border-b border-zinc-800">
                <span class="text-sm text-zinc-400 font-mono">{title}</span>
                <div class="flex gap-2">
                    <div class="w-3 h-3 rounded-full bg-zinc-600" />
                    <div class="w-3 h-3 rounded-full bg-zinc-600" />
                    <div class="w-3 h-3 rounded-full bg-red-500" />
                </div>
            </div>
            <div class="p-4">{children()}</div>
        </div>
    }
}

/// Rounded tag chip used for tech stacks and skills.
#[component]
pub fn Chip(#[prop(into)] text: String) -> impl IntoView {
    view! { <span class="px-2 py-1 rounded-full bg-zinc-800/50 text-xs text-zinc-400">{text}</span> }
}
