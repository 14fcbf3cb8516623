//! Palette swatch card.

use leptos::*;

/// A single brand color: swatch, display name, hex label.
#[component]
pub fn ColorCard(
    /// Display name, e.g. "Primary Red"
    name: String,
    /// Canonical hex string, e.g. "#FF0000"
    hex: String,
) -> impl IntoView {
    let swatch_style = format!("background-color: {hex};");
    view! {
        <div class="p-4 rounded-lg space-y-2 text-center bg-stone-50">
            <div class="w-full aspect-square rounded-md border-2 border-stone-200" style=swatch_style></div>
            <div>
                <p class="font-medium">{name}</p>
                <p class="text-sm text-stone-500">{hex}</p>
            </div>
        </div>
    }
}
