//! Page assembly: brand palette, upload panel, analysis report.

use crate::components::{ColorCard, ReportView, UploadPanel};
use crate::hooks::{load_settings, save_settings, PersistedSettings};
use crate::sampler::sample_colors;
use brandlens_core::{validate_with_tolerance, BrandPalette, SampledColor, ValidationReport};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let palette = BrandPalette::brand_default();

    let initial = load_settings().unwrap_or_default();
    let (tolerance, set_tolerance) = create_signal(initial.tolerance);
    let (selected_image, set_selected_image) = create_signal(None::<String>);
    let (samples, set_samples) = create_signal(Vec::<SampledColor>::new());
    let (report, set_report) = create_signal(None::<ValidationReport>);
    let (error, set_error) = create_signal(None::<String>);

    // Persist the tolerance whenever it changes.
    create_effect(move |_| {
        save_settings(&PersistedSettings::new(tolerance.get()));
    });

    let analysis_palette = palette.clone();
    let on_analyze = move |()| {
        let Some(data_url) = selected_image.get_untracked() else {
            return;
        };
        let palette = analysis_palette.clone();
        let tolerance = tolerance.get_untracked();
        spawn_local(async move {
            match sample_colors(&data_url).await {
                Ok(sampled) => {
                    let result = validate_with_tolerance(&sampled, &palette, tolerance);
                    log::info!(
                        "Analyzed {} samples: compliant={}, contrast issues={}",
                        sampled.len(),
                        result.color_compliance,
                        result.accessibility_issues.len()
                    );
                    set_samples.set(sampled);
                    set_report.set(Some(result));
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("Sampling failed: {e:?}");
                    set_error.set(Some("Could not read colors from that image.".to_string()));
                }
            }
        });
    };

    let on_image_loaded = move |data_url: String| {
        set_selected_image.set(Some(data_url));
        set_samples.set(Vec::new());
        set_report.set(None);
        set_error.set(None);
    };

    let palette_cards = palette
        .categories
        .iter()
        .flat_map(|category| category.colors.iter())
        .map(|color| view! { <ColorCard name=color.name.clone() hex=color.hex() /> })
        .collect_view();

    view! {
        <div class="min-h-screen p-8 bg-amber-50">
            <div class="max-w-4xl mx-auto space-y-8">
                <div class="text-center space-y-2">
                    <h1 class="text-3xl font-bold">"Color Matcher"</h1>
                    <p class="text-lg text-stone-500">
                        "Upload an image to match it with our brand colors"
                    </p>
                </div>

                <div class="p-6 rounded-xl bg-amber-100 space-y-4">
                    <h2 class="text-xl font-semibold">"Our Brand Colors"</h2>
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">{palette_cards}</div>
                </div>

                <div class="p-6 rounded-xl bg-amber-100">
                    <UploadPanel
                        selected_image=selected_image
                        on_image_loaded=on_image_loaded
                        tolerance=tolerance
                        on_tolerance_change=move |t| set_tolerance.set(t)
                        on_analyze=on_analyze
                    />
                </div>

                {move || error.get().map(|message| view! { <p class="text-red-700">{message}</p> })}

                <div class="p-6 rounded-xl bg-amber-100">
                    <ReportView samples=samples report=report />
                </div>
            </div>
        </div>
    }
}
