//! Sampled colors and the validation report, rendered as swatches plus
//! pretty-printed JSON.

use brandlens_core::{SampledColor, ValidationReport};
use leptos::*;

#[component]
pub fn ReportView(
    /// Colors read from the uploaded image, in sampling order
    #[prop(into)]
    samples: Signal<Vec<SampledColor>>,
    /// Latest validation report (None = nothing analyzed yet)
    #[prop(into)]
    report: Signal<Option<ValidationReport>>,
) -> impl IntoView {
    let summary = move || {
        report.get().map(|r| {
            if r.color_compliance && r.accessibility_issues.is_empty() {
                (
                    "All sampled colors are on brand.".to_string(),
                    "font-medium text-green-700",
                )
            } else {
                (
                    format!(
                        "{} off-brand color(s), {} contrast issue(s).",
                        r.color_errors.len(),
                        r.accessibility_issues.len()
                    ),
                    "font-medium text-red-700",
                )
            }
        })
    };

    let report_json = move || {
        report.get().map(|r| {
            serde_json::to_string_pretty(&r).unwrap_or_else(|e| format!("failed to render report: {e}"))
        })
    };

    view! {
        <div class="space-y-4">
            <Show when=move || !samples.get().is_empty()>
                <h2 class="text-xl font-semibold">"Sampled Colors"</h2>
                <div class="flex flex-wrap gap-3">
                    <For
                        each=move || samples.get()
                        key=|sample| (sample.color.clone(), sample.location.clone())
                        children=|sample| {
                            let swatch_style = format!("background-color: {};", sample.color);
                            view! {
                                <div class="text-center text-xs space-y-1">
                                    <div
                                        class="w-12 h-12 rounded-md border-2 border-stone-200"
                                        style=swatch_style
                                    ></div>
                                    <p class="font-medium">{sample.color.clone()}</p>
                                    <p class="text-stone-500">
                                        {sample.element.clone().unwrap_or_default()}
                                    </p>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
            {move || {
                summary().map(|(text, class)| view! { <p class=class>{text}</p> })
            }}
            {move || {
                report_json()
                    .map(|json| {
                        view! {
                            <pre class="p-4 rounded-lg bg-stone-900 text-stone-100 text-xs overflow-x-auto">
                                {json}
                            </pre>
                        }
                    })
            }}
        </div>
    }
}
