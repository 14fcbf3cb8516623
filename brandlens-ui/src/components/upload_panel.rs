//! Image upload panel: file input, preview, tolerance, analyze button.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlInputElement};

/// Upload control and analysis trigger.
///
/// The chosen file is read into a data URL with `FileReader`; the parent
/// owns the resulting state.
#[component]
pub fn UploadPanel(
    /// Data URL of the currently selected image (None = nothing selected)
    #[prop(into)]
    selected_image: Signal<Option<String>>,
    /// Called with the data URL once a chosen file has been read
    #[prop(into)]
    on_image_loaded: Callback<String>,
    /// Current matching tolerance
    #[prop(into)]
    tolerance: Signal<f64>,
    /// Called when the user edits the tolerance input with a valid value
    #[prop(into)]
    on_tolerance_change: Callback<f64>,
    /// Runs the analysis for the current image
    #[prop(into)]
    on_analyze: Callback<()>,
) -> impl IntoView {
    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let Ok(reader) = FileReader::new() else {
            log::warn!("FileReader unavailable");
            return;
        };

        let reader_in_handler = reader.clone();
        let on_load = Closure::once(move |_: web_sys::ProgressEvent| {
            match reader_in_handler.result() {
                Ok(value) => {
                    if let Some(data_url) = value.as_string() {
                        on_image_loaded.call(data_url);
                    } else {
                        log::warn!("FileReader produced a non-string result");
                    }
                }
                Err(e) => log::warn!("Failed to read selected file: {e:?}"),
            }
        });
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        if let Err(e) = reader.read_as_data_url(&file) {
            log::warn!("Failed to start reading file: {e:?}");
        }
    };

    let on_tolerance_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<f64>() {
            Ok(tolerance) if tolerance.is_finite() && tolerance >= 0.0 => {
                on_tolerance_change.call(tolerance);
            }
            _ => log::debug!("Ignoring invalid tolerance input: {value:?}"),
        }
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-xl font-semibold">"Upload Image"</h2>
            <div class="space-y-2">
                <label class="block text-sm" for="image">"Select an image"</label>
                <input
                    id="image"
                    type="file"
                    accept="image/*"
                    class="block w-full text-sm"
                    on:change=on_file_change
                />
            </div>
            {move || {
                selected_image
                    .get()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt="Selected image"
                                class="max-h-64 w-full object-contain rounded-md"
                            />
                        }
                    })
            }}
            <div class="space-y-2">
                <label class="block text-sm" for="tolerance">"Matching tolerance"</label>
                <input
                    id="tolerance"
                    type="number"
                    min="0"
                    step="1"
                    class="block w-24 rounded border px-2 py-1"
                    prop:value=move || tolerance.get().to_string()
                    on:change=on_tolerance_input
                />
            </div>
            <button
                class="w-full px-4 py-2 rounded-lg bg-stone-800 text-white disabled:opacity-50"
                disabled=move || selected_image.get().is_none()
                on:click=move |_| on_analyze.call(())
            >
                "Analyze Image"
            </button>
        </div>
    }
}
