//! Pixel sampler: reads brand-check samples from an uploaded image.
//!
//! Decodes a data-URL image into an off-screen canvas and reads one pixel
//! at each of five fixed relative coordinates (the 20%/80% combinations
//! and the center), producing tagged [`SampledColor`]s for the comparator.

use brandlens_core::{Rgb, SampledColor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// A fixed relative sample coordinate with its role tags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    /// Horizontal position as a fraction of image width, in [0, 1]
    pub fx: f64,
    /// Vertical position as a fraction of image height, in [0, 1]
    pub fy: f64,
    /// Role label attached to the sample (`background`/`text` pairs
    /// participate in contrast checks)
    pub element: &'static str,
    /// Human-readable location for the report
    pub location: &'static str,
}

/// The five sample points.
pub const SAMPLE_POINTS: [SamplePoint; 5] = [
    SamplePoint {
        fx: 0.2,
        fy: 0.2,
        element: "header",
        location: "top-left (20%, 20%)",
    },
    SamplePoint {
        fx: 0.8,
        fy: 0.2,
        element: "background",
        location: "top-right (80%, 20%)",
    },
    SamplePoint {
        fx: 0.2,
        fy: 0.8,
        element: "text",
        location: "bottom-left (20%, 80%)",
    },
    SamplePoint {
        fx: 0.8,
        fy: 0.8,
        element: "button",
        location: "bottom-right (80%, 80%)",
    },
    SamplePoint {
        fx: 0.5,
        fy: 0.5,
        element: "background",
        location: "center (50%, 50%)",
    },
];

/// Pixel coordinate of a sample point within a `width` x `height` bitmap,
/// clamped inside the bitmap (so a 1x1 image samples its only pixel five
/// times).
pub fn sample_pixel(point: &SamplePoint, width: u32, height: u32) -> (u32, u32) {
    let clamp = |fraction: f64, extent: u32| {
        let index = (fraction * extent as f64).floor() as u32;
        index.min(extent.saturating_sub(1))
    };
    (clamp(point.fx, width), clamp(point.fy, height))
}

/// Decode `data_url` and sample the five fixed points.
///
/// Fails if the image cannot be decoded, decodes to an empty bitmap, or
/// the canvas context is unavailable.
pub async fn sample_colors(data_url: &str) -> Result<Vec<SampledColor>, JsValue> {
    let image = load_image(data_url).await?;
    let width = image.natural_width();
    let height = image.natural_height();
    if width == 0 || height == 0 {
        return Err(JsValue::from_str("image decoded to an empty bitmap"));
    }

    let ctx = offscreen_context(width, height)?;
    ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)?;

    let mut samples = Vec::with_capacity(SAMPLE_POINTS.len());
    for point in &SAMPLE_POINTS {
        let (x, y) = sample_pixel(point, width, height);
        let data = ctx.get_image_data(x as f64, y as f64, 1.0, 1.0)?.data();
        let hex = Rgb::new(data[0], data[1], data[2]).to_hex();
        log::debug!("sampled {hex} at {}", point.location);
        samples.push(
            SampledColor::new(hex)
                .with_element(point.element)
                .with_location(point.location),
        );
    }
    Ok(samples)
}

/// Create an off-screen 2d context of the given size.
fn offscreen_context(width: u32, height: u32) -> Result<CanvasRenderingContext2d, JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(width);
    canvas.set_height(height);

    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Load a data-URL into an image element, resolving once decode settles.
async fn load_image(data_url: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;

    // One channel shared by the load and error handlers; whichever fires
    // first takes the sender.
    let (sender, receiver) = futures::channel::oneshot::channel::<bool>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_load = {
        let sender = Rc::clone(&sender);
        Closure::once(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(true);
            }
        })
    };
    let on_error = {
        let sender = Rc::clone(&sender);
        Closure::once(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(false);
            }
        })
    };
    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(data_url);

    // Keep the handlers alive until one of them fires.
    on_load.forget();
    on_error.forget();

    match receiver.await {
        Ok(true) => Ok(image),
        Ok(false) => Err(JsValue::from_str("image failed to decode")),
        Err(_) => Err(JsValue::from_str("image load was cancelled")),
    }
}
