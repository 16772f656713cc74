//! Image Preview Component
//!
//! File picker with a local preview. Images are read as a data URL in the
//! browser; nothing is sent until the form is submitted.

use ingredient_ledger::ImageUpload;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Read `file` as a data URL and store it as the selected image
fn read_image(file: web_sys::File, ctx: AppContext) {
    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            ctx.select_image(None);
            return;
        }
    };

    let file_name = file.name();
    let mime_type = file.type_();
    let loaded = reader.clone();
    let on_load = Closure::<dyn FnMut()>::new(move || {
        let data_url = loaded.result().ok().and_then(|value| value.as_string());
        ctx.select_image(data_url.map(|data_url| ImageUpload {
            file_name: file_name.clone(),
            mime_type: mime_type.clone(),
            data_url,
        }));
    });
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    if reader.read_as_data_url(&file).is_err() {
        ctx.select_image(None);
    }
}

#[component]
pub fn ImagePreview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        match file {
            Some(file) if ImageUpload::is_image_type(&file.type_()) => read_image(file, ctx),
            // Not an image (or nothing picked): clear the preview
            _ => ctx.select_image(None),
        }
    };

    view! {
        <input type="file" name="image" accept="image/*" id="image-input" on:change=on_change />
        <div id="image-preview">
            {move || ctx.selected_image.get().map(|image| view! {
                <img src=image.data_url alt="Preview" />
            })}
        </div>
    }
}
