use viewer_core::{decode_glb, LoadError, LoadOutcome, LoadProgress, MaterialOverride};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> LoadError {
    LoadError::Fetch(format!("{:?}", e))
}

/// Fetch and decode the model at `url`. Runs to completion; never retried.
pub async fn fetch_model(url: &str, material: MaterialOverride) -> LoadOutcome {
    fetch_bytes(url)
        .await
        .and_then(|bytes| decode_glb(&bytes, material))
        .into()
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let window = web::window().ok_or_else(|| LoadError::Fetch("no window".to_string()))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        return Err(LoadError::Fetch(format!(
            "HTTP {} {}",
            resp.status(),
            resp.status_text()
        )));
    }
    let total = resp
        .headers()
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|s| s.parse::<u64>().ok());

    let Some(body) = resp.body() else {
        let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        let bytes = js_sys::Uint8Array::new(&buf).to_vec();
        LoadProgress {
            loaded: bytes.len() as u64,
            total,
        }
        .log();
        return Ok(bytes);
    };

    // Stream the body so progress can be reported per chunk
    let reader: web::ReadableStreamDefaultReader = body.get_reader().unchecked_into();
    let mut bytes = Vec::with_capacity(total.unwrap_or(0) as usize);
    loop {
        let chunk = JsFuture::from(reader.read()).await.map_err(js_err)?;
        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .map_err(js_err)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }
        let value = js_sys::Reflect::get(&chunk, &JsValue::from_str("value")).map_err(js_err)?;
        let arr = js_sys::Uint8Array::new(&value);
        let start = bytes.len();
        bytes.resize(start + arr.length() as usize, 0);
        arr.copy_to(&mut bytes[start..]);
        LoadProgress {
            loaded: bytes.len() as u64,
            total,
        }
        .log();
    }
    Ok(bytes)
}
