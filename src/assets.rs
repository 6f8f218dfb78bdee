use crate::SharedDispatcher;
use room_core::{AssetKind, SceneConfig, SceneDescriptor, SceneError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start every descriptor fetch at once. Each settles on its own; the room
/// (primary) additionally releases the loading screen.
pub fn load_all(dispatcher: &SharedDispatcher, config: &SceneConfig) {
    for kind in AssetKind::ALL {
        let url = config.asset_url(kind.file_name());
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            log::debug!("[assets] fetching {}", url);
            let result = fetch_text(kind, &url).await;
            let mut d = dispatcher.borrow_mut();
            let desc = result.and_then(|(text, total)| {
                d.asset_progress(kind, text.len() as u64, total);
                SceneDescriptor::from_json(kind, &text)
            });
            match desc {
                Ok(desc) => {
                    // mount failures are already recorded by the dispatcher
                    _ = d.asset_loaded(kind, &desc);
                }
                Err(e) => d.asset_failed(kind, e),
            }
        });
    }
}

fn load_error(kind: AssetKind, reason: impl Into<String>) -> SceneError {
    SceneError::AssetLoad {
        asset: kind.name(),
        reason: reason.into(),
    }
}

async fn fetch_text(kind: AssetKind, url: &str) -> Result<(String, Option<u64>), SceneError> {
    let window = web::window().ok_or_else(|| load_error(kind, "no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| load_error(kind, format!("{:?}", e)))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| load_error(kind, format!("{:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|_| load_error(kind, "fetch did not return a Response"))?;
    if !resp.ok() {
        return Err(load_error(
            kind,
            format!("HTTP {} {}", resp.status(), resp.status_text()),
        ));
    }
    let total = resp
        .headers()
        .get("content-length")
        .ok()
        .flatten()
        .and_then(|v| v.parse().ok());
    let text = JsFuture::from(resp.text().map_err(|e| load_error(kind, format!("{:?}", e)))?)
        .await
        .map_err(|e| load_error(kind, format!("{:?}", e)))?;
    let text = text
        .as_string()
        .ok_or_else(|| load_error(kind, "response body is not text"))?;
    Ok((text, total))
}
