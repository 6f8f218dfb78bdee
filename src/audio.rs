use crate::constants::{AGENT_SOUND_ID, GLASS_SOUND_ID, PAPER_SOUND_ID, TYPEWRITER_SOUND_ID};
use room_core::{SceneError, SoundBoard, SoundCue};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn element_id(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Paper => PAPER_SOUND_ID,
        SoundCue::Glass => GLASS_SOUND_ID,
        SoundCue::TypewriterKey => TYPEWRITER_SOUND_ID,
        SoundCue::Agent => AGENT_SOUND_ID,
    }
}

/// Sound effects backed by the page's `<audio>` elements.
#[derive(Clone)]
pub struct WebSounds {
    document: web::Document,
    muted: bool,
    // Unlocks autoplay; resumed on the first user click.
    unlock: Option<web::AudioContext>,
}

impl WebSounds {
    pub fn new(document: web::Document, muted: bool) -> Self {
        let unlock = match web::AudioContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                None
            }
        };
        Self {
            document,
            muted,
            unlock,
        }
    }

    /// Resume the audio context if the browser suspended it.
    pub fn resume(&self) {
        if let Some(ctx) = &self.unlock {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
                log::debug!("[audio] context resumed");
            }
        }
    }

    fn audio_element(&self, cue: SoundCue) -> Result<web::HtmlAudioElement, SceneError> {
        self.document
            .get_element_by_id(element_id(cue))
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
            .ok_or_else(|| SceneError::AudioPlayback {
                cue: cue.name(),
                reason: format!("no <audio id=\"{}\">", element_id(cue)),
            })
    }
}

impl SoundBoard for WebSounds {
    fn play(&mut self, cue: SoundCue, volume: f32) -> room_core::Result<()> {
        if self.muted {
            return Ok(());
        }
        let audio = self.audio_element(cue)?;
        audio.set_volume(volume.clamp(0.0, 1.0) as f64);
        audio.set_current_time(0.0);
        let promise = audio.play().map_err(|e| SceneError::AudioPlayback {
            cue: cue.name(),
            reason: format!("{:?}", e),
        })?;
        // Autoplay rejections arrive asynchronously; they are logged, never fatal.
        let name = cue.name();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] {}", play_rejection(name, &e));
            }
        });
        Ok(())
    }
}

fn play_rejection(cue: &'static str, e: &JsValue) -> SceneError {
    SceneError::AudioPlayback {
        cue,
        reason: e
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .unwrap_or_else(|| format!("{:?}", e)),
    }
}
