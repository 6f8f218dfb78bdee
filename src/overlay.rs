//! DOM panels over the canvas: the loading screen, one panel per category and
//! the papers sub-menu. The typewriter panel types its text out while open.

use crate::audio::WebSounds;
use crate::constants::*;
use crate::dom;
use room_core::constants::REVEAL_SOUND_VOLUME;
use room_core::{Category, OverlayHost, OverlayPanel, SoundBoard, SoundCue, TypewriterReveal};
use web_sys as web;

fn panel_id(panel: OverlayPanel) -> &'static str {
    match panel {
        OverlayPanel::PapersSelection => PAPERS_SELECTION_ID,
        OverlayPanel::Documentation => DOCUMENTATION_PANEL_ID,
        OverlayPanel::Team => TEAM_PANEL_ID,
        OverlayPanel::Tokenomics => TOKENOMICS_PANEL_ID,
        OverlayPanel::Social => SOCIAL_PANEL_ID,
        OverlayPanel::Typewriter => TYPEWRITER_PANEL_ID,
        OverlayPanel::AgentProfile => AGENT_PANEL_ID,
    }
}

pub struct WebOverlays {
    document: web::Document,
    sounds: WebSounds,
    open_panel: Option<OverlayPanel>,
    reveal: Option<TypewriterReveal>,
}

impl WebOverlays {
    pub fn new(document: web::Document, sounds: WebSounds) -> Self {
        // Start from a clean slate whatever the markup says.
        for panel in OverlayPanel::ALL {
            dom::hide(&document, panel_id(panel));
        }
        Self {
            document,
            sounds,
            open_panel: None,
            reveal: None,
        }
    }

    fn show_panel(&mut self, panel: OverlayPanel) {
        if let Some(current) = self.open_panel.take() {
            dom::hide(&self.document, panel_id(current));
        }
        dom::show(&self.document, panel_id(panel));
        self.open_panel = Some(panel);
    }

    /// Switch from the papers selection to one of its documents.
    pub fn open_document(&mut self, panel: OverlayPanel) {
        if !panel.is_papers_document() {
            return;
        }
        if self.open_panel.map(OverlayPanel::owner) != Some(Category::Papers) {
            return;
        }
        log::info!("[overlay] papers -> {:?}", panel);
        self.show_panel(panel);
    }

    /// Back from a papers document to the selection menu.
    pub fn back_to_selection(&mut self) {
        if self.open_panel.is_some_and(OverlayPanel::is_papers_document) {
            self.show_panel(OverlayPanel::PapersSelection);
        }
    }
}

impl OverlayHost for WebOverlays {
    fn open(&mut self, category: Category, now_ms: f64) {
        let panel = category.profile().panel;
        self.show_panel(panel);
        if panel == OverlayPanel::Typewriter {
            dom::set_text(&self.document, TYPEWRITER_TEXT_ID, "");
            self.reveal = Some(TypewriterReveal::new(
                TYPEWRITER_TEXT,
                now_ms,
                rand::random(),
            ));
        }
    }

    fn close(&mut self, category: Category) {
        for panel in OverlayPanel::ALL {
            if panel.owner() == category {
                dom::hide(&self.document, panel_id(panel));
            }
        }
        self.open_panel = None;
        self.reveal = None;
    }

    fn hide_loading(&mut self) {
        dom::hide(&self.document, LOADING_SCREEN_ID);
    }

    fn show_loading_error(&mut self, message: &str) {
        dom::set_text(&self.document, LOADING_TEXT_ID, message);
    }

    fn tick(&mut self, now_ms: f64) {
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };
        let step = reveal.step(now_ms);
        if step.revealed > 0 {
            dom::set_text(&self.document, TYPEWRITER_TEXT_ID, &reveal.visible_text());
        }
        for _ in 0..step.key_sounds {
            if let Err(e) = self.sounds.play(SoundCue::TypewriterKey, REVEAL_SOUND_VOLUME) {
                log::debug!("[audio] {}", e);
            }
        }
        if reveal.is_finished() {
            self.reveal = None;
        }
    }
}
