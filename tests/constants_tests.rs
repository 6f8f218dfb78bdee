// Host-side tests for the front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique() {
    let ids = [
        SCENE_CONTAINER_ID,
        CANVAS_ID,
        LOADING_SCREEN_ID,
        LOADING_TEXT_ID,
        PAPERS_SELECTION_ID,
        DOCUMENTATION_PANEL_ID,
        TEAM_PANEL_ID,
        TOKENOMICS_PANEL_ID,
        SOCIAL_PANEL_ID,
        TYPEWRITER_PANEL_ID,
        TYPEWRITER_TEXT_ID,
        AGENT_PANEL_ID,
        OPEN_DOCUMENTATION_ID,
        OPEN_TEAM_ID,
        OPEN_TOKENOMICS_ID,
        PAPER_SOUND_ID,
        GLASS_SOUND_ID,
        TYPEWRITER_SOUND_ID,
        AGENT_SOUND_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "`{a}` is not a valid id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn page_declares_every_element() {
    let html = include_str!("../index.html");
    for id in [
        SCENE_CONTAINER_ID,
        LOADING_SCREEN_ID,
        LOADING_TEXT_ID,
        PAPERS_SELECTION_ID,
        DOCUMENTATION_PANEL_ID,
        TEAM_PANEL_ID,
        TOKENOMICS_PANEL_ID,
        SOCIAL_PANEL_ID,
        TYPEWRITER_PANEL_ID,
        TYPEWRITER_TEXT_ID,
        AGENT_PANEL_ID,
        OPEN_DOCUMENTATION_ID,
        OPEN_TEAM_ID,
        OPEN_TOKENOMICS_ID,
        PAPER_SOUND_ID,
        GLASS_SOUND_ID,
        TYPEWRITER_SOUND_ID,
        AGENT_SOUND_ID,
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "index.html lacks #{id}");
    }
    for class in [CLOSE_BUTTON_CLASS, BACK_BUTTON_CLASS, HIDDEN_CLASS] {
        assert!(html.contains(class), "index.html never uses .{class}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_is_sane() {
    assert!(AMBIENT_LIGHT > 0.0 && AMBIENT_LIGHT < 1.0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    // Lamp sits inside the room, above the desk.
    assert!(LIGHT_POSITION[1] > 1.2 && LIGHT_POSITION[1] < 3.2);
    assert!(SPHERE_SEGMENTS >= 3 && SPHERE_RINGS >= 2);
}

#[test]
fn typewriter_text_is_long_enough_to_type() {
    assert!(TYPEWRITER_TEXT.chars().count() > 20);
}
