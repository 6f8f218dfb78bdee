// Hover glow and cursor across pointer trajectories.

mod common;

use common::*;
use room_core::{Category, Cursor, HighlightState};

fn lit(state: &HighlightState) -> usize {
    Category::ALL
        .into_iter()
        .filter(|c| state.level(*c) > 0.0)
        .count()
}

#[test]
fn direct_apply_lights_only_the_hovered_category() {
    let mut h = HighlightState::default();
    assert_eq!(h.apply(Some(Category::Mirror)), Cursor::Pointer);
    assert_eq!(h.level(Category::Mirror), Category::Mirror.profile().highlight);
    assert_eq!(h.apply(Some(Category::Papers)), Cursor::Pointer);
    assert_eq!(h.level(Category::Mirror), 0.0);
    assert_eq!(h.active(), Some(Category::Papers));
    assert_eq!(h.apply(None), Cursor::Default);
    assert_eq!(lit(&h), 0);
    assert_eq!(h.emissive(None), 0.0);
}

#[test]
fn pointer_trajectory_never_lights_two_objects() {
    let mut d = loaded_dispatcher();
    let papers = pixel_of(&d, PAPERS_POINT);
    let agent = pixel_of(&d, AGENT_HEAD);

    let mut seen = Vec::new();
    for (px, py) in [papers, (640.0, 5.0), agent, papers, agent, (-30.0, -30.0)] {
        let cursor = d.pointer_moved(px, py);
        let h = &d.context().highlight;
        assert!(lit(h) <= 1);
        assert_eq!(cursor, h.cursor());
        assert_eq!(cursor == Cursor::Pointer, h.active().is_some());
        seen.push(h.active());
    }
    assert_eq!(
        seen,
        vec![
            Some(Category::Papers),
            None,
            Some(Category::Agent),
            Some(Category::Papers),
            Some(Category::Agent),
            None,
        ]
    );
}

#[test]
fn hover_is_cleared_while_overlay_is_open() {
    let mut d = loaded_dispatcher();
    let papers = pixel_of(&d, PAPERS_POINT);
    d.clicked(papers.0, papers.1, 0.0).unwrap();
    run_frames(&mut d, 0.0, 3000.0);
    assert_eq!(d.context().open_overlay, Some(Category::Papers));

    assert_eq!(d.pointer_moved(papers.0, papers.1), Cursor::Default);
    assert_eq!(d.context().highlight.active(), None);
}

#[test]
fn glow_is_dropped_when_the_overlay_opens_without_pointer_moves() {
    let mut d = loaded_dispatcher();
    let papers = pixel_of(&d, PAPERS_POINT);
    assert_eq!(d.pointer_moved(papers.0, papers.1), Cursor::Pointer);
    assert_eq!(d.context().highlight.active(), Some(Category::Papers));

    d.clicked(papers.0, papers.1, 0.0).unwrap();
    assert_eq!(d.context().highlight.active(), None);
    run_frames(&mut d, 0.0, 3000.0);

    assert_eq!(d.context().open_overlay, Some(Category::Papers));
    assert_eq!(d.context().highlight.active(), None);
    assert_eq!(d.context().highlight.cursor(), Cursor::Default);
    assert_eq!(d.context().highlight.emissive(Some(Category::Papers)), 0.0);
}
