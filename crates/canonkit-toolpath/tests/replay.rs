//! Replay of a recorded call stream through a session

use approx::assert_relative_eq;
use canonkit_core::{GlyphAxis, Plane, Point3};
use canonkit_toolpath::{
    CameraFrame, CanonCall, CanonRecord, DrawList, Palette, SegmentKind, TranslationSession,
};

const PROGRAM: &str = r#"[
    {"line": 1, "kind": "comment", "text": "pocket corner"},
    {"line": 2, "kind": "feed_rate", "units_per_minute": 300},
    {"line": 3, "kind": "origin_offset", "offset": {"x": 10, "y": 10, "z": 0}},
    {"line": 4, "kind": "traverse", "to": {"x": 0, "y": 0, "z": 5}},
    {"line": 5, "kind": "traverse", "to": {"x": 1, "y": 0, "z": 5}},
    {"line": 6, "kind": "feed", "to": {"x": 1, "y": 0, "z": -1}},
    {"line": 7, "kind": "arc_feed", "end": {"x": 0, "y": 1, "z": -1}, "center": [0, 0], "rotation": 1},
    {"line": 8, "kind": "dwell", "seconds": 0.5},
    {"line": 9, "kind": "plane_select", "plane": "yz"},
    {"line": 10, "kind": "user_function", "number": 101},
    {"line": 11, "kind": "feed", "to": {"x": 0, "y": 1, "z": 5}, "feed_rate": 20},
    {"line": 12, "kind": "message", "text": "done"}
]"#;

fn load() -> Vec<CanonRecord> {
    serde_json::from_str(PROGRAM).unwrap()
}

#[test]
fn replays_recorded_program() {
    let records = load();
    assert_eq!(records.len(), 12);

    let mut session = TranslationSession::new();
    session.replay(&records);

    let buffer = session.buffer();
    assert_eq!(buffer.traverses().len(), 1);
    assert_eq!(buffer.feeds().len(), 2);
    assert_eq!(buffer.arc_segments().len(), 64);
    assert_eq!(buffer.dwells().len(), 2);

    // Origin offset applies to every target
    assert_eq!(buffer.traverses()[0].from, Point3::new(10.0, 10.0, 5.0));
    assert_eq!(buffer.feeds()[0].feed_rate, 5.0);
    assert_eq!(buffer.arc_segments()[0].feed_rate, 5.0);
    assert_eq!(buffer.feeds()[1].feed_rate, 20.0);

    assert_eq!(buffer.dwells()[0].axis, GlyphAxis::Z);
    assert_eq!(buffer.dwells()[1].axis, GlyphAxis::X);
    assert_eq!(buffer.dwells()[1].color, Palette::default().user_function);
    assert_eq!(session.translator().plane(), Plane::Yz);
    assert_eq!(session.stats().dwell_time, 0.5);
}

#[test]
fn line_numbers_are_non_decreasing_within_each_category() {
    let mut session = TranslationSession::new();
    session.replay(&load());

    let buffer = session.buffer();
    let sorted = |lines: Vec<u32>| lines.windows(2).all(|w| w[0] <= w[1]);
    assert!(sorted(buffer.traverses().iter().map(|e| e.line).collect()));
    assert!(sorted(buffer.feeds().iter().map(|e| e.line).collect()));
    assert!(sorted(buffer.arc_segments().iter().map(|e| e.line).collect()));
    assert!(sorted(buffer.dwells().iter().map(|e| e.line).collect()));
}

#[test]
fn selecting_the_arc_line() {
    let mut session = TranslationSession::new();
    session.replay(&load());

    let selection = session.select(7);
    assert_eq!(selection.segments.len(), 64);
    assert!(selection.segments.iter().all(|s| s.kind == SegmentKind::Arc));
    assert!(selection.markers.is_empty());

    // Quarter circle of radius 1 around (10, 10) at z=-1
    for s in &selection.segments {
        assert_relative_eq!(s.to.distance(Point3::new(10.0, 10.0, -1.0)), 1.0, epsilon = 1e-9);
    }

    let frame = session.frame_line(7, 45.0);
    assert!(frame.radius >= 0.5);
    assert_relative_eq!(frame.target.z, -1.0, epsilon = 1e-6);
}

#[test]
fn draw_list_and_picking_cover_every_segment() {
    let mut session = TranslationSession::new();
    session.replay(&load());

    let picking = DrawList::picking(session.buffer());
    let picked: usize = picking.iter().map(|b| b.vertices.len() / 2).sum();
    let segments = session.buffer().len() - session.buffer().dwells().len();
    assert_eq!(picked, segments);

    let list = session.draw_list();
    assert_eq!(list.glyphs.len(), 2);
    // Traverse, then the feed down, arc and feed up are continuous but live
    // in separate categories
    assert_eq!(list.stroke(SegmentKind::Arc).unwrap().strips.len(), 1);
    assert_eq!(list.stroke(SegmentKind::Feed).unwrap().strips.len(), 2);
}

#[test]
fn whole_program_frame_targets_drawn_center() {
    let mut session = TranslationSession::new();
    session.replay(&load());

    let drawn = session.extents().drawn;
    let frame = session.frame_all(45.0);
    let expected = CameraFrame::from_extents(&drawn, 45.0);
    assert_eq!(frame, expected);
}

#[test]
fn echo_matches_recorded_call() {
    let records = load();
    assert_eq!(records[7].call, CanonCall::Dwell { seconds: 0.5 });
    assert_eq!(records[7].call.to_string(), "dwell 0.500 seconds");
}
