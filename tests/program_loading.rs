//! Loading recorded call streams and reporting on them

use canonkit::{load_program, parse_program, Report, TranslationSession, ViewerConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const PROGRAM: &str = r#"[
    {"line": 10, "kind": "traverse", "to": {"x": 0, "y": 0, "z": 1}},
    {"line": 20, "kind": "feed", "to": {"x": 0, "y": 0, "z": -1}},
    {"line": 30, "kind": "arc_feed", "end": {"x": 2, "y": 0, "z": -1}, "center": [1, 0], "rotation": -1},
    {"line": 40, "kind": "tool_change", "z": 0.5},
    {"line": 50, "kind": "traverse", "to": {"x": 2, "y": 0, "z": 0.5}}
]"#;

#[test]
fn load_program_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PROGRAM.as_bytes()).unwrap();

    let records = load_program(file.path()).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[2].line, 30);
}

#[test]
fn missing_file_reports_path() {
    let err = load_program(std::path::Path::new("/nonexistent/program.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/program.json"));
}

#[test]
fn malformed_stream_is_an_error() {
    let err = parse_program(r#"[{"line": 1, "kind": "teleport"}]"#).unwrap_err();
    assert!(err.to_string().contains("Invalid call stream"));
}

#[test]
fn report_for_replayed_program() {
    let records = parse_program(PROGRAM).unwrap();
    let config = ViewerConfig::default();

    let mut session = TranslationSession::with_options(config.session_options());
    session.replay(&records);
    let report = Report::build(&session, Some(30), 45.0);

    assert_eq!(report.calls, 5);
    assert_eq!(report.stats.traverses, 1);
    assert_eq!(report.stats.feeds, 1);
    // Clockwise half circle from (0,0) to (2,0) about (1,0)
    assert_eq!(report.stats.arc_segments, 128);
    let selection = report.selection.as_ref().unwrap();
    assert_eq!(selection.segments, 128);

    // The tool change moves the drawn point from z=-1 to z=-1.5; the
    // nominal extents are unaffected
    assert_eq!(report.extents.drawn.min.z, -1.5);
    assert_eq!(report.extents.drawn.max.z, 1.0);
    assert_eq!(report.extents.nominal.min.z, -1.0);
    assert_eq!(report.extents.nominal.max.z, 1.0);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"selection\""));
}
