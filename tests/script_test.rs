//! Loading verb scripts from disk and rendering them.

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use twiml::script::{self, ScriptFormat};
use twiml::ScriptError;

fn scripts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/scripts")
}

#[test]
fn test_yaml_script_renders_expected_document() {
    let resp = script::load_file(&scripts_dir().join("ivr.yaml"), None).expect("load ivr.yaml");
    assert_eq!(resp.verbs.len(), 4);

    let expected = std::fs::read_to_string(scripts_dir().join("ivr.xml")).expect("read ivr.xml");
    assert_eq!(resp.to_xml_string().unwrap(), expected.trim_end());
}

#[test]
fn test_json_script_from_temp_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    write!(
        file,
        r#"{{"verbs": [{{"Reject": {{"reason": "rejected"}}}}]}}"#
    )
    .unwrap();

    let resp = script::load_file(file.path(), None).unwrap();
    assert_eq!(
        resp.to_xml_string().unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n  <Reject reason=\"rejected\"></Reject>\n</Response>"
    );
}

#[test]
fn test_explicit_format_overrides_extension() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "verbs:\n  - Pause:\n      length: 3\n").unwrap();

    assert!(matches!(
        script::load_file(file.path(), None),
        Err(ScriptError::UnsupportedFormat(_))
    ));
    let resp = script::load_file(file.path(), Some(ScriptFormat::Yaml)).unwrap();
    assert_eq!(resp.verbs[0].element_name(), "Pause");
}

#[test]
fn test_missing_file() {
    let err = script::load_file(&scripts_dir().join("missing.yaml"), None).unwrap_err();
    assert!(matches!(err, ScriptError::Io(_)));
}

#[test]
fn test_reader_input() {
    let resp = script::from_reader(
        r#"{"verbs": [{"Say": {"message": "hi", "loop": 2}}]}"#.as_bytes(),
        ScriptFormat::Json,
    )
    .unwrap();
    assert_eq!(
        resp.to_xml_string().unwrap(),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n  <Say loop=\"2\">hi</Say>\n</Response>"
    );
}
