//! Verb scripts: a [`Response`] written as YAML or JSON.
//!
//! ```yaml
//! verbs:
//!   - Say:
//!       message: Hello
//!       voice: alice
//!   - Gather:
//!       input: dtmf speech
//!       nested_verbs:
//!         - Play:
//!             url: https://example.org/menu.mp3
//!   - Hangup:
//! ```
//!
//! Verbs are single-key maps named after their element. Attribute values use
//! the same tokens the rendered document does.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::ScriptError;
use crate::verb::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Yaml,
    Json,
}

impl ScriptFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ScriptError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for ScriptFormat {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(ScriptFormat::Yaml),
            "json" => Ok(ScriptFormat::Json),
            other => Err(ScriptError::UnsupportedFormat(other.to_string())),
        }
    }
}

pub fn from_yaml_str(s: &str) -> Result<Response, ScriptError> {
    let de = serde_yaml::Deserializer::from_str(s);
    Ok(serde_yaml::with::singleton_map_recursive::deserialize(de)?)
}

pub fn from_json_str(s: &str) -> Result<Response, ScriptError> {
    Ok(serde_json::from_str(s)?)
}

pub fn from_str(s: &str, format: ScriptFormat) -> Result<Response, ScriptError> {
    match format {
        ScriptFormat::Yaml => from_yaml_str(s),
        ScriptFormat::Json => from_json_str(s),
    }
}

pub fn from_reader<R: Read>(mut reader: R, format: ScriptFormat) -> Result<Response, ScriptError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    from_str(&content, format)
}

/// Load a script, taking the format from the extension unless `format` is given.
pub fn load_file(path: &Path, format: Option<ScriptFormat>) -> Result<Response, ScriptError> {
    let format = match format {
        Some(f) => f,
        None => ScriptFormat::from_path(path)?,
    };
    let content = std::fs::read_to_string(path)?;
    let response = from_str(&content, format)?;
    tracing::debug!(path = %path.display(), verbs = response.verbs.len(), "loaded verb script");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{GatherInput, Voice};
    use crate::verb::{Gather, Hangup, Play, Say, Verb};
    use pretty_assertions::assert_eq;

    #[test]
    fn yaml_script() {
        let script = r#"
verbs:
  - Say:
      message: Hello
      voice: alice
  - Gather:
      input: speech dtmf
      nested_verbs:
        - Play:
            url: https://example.org/menu.mp3
  - Hangup:
"#;
        let resp = from_yaml_str(script).unwrap();
        let want = Response::new(vec![
            Say {
                message: "Hello".into(),
                voice: Voice::ALICE,
                ..Default::default()
            }
            .into(),
            Gather {
                input: GatherInput::DTMF_SPEECH,
                nested_verbs: vec![Play::new("https://example.org/menu.mp3").into()],
                ..Default::default()
            }
            .into(),
            Verb::Hangup(Hangup),
        ]);
        assert_eq!(resp, want);
    }

    #[test]
    fn json_script() {
        let script = r#"{"verbs": [{"Redirect": {"url": "/next", "method": "POST"}}, {"Hangup": null}]}"#;
        let resp = from_json_str(script).unwrap();
        assert_eq!(resp.verbs.len(), 2);
        assert_eq!(resp.verbs[0].element_name(), "Redirect");
    }

    #[test]
    fn unknown_verb_is_rejected() {
        let err = from_yaml_str("verbs:\n  - Shout:\n      message: hi\n").unwrap_err();
        assert!(matches!(err, ScriptError::Yaml(_)));
        assert!(err.to_string().contains("Shout"));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = from_json_str(r#"{"verbs": [{"Say": {"voice": "robot"}}]}"#).unwrap_err();
        assert!(err.to_string().contains("robot"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ScriptFormat::from_path(Path::new("a.yml")).unwrap(), ScriptFormat::Yaml);
        assert_eq!(ScriptFormat::from_path(Path::new("a.JSON")).unwrap(), ScriptFormat::Json);
        assert!(matches!(
            ScriptFormat::from_path(Path::new("a.toml")),
            Err(ScriptError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }
}
