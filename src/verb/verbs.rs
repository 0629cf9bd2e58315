use serde::{Deserialize, Serialize};

use super::Verb;
use crate::attr::{
    BargeIn, DialRecord, FinishOnKey, GatherInput, Language, RejectReason, RingTone, Trim, Voice,
};

/// Speak `message` to the caller using text-to-speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Say {
    pub message: String,
    pub language: Language,
    #[serde(rename = "loop")]
    pub loop_count: u32,
    pub voice: Voice,
}

impl Say {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// Play an audio file, or send `digits` as DTMF tones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Play {
    pub url: String,
    #[serde(rename = "loop")]
    pub loop_count: u32,
    pub digits: String,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Wait silently for `length` seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pause {
    pub length: u32,
}

/// Record the caller's voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: FinishOnKey,
    pub max_length: u32,
    pub play_beep: bool,
    pub trim: Trim,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    /// Always rendered, `false` included.
    pub transcribe: bool,
    pub transcribe_callback: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reject {
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hangup;

/// Leave the current queue and continue with the next verb after `<Enqueue>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leave;

/// Hand control of the call to the document at `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redirect {
    pub url: String,
    pub method: String,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Send a text message during the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sms {
    pub message: String,
    pub to: String,
    pub from: String,
    pub action: String,
    pub method: String,
    pub status_callback: String,
}

impl Sms {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// Place the caller in the queue named `queue_name`.
///
/// When `workflow_sid` routes the call through a task router, `task` carries
/// the task attributes (usually JSON) and is rendered as a `<Task>` child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enqueue {
    pub queue_name: String,
    pub action: String,
    pub method: String,
    pub wait_url: String,
    pub wait_url_method: String,
    pub workflow_sid: String,
    pub task: String,
}

impl Enqueue {
    pub fn new(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            ..Default::default()
        }
    }
}

/// Collect keypad or speech input, playing `nested_verbs` while waiting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gather {
    pub input: GatherInput,
    pub action: String,
    pub method: String,
    pub timeout: u32,
    pub finish_on_key: FinishOnKey,
    pub num_digits: u32,
    pub partial_result_callback: String,
    pub partial_result_callback_method: String,
    pub language: Language,
    pub hints: String,
    pub barge_in: BargeIn,
    pub nested_verbs: Vec<Verb>,
}

/// Connect the caller to another party.
///
/// Either dial `number` directly or leave it empty and list the targets in
/// `nouns` (`Client`, `Conference`, `Number`, `Queue`, `Sim`, `Sip`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dial {
    pub number: String,
    pub action: String,
    pub method: String,
    pub timeout: u32,
    /// Always rendered.
    pub hangup_on_star: bool,
    pub time_limit: u32,
    pub caller_id: String,
    pub record: DialRecord,
    pub trim: Trim,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
    /// Always rendered.
    pub answer_on_bridge: bool,
    pub ring_tone: RingTone,
    pub nouns: Vec<Verb>,
}

impl Dial {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }

    /// Dial the given nouns instead of a bare number.
    pub fn to(nouns: impl IntoIterator<Item = Verb>) -> Self {
        Self {
            nouns: nouns.into_iter().collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::DialNumber;

    #[test]
    fn missing_fields_default() {
        let say: Say = serde_json::from_str(r#"{"message": "hello", "voice": "alice"}"#).unwrap();
        assert_eq!(say.message, "hello");
        assert_eq!(say.voice, Voice::ALICE);
        assert_eq!(say.language, Language::DEFAULT);
        assert_eq!(say.loop_count, 0);
    }

    #[test]
    fn loop_field_uses_attribute_name() {
        let play: Play = serde_json::from_str(r#"{"url": "a.mp3", "loop": 3}"#).unwrap();
        assert_eq!(play.loop_count, 3);
    }

    #[test]
    fn dial_to_nouns() {
        let dial = Dial::to([Verb::from(DialNumber::new("+15551234567"))]);
        assert!(dial.number.is_empty());
        assert_eq!(dial.nouns.len(), 1);
    }
}
