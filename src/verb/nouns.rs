use serde::{Deserialize, Serialize};

use crate::attr::{
    ConfBeep, ConfRecord, ConfRegion, ConfStartOnEnter, ConfStatusCallbackEvent, DialRecord,
    RingTone, StatusCallbackEvent, Trim,
};

/// Dial a registered client by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialClient {
    pub client_name: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: StatusCallbackEvent,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl DialClient {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            ..Default::default()
        }
    }
}

/// Join the conference room `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConference {
    pub name: String,
    /// Always rendered.
    pub muted: bool,
    pub beep: ConfBeep,
    pub start_conference_on_enter: ConfStartOnEnter,
    /// Always rendered.
    pub end_conference_on_exit: bool,
    pub wait_url: String,
    pub wait_method: String,
    pub max_participants: u16,
    pub record: ConfRecord,
    pub region: ConfRegion,
    pub trim: Trim,
    pub whisper: String,
    pub status_callback_event: ConfStatusCallbackEvent,
    pub status_callback: String,
    pub status_callback_method: String,
    pub recording_status_callback: String,
    pub recording_status_callback_method: String,
}

impl DialConference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialNumber {
    pub number: String,
    pub send_digits: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: StatusCallbackEvent,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl DialNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }
}

/// Connect to the first caller waiting in `queue_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialQueue {
    pub queue_name: String,
    pub url: String,
    pub method: String,
    pub reservation_sid: String,
    pub post_work_activity_sid: String,
}

impl DialQueue {
    pub fn new(queue_name: impl Into<String>) -> Self {
        Self {
            queue_name: queue_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSim {
    pub sim: String,
}

impl DialSim {
    pub fn new(sim: impl Into<String>) -> Self {
        Self { sim: sim.into() }
    }
}

/// Dial a SIP endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialSip {
    pub uri: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub method: String,
    pub status_callback_event: StatusCallbackEvent,
    pub status_callback: String,
    pub status_callback_method: String,
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
}

impl DialSip {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }
}
