//! Recording and silence-trimming options.

use bitflags::bitflags;

bitflags! {
    /// Whether leading and trailing silence is trimmed from recordings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Trim: u8 {
        /// Trim silence. The platform default.
        const TRIM_SILENCE = 1 << 0;
        /// Keep recordings untrimmed.
        const DO_NOT_TRIM = 1 << 1;
    }
}

bitflags! {
    /// Recording of both call legs within `<Dial>`, mono or dual channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DialRecord: u8 {
        const DO_NOT_RECORD = 1 << 0;
        /// Mono recording starting when the call is answered.
        const FROM_ANSWER_MONO = 1 << 1;
        /// Mono recording starting when the call starts ringing.
        const FROM_RINGING_MONO = 1 << 2;
        /// Dual-channel recording starting when the call is answered.
        const FROM_ANSWER_DUAL = 1 << 3;
        /// Dual-channel recording starting when the call starts ringing.
        const FROM_RINGING_DUAL = 1 << 4;
    }
}

bitflags! {
    /// Recording of an entire conference.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ConfRecord: u8 {
        const DO_NOT_RECORD = 1 << 0;
        /// Record from when the first two participants are bridged. Hold
        /// music is never recorded.
        const RECORD_FROM_START = 1 << 1;
    }
}

impl Trim {
    const TOKENS: [(Trim, &'static str); 2] = [
        (Trim::TRIM_SILENCE, "trim-silence"),
        (Trim::DO_NOT_TRIM, "do-not-trim"),
    ];
}

impl DialRecord {
    const TOKENS: [(DialRecord, &'static str); 5] = [
        (DialRecord::DO_NOT_RECORD, "do-not-record"),
        (DialRecord::FROM_ANSWER_MONO, "record-from-answer"),
        (DialRecord::FROM_RINGING_MONO, "record-from-ringing"),
        (DialRecord::FROM_ANSWER_DUAL, "record-from-answer-dual"),
        (DialRecord::FROM_RINGING_DUAL, "record-from-ringing-dual"),
    ];
}

impl ConfRecord {
    const TOKENS: [(ConfRecord, &'static str); 2] = [
        (ConfRecord::DO_NOT_RECORD, "do-not-record"),
        (ConfRecord::RECORD_FROM_START, "record-from-start"),
    ];
}

exclusive_attr!(Trim, "trim");
exclusive_attr!(DialRecord, "record");
exclusive_attr!(ConfRecord, "record");
