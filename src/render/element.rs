use std::io::Write;

use super::writer::{Attributes, DocumentWriter};
use crate::error::RenderError;
use crate::verb::{
    Dial, DialClient, DialConference, DialNumber, DialQueue, DialSim, DialSip, Enqueue, Gather,
    Hangup, Leave, Pause, Play, Record, Redirect, Reject, Say, Sms, Verb,
};

/// How one verb or noun maps onto markup.
///
/// `attributes` pushes in emission order; the order there is the order in the
/// output.
pub(crate) trait Element {
    const NAME: &'static str;

    fn attributes(&self, _attrs: &mut Attributes) {}

    /// Character data written right after the start tag.
    fn text(&self) -> &str {
        ""
    }

    fn children<W: Write>(&self, _doc: &mut DocumentWriter<W>) -> Result<(), RenderError> {
        Ok(())
    }
}

impl Verb {
    /// Name of the element this verb renders to.
    pub fn element_name(&self) -> &'static str {
        match self {
            Verb::Say(_) => Say::NAME,
            Verb::Play(_) => Play::NAME,
            Verb::Pause(_) => Pause::NAME,
            Verb::Record(_) => Record::NAME,
            Verb::Reject(_) => Reject::NAME,
            Verb::Hangup(_) => Hangup::NAME,
            Verb::Leave(_) => Leave::NAME,
            Verb::Redirect(_) => Redirect::NAME,
            Verb::Sms(_) => Sms::NAME,
            Verb::Enqueue(_) => Enqueue::NAME,
            Verb::Gather(_) => Gather::NAME,
            Verb::Dial(_) => Dial::NAME,
            Verb::Client(_) => DialClient::NAME,
            Verb::Conference(_) => DialConference::NAME,
            Verb::Number(_) => DialNumber::NAME,
            Verb::Queue(_) => DialQueue::NAME,
            Verb::Sim(_) => DialSim::NAME,
            Verb::Sip(_) => DialSip::NAME,
        }
    }

    pub(crate) fn write_to<W: Write>(&self, doc: &mut DocumentWriter<W>) -> Result<(), RenderError> {
        match self {
            Verb::Say(v) => doc.element(v),
            Verb::Play(v) => doc.element(v),
            Verb::Pause(v) => doc.element(v),
            Verb::Record(v) => doc.element(v),
            Verb::Reject(v) => doc.element(v),
            Verb::Hangup(v) => doc.element(v),
            Verb::Leave(v) => doc.element(v),
            Verb::Redirect(v) => doc.element(v),
            Verb::Sms(v) => doc.element(v),
            Verb::Enqueue(v) => doc.element(v),
            Verb::Gather(v) => doc.element(v),
            Verb::Dial(v) => doc.element(v),
            Verb::Client(v) => doc.element(v),
            Verb::Conference(v) => doc.element(v),
            Verb::Number(v) => doc.element(v),
            Verb::Queue(v) => doc.element(v),
            Verb::Sim(v) => doc.element(v),
            Verb::Sip(v) => doc.element(v),
        }
    }
}

pub(crate) fn write_verbs<W: Write>(
    doc: &mut DocumentWriter<W>,
    verbs: &[Verb],
) -> Result<(), RenderError> {
    verbs.iter().try_for_each(|verb| verb.write_to(doc))
}

impl Element for Say {
    const NAME: &'static str = "Say";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .value("language", &self.language)
            .number("loop", self.loop_count)
            .value("voice", &self.voice);
    }

    fn text(&self) -> &str {
        &self.message
    }
}

impl Element for Play {
    const NAME: &'static str = "Play";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .number("loop", self.loop_count)
            .text("digits", &self.digits);
    }

    fn text(&self) -> &str {
        &self.url
    }
}

impl Element for Pause {
    const NAME: &'static str = "Pause";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs.number("length", self.length);
    }
}

impl Element for Record {
    const NAME: &'static str = "Record";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("action", &self.action)
            .text("method", &self.method)
            .number("timeout", self.timeout)
            .value("finishOnKey", &self.finish_on_key)
            .number("maxLength", self.max_length)
            .flag("playBeep", self.play_beep)
            .value("trim", &self.trim)
            .text("recordingStatusCallback", &self.recording_status_callback)
            .text(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .boolean("transcribe", self.transcribe)
            .text("transcribeCallback", &self.transcribe_callback);
    }
}

impl Element for Reject {
    const NAME: &'static str = "Reject";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs.value("reason", &self.reason);
    }
}

impl Element for Hangup {
    const NAME: &'static str = "Hangup";
}

impl Element for Leave {
    const NAME: &'static str = "Leave";
}

impl Element for Redirect {
    const NAME: &'static str = "Redirect";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs.text("method", &self.method);
    }

    fn text(&self) -> &str {
        &self.url
    }
}

impl Element for Sms {
    const NAME: &'static str = "Sms";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("to", &self.to)
            .text("from", &self.from)
            .text("action", &self.action)
            .text("method", &self.method)
            .text("statusCallback", &self.status_callback);
    }

    fn text(&self) -> &str {
        &self.message
    }
}

impl Element for Enqueue {
    const NAME: &'static str = "Enqueue";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("action", &self.action)
            .text("method", &self.method)
            .text("waitUrl", &self.wait_url)
            .text("waitUrlMethod", &self.wait_url_method)
            .text("workflowSid", &self.workflow_sid);
    }

    fn text(&self) -> &str {
        &self.queue_name
    }

    fn children<W: Write>(&self, doc: &mut DocumentWriter<W>) -> Result<(), RenderError> {
        if self.task.is_empty() {
            return Ok(());
        }
        doc.text_element("Task", &self.task)
    }
}

impl Element for Gather {
    const NAME: &'static str = "Gather";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .value("input", &self.input)
            .text("action", &self.action)
            .text("method", &self.method)
            .number("timeout", self.timeout)
            .value("finishOnKey", &self.finish_on_key)
            .number("numDigits", self.num_digits)
            .text("partialResultCallback", &self.partial_result_callback)
            .text(
                "partialResultCallbackMethod",
                &self.partial_result_callback_method,
            )
            .value("language", &self.language)
            .text("hints", &self.hints)
            .value("bargeIn", &self.barge_in);
    }

    fn children<W: Write>(&self, doc: &mut DocumentWriter<W>) -> Result<(), RenderError> {
        write_verbs(doc, &self.nested_verbs)
    }
}

impl Element for Dial {
    const NAME: &'static str = "Dial";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("action", &self.action)
            .text("method", &self.method)
            .number("timeout", self.timeout)
            .boolean("hangupOnStar", self.hangup_on_star)
            .number("timeLimit", self.time_limit)
            .text("callerId", &self.caller_id)
            .value("record", &self.record)
            .value("trim", &self.trim)
            .text("recordingStatusCallback", &self.recording_status_callback)
            .text(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .boolean("answerOnBridge", self.answer_on_bridge)
            .value("ringTone", &self.ring_tone);
    }

    fn text(&self) -> &str {
        &self.number
    }

    fn children<W: Write>(&self, doc: &mut DocumentWriter<W>) -> Result<(), RenderError> {
        write_verbs(doc, &self.nouns)
    }
}

impl Element for DialClient {
    const NAME: &'static str = "Client";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("url", &self.url)
            .text("method", &self.method)
            .value("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method);
    }

    fn text(&self) -> &str {
        &self.client_name
    }
}

impl Element for DialConference {
    const NAME: &'static str = "Conference";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .boolean("muted", self.muted)
            .value("beep", &self.beep)
            .value("startConferenceOnEnter", &self.start_conference_on_enter)
            .boolean("endConferenceOnExit", self.end_conference_on_exit)
            .text("waitUrl", &self.wait_url)
            .text("waitMethod", &self.wait_method)
            .number("maxParticipants", self.max_participants)
            .value("record", &self.record)
            .value("region", &self.region)
            .value("trim", &self.trim)
            .text("whisper", &self.whisper)
            .value("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
            .text("recordingStatusCallback", &self.recording_status_callback)
            .text(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            );
    }

    fn text(&self) -> &str {
        &self.name
    }
}

impl Element for DialNumber {
    const NAME: &'static str = "Number";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("sendDigits", &self.send_digits)
            .text("url", &self.url)
            .text("method", &self.method)
            .value("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method);
    }

    fn text(&self) -> &str {
        &self.number
    }
}

impl Element for DialQueue {
    const NAME: &'static str = "Queue";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("url", &self.url)
            .text("method", &self.method)
            .text("reservationSid", &self.reservation_sid)
            .text("postWorkActivitySid", &self.post_work_activity_sid);
    }

    fn text(&self) -> &str {
        &self.queue_name
    }
}

impl Element for DialSim {
    const NAME: &'static str = "Sim";

    fn text(&self) -> &str {
        &self.sim
    }
}

impl Element for DialSip {
    const NAME: &'static str = "Sip";

    fn attributes(&self, attrs: &mut Attributes) {
        attrs
            .text("username", &self.username)
            .text("password", &self.password)
            .text("url", &self.url)
            .text("method", &self.method)
            .value("statusCallbackEvent", &self.status_callback_event)
            .text("statusCallback", &self.status_callback)
            .text("statusCallbackMethod", &self.status_callback_method)
            .number("timeout", self.timeout)
            .boolean("hangupOnStar", self.hangup_on_star)
            .number("timeLimit", self.time_limit)
            .text("callerId", &self.caller_id)
            .value("record", &self.record)
            .value("trim", &self.trim)
            .text("recordingStatusCallback", &self.recording_status_callback)
            .text(
                "recordingStatusCallbackMethod",
                &self.recording_status_callback_method,
            )
            .boolean("answerOnBridge", self.answer_on_bridge)
            .value("ringTone", &self.ring_tone);
    }

    fn text(&self) -> &str {
        &self.uri
    }
}
