//! TwiML verbs and the `<Dial>` nouns.
//!
//! Each verb is a plain struct whose fields map one-to-one onto the element's
//! attributes, in the order they are rendered. [`Verb`] is the closed set of
//! everything that can appear in a document; nested lists (`Gather`'s verbs,
//! `Dial`'s nouns) are `Vec<Verb>` too, so the type system does not stop a
//! caller from nesting something TwiML would reject.

mod nouns;
mod verbs;

use serde::{Deserialize, Serialize};

pub use nouns::{DialClient, DialConference, DialNumber, DialQueue, DialSim, DialSip};
pub use verbs::{
    Dial, Enqueue, Gather, Hangup, Leave, Pause, Play, Record, Redirect, Reject, Say, Sms,
};

/// One element of a TwiML document.
///
/// Variants are named after the element they render to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verb {
    Say(Say),
    Play(Play),
    Pause(Pause),
    Record(Record),
    Reject(Reject),
    Hangup(Hangup),
    Leave(Leave),
    Redirect(Redirect),
    Sms(Sms),
    Enqueue(Enqueue),
    Gather(Gather),
    Dial(Dial),

    // Nouns, only meaningful inside `Dial`.
    Client(DialClient),
    Conference(DialConference),
    Number(DialNumber),
    Queue(DialQueue),
    Sim(DialSim),
    Sip(DialSip),
}

macro_rules! verb_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Verb {
                fn from(v: $ty) -> Self {
                    Verb::$variant(v)
                }
            }
        )*
    };
}

verb_from!(
    Say(Say),
    Play(Play),
    Pause(Pause),
    Record(Record),
    Reject(Reject),
    Hangup(Hangup),
    Leave(Leave),
    Redirect(Redirect),
    Sms(Sms),
    Enqueue(Enqueue),
    Gather(Gather),
    Dial(Dial),
    Client(DialClient),
    Conference(DialConference),
    Number(DialNumber),
    Queue(DialQueue),
    Sim(DialSim),
    Sip(DialSip),
);

/// A full TwiML document: the `<Response>` root and its verbs, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub verbs: Vec<Verb>,
}

impl Response {
    pub fn new(verbs: Vec<Verb>) -> Self {
        Self { verbs }
    }

    /// Append a verb, returning `self` for chaining.
    pub fn push(mut self, verb: impl Into<Verb>) -> Self {
        self.verbs.push(verb.into());
        self
    }
}

impl From<Vec<Verb>> for Response {
    fn from(verbs: Vec<Verb>) -> Self {
        Self { verbs }
    }
}
