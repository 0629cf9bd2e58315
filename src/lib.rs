//! TwiML document generation.
//!
//! Build a [`Response`] out of typed verbs and render it to indented markup.
//! Enumerated attributes (voices, languages, callback events, ...) are typed
//! values in [`attr`] and render to the exact tokens the call platform expects;
//! unset attributes are left out.
//!
//! ## Quick Start
//!
//! ```rust
//! use twiml::{Response, Say};
//!
//! let xml = Response::default().push(Say::new("Hi there!")).to_xml_string().unwrap();
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n  <Say>Hi there!</Say>\n</Response>"
//! );
//! ```

pub mod attr;
pub mod error;
pub mod pool;
pub mod render;
pub mod script;
pub mod verb;

pub use attr::AttrValue;
pub use error::{ParseAttrError, RenderError, ScriptError};
pub use render::{encode_response, encode_slice, marshal_response, marshal_slice};
pub use verb::{
    Dial, DialClient, DialConference, DialNumber, DialQueue, DialSim, DialSip, Enqueue, Gather,
    Hangup, Leave, Pause, Play, Record, Redirect, Reject, Response, Say, Sms, Verb,
};
