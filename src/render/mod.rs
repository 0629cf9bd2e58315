//! Document assembly: verbs in, indented TwiML out.
//!
//! Output is an XML declaration followed by a `<Response>` root holding every
//! verb in order, indented two spaces per level, with no trailing newline.

mod element;
mod writer;

use std::io::Write;

use quick_xml::events::BytesStart;

use crate::error::RenderError;
use crate::pool;
use crate::verb::{Response, Verb};
use writer::DocumentWriter;

const ROOT: &str = "Response";

/// Write a complete document for `response` to `sink`.
///
/// On error, whatever was written before the failure stays written.
pub fn encode_response<W: Write>(sink: W, response: &Response) -> Result<(), RenderError> {
    encode_slice(sink, &response.verbs)
}

/// Render `response` into a fresh byte vector.
pub fn marshal_response(response: &Response) -> Result<Vec<u8>, RenderError> {
    marshal_slice(&response.verbs)
}

/// Write a complete document wrapping `verbs` to `sink`.
pub fn encode_slice<W: Write>(sink: W, verbs: &[Verb]) -> Result<(), RenderError> {
    let mut doc = DocumentWriter::new(sink);
    doc.header()?;
    doc.open(BytesStart::new(ROOT))?;
    element::write_verbs(&mut doc, verbs)?;
    doc.close(ROOT)?;
    tracing::debug!(verbs = verbs.len(), "rendered TwiML response");
    Ok(())
}

/// Render a document wrapping `verbs` into a fresh byte vector.
///
/// Rendering happens in a pooled buffer, the returned vector is a copy.
pub fn marshal_slice(verbs: &[Verb]) -> Result<Vec<u8>, RenderError> {
    let mut buf = pool::DOCUMENTS.get();
    encode_slice(&mut *buf, verbs)?;
    tracing::debug!(bytes = buf.len(), "marshalled TwiML response");
    Ok(buf.to_vec())
}

impl Response {
    /// Render to a string.
    pub fn to_xml_string(&self) -> Result<String, RenderError> {
        let bytes = marshal_response(self)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::{Hangup, Say};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_response() {
        let out = marshal_slice(&[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response></Response>"
        );
    }

    #[test]
    fn encode_and_marshal_agree() {
        let resp = Response::default().push(Say::new("Hi there!")).push(Hangup);
        let mut encoded = Vec::new();
        encode_response(&mut encoded, &resp).unwrap();
        assert_eq!(encoded, marshal_response(&resp).unwrap());
    }

    #[test]
    fn pooled_buffer_is_reset_between_renders() {
        let resp = Response::default().push(Hangup);
        let first = marshal_response(&resp).unwrap();
        let second = marshal_response(&resp).unwrap();
        assert_eq!(first, second);
    }
}
