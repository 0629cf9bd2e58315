use std::borrow::Cow;
use std::str::FromStr;

use bitflags::bitflags;

use super::{parse_flags, AttrValue};
use crate::error::ParseAttrError;

bitflags! {
    /// Kinds of caller input `<Gather>` listens for. OR both together (or use
    /// `DTMF_SPEECH`) to accept either.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GatherInput: u8 {
        /// Keypad tones.
        const DTMF = 1 << 0;
        const SPEECH = 1 << 1;

        const DTMF_SPEECH = Self::DTMF.bits() | Self::SPEECH.bits();
    }
}

impl GatherInput {
    const TOKENS: [(GatherInput, &'static str); 2] =
        [(GatherInput::DTMF, "dtmf"), (GatherInput::SPEECH, "speech")];
}

impl Default for GatherInput {
    fn default() -> Self {
        GatherInput::empty()
    }
}

impl AttrValue for GatherInput {
    // Only the exact pair renders both modes. Any other pattern renders the
    // first declared mode it contains, so stray undeclared bits next to both
    // modes collapse to "dtmf".
    fn encode(&self) -> Cow<'static, str> {
        let token = if *self == GatherInput::DTMF_SPEECH {
            "dtmf speech"
        } else if self.contains(GatherInput::DTMF) {
            "dtmf"
        } else if self.contains(GatherInput::SPEECH) {
            "speech"
        } else {
            ""
        };
        Cow::Borrowed(token)
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FromStr for GatherInput {
    type Err = ParseAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flags(s, &GatherInput::TOKENS, "input")
    }
}

attr_common!(GatherInput);
