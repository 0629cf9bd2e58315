//! Keypad keys that end a `<Record>` or `<Gather>`.

use std::borrow::Cow;
use std::str::FromStr;

use bitflags::bitflags;

use super::{join_flags, AttrValue};
use crate::error::ParseAttrError;

bitflags! {
    /// Set of keys that finish input when pressed. Combine with `|`.
    ///
    /// Encodes as the pressed characters with no separator, digits `1`-`9`
    /// first, then `0`, `*` and `#`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FinishOnKey: u16 {
        const NUMBER_0 = 1 << 0;
        const NUMBER_1 = 1 << 1;
        const NUMBER_2 = 1 << 2;
        const NUMBER_3 = 1 << 3;
        const NUMBER_4 = 1 << 4;
        const NUMBER_5 = 1 << 5;
        const NUMBER_6 = 1 << 6;
        const NUMBER_7 = 1 << 7;
        const NUMBER_8 = 1 << 8;
        const NUMBER_9 = 1 << 9;
        const STAR = 1 << 10;
        const POUND = 1 << 11;

        /// No key finishes input. Renders `finishOnKey=""`, which is different
        /// from leaving the attribute out (the platform default is `#`).
        const NONE = 1 << 12;

        /// Every key. Does not include `NONE`.
        const ALL = Self::NUMBER_0.bits()
            | Self::NUMBER_1.bits()
            | Self::NUMBER_2.bits()
            | Self::NUMBER_3.bits()
            | Self::NUMBER_4.bits()
            | Self::NUMBER_5.bits()
            | Self::NUMBER_6.bits()
            | Self::NUMBER_7.bits()
            | Self::NUMBER_8.bits()
            | Self::NUMBER_9.bits()
            | Self::STAR.bits()
            | Self::POUND.bits();
    }
}

impl FinishOnKey {
    // Emission order: zero sits after nine, as on a keypad.
    const TOKENS: [(FinishOnKey, &'static str); 12] = [
        (FinishOnKey::NUMBER_1, "1"),
        (FinishOnKey::NUMBER_2, "2"),
        (FinishOnKey::NUMBER_3, "3"),
        (FinishOnKey::NUMBER_4, "4"),
        (FinishOnKey::NUMBER_5, "5"),
        (FinishOnKey::NUMBER_6, "6"),
        (FinishOnKey::NUMBER_7, "7"),
        (FinishOnKey::NUMBER_8, "8"),
        (FinishOnKey::NUMBER_9, "9"),
        (FinishOnKey::NUMBER_0, "0"),
        (FinishOnKey::STAR, "*"),
        (FinishOnKey::POUND, "#"),
    ];
}

impl Default for FinishOnKey {
    fn default() -> Self {
        FinishOnKey::empty()
    }
}

impl AttrValue for FinishOnKey {
    fn encode(&self) -> Cow<'static, str> {
        if self.is_empty() || *self == FinishOnKey::NONE {
            return Cow::Borrowed("");
        }
        Cow::Owned(join_flags(*self, &FinishOnKey::TOKENS, ""))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FromStr for FinishOnKey {
    type Err = ParseAttrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut keys = FinishOnKey::empty();
        for ch in s.chars() {
            let key = FinishOnKey::TOKENS
                .iter()
                .find(|(_, token)| token.starts_with(ch))
                .map(|(key, _)| *key)
                .ok_or_else(|| ParseAttrError::new("finishOnKey", ch))?;
            keys |= key;
        }
        Ok(keys)
    }
}

attr_common!(FinishOnKey);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keys() {
        let digits = [
            (FinishOnKey::NUMBER_0, "0"),
            (FinishOnKey::NUMBER_1, "1"),
            (FinishOnKey::NUMBER_2, "2"),
            (FinishOnKey::NUMBER_3, "3"),
            (FinishOnKey::NUMBER_4, "4"),
            (FinishOnKey::NUMBER_5, "5"),
            (FinishOnKey::NUMBER_6, "6"),
            (FinishOnKey::NUMBER_7, "7"),
            (FinishOnKey::NUMBER_8, "8"),
            (FinishOnKey::NUMBER_9, "9"),
            (FinishOnKey::STAR, "*"),
            (FinishOnKey::POUND, "#"),
        ];
        for (key, want) in digits {
            assert_eq!(key.encode(), want);
        }
    }

    #[test]
    fn zero_and_none_are_empty() {
        assert_eq!(FinishOnKey::empty().encode(), "");
        assert_eq!(FinishOnKey::NONE.encode(), "");
        assert!(FinishOnKey::empty().is_zero());
        assert!(!FinishOnKey::NONE.is_zero());
    }

    #[test]
    fn zero_follows_nine() {
        assert_eq!(FinishOnKey::ALL.encode(), "1234567890*#");
        assert_eq!(
            (FinishOnKey::NUMBER_0 | FinishOnKey::NUMBER_1).encode(),
            "10"
        );
    }

    #[test]
    fn mixed_keys_have_no_separator() {
        let v = FinishOnKey::STAR | FinishOnKey::NUMBER_9 | FinishOnKey::NUMBER_1;
        assert_eq!(v.encode(), "19*");
        assert_eq!((FinishOnKey::POUND | FinishOnKey::STAR).encode(), "*#");
    }

    #[test]
    fn none_alongside_keys_is_ignored() {
        assert_eq!((FinishOnKey::NONE | FinishOnKey::POUND).encode(), "#");
    }

    #[test]
    fn parse_keys() {
        assert_eq!("#*".parse::<FinishOnKey>().unwrap(), FinishOnKey::STAR | FinishOnKey::POUND);
        assert_eq!("".parse::<FinishOnKey>().unwrap(), FinishOnKey::empty());
        assert_eq!(
            "0123456789*#".parse::<FinishOnKey>().unwrap(),
            FinishOnKey::ALL
        );

        let err = "1a".parse::<FinishOnKey>().unwrap_err();
        assert_eq!(err.token, "a");
    }
}
