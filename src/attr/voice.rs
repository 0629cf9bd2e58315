/// Text-to-speech voice used by `<Say>`.
///
/// `ALICE` supports the most languages; `MAN` and `WOMAN` only support the
/// legacy set. The zero value leaves the attribute out so the platform picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Voice(u8);

impl Voice {
    pub const DEFAULT: Voice = Voice(0);
    pub const ALICE: Voice = Voice(1);
    pub const MAN: Voice = Voice(2);
    pub const WOMAN: Voice = Voice(3);

    const TOKENS: [(Voice, &'static str); 4] = [
        (Voice::DEFAULT, ""),
        (Voice::ALICE, "alice"),
        (Voice::MAN, "man"),
        (Voice::WOMAN, "woman"),
    ];
}

sequential_attr!(Voice, u8, "voice", unmapped = "unknown");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrValue;

    #[test]
    fn voices() {
        assert_eq!(Voice::DEFAULT.encode(), "");
        assert_eq!(Voice::ALICE.encode(), "alice");
        assert_eq!(Voice::MAN.encode(), "man");
        assert_eq!(Voice::WOMAN.encode(), "woman");
    }

    #[test]
    fn undeclared_voice_is_unknown() {
        assert_eq!(Voice::from_raw(4).encode(), "unknown");
        assert_eq!(Voice::from_raw(255).encode(), "unknown");
        assert!(!Voice::from_raw(4).is_zero());
    }

    #[test]
    fn parse_voice() {
        assert_eq!("woman".parse::<Voice>().unwrap(), Voice::WOMAN);
        assert_eq!("".parse::<Voice>().unwrap(), Voice::DEFAULT);
        assert!("robot".parse::<Voice>().is_err());
    }
}
