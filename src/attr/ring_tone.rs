/// Ringback tone played to the caller while `<Dial>` is ringing.
///
/// The zero value, `AUTOMATIC`, is left out of the rendered element so the
/// platform picks a tone from the dialed number. It still encodes to
/// `"automatic"` when asked directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RingTone(u8);

impl RingTone {
    pub const AUTOMATIC: RingTone = RingTone(0);
    pub const AUSTRALIA: RingTone = RingTone(1);
    pub const AUSTRIA: RingTone = RingTone(2);
    pub const BELGIUM: RingTone = RingTone(3);
    pub const BULGARIA: RingTone = RingTone(4);
    pub const BRAZIL: RingTone = RingTone(5);
    pub const CHILE: RingTone = RingTone(6);
    pub const CHINA: RingTone = RingTone(7);
    pub const CZECHIA: RingTone = RingTone(8);
    pub const DENMARK: RingTone = RingTone(9);
    pub const ESTONIA: RingTone = RingTone(10);
    pub const FINLAND: RingTone = RingTone(11);
    pub const FRANCE: RingTone = RingTone(12);
    pub const GREECE: RingTone = RingTone(13);
    pub const GERMANY: RingTone = RingTone(14);
    pub const HUNGARY: RingTone = RingTone(15);
    pub const ISRAEL: RingTone = RingTone(16);
    pub const INDIA: RingTone = RingTone(17);
    pub const ITALY: RingTone = RingTone(18);
    pub const LITHUANIA: RingTone = RingTone(19);
    pub const JAPAN: RingTone = RingTone(20);
    pub const MEXICO: RingTone = RingTone(21);
    pub const MALAYSIA: RingTone = RingTone(22);
    pub const NETHERLANDS: RingTone = RingTone(23);
    pub const NORWAY: RingTone = RingTone(24);
    pub const NEW_ZEALAND: RingTone = RingTone(25);
    pub const PHILIPPINES: RingTone = RingTone(26);
    pub const POLAND: RingTone = RingTone(27);
    pub const PORTUGAL: RingTone = RingTone(28);
    pub const RUSSIA: RingTone = RingTone(29);
    pub const SINGAPORE: RingTone = RingTone(30);
    pub const SPAIN: RingTone = RingTone(31);
    pub const SWEDEN: RingTone = RingTone(32);
    pub const SWITZERLAND: RingTone = RingTone(33);
    pub const TAIWAN: RingTone = RingTone(34);
    pub const THAILAND: RingTone = RingTone(35);
    pub const UK: RingTone = RingTone(36);
    pub const US: RingTone = RingTone(37);
    /// The older United States tone.
    pub const US_OLD: RingTone = RingTone(38);
    pub const VENEZUELA: RingTone = RingTone(39);
    pub const SOUTH_AFRICA: RingTone = RingTone(40);

    const TOKENS: [(RingTone, &'static str); 41] = [
        (RingTone::AUTOMATIC, "automatic"),
        (RingTone::AUSTRALIA, "au"),
        (RingTone::AUSTRIA, "at"),
        (RingTone::BELGIUM, "be"),
        (RingTone::BULGARIA, "bg"),
        (RingTone::BRAZIL, "br"),
        (RingTone::CHILE, "cl"),
        (RingTone::CHINA, "cn"),
        (RingTone::CZECHIA, "cz"),
        (RingTone::DENMARK, "dk"),
        (RingTone::ESTONIA, "ee"),
        (RingTone::FINLAND, "fi"),
        (RingTone::FRANCE, "fr"),
        (RingTone::GREECE, "gr"),
        (RingTone::GERMANY, "de"),
        (RingTone::HUNGARY, "hu"),
        (RingTone::ISRAEL, "il"),
        (RingTone::INDIA, "in"),
        (RingTone::ITALY, "it"),
        (RingTone::LITHUANIA, "lt"),
        (RingTone::JAPAN, "jp"),
        (RingTone::MEXICO, "mx"),
        (RingTone::MALAYSIA, "my"),
        (RingTone::NETHERLANDS, "nl"),
        (RingTone::NORWAY, "no"),
        (RingTone::NEW_ZEALAND, "nz"),
        (RingTone::PHILIPPINES, "ph"),
        (RingTone::POLAND, "pl"),
        (RingTone::PORTUGAL, "pt"),
        (RingTone::RUSSIA, "ru"),
        (RingTone::SINGAPORE, "sg"),
        (RingTone::SPAIN, "es"),
        (RingTone::SWEDEN, "se"),
        (RingTone::SWITZERLAND, "ch"),
        (RingTone::TAIWAN, "tw"),
        (RingTone::THAILAND, "th"),
        (RingTone::UK, "uk"),
        (RingTone::US, "us"),
        (RingTone::US_OLD, "us-old"),
        (RingTone::VENEZUELA, "ve"),
        (RingTone::SOUTH_AFRICA, "za"),
    ];
}

sequential_attr!(RingTone, u8, "ringTone", unmapped = "");
