/// Spoken or recognised language, as a BCP-47 tag.
///
/// Which languages are available depends on the [`Voice`](super::Voice); the
/// legacy `man` and `woman` voices only support a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Language(u16);

impl Language {
    /// Leaves the attribute out.
    pub const DEFAULT: Language = Language(0);
    pub const ENGLISH_US: Language = Language(1);
    pub const CATALAN_SPAIN: Language = Language(2);
    pub const CHINESE_CANTONESE: Language = Language(3);
    pub const CHINESE_MANDARIN: Language = Language(4);
    pub const CHINESE_TAIWANESE_MANDARIN: Language = Language(5);
    pub const DANISH_DENMARK: Language = Language(6);
    pub const DUTCH_NETHERLANDS: Language = Language(7);
    pub const ENGLISH_AUSTRALIA: Language = Language(8);
    pub const ENGLISH_CANADA: Language = Language(9);
    pub const ENGLISH_UK: Language = Language(10);
    pub const FINNISH_FINLAND: Language = Language(11);
    pub const FRENCH_CANADA: Language = Language(12);
    pub const FRENCH_FRANCE: Language = Language(13);
    pub const GERMAN_GERMANY: Language = Language(14);
    pub const ITALIAN_ITALY: Language = Language(15);
    pub const JAPANESE_JAPAN: Language = Language(16);
    pub const KOREAN_KOREA: Language = Language(17);
    pub const NORWEGIAN_NORWAY: Language = Language(18);
    pub const POLISH_POLAND: Language = Language(19);
    pub const PORTUGUESE_BRAZIL: Language = Language(20);
    pub const PORTUGUESE_PORTUGAL: Language = Language(21);
    pub const RUSSIAN_RUSSIA: Language = Language(22);
    pub const SPANISH_MEXICO: Language = Language(23);
    pub const SPANISH_SPAIN: Language = Language(24);
    pub const SWEDISH_SWEDEN: Language = Language(25);

    const TOKENS: [(Language, &'static str); 26] = [
        (Language::DEFAULT, ""),
        (Language::ENGLISH_US, "en-US"),
        (Language::CATALAN_SPAIN, "ca-ES"),
        (Language::CHINESE_CANTONESE, "zh-HK"),
        (Language::CHINESE_MANDARIN, "zh-CN"),
        (Language::CHINESE_TAIWANESE_MANDARIN, "zh-TW"),
        (Language::DANISH_DENMARK, "da-DK"),
        (Language::DUTCH_NETHERLANDS, "nl-NL"),
        (Language::ENGLISH_AUSTRALIA, "en-AU"),
        (Language::ENGLISH_CANADA, "en-CA"),
        (Language::ENGLISH_UK, "en-GB"),
        (Language::FINNISH_FINLAND, "fi-FI"),
        (Language::FRENCH_CANADA, "fr-CA"),
        (Language::FRENCH_FRANCE, "fr-FR"),
        (Language::GERMAN_GERMANY, "de-DE"),
        (Language::ITALIAN_ITALY, "it-IT"),
        (Language::JAPANESE_JAPAN, "ja-JP"),
        (Language::KOREAN_KOREA, "ko-KR"),
        (Language::NORWEGIAN_NORWAY, "nb-NO"),
        (Language::POLISH_POLAND, "pl-PL"),
        (Language::PORTUGUESE_BRAZIL, "pt-BR"),
        (Language::PORTUGUESE_PORTUGAL, "pt-PT"),
        (Language::RUSSIAN_RUSSIA, "ru-RU"),
        (Language::SPANISH_MEXICO, "es-MX"),
        (Language::SPANISH_SPAIN, "es-ES"),
        (Language::SWEDISH_SWEDEN, "sv-SE"),
    ];
}

sequential_attr!(Language, u16, "language", unmapped = "unknown");
