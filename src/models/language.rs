// ---------------------------------------------------------------------------
// Language — result-language filter codes
// ---------------------------------------------------------------------------

/// Result-language filter accepted by lookup and search operations.
///
/// The API identifies languages by small integer codes; [`Language::Any`]
/// (code 99) is the wildcard. This is a request parameter only — responses
/// never carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Language {
    English = 1,
    Danish = 2,
    German = 3,
    Spanish = 4,
    Finnish = 5,
    French = 6,
    Hungarian = 7,
    Italian = 8,
    Japanese = 9,
    Dutch = 10,
    Norwegian = 11,
    Polish = 12,
    Portuguese = 13,
    Swedish = 14,
    /// Wildcard: results in any language.
    #[default]
    Any = 99,
}

impl Language {
    /// The integer code transmitted on the wire.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Resolve a wire code back to a language, if it is a known one.
    pub fn from_code(code: u32) -> Option<Language> {
        use Language::*;
        match code {
            1 => Some(English),
            2 => Some(Danish),
            3 => Some(German),
            4 => Some(Spanish),
            5 => Some(Finnish),
            6 => Some(French),
            7 => Some(Hungarian),
            8 => Some(Italian),
            9 => Some(Japanese),
            10 => Some(Dutch),
            11 => Some(Norwegian),
            12 => Some(Polish),
            13 => Some(Portuguese),
            14 => Some(Swedish),
            99 => Some(Any),
            _ => None,
        }
    }
}
