//! Supported target languages.

/// A (code, display name) pair identifying a supported output language.
/// `code` keys the label catalog; `display_name` is what the instruction
/// text asks the model to write in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// The fixed, ordered set of supported target languages.
pub const SUPPORTED_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor { code: "en", display_name: "English" },
    LanguageDescriptor { code: "es", display_name: "Spanish" },
    LanguageDescriptor { code: "fr", display_name: "French" },
    LanguageDescriptor { code: "ar", display_name: "Arabic" },
    LanguageDescriptor { code: "zh", display_name: "Chinese" },
    LanguageDescriptor { code: "hi", display_name: "Hindi" },
    LanguageDescriptor { code: "pt", display_name: "Portuguese" },
    LanguageDescriptor { code: "ru", display_name: "Russian" },
    LanguageDescriptor { code: "uk", display_name: "Ukrainian" },
    LanguageDescriptor { code: "tr", display_name: "Turkish" },
];

impl LanguageDescriptor {
    /// Look up a supported language by code.
    pub fn find(code: &str) -> Option<&'static LanguageDescriptor> {
        SUPPORTED_LANGUAGES.iter().find(|l| l.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_code() {
        let lang = LanguageDescriptor::find("uk").unwrap();
        assert_eq!(lang.display_name, "Ukrainian");
    }

    #[test]
    fn find_unknown_code_is_none() {
        assert!(LanguageDescriptor::find("tlh").is_none());
    }

    #[test]
    fn english_is_first() {
        assert_eq!(SUPPORTED_LANGUAGES[0].code, "en");
    }
}
