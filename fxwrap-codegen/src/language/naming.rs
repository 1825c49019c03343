//! Reserved-word tables for target languages.

/// Language-specific naming rules.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Whether identifiers are compared case-sensitively (false for Visual Basic)
    pub case_sensitive: bool,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        if self.case_sensitive {
            self.reserved_words.contains(&name)
        } else {
            self.reserved_words
                .iter()
                .any(|word| word.eq_ignore_ascii_case(name))
        }
    }
}
