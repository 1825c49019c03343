//! Textual fixups applied after serialization. Both are idempotent.

use std::sync::LazyLock;

use regex::Regex;

static SHARED_FIELD: LazyLock<Regex> =
    LazyLock::new(|| {
        Regex::new(r"(?m)^([ \t]*)Public Shared (?:ReadOnly )?").expect("static regex must compile")
    });

static PLAIN_TAG_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)'<").expect("static regex must compile"));

/// Mark every shared field declared at the start of a line `ReadOnly`.
pub fn promote_readonly(text: &str) -> String {
    SHARED_FIELD
        .replace_all(text, "${1}Public Shared ReadOnly ")
        .into_owned()
}

/// Turn `'<tag>` comments into `'''<tag>` documentation comments.
pub fn promote_doc_comments(text: &str) -> String {
    PLAIN_TAG_COMMENT
        .replace_all(text, "$1'''<")
        .into_owned()
}

pub(crate) fn post_process(text: String) -> String {
    promote_doc_comments(&promote_readonly(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENDERED: &str = "\
' <auto-generated>
' </auto-generated>
Namespace Effects
    '<summary>Blur.</summary>
    Public Class Blur
        Public Shared InputProperty As DependencyProperty = Register()
        Public Shared RadiusProperty As DependencyProperty = Register()
        ' plain comment
        '<summary>Radius.</summary>
        Public Property Radius() As Single
    End Class
End Namespace
";

    #[test]
    fn test_readonly_promotion() {
        let out = promote_readonly(RENDERED);
        assert_eq!(out.matches("Public Shared ReadOnly ").count(), 2);
        assert_eq!(promote_readonly(&out), out);
    }

    #[test]
    fn test_readonly_skips_comment_text() {
        let text = "    '<summary>Public Shared values.</summary>\n";
        assert_eq!(promote_readonly(text), text);
    }

    #[test]
    fn test_doc_comment_promotion() {
        let out = promote_doc_comments(RENDERED);
        assert!(out.contains("    '''<summary>Blur.</summary>\n"));
        assert!(out.contains("        '''<summary>Radius.</summary>\n"));
        assert!(out.contains("        ' plain comment\n"));
        assert!(out.starts_with("' <auto-generated>\n' </auto-generated>\n"));
    }

    #[test]
    fn test_post_process_is_idempotent() {
        let once = post_process(RENDERED.to_string());
        assert_eq!(post_process(once.clone()), once);
        assert!(!once.contains("''''<"));
        assert!(!once.contains("ReadOnly ReadOnly"));
    }
}
