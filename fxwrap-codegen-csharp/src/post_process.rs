//! Textual fixups applied after serialization.
//!
//! The syntax tree has no readonly modifier and no documentation-comment
//! node, so both are patched into the rendered text. Every fixup here is
//! idempotent.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLAIN_TAG_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)// <(/?auto-generated>)?").expect("static regex must compile")
});

static STATIC_DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)public static DependencyProperty ")
        .expect("static regex must compile")
});

/// Mark every static descriptor field `readonly`.
///
/// Only declarations at the start of a line are touched.
pub fn promote_readonly(text: &str) -> String {
    STATIC_DESCRIPTOR
        .replace_all(text, "${1}public static readonly DependencyProperty ")
        .into_owned()
}

/// Turn `// <tag>` comments into `/// <tag>` documentation comments.
///
/// The `// <auto-generated>` banner markers are left alone and lines that
/// already start with `///` never match.
pub fn promote_doc_comments(text: &str) -> String {
    PLAIN_TAG_COMMENT
        .replace_all(text, |caps: &Captures<'_>| {
            if caps.get(2).is_some() {
                caps[0].to_string()
            } else {
                format!("{}/// <", &caps[1])
            }
        })
        .into_owned()
}

pub(crate) fn post_process(text: String) -> String {
    promote_doc_comments(&promote_readonly(&text))
}
