//! Helpers for the multi-line `Display` renderings.
//!
//! Renderings look like
//!
//! ```text
//! EventHandler(
//!   (handler): <fn hello at 0x...>
//!   (handler_args): ()
//!   (handler_kwargs): {}
//! )
//! ```
//!
//! Nested values are indented so the whole manager state reads as a tree.

/// Indent every line after the first by `spaces`.
pub(crate) fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.replace('\n', &format!("\n{pad}"))
}

/// Render `(key): value` lines, one per entry.
pub(crate) fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(k, v)| format!("({}): {}", k.as_ref(), indent(v.as_ref(), 2)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `(i): value` lines for a sequence.
pub(crate) fn sequence<V: AsRef<str>>(items: impl IntoIterator<Item = V>) -> String {
    mapping(
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v)),
    )
}

/// Wrap rendered fields in `Name(\n  ...\n)`.
pub(crate) fn object(name: &str, fields: &str) -> String {
    format!("{name}(\n  {}\n)", indent(fields, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent("a\nb", 2), "a\n  b");
        assert_eq!(indent("single", 4), "single");
    }

    #[test]
    fn test_mapping_and_sequence() {
        assert_eq!(mapping([("freq", "3"), ("step", "0")]), "(freq): 3\n(step): 0");
        assert_eq!(sequence(["x", "y"]), "(0): x\n(1): y");
    }

    #[test]
    fn test_object() {
        let out = object("Thing", &mapping([("a", "1")]));
        assert_eq!(out, "Thing(\n  (a): 1\n)");
    }
}
