//! Include-directive line parser
//!
//! Scans a file's text line by line and yields every quoted include with its
//! 1-based line number. Deliberately not a preprocessor: no macro expansion,
//! no block comments, no line continuations. Angle-bracket includes are
//! skipped, which is how system headers stay out of the graph.

/// One `#include "..."` directive as found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRef {
    /// Header name exactly as written between the quotes.
    pub name: String,
    /// 1-based line number of the directive.
    pub line: usize,
}

/// Lazily yield the quoted includes of `text`, in file order.
pub fn parse_includes(text: &str) -> impl Iterator<Item = IncludeRef> + '_ {
    text.lines().enumerate().filter_map(|(idx, line)| {
        parse_line(line).map(|name| IncludeRef {
            name: name.to_string(),
            line: idx + 1,
        })
    })
}

/// Extract the quoted header name from one physical line, or `None`.
///
/// After trimming leading whitespace the line must start with the literal
/// `#include` token. The remainder is truncated at the first `//` (single
/// line comments only, even inside quotes) and trimmed; it is accepted only
/// if it begins and ends with a double quote. An empty or lone-quote
/// remainder is malformed and skipped, never an error.
fn parse_line(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix("#include")?;
    let mut rest = rest.trim_start();

    if let Some(comment) = rest.find("//") {
        rest = &rest[..comment];
    }
    let rest = rest.trim_end();

    if rest.len() < 2 || !rest.starts_with('"') || !rest.ends_with('"') {
        return None;
    }
    Some(&rest[1..rest.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(text: &str) -> Vec<(String, usize)> {
        parse_includes(text)
            .map(|inc| (inc.name, inc.line))
            .collect()
    }

    #[test]
    fn test_quoted_include_is_yielded() {
        assert_eq!(parse_line("#include \"a.hh\""), Some("a.hh"));
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        assert_eq!(parse_line("   \t#include \"a.hh\""), Some("a.hh"));
    }

    #[test]
    fn test_no_space_after_token() {
        assert_eq!(parse_line("#include\"a.hh\""), Some("a.hh"));
    }

    #[test]
    fn test_angle_brackets_are_skipped() {
        assert_eq!(parse_line("#include <vector>"), None);
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        assert_eq!(parse_line("#include \"x.hh\" // utility"), Some("x.hh"));
    }

    #[test]
    fn test_comment_inside_quotes_truncates() {
        // Known limitation kept from the reference behavior: the comment cut
        // does not respect quoting, so this line is treated as malformed.
        assert_eq!(parse_line("#include \"a//b.hh\""), None);
    }

    #[test]
    fn test_commented_out_line_is_skipped() {
        // The token match happens after leading-whitespace trim only, so a
        // `//`-prefixed line never matches `#include`.
        assert_eq!(parse_line("// #include \"x.hh\""), None);
    }

    #[test]
    fn test_bare_include_does_not_panic() {
        assert_eq!(parse_line("#include"), None);
        assert_eq!(parse_line("#include   "), None);
        assert_eq!(parse_line("#include // nothing"), None);
    }

    #[test]
    fn test_lone_quote_is_malformed() {
        assert_eq!(parse_line("#include \""), None);
    }

    #[test]
    fn test_non_include_lines_are_skipped() {
        assert_eq!(parse_line("int main() {}"), None);
        assert_eq!(parse_line("#define FOO 1"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_line_numbers_are_one_based_file_order() {
        let text = "#include \"a.hh\"\nint x;\n#include <cstdio>\n#include \"b.hh\"\n";
        assert_eq!(
            parse_all(text),
            vec![("a.hh".to_string(), 1), ("b.hh".to_string(), 4)]
        );
    }

    #[test]
    fn test_subdirectory_names_pass_through_verbatim() {
        assert_eq!(parse_line("#include \"sub/a.hh\""), Some("sub/a.hh"));
        assert_eq!(parse_line("#include \"../up.hh\""), Some("../up.hh"));
    }
}
