//! Escape sequence processing for string literals.
//!
//! Recognized escapes: `\n`, `\t`, `\"`, `\\`. Anything else is kept as
//! written, backslash included.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_escapes() {
        assert_eq!(unescape_string(r"a\nb"), "a\nb");
        assert_eq!(unescape_string(r"\t\\"), "\t\\");
        assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
    }

    #[test]
    fn keeps_unknown_escapes_verbatim() {
        assert_eq!(unescape_string(r"\q"), r"\q");
        assert_eq!(unescape_string("end\\"), "end\\");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(unescape_string("x = 1"), "x = 1");
    }
}
