use std::str::Chars;

use super::palette::Role;
use super::styled::StyledLine;

/// Left-to-right scanner classifying each character of a line.
///
/// State is causal: the role of a character depends only on the brace depth,
/// quote state and escape flag accumulated from the characters before it.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    depth: i32,
    in_str: bool,
    escaped: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars(),
            depth: 0,
            in_str: false,
            escaped: false,
        }
    }

    /// `{` seen minus `}` seen so far (escaped braces excluded).
    #[cfg(test)]
    pub(crate) fn depth(&self) -> i32 {
        self.depth
    }

    #[cfg(test)]
    pub(crate) fn in_string(&self) -> bool {
        self.in_str
    }

    fn classify(&mut self, c: char) -> Option<Role> {
        if self.escaped {
            self.escaped = false;
            return Some(Role::Escaped);
        }
        match c {
            '{' => {
                self.depth += 1;
                Some(Role::Bracket)
            }
            '}' => {
                self.depth -= 1;
                Some(Role::Bracket)
            }
            '\\' => {
                self.escaped = true;
                Some(Role::EscapeMarker)
            }
            '"' => {
                self.in_str = !self.in_str;
                Some(Role::Quote)
            }
            '0'..='9' if self.depth > 0 && !self.in_str => Some(Role::KvNumber),
            ':' => (self.depth > 0).then_some(Role::KvSeparator),
            _ if self.in_str => Some(Role::StringContent),
            _ => None,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = (char, Option<Role>);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        Some((c, self.classify(c)))
    }
}

pub fn tokenize(line: &str) -> StyledLine {
    let mut out = StyledLine::new();
    for (c, role) in Tokenizer::new(line) {
        out.push_char(role, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn roles(line: &str) -> Vec<Option<Role>> {
        Tokenizer::new(line).map(|(_, role)| role).collect()
    }

    #[test]
    fn digits_and_colons_inside_braces() {
        assert_eq!(
            roles("{a:1}"),
            vec![
                Some(Role::Bracket),
                None,
                Some(Role::KvSeparator),
                Some(Role::KvNumber),
                Some(Role::Bracket),
            ]
        );
    }

    #[test]
    fn digits_and_colons_outside_braces_are_plain() {
        assert_eq!(roles("a:1"), vec![None, None, None]);
    }

    #[test]
    fn quoted_text_is_string_content() {
        assert_eq!(
            roles("{\"k1\":2}"),
            vec![
                Some(Role::Bracket),
                Some(Role::Quote),
                Some(Role::StringContent),
                Some(Role::StringContent),
                Some(Role::Quote),
                Some(Role::KvSeparator),
                Some(Role::KvNumber),
                Some(Role::Bracket),
            ]
        );
    }

    #[test]
    fn colon_inside_braced_string_is_still_a_separator() {
        let roles = roles("{\"a:b\"}");
        assert_eq!(roles[3], Some(Role::KvSeparator));
    }

    #[test]
    fn colon_in_top_level_string_is_plain() {
        assert_eq!(
            roles("\"a:b\""),
            vec![
                Some(Role::Quote),
                Some(Role::StringContent),
                None,
                Some(Role::StringContent),
                Some(Role::Quote),
            ]
        );
    }

    #[test]
    fn escape_marks_next_char() {
        let mut tok = Tokenizer::new(r#""a\"b""#);
        let got: Vec<_> = tok.by_ref().collect();
        assert_eq!(
            got,
            vec![
                ('"', Some(Role::Quote)),
                ('a', Some(Role::StringContent)),
                ('\\', Some(Role::EscapeMarker)),
                ('"', Some(Role::Escaped)),
                ('b', Some(Role::StringContent)),
                ('"', Some(Role::Quote)),
            ]
        );
        assert!(!tok.in_string());
    }

    #[test]
    fn escaped_backslash_does_not_escape_again() {
        assert_eq!(
            roles(r"\\{"),
            vec![
                Some(Role::EscapeMarker),
                Some(Role::Escaped),
                Some(Role::Bracket),
            ]
        );
    }

    #[test]
    fn escaped_brace_does_not_change_depth() {
        let mut tok = Tokenizer::new(r"\{1");
        let got: Vec<_> = tok.by_ref().collect();
        assert_eq!(got[2], ('1', None));
        assert_eq!(tok.depth(), 0);
    }

    #[test]
    fn unbalanced_closing_brace_goes_negative() {
        let mut tok = Tokenizer::new("}}{1");
        let got: Vec<_> = tok.by_ref().collect();
        assert_eq!(got[3], ('1', None));
        assert_eq!(tok.depth(), -1);
    }

    #[test]
    fn multibyte_chars_are_kept_whole() {
        let styled = tokenize("{\"héllo ✓\":1}");
        assert_eq!(styled.plain(), "{\"héllo ✓\":1}");
        assert_eq!(styled.find(Role::StringContent), Some("héllo ✓"));
    }

    #[test]
    fn plain_line_is_a_single_unstyled_fragment() {
        let styled = tokenize("--- PASS: TestFoo (0.00s)");
        assert_eq!(styled.fragments().len(), 1);
        assert_eq!(styled.fragments()[0].role, None);
    }

    proptest! {
        #[test]
        fn tokenizing_preserves_content(line in "\\PC*") {
            prop_assert_eq!(tokenize(&line).plain(), line);
        }

        #[test]
        fn digit_and_colon_roles_follow_depth_and_quotes(line in "[{}a:1\\\\\"]{0,40}") {
            let mut tok = Tokenizer::new(&line);
            let mut depth = 0i32;
            let mut in_str = false;
            let mut escaped = false;
            for c in line.chars() {
                let (_, role) = tok.next().unwrap();
                if escaped {
                    escaped = false;
                    prop_assert_eq!(role, Some(Role::Escaped));
                } else {
                    match c {
                        '\\' => escaped = true,
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        '"' => in_str = !in_str,
                        '1' => {
                            let number = (depth > 0 && !in_str).then_some(Role::KvNumber);
                            let text = in_str.then_some(Role::StringContent);
                            prop_assert_eq!(role, number.or(text));
                        }
                        ':' => {
                            prop_assert_eq!(role, (depth > 0).then_some(Role::KvSeparator));
                        }
                        _ => {}
                    }
                }
                prop_assert_eq!(tok.depth(), depth);
                prop_assert_eq!(tok.in_string(), in_str);
            }
        }

        #[test]
        fn balanced_unescaped_quotes_end_outside_string(words in prop::collection::vec("[a-z0-9:{} ]{0,6}", 0..6)) {
            let line = words
                .iter()
                .map(|w| format!("\"{w}\\\"\""))
                .collect::<String>();
            let mut tok = Tokenizer::new(&line);
            tok.by_ref().for_each(drop);
            prop_assert!(!tok.in_string());
        }
    }
}
