//! Property-based tests for the inline pipeline

use mdhtml::{render, MdTokenizer, Tokenizer};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?(em|strong)>").unwrap());

/// Lines built from the characters that matter to emphasis parsing.
fn emphasis_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["_", "__", "\\", " ", "a", "я", "1", ",", ".", "#", "<"]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_render_never_panics(input in "\\PC{0,200}") {
        let _ = render(&input);
    }

    #[test]
    fn test_tokens_cover_the_line(line in emphasis_line()) {
        let stream = MdTokenizer::default().tokenize(&line);
        prop_assert_eq!(stream.source_text(&line), line.clone());

        let mut offset = 0;
        for token in stream.tokens() {
            prop_assert_eq!(token.span.start, offset);
            offset = token.span.end;
        }
        prop_assert_eq!(offset, line.len());
    }

    #[test]
    fn test_pairs_are_well_formed(line in emphasis_line()) {
        let stream = MdTokenizer::default().tokenize(&line);
        for (index, (token, partner)) in stream.iter().enumerate() {
            let Some(partner) = partner else { continue };
            prop_assert_eq!(stream.partner(partner), Some(index));
            prop_assert!(token.is_delimiter());
            prop_assert_eq!(stream.kind(partner), Some(token.kind));
        }
    }

    #[test]
    fn test_pairs_hug_their_content(line in emphasis_line()) {
        let stream = MdTokenizer::default().tokenize(&line);
        for (opener, closer) in stream.pairs().iter() {
            let open_span = &stream.tokens()[opener].span;
            let close_span = &stream.tokens()[closer].span;
            let after_open = line[open_span.end..].chars().next();
            let before_close = line[..close_span.start].chars().next_back();
            prop_assert!(after_open.is_some_and(|c| !c.is_whitespace()));
            prop_assert!(before_close.is_some_and(|c| !c.is_whitespace()));
            prop_assert!(open_span.end < close_span.start);
        }
    }

    #[test]
    fn test_escaped_underscores_render_literally(text in "[a-zа-я0-9 ,._]{0,60}") {
        let escaped = text.replace('_', "\\_");
        prop_assert_eq!(render(&escaped), text);
    }

    #[test]
    fn test_tags_nest_properly(line in emphasis_line()) {
        let html = render(&line);
        let mut open: Vec<&str> = Vec::new();
        for tag in TAG.find_iter(&html).map(|m| m.as_str()) {
            match tag.strip_prefix("</") {
                Some(closing) => {
                    let expected = open.pop().map(|name| &name[1..]);
                    prop_assert_eq!(expected, Some(closing), "{:?} -> {:?}", line, html);
                }
                None => open.push(tag),
            }
        }
        prop_assert!(open.is_empty(), "unclosed tags in {:?}", html);
    }
}
