//! Keyword table.
//!
//! GazLang has no free-form identifiers: every bare word must be one of
//! these keywords (matched ignoring ASCII case). Variables use the `$` sigil.

use gaz_ir::TokenKind;

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("echo", TokenKind::Echo),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("true", TokenKind::Bool(true)),
    ("false", TokenKind::Bool(false)),
];

pub(crate) fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(word))
        .map(|(_, kind)| kind.clone())
}
