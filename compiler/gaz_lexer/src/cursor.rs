//! Character cursor over the source text.
//!
//! End of input is `None` from [`Cursor::current`], never a sentinel
//! character, so a literal NUL in the source is just an invalid character.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the current character.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Step past the current character. No-op at end of input.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance while `pred` holds and return the consumed slice.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.source[start..self.pos]
    }

    /// Skip through the next newline (inclusive), or to end of input.
    pub(crate) fn skip_line(&mut self) {
        match self.source[self.pos..].find('\n') {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.source.len(),
        }
    }
}
