use crate::types::span::Span;

/// A lexer that chunks the template source into raw text and `{...}` blocks
/// so that the parser doesn't have to operate on raw text.
///
/// A block starts at a `{` and is closed by the first `}` after it. Blocks
/// do not nest, a `{` inside a block is simply part of its body. Empty
/// braces `{}` and a `{` that is never closed are raw text.
#[derive(Debug)]
pub struct Lexer<'source> {
    /// The original template source.
    pub source: &'source str,

    /// A cursor over the template source.
    cursor: usize,

    /// A buffer to store the next token.
    next: Option<(Token, Span)>,
}

/// The unit yielded by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Raw template
    Raw,
    /// A `{...}` block, the span includes the braces
    Block,
}

impl<'source> Lexer<'source> {
    /// Construct a new lexer.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            cursor: 0,
            next: None,
        }
    }

    /// Returns the next token and span.
    pub fn next(&mut self) -> Option<(Token, Span)> {
        if let Some(next) = self.next.take() {
            return Some(next);
        }

        let i = self.cursor;

        if self.source[i..].is_empty() {
            return None;
        }

        // Find the next block from `i`. The following diagram helps describe
        // the variable naming.
        //
        // xxxxxxx{bbbbbbb}xxxxxx
        //    ^   ^       ^
        //    i   j       k
        match self.find_block(i) {
            Some((j, k)) => {
                let block = Span::from(j..k + 1);
                self.cursor = k + 1;
                if i == j {
                    // The current cursor is exactly at the block.
                    Some((Token::Block, block))
                } else {
                    // We must first emit the raw token, so we store the
                    // block token in the `next` buffer.
                    self.next = Some((Token::Block, block));
                    Some((Token::Raw, Span::from(i..j)))
                }
            }
            None => {
                let j = self.source.len();
                self.cursor = j;
                Some((Token::Raw, Span::from(i..j)))
            }
        }
    }

    /// Returns the byte offsets of the opening and closing brace of the next
    /// non-empty block starting the search at `i`.
    fn find_block(&self, mut i: usize) -> Option<(usize, usize)> {
        let bytes = self.source.as_bytes();
        loop {
            let j = i + find_byte(&bytes[i..], b'{')?;
            // If no `}` follows this `{` then none follows any later `{`
            // either, so the rest of the source is raw.
            let k = j + 1 + find_byte(&bytes[j + 1..], b'}')?;
            if k > j + 1 {
                return Some((j, k));
            }
            // Empty braces, keep looking after them.
            i = k + 1;
        }
    }
}

fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}
