//! The incremental tokenizer: the core of this crate.
//!
//! A [`Tokenizer`] is fed chunks of already-decoded text (see
//! [`crate::bytes::ByteTokenizer`] for a byte-oriented wrapper) and emits
//! [`Token`] values synchronously as each call recognizes them, handing each
//! one to a caller-supplied callback as soon as it is produced rather than
//! retaining it. A token whose terminator has not yet arrived is captured as
//! `pending` state and carried across the chunk boundary; see the
//! module-level discussion in `scan` for the recognition grammar itself.

mod scan;

use crate::error::TokenizerError;
use crate::token::Token;
use scan::{Outcome, Pending};

/// Bookkeeping counters, useful for diagnostics and tests. Not part of the
/// tokenizer's correctness contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    pub chunks_fed: u64,
    pub tokens_emitted: u64,
}

/// A streaming, single-use XML tokenizer.
///
/// Instances are created empty, fed chunks in order via [`feed`](Self::feed),
/// and flushed exactly once via [`finish`](Self::finish). Calling either
/// method after the tokenizer has already finished (successfully or with an
/// error) is a programming error and panics, the same way `html`'s
/// `Html5Tokenizer` panics on `push_input` after `finish()`.
///
/// Tokens recognized during a `feed`/`finish` call are handed to that call's
/// `on_token` callback as soon as they are produced; the tokenizer itself
/// retains nothing beyond the in-flight pending token and the open-tag
/// stack, so memory stays bounded by the deepest nesting and the largest
/// single token regardless of document length.
pub struct Tokenizer {
    pending: Option<(Pending, String)>,
    open_tags: Vec<String>,
    closed: bool,
    stats: TokenizerStats,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer {
            pending: None,
            open_tags: Vec::new(),
            closed: false,
            stats: TokenizerStats::default(),
        }
    }

    /// Accept a chunk of decoded text. Every token recognized during this
    /// call is handed to `on_token`, in order, as soon as it is produced.
    ///
    /// On structural failure, returns the error and the tokenizer becomes
    /// inert: no further `feed` or `finish` call is legal. Tokens already
    /// passed to `on_token` before the failing construct was reached are
    /// not reverted.
    pub fn feed(
        &mut self,
        chunk: &str,
        on_token: &mut dyn FnMut(Token),
    ) -> Result<(), TokenizerError> {
        assert!(
            !self.closed,
            "Tokenizer::feed called after the tokenizer has already finished"
        );
        self.stats.chunks_fed += 1;

        let mut buf = match self.pending.take() {
            Some((_, buffer)) => buffer,
            None => String::new(),
        };
        buf.push_str(chunk);

        if let Err(err) = self.run_scan(buf, on_token) {
            self.closed = true;
            self.open_tags.clear();
            return Err(err);
        }
        Ok(())
    }

    /// Process `buf` (the carried-over pending buffer plus the new chunk,
    /// or just a chunk if there was no pending state) from the start,
    /// handing every token it fully determines to `on_token` and storing
    /// whatever remains as the new pending state.
    fn run_scan(
        &mut self,
        buf: String,
        on_token: &mut dyn FnMut(Token),
    ) -> Result<(), TokenizerError> {
        let mut cursor = 0;
        loop {
            if cursor >= buf.len() {
                self.pending = None;
                return Ok(());
            }
            match scan::classify(&buf[cursor..]) {
                Outcome::Complete(token, consumed) => {
                    self.apply_tag_stack(&token)?;
                    cursor += consumed;
                    self.emit(token, on_token);
                }
                Outcome::Stall(kind) => {
                    self.pending = Some((kind, buf[cursor..].to_string()));
                    return Ok(());
                }
                Outcome::Error(err) => return Err(err),
            }
        }
    }

    fn apply_tag_stack(&mut self, token: &Token) -> Result<(), TokenizerError> {
        match token {
            Token::TagOpen {
                name, self_closing, ..
            } => {
                if !self_closing {
                    self.open_tags.push(name.clone());
                }
            }
            Token::TagClose { name } => match self.open_tags.pop() {
                Some(popped) if &popped == name => {}
                Some(popped) => {
                    self.open_tags.clear();
                    return Err(TokenizerError::MismatchedCloseTag {
                        popped: Some(popped),
                    });
                }
                None => return Err(TokenizerError::MismatchedCloseTag { popped: None }),
            },
            _ => {}
        }
        Ok(())
    }

    fn emit(&mut self, token: Token, on_token: &mut dyn FnMut(Token)) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "xmltok::tokenizer", "emit token: {token:?}");
        self.stats.tokens_emitted += 1;
        on_token(token);
    }

    /// Signal end-of-input. Hands any legal final text fragment to
    /// `on_token`, then succeeds, or reports exactly one of the
    /// pending/unclosed-tag errors from spec.md's termination table.
    pub fn finish(&mut self, on_token: &mut dyn FnMut(Token)) -> Result<(), TokenizerError> {
        assert!(
            !self.closed,
            "Tokenizer::finish called after the tokenizer has already finished"
        );
        self.closed = true;

        match self.pending.take() {
            None => {}
            Some((Pending::Text, buffer)) => self.emit(Token::Text(buffer), on_token),
            Some((Pending::CData, _)) => return Err(TokenizerError::UnclosedCData),
            Some((Pending::Comment, _)) => return Err(TokenizerError::UnclosedComment),
            Some((Pending::ProcessingInstruction, _)) => {
                return Err(TokenizerError::UnclosedProcessingInstruction)
            }
            Some((Pending::MarkupDeclaration, _)) | Some((Pending::TagLike, _)) => {
                return Err(TokenizerError::UnclosedTag)
            }
        }

        if !self.open_tags.is_empty() {
            let names = std::mem::take(&mut self.open_tags);
            return Err(TokenizerError::UnclosedOpenTags { names });
        }

        Ok(())
    }

    /// Convenience: `feed(input, on_token)` followed by `finish(on_token)`.
    pub fn parse(
        &mut self,
        input: &str,
        on_token: &mut dyn FnMut(Token),
    ) -> Result<(), TokenizerError> {
        self.feed(input, on_token)?;
        self.finish(on_token)
    }

    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }
}

/// One-shot convenience: tokenize an entire string at once, equivalent to
/// feeding a single [`Tokenizer`] the whole input and finishing it, and
/// collecting every token it produces into a `Vec`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizerError> {
    let mut tokenizer = Tokenizer::new();
    let mut tokens = Vec::new();
    tokenizer.parse(input, &mut |token| tokens.push(token))?;
    Ok(tokens)
}
