//! Incremental UTF-8 decoding and a byte-oriented tokenizer wrapper.
//!
//! spec.md places byte decoding outside the tokenizer core and assumes a
//! decoder is supplied externally. This module is that external
//! collaborator made concrete: [`decode_chunk`]/[`finish_decode`] carry an
//! incomplete trailing UTF-8 sequence across chunk boundaries (adapted from
//! the equivalent helper in `html`'s `tools` crate), and [`ByteTokenizer`]
//! composes that decoder with [`crate::Tokenizer`] so a consumer that only
//! has raw bytes (a socket, a file) doesn't have to decode manually.

use crate::error::TokenizerError;
use crate::tokenizer::Tokenizer;
use crate::token::Token;

fn utf8_sequence_len(first_byte: u8) -> usize {
    match first_byte {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn decode_bytes(text: &mut String, carry: &mut Vec<u8>, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                text.push_str(s);
                break;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                if valid_up_to > 0 {
                    text.push_str(std::str::from_utf8(&bytes[..valid_up_to]).expect("valid prefix"));
                }
                match e.error_len() {
                    Some(len) => {
                        text.push('\u{FFFD}');
                        bytes = &bytes[valid_up_to + len..];
                    }
                    None => {
                        carry.extend_from_slice(&bytes[valid_up_to..]);
                        break;
                    }
                }
            }
        }
    }
}

/// Append `raw` to `text`, using `carry` to hold an incomplete UTF-8
/// sequence split across this call and the next. Invalid sequences are
/// replaced with U+FFFD rather than aborting decoding.
pub fn decode_chunk(text: &mut String, carry: &mut Vec<u8>, raw: &[u8]) {
    if raw.is_empty() {
        return;
    }
    if carry.is_empty() {
        decode_bytes(text, carry, raw);
        return;
    }

    let mut remaining = raw;
    while !carry.is_empty() && !remaining.is_empty() {
        let expected_len = utf8_sequence_len(carry[0]);
        if expected_len == 0 {
            text.push('\u{FFFD}');
            carry.clear();
            break;
        }
        let needed = expected_len.saturating_sub(carry.len());
        if needed == 0 {
            let completed = std::mem::take(carry);
            decode_bytes(text, carry, &completed);
            continue;
        }
        if remaining.len() < needed {
            carry.extend_from_slice(remaining);
            return;
        }
        let mut scratch = [0u8; 8];
        let carry_len = carry.len();
        scratch[..carry_len].copy_from_slice(carry);
        scratch[carry_len..carry_len + needed].copy_from_slice(&remaining[..needed]);
        carry.clear();
        decode_bytes(text, carry, &scratch[..carry_len + needed]);
        remaining = &remaining[needed..];
    }

    if !remaining.is_empty() {
        decode_bytes(text, carry, remaining);
    }
}

/// Flush a trailing incomplete sequence into `text` as U+FFFD, so a stream
/// that ends mid-character is never silently truncated.
pub fn finish_decode(text: &mut String, carry: &mut Vec<u8>) {
    if carry.is_empty() {
        return;
    }
    text.push_str(&String::from_utf8_lossy(carry));
    carry.clear();
}

/// A [`Tokenizer`] that accepts raw bytes instead of decoded text,
/// decoding UTF-8 incrementally as bytes arrive.
pub struct ByteTokenizer {
    tokenizer: Tokenizer,
    carry: Vec<u8>,
}

impl Default for ByteTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteTokenizer {
    pub fn new() -> Self {
        ByteTokenizer {
            tokenizer: Tokenizer::new(),
            carry: Vec::new(),
        }
    }

    /// Decode as much of `chunk` as is available and feed the decoded text
    /// to the underlying tokenizer, handing every token it produces to
    /// `on_token`. An incomplete trailing UTF-8 sequence is held back until
    /// the next call.
    pub fn push_bytes(
        &mut self,
        chunk: &[u8],
        on_token: &mut dyn FnMut(Token),
    ) -> Result<(), TokenizerError> {
        let mut text = String::new();
        decode_chunk(&mut text, &mut self.carry, chunk);
        self.tokenizer.feed(&text, on_token)
    }

    /// Flush any incomplete trailing byte sequence (lossily) and finish
    /// the underlying tokenizer, handing every token it produces to
    /// `on_token`.
    pub fn finish(&mut self, on_token: &mut dyn FnMut(Token)) -> Result<(), TokenizerError> {
        let mut text = String::new();
        finish_decode(&mut text, &mut self.carry);
        if !text.is_empty() {
            self.tokenizer.feed(&text, on_token)?;
        }
        self.tokenizer.finish(on_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_multibyte_across_chunks() {
        let mut text = String::new();
        let mut carry = Vec::new();
        decode_chunk(&mut text, &mut carry, &[0xC3]);
        assert_eq!(text, "");
        assert_eq!(carry, vec![0xC3]);
        decode_chunk(&mut text, &mut carry, &[0x97]);
        assert_eq!(text, "×");
        assert!(carry.is_empty());
    }

    #[test]
    fn invalid_bytes_make_progress() {
        let mut text = String::new();
        let mut carry = Vec::new();
        decode_chunk(&mut text, &mut carry, &[0xFF, b'f']);
        assert_eq!(text, "\u{FFFD}f");
        assert!(carry.is_empty());
    }

    #[test]
    fn incomplete_trailing_sequence_is_flushed_lossily() {
        let mut text = String::new();
        let mut carry = Vec::new();
        decode_chunk(&mut text, &mut carry, &[0xE2, 0x82]);
        assert_eq!(text, "");
        finish_decode(&mut text, &mut carry);
        assert_eq!(text, "\u{FFFD}");
    }

    #[test]
    fn byte_tokenizer_decodes_and_tokenizes_across_chunks() {
        let mut t = ByteTokenizer::new();
        let mut tokens = Vec::new();
        t.push_bytes("<a>caf".as_bytes(), &mut |tok| tokens.push(tok))
            .unwrap();
        t.push_bytes(&[0xC3], &mut |tok| tokens.push(tok)).unwrap(); // first byte of "é"
        t.push_bytes(&[0xA9], &mut |tok| tokens.push(tok)).unwrap(); // second byte of "é"
        t.push_bytes("</a>".as_bytes(), &mut |tok| tokens.push(tok))
            .unwrap();
        t.finish(&mut |tok| tokens.push(tok)).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::TagOpen {
                    name: "a".into(),
                    raw_attributes: "".into(),
                    self_closing: false,
                },
                Token::Text("café".into()),
                Token::TagClose { name: "a".into() },
            ]
        );
    }
}
