//! A streaming, event-driven XML tokenizer in the SAX tradition.
//!
//! This crate tokenizes decoded XML text incrementally: it consumes chunks
//! of text in order and emits [`Token`] events as soon as each one is fully
//! determined, without ever building a document tree and without holding
//! more than the currently in-flight token and the open-tag stack in
//! memory. It deliberately does not validate well-formedness beyond
//! detecting mismatched tags, does not resolve namespaces, and does not
//! support DTDs or DOCTYPE declarations (`<!DOCTYPE` is rejected as a
//! structural error, not parsed).
//!
//! The core type is [`Tokenizer`]; [`bytes::ByteTokenizer`] wraps it with
//! incremental UTF-8 decoding for callers that only have raw bytes.
//! [`attributes::parse_attributes`] and [`entities::expand_entities`] are
//! pure helpers for turning a tag's raw attribute substring and a text
//! node's raw contents into structured data; neither is invoked by the
//! tokenizer itself, so callers only pay for them when they need to.
//!
//! ```
//! use xmltok::{Tokenizer, Token};
//!
//! let mut tokenizer = Tokenizer::new();
//! let mut tokens = Vec::new();
//! tokenizer.parse("<greeting>hello</greeting>", &mut |t| tokens.push(t)).unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::TagOpen { name: "greeting".into(), raw_attributes: "".into(), self_closing: false },
//!         Token::Text("hello".into()),
//!         Token::TagClose { name: "greeting".into() },
//!     ]
//! );
//! ```

pub mod attributes;
pub mod bytes;
pub mod entities;
mod error;
mod token;
mod tokenizer;

pub use attributes::parse_attributes;
pub use bytes::ByteTokenizer;
pub use entities::expand_entities;
pub use error::{AttributeError, TokenizerError};
pub use token::Token;
pub use tokenizer::{tokenize, Tokenizer, TokenizerStats};
