//! The event vocabulary emitted by the tokenizer.

/// A single recognized lexical unit of an XML document.
///
/// All string payloads are raw: they carry exactly the characters lying
/// between delimiters in the source, with no entity expansion, whitespace
/// trimming, or attribute splitting applied. Callers that need structured
/// attributes or expanded text opt into [`crate::attributes::parse_attributes`]
/// or [`crate::entities::expand_entities`] themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Character data outside any tag, comment, CDATA section, or PI.
    Text(String),
    /// The contents of a `<![CDATA[ ... ]]>` section, excluding the wrapper.
    CData(String),
    /// The contents of a `<!-- ... -->` comment, excluding the delimiters.
    Comment(String),
    /// The contents of a `<? ... ?>` processing instruction.
    ProcessingInstruction(String),
    /// An opening (or self-closing) tag.
    TagOpen {
        name: String,
        /// The raw substring following `name`, including its leading
        /// whitespace if any. Not parsed into attributes here.
        raw_attributes: String,
        self_closing: bool,
    },
    /// A closing tag, `</name>`.
    TagClose { name: String },
}
