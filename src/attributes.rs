//! Parsing of the raw attribute substring carried by `Token::TagOpen`.

use crate::error::AttributeError;
use indexmap::IndexMap;

fn is_attr_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Parse a raw attribute substring (the `raw_attributes` payload of a
/// `Token::TagOpen`) into an ordered `name -> value` mapping.
///
/// Duplicate names: the last occurrence wins, consistent with inserting
/// each parsed pair into the map in the order encountered.
pub fn parse_attributes(raw: &str) -> Result<IndexMap<String, String>, AttributeError> {
    let bytes = raw.as_bytes();
    let len = bytes.len();
    let mut map = IndexMap::new();
    let mut i = 0;

    while i < len {
        while i < len && is_attr_whitespace(bytes[i]) {
            i += 1;
        }
        if i >= len {
            break;
        }

        let name_start = i;
        while i < len && bytes[i] != b'=' {
            if is_attr_whitespace(bytes[i]) {
                return Err(AttributeError::NameContainsWhitespace);
            }
            i += 1;
        }
        if i >= len {
            return Err(AttributeError::ExpectedValue);
        }
        let name = &raw[name_start..i];
        i += 1; // consume '='

        if i >= len {
            return Err(AttributeError::ExpectedValue);
        }
        let quote = bytes[i];
        if quote != b'"' && quote != b'\'' {
            return Err(AttributeError::ValueNotQuoted);
        }
        i += 1;
        let value_start = i;

        match memchr::memchr(quote, &bytes[i..]) {
            Some(offset) => {
                let value_end = i + offset;
                map.insert(name.to_string(), raw[value_start..value_end].to_string());
                i = value_end + 1;
            }
            None => return Err(AttributeError::UnclosedValue),
        }
    }

    Ok(map)
}
