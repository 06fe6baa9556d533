//! IRCv3 message tags.
//!
//! Tag values are kept exactly as they appear on the wire. Use
//! [`unescape_tag_value`] (or [`Tag::unescaped_value`]) to decode them.

use std::fmt;

/// An owned message tag: key and optional value.
///
/// A value of `None` means the tag carried no `=`; `Some("")` means it carried
/// an `=` with nothing after it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub String, pub Option<String>);

/// A borrowed message tag pointing into the original line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TagRef<'a>(pub &'a str, pub Option<&'a str>);

impl Tag {
    /// The tag key.
    pub fn key(&self) -> &str {
        &self.0
    }

    /// The raw (still escaped) tag value.
    pub fn value(&self) -> Option<&str> {
        self.1.as_deref()
    }

    /// The tag value with IRCv3 escapes decoded.
    pub fn unescaped_value(&self) -> Option<String> {
        self.1.as_deref().map(unescape_tag_value)
    }
}

impl<'a> TagRef<'a> {
    /// Split one `key[=value]` token on its first `=`.
    pub fn parse(token: &'a str) -> Self {
        match token.split_once('=') {
            Some((key, value)) => TagRef(key, Some(value)),
            None => TagRef(token, None),
        }
    }
}

impl From<TagRef<'_>> for Tag {
    fn from(tag: TagRef<'_>) -> Self {
        Tag(tag.0.to_owned(), tag.1.map(str::to_owned))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)?;
        if let Some(value) = &self.1 {
            write!(f, "={}", value)?;
        }
        Ok(())
    }
}

/// Split a tags segment (without the leading `@`) into tags, in source order.
///
/// Tokens with an empty key, such as those produced by `;;`, are skipped.
pub fn parse_tags(segment: &str) -> impl Iterator<Item = TagRef<'_>> {
    segment
        .split(';')
        .map(TagRef::parse)
        .filter(|tag| !tag.0.is_empty())
}

/// Unescape a tag value from wire format.
///
/// `\:` becomes `;`, `\s` a space, `\\` a backslash, `\r` and `\n` CR and LF.
/// Any other escaped character stands for itself and a lone trailing
/// backslash is dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}
