use crate::error::MessageParseError;
use crate::prefix::PrefixRef;

use super::nom_parser::ParsedMessage;
use super::tags::{parse_tags, TagRef};
use super::Message;

/// A zero-copy view of one parsed IRC line.
///
/// All slices borrow from the line passed to [`MessageRef::parse`]. Convert
/// with [`MessageRef::to_owned_message`] when the message must outlive it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MessageRef<'a> {
    pub tags: Vec<TagRef<'a>>,
    pub prefix: Option<PrefixRef<'a>>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
}

/// Strip leading carriage returns and trailing CR/LF line terminators.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_start_matches('\r').trim_end_matches(['\r', '\n'])
}

impl<'a> MessageRef<'a> {
    /// Parse one line. Surrounding carriage returns are ignored.
    pub fn parse(s: &'a str) -> Result<MessageRef<'a>, MessageParseError> {
        let trimmed = trim_line(s);

        let parsed = ParsedMessage::parse(trimmed).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::trace!(position = e.position(), line = trimmed, "rejected IRC line");
            e
        })?;

        Ok(MessageRef {
            tags: parsed.tags.map(|t| parse_tags(t).collect()).unwrap_or_default(),
            prefix: parsed.prefix.map(PrefixRef::parse),
            command: parsed.command,
            params: parsed.params,
        })
    }

    /// The nick from the prefix, or the whole prefix for server sources.
    pub fn nick(&self) -> Option<&'a str> {
        self.prefix.map(|p| p.nick)
    }

    pub fn to_owned_message(&self) -> Message {
        Message::from(self.clone())
    }
}
