//! Owned IRC message type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::MessageParseError;
use crate::ircv3::server_time;

use super::borrowed::MessageRef;
use super::tags::Tag;

/// A fully parsed IRC line that owns its data.
///
/// Messages are only produced by parsing, so every field respects the line
/// grammar: the command is letters or a three-digit numeric, `nick` is never
/// empty, and only the last parameter may contain spaces or start with `:`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    tags: Vec<Tag>,
    prefix: Option<String>,
    nick: Option<String>,
    ident: String,
    hostname: String,
    command: String,
    params: Vec<String>,
}

impl Message {
    /// Parse one IRC line.
    ///
    /// ```
    /// use ircline::Message;
    ///
    /// let msg = Message::parse(":nick!user@host PRIVMSG #chan :hello world\r\n").unwrap();
    /// assert_eq!(msg.nick(), Some("nick"));
    /// assert_eq!(msg.params(), ["#chan", "hello world"]);
    /// ```
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        MessageRef::parse(line).map(Message::from)
    }

    /// Tags in source order; empty when the line had no tags segment.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The raw prefix, without its leading `:`.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The nick from a user-mask prefix, or the whole prefix otherwise.
    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    /// The ident part of the prefix, or `""`.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The host part of the prefix, or `""`.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Middle parameters, then the trailing parameter if there was one.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The last parameter, which is where the trailing parameter ends up.
    pub fn last_param(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// Raw value of the first tag named `key`.
    ///
    /// Returns `None` both when the tag is missing and when it has no value;
    /// use [`Message::has_tag`] to tell them apart.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.0 == key)
            .and_then(Tag::value)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.0 == key)
    }

    /// The nick, but only when the prefix was a `nick[!ident]@host` mask.
    pub fn source_nickname(&self) -> Option<&str> {
        if self.hostname.is_empty() {
            None
        } else {
            self.nick()
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    /// The numeric reply code, if the command is a three-digit numeric.
    pub fn numeric(&self) -> Option<u16> {
        if self.command.bytes().all(|b| b.is_ascii_digit()) {
            self.command.parse().ok()
        } else {
            None
        }
    }

    /// Timestamp from the IRCv3 `time` tag, if present and well formed.
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        server_time::server_time(self)
    }
}

impl From<MessageRef<'_>> for Message {
    fn from(msg: MessageRef<'_>) -> Self {
        let (prefix, nick, ident, hostname) = match msg.prefix {
            Some(p) => (
                Some(p.raw.to_owned()),
                Some(p.nick.to_owned()),
                p.ident.unwrap_or_default().to_owned(),
                p.host.unwrap_or_default().to_owned(),
            ),
            None => (None, None, String::new(), String::new()),
        };

        Message {
            tags: msg.tags.into_iter().map(Tag::from).collect(),
            prefix,
            nick,
            ident,
            hostname,
            command: msg.command.to_owned(),
            params: msg.params.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s)
    }
}

/// Rebuilds the line in segment order, without a line terminator.
///
/// A last middle parameter ending in CR or LF is followed by a space so the
/// line-terminator trim does not eat it when the output is parsed again.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.tags.is_empty() {
            f.write_str("@")?;
            for (i, tag) in self.tags.iter().enumerate() {
                if i > 0 {
                    f.write_str(";")?;
                }
                write!(f, "{}", tag)?;
            }
            f.write_str(" ")?;
        }
        if let Some(prefix) = &self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        f.write_str(&self.command)?;

        if let Some((last, middles)) = self.params.split_last() {
            for param in middles {
                write!(f, " {}", param)?;
            }
            if last.is_empty() || last.contains(' ') || last.starts_with(':') {
                write!(f, " :{}", last)?;
            } else if last.ends_with(['\r', '\n']) {
                write!(f, " {} ", last)?;
            } else {
                write!(f, " {}", last)?;
            }
        }
        Ok(())
    }
}

/// Serialized as the reconstructed line, the same form `Deserialize` accepts.
#[cfg(feature = "serde")]
impl serde::Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let line = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        Message::parse(&line).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let msg: Message = "@time=123;id :nick!user@host PRIVMSG #chan :hello world\r\n"
            .parse()
            .unwrap();
        assert_eq!(
            msg.tags(),
            [Tag("time".into(), Some("123".into())), Tag("id".into(), None)]
        );
        assert_eq!(msg.prefix(), Some("nick!user@host"));
        assert_eq!(msg.nick(), Some("nick"));
        assert_eq!(msg.ident(), "user");
        assert_eq!(msg.hostname(), "host");
        assert_eq!(msg.command(), "PRIVMSG");
        assert_eq!(msg.params(), ["#chan", "hello world"]);
    }

    #[test]
    fn test_server_prefix() {
        let msg = Message::parse(":irc.example.net 001 mynick :Welcome").unwrap();
        assert_eq!(msg.prefix(), Some("irc.example.net"));
        assert_eq!(msg.nick(), Some("irc.example.net"));
        assert_eq!(msg.ident(), "");
        assert_eq!(msg.hostname(), "");
        assert_eq!(msg.source_nickname(), None);
        assert_eq!(msg.numeric(), Some(1));
        assert!(msg.is_numeric());
    }

    #[test]
    fn test_no_prefix() {
        let msg = Message::parse("PING :server1").unwrap();
        assert!(msg.tags().is_empty());
        assert_eq!(msg.prefix(), None);
        assert_eq!(msg.nick(), None);
        assert_eq!(msg.ident(), "");
        assert_eq!(msg.hostname(), "");
        assert_eq!(msg.params(), ["server1"]);
        assert_eq!(msg.last_param(), Some("server1"));
        assert_eq!(msg.numeric(), None);
    }

    #[test]
    fn test_tag_lookup() {
        let msg = Message::parse("@a=1;b;c= PING").unwrap();
        assert_eq!(msg.tag_value("a"), Some("1"));
        assert_eq!(msg.tag_value("b"), None);
        assert!(msg.has_tag("b"));
        assert_eq!(msg.tag_value("c"), Some(""));
        assert!(!msg.has_tag("d"));
    }

    #[test]
    fn test_source_nickname() {
        let msg = Message::parse(":dan!d@localhost JOIN #a").unwrap();
        assert_eq!(msg.source_nickname(), Some("dan"));
    }

    #[test]
    fn test_display() {
        let msg = Message::parse("@a=1;b :n!u@h PRIVMSG  #chan  :hello world").unwrap();
        assert_eq!(msg.to_string(), "@a=1;b :n!u@h PRIVMSG #chan :hello world");

        let msg = Message::parse("PING :server1").unwrap();
        assert_eq!(msg.to_string(), "PING server1");

        let msg = Message::parse("PRIVMSG #a ::)").unwrap();
        assert_eq!(msg.to_string(), "PRIVMSG #a ::)");

        let msg = Message::parse("PRIVMSG #a :").unwrap();
        assert_eq!(msg.to_string(), "PRIVMSG #a :");
    }

    #[test]
    fn test_display_reparses_equal() {
        for line in [
            "@ :nick COMMAND",
            ":irc.example.net 001 mynick :Welcome to IRC",
            "JOIN #a #b #c",
            "@time=2023-01-01T00:00:00Z;+x/y=z :a/b!~c@d/e PRIVMSG #c :hi : there",
        ] {
            let msg = Message::parse(line).unwrap();
            let again = Message::parse(&msg.to_string()).unwrap();
            assert_eq!(msg, again, "line {:?}", line);
        }
    }

    #[test]
    fn test_messages_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Message>();
        assert_send_sync::<MessageRef<'static>>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_from_line() {
        let msg: Message = serde_json::from_str("\"PING :x\"").unwrap();
        assert_eq!(msg.command(), "PING");
        assert!(serde_json::from_str::<Message>("\"!!\"").is_err());

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!("PING x"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        for line in [
            ":n!u@h PRIVMSG #a :hi",
            "@time=123;id :irc.example.net 001 me :Welcome home",
            "JOIN a\r  ",
        ] {
            let msg = Message::parse(line).unwrap();
            let value = serde_json::to_value(&msg).unwrap();
            let back: Message = serde_json::from_value(value).unwrap();
            assert_eq!(back, msg, "line {:?}", line);
        }
    }

    #[test]
    fn test_display_protects_line_end_in_last_middle() {
        let msg = Message::parse("JOIN a\r  ").unwrap();
        assert_eq!(msg.params(), ["a\r"]);
        assert_eq!(msg.to_string(), "JOIN a\r ");
        assert_eq!(Message::parse(&msg.to_string()).unwrap(), msg);

        let msg = Message::parse("MODE #a b\n ").unwrap();
        assert_eq!(msg.params(), ["#a", "b\n"]);
        assert_eq!(Message::parse(&msg.to_string()).unwrap(), msg);
    }
}
