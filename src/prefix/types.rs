use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{preceded, tuple},
    IResult,
};

/// A borrowed message prefix, split into its user-mask components.
///
/// Servers send bare hostnames in the prefix position, so a prefix that does
/// not have the `nick[!ident]@host` shape is kept whole as the nick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PrefixRef<'a> {
    /// The prefix exactly as it appeared after the leading `:`.
    pub raw: &'a str,
    /// Nick portion, or the whole prefix when it is not a user mask.
    pub nick: &'a str,
    /// Ident (user) portion, if present.
    pub ident: Option<&'a str>,
    /// Host portion, if present. May contain `/` (cloaked hosts on some IRCds).
    pub host: Option<&'a str>,
}

fn nick_char(c: char) -> bool {
    c != '!' && c != '@' && !c.is_whitespace()
}

fn ident_char(c: char) -> bool {
    c != '@' && !c.is_whitespace()
}

fn host_char(c: char) -> bool {
    !c.is_whitespace()
}

/// `nick[!ident]@host`, consuming the whole input.
fn user_mask(input: &str) -> IResult<&str, (&str, Option<&str>, &str)> {
    let (rest, (nick, ident, _, host)) = all_consuming(tuple((
        take_while1(nick_char),
        opt(preceded(char('!'), take_while1(ident_char))),
        char('@'),
        take_while1(host_char),
    )))(input)?;
    Ok((rest, (nick, ident, host)))
}

impl<'a> PrefixRef<'a> {
    /// Split a raw prefix string.
    ///
    /// ```
    /// use ircline::PrefixRef;
    ///
    /// let p = PrefixRef::parse("nick!user@host");
    /// assert_eq!((p.nick, p.ident, p.host), ("nick", Some("user"), Some("host")));
    ///
    /// let p = PrefixRef::parse("irc.example.net");
    /// assert_eq!((p.nick, p.ident, p.host), ("irc.example.net", None, None));
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        match user_mask(raw) {
            Ok((_, (nick, ident, host))) => PrefixRef {
                raw,
                nick,
                ident,
                host: Some(host),
            },
            Err(_) => PrefixRef {
                raw,
                nick: raw,
                ident: None,
                host: None,
            },
        }
    }

    /// Whether the prefix had the `nick[!ident]@host` shape.
    pub fn is_user_mask(&self) -> bool {
        self.host.is_some()
    }
}
