//! # ircline
//!
//! A parser for single IRC protocol lines as sent by an IRCd, with IRCv3
//! message tags.
//!
//! ## Features
//!
//! - Tags, prefix (split into nick, ident and hostname), command and parameters
//! - Zero-copy parsing with [`MessageRef`], owned results with [`Message`]
//! - Hostnames may contain `/`, as used for cloaks by several IRCds
//! - Optional `tracing` diagnostics and `serde` support
//!
//! The parser is purely syntactic. It does not check that a command exists or
//! that it has the right number of parameters.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use ircline::Message;
//!
//! let raw = "@time=2023-01-01T12:00:00Z :nick!user@host PRIVMSG #channel :Hello!\r\n";
//! let message: Message = raw.parse().expect("Valid IRC line");
//!
//! assert_eq!(message.tag_value("time"), Some("2023-01-01T12:00:00Z"));
//! assert_eq!(message.nick(), Some("nick"));
//! assert_eq!(message.ident(), "user");
//! assert_eq!(message.hostname(), "host");
//! assert_eq!(message.command(), "PRIVMSG");
//! assert_eq!(message.params(), ["#channel", "Hello!"]);
//! ```
//!
//! Lines that do not have a command where one is required are rejected:
//!
//! ```rust
//! use ircline::{Message, MessageParseError};
//!
//! let err = "@tags-without-anything-else".parse::<Message>().unwrap_err();
//! assert_eq!(err, MessageParseError::InvalidCommand { position: 0 });
//! ```

pub mod error;
pub mod ircv3;
pub mod message;
pub mod prefix;

pub use self::error::MessageParseError;
pub use self::ircv3::parse_server_time;
pub use self::message::{Message, MessageRef, Tag, TagRef};
pub use self::prefix::PrefixRef;
