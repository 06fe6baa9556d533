//! Nom-based IRC line grammar.
//!
//! Each segment of a line has its own sub-parser; [`parse_message`] runs them
//! in protocol order:
//!
//! ```text
//! [@tags SP] [:prefix SP] <command> *(SP+ middle) [SP+ ":" trailing] *SP
//! ```

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, eof, opt, peek, rest, verify},
    error::{context, VerboseError},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::MessageParseError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// One or more literal spaces. Tabs are not delimiters.
fn spaces(input: &str) -> ParseResult<&str, &str> {
    take_while1(|c: char| c == ' ')(input)
}

/// IRCv3 message tags: `@` up to exactly one space. The run may be empty.
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message tags",
        terminated(preceded(char('@'), take_while(|c: char| c != ' ')), char(' ')),
    )(input)
}

/// Message prefix: `:` and a non-empty run of non-whitespace, then one space.
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(
            preceded(char(':'), take_while1(|c: char| !c.is_whitespace())),
            char(' '),
        ),
    )(input)
}

/// Command: letters, or exactly three digits, ending at a space or end of line.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing command",
        terminated(
            alt((
                take_while1(|c: char| c.is_ascii_alphabetic()),
                take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
            )),
            peek(alt((tag(" "), eof))),
        ),
    )(input)
}

/// A middle parameter never starts with `:`.
fn parse_middle(input: &str) -> ParseResult<&str, &str> {
    preceded(
        spaces,
        verify(take_while1(|c: char| c != ' '), |s: &str| !s.starts_with(':')),
    )(input)
}

/// The trailing parameter runs verbatim to the end of the line.
fn parse_trailing(input: &str) -> ParseResult<&str, &str> {
    preceded(spaces, preceded(char(':'), rest))(input)
}

fn parse_params(input: &str) -> ParseResult<&str, Vec<&str>> {
    let (input, mut params) = context("parsing middle parameters", many0(parse_middle))(input)?;
    let (input, trailing) = context("parsing trailing parameter", opt(parse_trailing))(input)?;
    let (input, _) = take_while(|c: char| c == ' ')(input)?;
    params.extend(trailing);
    Ok((input, params))
}

/// Parse a complete, already trimmed IRC line into its raw components.
pub fn parse_message(input: &str) -> ParseResult<&str, ParsedMessage<'_>> {
    let (input, tags) = opt(parse_tags)(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, command) = parse_command(input)?;
    let (input, params) = all_consuming(parse_params)(input)?;

    Ok((
        input,
        ParsedMessage {
            tags,
            prefix,
            command,
            params,
        },
    ))
}

/// A parsed IRC line with borrowed string slices.
///
/// This is the intermediate representation produced by the nom parser. The
/// prefix is not yet split and the tags segment is not yet divided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    /// Raw tags segment (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    /// The command name or numeric.
    pub command: &'a str,
    /// Middle parameters followed by the trailing parameter, if any.
    pub params: Vec<&'a str>,
}

impl<'a> ParsedMessage<'a> {
    /// Parse a trimmed line, reporting the byte offset where matching stopped.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        match parse_message(input) {
            Ok((_remaining, msg)) => Ok(msg),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let position = e
                    .errors
                    .first()
                    .map(|(error_input, _)| input.len() - error_input.len())
                    .unwrap_or(0);
                Err(MessageParseError::InvalidCommand { position })
            }
            Err(nom::Err::Incomplete(_)) => Err(MessageParseError::InvalidCommand {
                position: input.len(),
            }),
        }
    }
}
