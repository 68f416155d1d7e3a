//! # Parsing Utilities
//!
//! Field-level combinators shared by the sentence decoders: running a parser
//! over exactly one comma-delimited field, and checking that a parser
//! consumed its whole input.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    error::{ErrorKind, ParseError},
    sequence::preceded,
};

use crate::{Error, IResult};

/// Ensures that the parser consumes all input.
///
/// This combinator runs the provided parser and then checks that nothing is
/// left of the input.
///
/// # Arguments
///
/// * `f` - The parser to run
/// * `e` - Error kind to return if input is not fully consumed
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// // Parse all 3 bytes
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because not all input is consumed
/// let result = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

/// Runs `f` over a single field, up to (not including) the next comma.
///
/// An empty field yields `None`. A field that `f` rejects, or does not
/// consume completely, yields [`Error::MalformedField`] holding the field
/// text.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Error, parsing::field};
/// use nom::{Parser, character::complete::u8};
///
/// let mut parser = field(u8);
/// assert_eq!(parser.parse("08,rest"), Ok((",rest", Some(8))));
/// assert_eq!(parser.parse(",rest"), Ok((",rest", None)));
/// assert_eq!(parser.parse("8x,rest"), Err(nom::Err::Error(Error::MalformedField("8x"))));
/// ```
pub fn field<'a, O, F>(mut f: F) -> impl FnMut(&'a str) -> IResult<&'a str, Option<O>>
where
    F: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    move |i: &'a str| {
        let (i, token) = take_till(|c| c == ',').parse(i)?;

        if token.is_empty() {
            return Ok((i, None));
        }

        match f.parse(token) {
            Ok(("", value)) => Ok((i, Some(value))),
            _ => Err(Err::Error(Error::MalformedField(token))),
        }
    }
}

/// Like [`field`], but first consumes the comma separating it from the
/// previous field.
///
/// A missing comma is a [`Error::ParsingError`]: the sentence ended early.
pub fn next_field<'a, O, F>(f: F) -> impl Parser<&'a str, Output = Option<O>, Error = Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = Error<&'a str>>,
{
    preceded(char(','), field(f))
}

/// Skips one field, whatever it holds, including its leading comma.
pub fn skip_field(i: &str) -> IResult<&str, ()> {
    let (i, _) = preceded(char(','), take_till(|c| c == ',')).parse(i)?;
    Ok((i, ()))
}
