use std::convert::TryFrom;
use std::time::Duration;

use nom::{
    branch::alt, bytes::complete::tag, character::complete::digit1, combinator::all_consuming,
};

use super::result::{IResult, ParseError, Span};
use crate::error::{Error, Result};

/// Parses Go-like duration strings: `10s`, `1m30s`, `2h`, `500ms`.
pub fn parse_duration(s: &str) -> Result<Duration> {
    match all_consuming(duration)(Span::new(s)) {
        Ok((_, d)) => Ok(d),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(Error::from(format!(
            "invalid duration '{}' at offset {}: {}",
            s,
            e.offset(),
            e.message()
        ))),
        Err(nom::Err::Incomplete(_)) => Err(Error::from(format!("incomplete duration '{}'", s))),
    }
}

/// - Only positive durations.
/// - No fractional units.
/// - Units are always ordered from longest to shortest.
pub(super) fn duration(input: Span) -> IResult<Duration> {
    let (rest, duration) = duration_inner(input, Unit::Hour)?;

    if duration == Duration::from_millis(0) {
        return Err(nom::Err::Failure(ParseError::new(
            "duration must be greater than 0".to_owned(),
            input,
        )));
    }

    Ok((rest, duration))
}

// Benchmark phases are seconds to hours long, so no days and beyond.
enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl Unit {
    fn milliseconds(&self) -> u64 {
        use Unit::*;
        match self {
            Millisecond => 1,
            Second => 1000,
            Minute => 60 * 1000,
            Hour => 60 * 60 * 1000,
        }
    }

    fn descendant(&self) -> Option<Self> {
        use Unit::*;
        match self {
            Millisecond => None,
            Second => Some(Millisecond),
            Minute => Some(Second),
            Hour => Some(Minute),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = Error;

    fn try_from(u: &str) -> Result<Self> {
        use Unit::*;

        match u {
            "h" => Ok(Hour),
            "m" => Ok(Minute),
            "s" => Ok(Second),
            "ms" => Ok(Millisecond),
            _ => Err(Error::new("unknown duration unit")),
        }
    }
}

fn duration_inner(input: Span, max_allowed_unit: Unit) -> IResult<Duration> {
    let (rest, multiplier) = digit1(input)?;

    let (rest, unit) = alt((tag("ms"), tag("s"), tag("m"), tag("h")))(rest)?;

    let failure = |message: &str| nom::Err::Failure(ParseError::new(message.to_owned(), input));

    let unit = Unit::try_from(*unit.fragment()).map_err(|e| failure(e.message()))?;
    if unit.milliseconds() > max_allowed_unit.milliseconds() {
        return Err(failure("duration units must go from longest to shortest"));
    }

    let multiplier = multiplier
        .fragment()
        .parse::<u32>()
        .map_err(|_| failure("duration multiplier is too large"))?;
    let duration = Duration::from_millis(unit.milliseconds())
        .checked_mul(multiplier)
        .ok_or_else(|| failure("duration overflow occurred"))?;

    match unit.descendant() {
        Some(next_unit) => {
            let (rest, more_duration) = match duration_inner(rest, next_unit) {
                Ok((rest, more_duration)) => (rest, more_duration),
                Err(nom::Err::Error(_)) => (rest, Duration::from_millis(0)),
                Err(e) => return Err(e),
            };
            let total = duration
                .checked_add(more_duration)
                .ok_or_else(|| failure("duration overflow occurred"))?;
            Ok((rest, total))
        }
        None => Ok((rest, duration)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: u64 = 1000;
    const MINUTE: u64 = 60 * 1000;
    const HOUR: u64 = 60 * 60 * 1000;

    #[test]
    fn test_valid_duration() -> std::result::Result<(), Error> {
        #[rustfmt::skip]
        let tests = [
            ("1ms", Duration::from_millis(1)),
            ("10s", Duration::from_millis(10 * SECOND)),
            ("0s500ms", Duration::from_millis(500)),
            ("1m30s", Duration::from_millis(MINUTE + 30 * SECOND)),
            ("90s", Duration::from_millis(90 * SECOND)),
            ("2h3m4s5ms", Duration::from_millis(2 * HOUR + 3 * MINUTE + 4 * SECOND + 5)),
        ];

        for (input, expected_duration) in &tests {
            let actual_duration = parse_duration(input)?;
            assert_eq!(
                expected_duration, &actual_duration,
                "while parsing {}",
                input
            );
        }
        Ok(())
    }

    #[test]
    fn test_invalid_duration() {
        #[rustfmt::skip]
        let tests = [
            "",
            "foo",
            "0",
            "0ms",
            "1ns",
            "1d",
            "0s0ms",
            "10m2h",
            "10s ",
            "99999999999h",
        ];

        for input in &tests {
            let ret = parse_duration(input);
            assert!(
                ret.is_err(),
                "Expected error, got {:?} while parsing {}",
                ret,
                input
            );
        }
    }
}
