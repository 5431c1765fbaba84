use nom::{combinator::all_consuming, number::complete::recognize_float};

use crate::metrics::SampleValue;

/// Parses a whole token as a decimal floating-point number.
///
/// Accepts an optional sign, digits with an optional fraction and an optional
/// exponent. Rejects thousands separators, `inf`, `nan` and values out of
/// `f64` range.
pub(super) fn decimal(token: &str) -> Option<SampleValue> {
    let parsed: nom::IResult<&str, &str> = all_consuming(recognize_float)(token);
    match parsed {
        Ok((_, literal)) => literal
            .parse::<SampleValue>()
            .ok()
            .filter(|value| value.is_finite()),
        Err(_) => None,
    }
}
