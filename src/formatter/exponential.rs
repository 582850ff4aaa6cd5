use crate::formatter::decimal::Decimal;
use crate::types::Notation;

/// Split a decimal into a rounded mantissa and a power-of-ten exponent
///
/// Scientific notation keeps one integer digit; engineering notation keeps one to
/// three so that the exponent is a multiple of three. Rounding the mantissa may carry
/// into a new integer digit, in which case the exponent is adjusted again.
pub(super) fn to_exponential(
    mut value: Decimal,
    notation: Notation,
    max_fraction: u32,
) -> (Decimal, i32) {
    if value.is_zero() {
        return (value, 0);
    }

    let exponent = exponent_for(value.point(), notation);
    value.shift(-exponent);
    value.round(max_fraction);

    // 9.99E2 rounded to one digit becomes 10.0E2
    let adjusted = exponent_for(value.point(), notation);
    if adjusted != 0 {
        value.shift(-adjusted);
    }

    (value, exponent + adjusted)
}

fn exponent_for(point: i32, notation: Notation) -> i32 {
    let exponent = point - 1;
    match notation {
        Notation::Engineering => exponent.div_euclid(3) * 3,
        _ => exponent,
    }
}
