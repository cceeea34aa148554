//! Syntactic number checks used by the numeric validators.
//!
//! Both checks look at the trimmed input. A single leading `-` is allowed,
//! everything after it must be ASCII digits (plus at most one `.` for
//! decimals) and at least one digit has to remain.

/// Strip at most one leading minus sign.
fn unsigned_part(input: &str) -> &str {
    input.strip_prefix('-').unwrap_or(input)
}

/// Whether `input` is written as a whole number, e.g. `42` or `-7`.
#[must_use]
pub fn is_integer(input: &str) -> bool {
    let digits = unsigned_part(input.trim());
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `input` is written as a decimal number, e.g. `3`, `-0.5`, `2.`
/// or `.75`. Exponents, `inf` and `NaN` are not accepted.
#[must_use]
pub fn is_float(input: &str) -> bool {
    let unsigned = unsigned_part(input.trim());
    let mut dots = 0;
    let mut digits = 0;
    for b in unsigned.bytes() {
        match b {
            b'.' => dots += 1,
            b if b.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }
    dots <= 1 && digits > 0
}

/// Parse a whole number. Values outside `i64` are treated as invalid.
#[must_use]
pub fn parse_integer(input: &str) -> Option<i64> {
    if !is_integer(input) {
        return None;
    }
    input.trim().parse().ok()
}

/// Parse a decimal number using the same syntax rules as [`is_float`].
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    if !is_float(input) {
        return None;
    }
    input.trim().parse().ok()
}

/// Lower float bound to the smallest integer inside it.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn lower_int_bound(min: f64) -> i64 {
    // float to int casts saturate, so -inf lands on i64::MIN
    min.ceil() as i64
}

/// Upper float bound to the largest integer inside it.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn upper_int_bound(max: f64) -> i64 {
    max.floor() as i64
}
