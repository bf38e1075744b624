//! Minimum-width decimal rendering.

/// Fill character used to reach the minimum field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Zero,
    Space,
}

/// Append `value` in decimal, left-padded to at least `width` characters.
///
/// Width is a lower bound, never a truncation. A negative value is written
/// as `-` followed by the magnitude padded to `width`, so `push_int(b, -1,
/// 2, Pad::Zero)` yields `-01`.
pub fn push_int(out: &mut String, value: i64, width: usize, pad: Pad) {
    if value < 0 {
        out.push('-');
    }
    let digits = value.unsigned_abs().to_string();
    let fill = match pad {
        Pad::Zero => '0',
        Pad::Space => ' ',
    };
    for _ in digits.len()..width {
        out.push(fill);
    }
    out.push_str(&digits);
}
