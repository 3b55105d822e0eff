use std::io::{BufRead, Write};

/// Reads one integer the way C++ formatted extraction does: skip leading
/// whitespace, take an optional sign and a run of digits, and leave the
/// first non-digit in the stream for the next read. A malformed token or
/// an exhausted stream yields the zero-initialized accumulator. Values
/// past the i32 range clamp to the nearer limit.
pub fn read_number(mut input: impl BufRead) -> i32 {
    while let Some(b) = peek(&mut input) {
        if !b.is_ascii_whitespace() {
            break;
        }
        input.consume(1);
    }

    let negative = match peek(&mut input) {
        Some(b'-') => {
            input.consume(1);
            true
        }
        Some(b'+') => {
            input.consume(1);
            false
        }
        _ => false,
    };

    let mut acc: i64 = 0;
    let mut seen_digit = false;
    while let Some(b) = peek(&mut input) {
        if !b.is_ascii_digit() {
            break;
        }
        input.consume(1);
        seen_digit = true;
        acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    let value = if negative { -acc } else { acc };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Writes the decimal form of `n` followed by a newline. Stream errors are
/// swallowed; the exported contract has no failure path.
pub fn write_number(mut output: impl Write, n: i32) {
    let _ = writeln!(output, "{}", n);
}

fn peek(input: &mut impl BufRead) -> Option<u8> {
    match input.fill_buf() {
        Ok(buf) => buf.first().copied(),
        Err(_) => None,
    }
}
