#![forbid(unsafe_code)]

use std::io;

/// Render the human-readable report line, without a trailing newline.
///
/// f64 `Display` is shortest-roundtrip, which matches the reference host's
/// number-to-string conversion digit for digit.
#[must_use]
pub fn render_report(value: f64) -> String {
    format!("pi = {value}")
}

/// Write one report line to `out`.
pub fn write_report<W: io::Write>(out: &mut W, value: f64) -> io::Result<()> {
    writeln!(out, "{}", render_report(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_render_exact_digits() {
        assert_eq!(render_report(2.6666666666666665), "pi = 2.6666666666666665");
    }

    #[test]
    fn test_report_render_integral_value() {
        // f64 Display drops the fractional part when it is zero
        assert_eq!(render_report(3.0), "pi = 3");
    }

    #[test]
    fn test_report_write_appends_newline() {
        let mut buffer = Vec::new();
        write_report(&mut buffer, 3.14154).expect("write to Vec cannot fail");
        assert_eq!(buffer, b"pi = 3.14154\n");
    }
}
