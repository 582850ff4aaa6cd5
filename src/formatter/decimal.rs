//! Decimal digit arithmetic on the shortest round-trip representation of an f64
//!
//! Rounding works on decimal digits rather than on the binary value so that 1.005
//! rounds like the number the caller wrote, and percent scaling is a shift of the
//! decimal point instead of a float multiplication.

/// Non-negative decimal number: `0.d1d2d3... × 10^point`
///
/// `digits` never has leading or trailing zeros; zero is the empty digit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decimal {
    digits: Vec<u8>,
    /// Number of digits before the decimal point (may be negative or exceed `digits.len()`)
    point: i32,
}

impl Decimal {
    /// Decimal from the absolute value of a finite f64
    pub(crate) fn from_f64(value: f64) -> Self {
        // LowerExp prints the shortest digits that round-trip, e.g. "1.2345e3"
        let repr = format!("{:e}", value.abs());
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut decimal = Self {
            digits,
            point: exponent + 1,
        };
        decimal.normalize();
        decimal
    }

    fn normalize(&mut self) {
        let leading = self.digits.iter().take_while(|d| **d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.point -= leading as i32;
        }
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Multiply by 10^n
    pub(crate) fn shift(&mut self, n: i32) {
        if !self.is_zero() {
            self.point += n;
        }
    }

    /// Position of the decimal point relative to the first significant digit
    pub(crate) fn point(&self) -> i32 {
        self.point
    }

    /// Round half away from zero to at most `max_fraction` fraction digits
    pub(crate) fn round(&mut self, max_fraction: u32) {
        let keep = self.point + max_fraction as i32;
        if keep < 0 {
            self.digits.clear();
            self.point = 0;
            return;
        }

        let keep = keep as usize;
        if keep >= self.digits.len() {
            return;
        }

        let round_up = self.digits[keep] >= 5;
        self.digits.truncate(keep);

        if round_up {
            let mut i = keep;
            loop {
                if i == 0 {
                    // Carry out of the most significant digit
                    self.digits.insert(0, 1);
                    self.point += 1;
                    break;
                }
                i -= 1;
                if self.digits[i] == 9 {
                    self.digits[i] = 0;
                } else {
                    self.digits[i] += 1;
                    break;
                }
            }
        }

        self.normalize();
    }

    /// Integer digits, at least `min_digits` long (zero-padded on the left)
    pub(crate) fn integer_digits(&self, min_digits: u32) -> String {
        let mut out = String::new();
        if self.point > 0 {
            let point = self.point as usize;
            for i in 0..point {
                let digit = self.digits.get(i).copied().unwrap_or(0);
                out.push(char::from(b'0' + digit));
            }
        }

        let min_digits = min_digits.max(1) as usize;
        if out.len() < min_digits {
            let padding = "0".repeat(min_digits - out.len());
            out.insert_str(0, &padding);
        }
        out
    }

    /// Fraction digits, at least `min_digits` long (zero-padded on the right)
    pub(crate) fn fraction_digits(&self, min_digits: u32) -> String {
        let mut out = String::new();
        if self.point < 0 {
            out.push_str(&"0".repeat(self.point.unsigned_abs() as usize));
        }
        let start = self.point.max(0) as usize;
        for digit in self.digits.iter().skip(start) {
            out.push(char::from(b'0' + digit));
        }
        if self.is_zero() {
            out.clear();
        }

        let min_digits = min_digits as usize;
        if out.len() < min_digits {
            out.push_str(&"0".repeat(min_digits - out.len()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64, max_fraction: u32) -> (String, String) {
        let mut decimal = Decimal::from_f64(value);
        decimal.round(max_fraction);
        (decimal.integer_digits(1), decimal.fraction_digits(0))
    }

    #[test]
    fn test_from_f64() {
        let d = Decimal::from_f64(1234.5);
        assert_eq!(d.integer_digits(1), "1234");
        assert_eq!(d.fraction_digits(0), "5");

        let d = Decimal::from_f64(0.07);
        assert_eq!(d.integer_digits(1), "0");
        assert_eq!(d.fraction_digits(0), "07");

        let d = Decimal::from_f64(0.0);
        assert!(d.is_zero());
        assert_eq!(d.integer_digits(1), "0");
        assert_eq!(d.fraction_digits(2), "00");

        let d = Decimal::from_f64(1e21);
        assert_eq!(d.integer_digits(1), "1000000000000000000000");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(rounded(0.04, 1), ("0".to_string(), "".to_string()));
        assert_eq!(rounded(0.05, 1), ("0".to_string(), "1".to_string()));
        assert_eq!(rounded(0.95, 1), ("1".to_string(), "".to_string()));
        assert_eq!(rounded(0.995, 2), ("1".to_string(), "".to_string()));
        assert_eq!(rounded(1.005, 2), ("1".to_string(), "01".to_string()));
        assert_eq!(rounded(2.5, 0), ("3".to_string(), "".to_string()));
        assert_eq!(rounded(999.96, 1), ("1000".to_string(), "".to_string()));
        assert_eq!(rounded(0.0004, 2), ("0".to_string(), "".to_string()));
        assert_eq!(rounded(0.5, 0), ("1".to_string(), "".to_string()));
    }

    #[test]
    fn test_shift_is_exact() {
        let mut d = Decimal::from_f64(0.07);
        d.shift(2);
        assert_eq!(d.integer_digits(1), "7");
        assert_eq!(d.fraction_digits(0), "");
    }

    #[test]
    fn test_padding() {
        let d = Decimal::from_f64(12.5);
        assert_eq!(d.integer_digits(4), "0012");
        assert_eq!(d.fraction_digits(3), "500");
    }
}
