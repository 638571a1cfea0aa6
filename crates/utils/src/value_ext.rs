use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Consistent scientific number formatting
    ///
    /// The standard `LowerExp` formatting does not pad the exponent, which
    /// makes columns of numbers ragged. This fixes the number of decimals to
    /// `precision` and zero-pads the exponent to `exp_pad` digits.
    ///
    /// ```rust
    /// # use htools_utils::ValueExt;
    /// assert_eq!((-1.0).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(1234.5.sci(3, 2), "1.234e+03".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl<T: std::fmt::LowerExp> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self, precision = precision);
        // `formatted` is guaranteed to contain 'e' by the LowerExp bound
        let (mantissa, exponent) = formatted.split_once('e').unwrap();
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        f!("{}e{}{:0>pad$}", mantissa, sign, digits, pad = exp_pad)
    }
}
