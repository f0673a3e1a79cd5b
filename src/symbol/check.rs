//! Mod-10 check digits.
//!
//! Rendering never requires a valid check digit. These helpers back the
//! opt-in verification in [`RenderOptions`](crate::render::RenderOptions)
//! and the `check-digit` CLI command.

use super::classify::{Symbol, digit_values};
use crate::error::SymbolError;

/// Compute the check digit for a payload (all digits except the last).
///
/// Weights alternate 3, 1, ... starting from the rightmost payload digit,
/// which covers EAN-8, UPC-A and EAN-13 alike.
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Verify the final digit of a symbol.
pub fn verify(symbol: &Symbol) -> Result<(), SymbolError> {
    let (found, payload) = match symbol.digits().split_last() {
        Some((last, rest)) => (*last, rest),
        None => return Ok(()),
    };
    let expected = check_digit(payload);
    if expected == found {
        Ok(())
    } else {
        Err(SymbolError::CheckDigit { expected, found })
    }
}

/// Append the check digit to a 7, 11 or 12 digit payload.
pub fn complete(payload: &str) -> Result<String, SymbolError> {
    let len = payload.len();
    if !matches!(len, 7 | 11 | 12) {
        return Err(SymbolError::InvalidPayloadSize(len));
    }
    let digits = digit_values(payload)?;

    let mut code = payload.to_string();
    code.push(char::from(b'0' + check_digit(&digits)));
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_check_digits() {
        assert_eq!(complete("590123412345"), Ok("5901234123457".to_string()));
        assert_eq!(complete("9638507"), Ok("96385074".to_string()));
        assert_eq!(complete("03600029145"), Ok("036000291452".to_string()));
    }

    #[test]
    fn test_verify() {
        assert!(verify(&Symbol::parse("5901234123457").unwrap()).is_ok());
        assert!(verify(&Symbol::parse("012345678912").unwrap()).is_ok());
        assert!(verify(&Symbol::parse("96385074").unwrap()).is_ok());
        assert_eq!(
            verify(&Symbol::parse("012345678913").unwrap()),
            Err(SymbolError::CheckDigit { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_complete_rejects_bad_payloads() {
        assert_eq!(complete("123"), Err(SymbolError::InvalidPayloadSize(3)));
        assert_eq!(
            complete("12345X7"),
            Err(SymbolError::InvalidDigit { index: 5, found: 'X' })
        );
        // Six ASCII digits plus a two byte character is eight bytes
        assert_eq!(
            complete("123456\u{e9}"),
            Err(SymbolError::InvalidPayloadSize(8))
        );
    }
}
