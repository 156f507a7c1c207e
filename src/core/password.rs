// src/core/password.rs

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;
/// Minimum number of decimal digits.
pub const MIN_DIGITS: usize = 2;
/// Accepted symbols; at least one is required.
pub const SYMBOLS: &str = "!@#$%^&*";

static ALLOWED_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9!@#$%^&*]*$").unwrap());

/// Why a registration password was refused. Variants are checked in
/// declaration order and the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordRejection {
    #[error("Password contains characters other than letters, digits and !@#$%^&*.")]
    ForbiddenCharacter,
    #[error("Password must be at least {MIN_LENGTH} characters long.")]
    TooShort,
    #[error("Password must include at least {MIN_DIGITS} numbers.")]
    NotEnoughDigits,
    #[error("Password must include at least 1 special symbol (!@#$%^&*).")]
    MissingSymbol,
}

/// Checks a registration password against the site policy.
pub fn check_password(candidate: &str) -> Result<(), PasswordRejection> {
    if !ALLOWED_CHARSET.is_match(candidate) {
        return Err(PasswordRejection::ForbiddenCharacter);
    }
    // The charset is ASCII-only at this point, so bytes == characters.
    if candidate.len() < MIN_LENGTH {
        return Err(PasswordRejection::TooShort);
    }
    if candidate.chars().filter(|c| c.is_ascii_digit()).count() < MIN_DIGITS {
        return Err(PasswordRejection::NotEnoughDigits);
    }
    if !candidate.chars().any(|c| SYMBOLS.contains(c)) {
        return Err(PasswordRejection::MissingSymbol);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_policy_compliant_passwords() {
        assert_eq!(check_password("abc123!@"), Ok(()));
        assert_eq!(check_password("P4ssw0rd&"), Ok(()));
        assert_eq!(check_password("a1b2c3d4e5*"), Ok(()));
    }

    #[test]
    fn rejects_missing_symbol() {
        assert_eq!(check_password("abc12345"), Err(PasswordRejection::MissingSymbol));
    }

    #[test]
    fn rejects_short_passwords() {
        assert_eq!(check_password("short1!"), Err(PasswordRejection::TooShort));
        assert_eq!(check_password(""), Err(PasswordRejection::TooShort));
    }

    #[test]
    fn rejects_single_digit() {
        assert_eq!(check_password("abcdefg1!"), Err(PasswordRejection::NotEnoughDigits));
    }

    #[test]
    fn rejects_characters_outside_the_charset() {
        assert_eq!(check_password("abc 123!@"), Err(PasswordRejection::ForbiddenCharacter));
        assert_eq!(check_password("abc123!@-"), Err(PasswordRejection::ForbiddenCharacter));
        assert_eq!(check_password("pässwörd12!"), Err(PasswordRejection::ForbiddenCharacter));
    }
}
