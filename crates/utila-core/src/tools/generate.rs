//! Generators: passwords and UUID batches

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ToolError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Character classes to draw password characters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn charset(&self) -> String {
        let mut allowed = String::new();
        if self.uppercase {
            allowed.push_str(UPPERCASE);
        }
        if self.lowercase {
            allowed.push_str(LOWERCASE);
        }
        if self.numbers {
            allowed.push_str(NUMBERS);
        }
        if self.symbols {
            allowed.push_str(SYMBOLS);
        }
        allowed
    }
}

/// Generate a random password from the selected character classes
pub fn generate_password(
    options: &PasswordOptions,
    rng: &mut impl Rng,
) -> Result<String, ToolError> {
    let charset: Vec<char> = options.charset().chars().collect();
    if charset.is_empty() {
        return Err(ToolError::InvalidInput(
            "Select at least one character set".to_string(),
        ));
    }

    Ok((0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect())
}

/// Heuristic password strength rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub label: &'static str,
    pub score: u8,
}

/// Score a password on the five-point length/variety heuristic
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            label: "Empty",
            score: 0,
        };
    }

    let mut score = 0u8;
    if password.chars().count() > 8 {
        score += 1;
    }
    if password.chars().count() > 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let label = match score {
        0..=2 => "Weak",
        3..=4 => "Medium",
        _ => "Strong",
    };
    PasswordStrength { label, score }
}

/// Generate a batch of v4 UUIDs; the count is clamped to `1..=100`
pub fn generate_uuids(count: usize) -> Vec<String> {
    let count = count.clamp(1, 100);
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_password_has_requested_length() {
        let mut rng = rand::thread_rng();
        let options = PasswordOptions {
            length: 24,
            ..Default::default()
        };
        assert_eq!(generate_password(&options, &mut rng).unwrap().len(), 24);
    }

    #[test]
    fn test_password_honors_charset_selection() {
        let mut rng = rand::thread_rng();
        let options = PasswordOptions {
            length: 64,
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let password = generate_password(&options, &mut rng).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_password_empty_charset_is_an_error() {
        let mut rng = rand::thread_rng();
        let options = PasswordOptions {
            length: 16,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        assert!(generate_password(&options, &mut rng).is_err());
    }

    #[test]
    fn test_strength_scoring() {
        assert_eq!(password_strength("").label, "Empty");
        assert_eq!(password_strength("abc").label, "Weak");
        assert_eq!(password_strength("abcdefghi1").label, "Weak");
        assert_eq!(password_strength("Abcdefghi1").label, "Medium");
        assert_eq!(password_strength("Abcdefghijklm1!").label, "Strong");
    }

    #[test]
    fn test_uuid_batch_size_and_format() {
        let uuids = generate_uuids(5);
        assert_eq!(uuids.len(), 5);
        for id in &uuids {
            assert_eq!(id.len(), 36);
            assert_eq!(id.as_bytes()[14], b'4');
        }
    }

    #[test]
    fn test_uuid_count_is_clamped() {
        assert_eq!(generate_uuids(0).len(), 1);
        assert_eq!(generate_uuids(1000).len(), 100);
    }

    #[test]
    fn test_uuids_are_distinct() {
        let uuids = generate_uuids(100);
        let unique: HashSet<_> = uuids.iter().collect();
        assert_eq!(unique.len(), uuids.len());
    }
}
