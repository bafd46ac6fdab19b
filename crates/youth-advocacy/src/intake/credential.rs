use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;

pub const MIN_CREDENTIAL_LENGTH: usize = 8;
pub const DEFAULT_CREDENTIAL_LENGTH: usize = 24;

/// Throwaway password used only to satisfy account creation. Never logged or shown.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CredentialGenerator {
    length: usize,
}

impl CredentialGenerator {
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(MIN_CREDENTIAL_LENGTH),
        }
    }

    pub fn generate(&self) -> Credential {
        let secret = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        Credential(secret)
    }
}

impl Default for CredentialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_credentials_of_requested_length() {
        let credential = CredentialGenerator::new(32).generate();
        assert_eq!(credential.expose().len(), 32);
        assert!(credential
            .expose()
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric()));
    }

    #[test]
    fn short_lengths_are_raised_to_minimum() {
        let generator = CredentialGenerator::new(3);
        assert_eq!(generator.generate().expose().len(), MIN_CREDENTIAL_LENGTH);
    }

    #[test]
    fn successive_credentials_differ() {
        let generator = CredentialGenerator::default();
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let credential = CredentialGenerator::default().generate();
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains(credential.expose()));
    }
}
