//! Password verification.
//!
//! The primary path is a bcrypt hash comparison. A legacy plaintext fallback
//! exists solely for student records seeded before hashing was introduced;
//! it is isolated here so it can be deleted in one place once every record
//! has been migrated.

/// Hashes a password for storage.
pub fn hash_password(raw: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(raw, bcrypt::DEFAULT_COST)
}

/// Compares a submitted password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a non-match rather than an error.
pub fn verify_password(raw: &str, stored_hash: &str) -> bool {
    bcrypt::verify(raw, stored_hash).unwrap_or(false)
}

/// COMPATIBILITY ONLY: exact trimmed string equality against the legacy
/// plaintext `password` column.
///
/// Remove once all seeded student records carry a real hash. Only the
/// student login path may call this, and only after [`verify_password`]
/// fails.
pub fn legacy_plaintext_matches(raw: &str, stored_plaintext: &str) -> bool {
    let stored = stored_plaintext.trim();

    !stored.is_empty() && raw.trim() == stored
}
