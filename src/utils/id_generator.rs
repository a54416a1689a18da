//! Record id generation.
//!
//! Ids are 12 random bytes rendered as 24 lowercase hex characters, the same
//! shape as document-database object ids. Callers must still treat them as
//! opaque strings.

/// Number of random bytes behind each id.
const ID_LENGTH_BYTES: usize = 12;

/// Generates a new random record id.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
