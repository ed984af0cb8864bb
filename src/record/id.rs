use rand::rngs::OsRng;
use rand::Rng;

/// Length of generated record identifiers.
pub const ID_LENGTH: usize = 16;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random record identifier: 16 lowercase-alphanumeric characters
/// drawn from the operating system's secure random source.
pub fn generate_id() -> String {
    let mut rng = OsRng;
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
