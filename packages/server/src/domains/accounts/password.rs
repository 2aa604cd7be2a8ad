use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const PBKDF2_ITERATIONS: u32 = 100_000;

const HASH_LEN: usize = 32;
const SALT_LEN: usize = 16;

/// Hex-encoded PBKDF2-HMAC-SHA256 output and the salt that produced it.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub hash: String,
    pub salt: String,
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> PasswordHash {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);

    PasswordHash {
        hash: hex::encode(derive(password.as_bytes(), &salt, PBKDF2_ITERATIONS)),
        salt: hex::encode(salt),
    }
}

pub fn derive(secret: &[u8], salt: &[u8], iterations: u32) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut out);
    out
}
