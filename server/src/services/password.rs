//! Password hashing for stored user records.
//!
//! Stored form: `pbkdf2:sha256:<iterations>$<salt-hex>$<hash-hex>`. The
//! iteration count travels with the hash so it can be raised later without
//! invalidating existing records.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use std::fmt::Write;

use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha256;

const PREFIX: &str = "pbkdf2:sha256:";
const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

fn derive(plain: &str, salt: &str, iterations: u32) -> [u8; HASH_LEN] {
    let mut dk = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(plain.as_bytes(), salt.as_bytes(), iterations, &mut dk);
    dk
}

/// Hash `plain` with a fresh random salt.
#[must_use]
pub fn hash_password(plain: &str, iterations: u32) -> String {
    let salt_bytes: [u8; SALT_LEN] = rand::rng().random();
    let salt = bytes_to_hex(&salt_bytes);
    let hash = bytes_to_hex(&derive(plain, &salt, iterations.max(1)));
    format!("{PREFIX}{}${salt}${hash}", iterations.max(1))
}

/// Whether `value` is already in stored form.
#[must_use]
pub fn is_hashed(value: &str) -> bool {
    parse(value).is_some()
}

/// Work factor of a stored hash; `None` when `value` is not in stored form.
#[must_use]
pub fn iterations_of(value: &str) -> Option<u32> {
    parse(value).map(|(iterations, _, _)| iterations)
}

fn parse(stored: &str) -> Option<(u32, &str, &str)> {
    let rest = stored.strip_prefix(PREFIX)?;
    let (iterations, rest) = rest.split_once('$')?;
    let (salt, hash) = rest.split_once('$')?;
    let iterations = iterations.parse::<u32>().ok().filter(|n| *n > 0)?;
    if salt.is_empty() || hash.len() != HASH_LEN * 2 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Some((iterations, salt, hash))
}

/// Check `candidate` against a stored hash. Malformed hashes never verify.
#[must_use]
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    let Some((iterations, salt, expected)) = parse(stored) else {
        return false;
    };
    let computed = bytes_to_hex(&derive(candidate, salt, iterations));
    constant_time_eq(computed.as_bytes(), expected.to_ascii_lowercase().as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
