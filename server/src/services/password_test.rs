use super::*;

// Low iteration count keeps the suite fast; the format is the same.
const ITER: u32 = 8;

#[test]
fn bytes_to_hex_is_lowercase_and_padded() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab]), "000fab");
}

#[test]
fn hash_has_stored_form() {
    let stored = hash_password("hunter2", ITER);
    assert!(stored.starts_with("pbkdf2:sha256:8$"));
    assert!(is_hashed(&stored));
    assert!(!stored.contains("hunter2"));
}

#[test]
fn hash_verifies_only_the_original_password() {
    let stored = hash_password("hunter2", ITER);
    assert!(verify_password(&stored, "hunter2"));
    assert!(!verify_password(&stored, "hunter3"));
    assert!(!verify_password(&stored, ""));
}

#[test]
fn salts_differ_between_hashes() {
    let a = hash_password("same", ITER);
    let b = hash_password("same", ITER);
    assert_ne!(a, b);
    assert!(verify_password(&a, "same"));
    assert!(verify_password(&b, "same"));
}

#[test]
fn zero_iterations_are_raised_to_one() {
    let stored = hash_password("pw", 0);
    assert!(stored.starts_with("pbkdf2:sha256:1$"));
    assert!(verify_password(&stored, "pw"));
}

#[test]
fn plaintext_and_malformed_values_are_not_hashes() {
    assert!(!is_hashed("hunter2"));
    assert!(!is_hashed("pbkdf2:sha256:abc$salt$00"));
    assert!(!is_hashed("pbkdf2:sha256:10$$00"));
    assert!(!is_hashed("pbkdf2:sha256:10$salt$zz"));
    assert!(!verify_password("hunter2", "hunter2"));
}

#[test]
fn constant_time_eq_requires_equal_length() {
    assert!(constant_time_eq(b"abc", b"abc"));
    assert!(!constant_time_eq(b"abc", b"abd"));
    assert!(!constant_time_eq(b"abc", b"abcd"));
}

#[test]
fn iterations_of_reads_work_factor() {
    assert_eq!(iterations_of(&hash_password("pw", 3)), Some(3));
    assert_eq!(iterations_of("pw"), None);
}
