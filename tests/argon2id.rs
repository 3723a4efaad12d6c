use credal::codec;
use credal::derivation::{Argon2id, Derivation, DerivationError, Options, argon2id};

fn small_options() -> Options {
    Options {
        time: 3,
        memory: 32,
        threads: 4,
        key_len: 32,
    }
}

#[test]
fn argon2id_is_deterministic() {
    let options = small_options();
    let a = argon2id(b"password", b"saltsalt", &options).unwrap();
    let b = argon2id(b"password", b"saltsalt", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn argon2id_changes_with_salt() {
    let options = small_options();
    let a = argon2id(b"password", b"saltAAAA", &options).unwrap();
    let b = argon2id(b"password", b"saltBBBB", &options).unwrap();
    assert_ne!(a, b);
}

#[test]
fn argon2id_changes_with_password() {
    let options = small_options();
    let a = argon2id(b"password", b"saltsalt", &options).unwrap();
    let b = argon2id(b"different", b"saltsalt", &options).unwrap();
    assert_ne!(a, b);
}

#[test]
fn argon2id_respects_output_length() {
    for key_len in [4u32, 16, 32, 64, 128] {
        let options = Options {
            time: 1,
            memory: 32,
            threads: 1,
            key_len,
        };
        let out = argon2id(b"password", b"saltsalt", &options).unwrap();
        assert_eq!(out.len(), key_len as usize);
    }
}

/// Reference vector produced by Go's x/crypto/argon2 IDKey with
/// password "password", salt "salt", t=1, m=65536, p=4, 32-byte output.
#[test]
fn argon2id_matches_go_reference_vector() {
    let expected = codec::decode("OWwmnKFemKE2ILjM60j1so1oRXDFJYqvOiYlZTByvuU").unwrap();
    let out = argon2id(b"password", b"salt", &Options::default()).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn argon2id_accepts_short_salt() {
    let options = small_options();
    let out = argon2id(b"password", b"ab", &options).unwrap();
    assert_eq!(out.len(), 32);
}

#[test]
fn argon2id_clamps_undersized_memory() {
    // 1 KiB is below the 8 × threads floor; the clamp must still yield a
    // deterministic result rather than an error.
    let options = Options {
        time: 1,
        memory: 1,
        threads: 2,
        key_len: 32,
    };
    let a = argon2id(b"password", b"saltsalt", &options).unwrap();
    let b = argon2id(b"password", b"saltsalt", &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn argon2id_rejects_zero_parameters() {
    let base = small_options();

    let err = argon2id(b"p", b"s", &Options { time: 0, ..base.clone() }).unwrap_err();
    assert_eq!(err, DerivationError::TooFewPasses);

    let err = argon2id(b"p", b"s", &Options { memory: 0, ..base.clone() }).unwrap_err();
    assert_eq!(err, DerivationError::MemoryTooSmall);

    let err = argon2id(b"p", b"s", &Options { threads: 0, ..base.clone() }).unwrap_err();
    assert_eq!(err, DerivationError::TooFewThreads);

    let err = argon2id(b"p", b"s", &Options { key_len: 3, ..base }).unwrap_err();
    assert_eq!(err, DerivationError::OutputTooShort);
}

#[test]
fn version_is_19() {
    assert_eq!(Argon2id.version(), 19);
}
