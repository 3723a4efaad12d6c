use credal::codec;

#[test]
fn encode_empty_is_empty() {
    assert_eq!(codec::encode(&[]), "");
}

#[test]
fn decode_empty_is_empty() {
    assert_eq!(codec::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn encodes_known_string() {
    assert_eq!(codec::encode(b"validstring"), "dmFsaWRzdHJpbmc");
}

#[test]
fn decodes_known_string() {
    assert_eq!(codec::decode("dmFsaWRzdHJpbmc").unwrap(), b"validstring");
}

#[test]
fn round_trips_all_byte_values() {
    let data: Vec<u8> = (0u8..=255).collect();
    assert_eq!(codec::decode(&codec::encode(&data)).unwrap(), data);
}

#[test]
fn round_trips_unaligned_lengths() {
    for len in 0..16 {
        let data = vec![0xA7u8; len];
        assert_eq!(codec::decode(&codec::encode(&data)).unwrap(), data);
    }
}

#[test]
fn uses_url_safe_alphabet() {
    // 0xFB 0xEF needs symbol 62, which is '-' in the URL-safe alphabet
    // and '+' in the standard one.
    let encoded = codec::encode(&[0xFB, 0xEF]);
    assert!(!encoded.contains('+'));
    assert!(!encoded.contains('/'));
    assert_eq!(codec::decode(&encoded).unwrap(), [0xFB, 0xEF]);
}

#[test]
fn rejects_symbols_outside_alphabet() {
    assert!(codec::decode("c2Fs dA").is_err());
    assert!(codec::decode("c2Fs$dA").is_err());
    assert!(codec::decode("=").is_err());
}

#[test]
fn rejects_padding() {
    assert!(codec::decode("dmFsaWRzdHJpbmc=").is_err());
}

#[test]
fn rejects_impossible_length() {
    assert!(codec::decode("A").is_err());
}
