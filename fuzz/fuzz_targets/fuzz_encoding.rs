#![no_main]

use libfuzzer_sys::fuzz_target;
use pgp_wire_util::encoding::base64::{b64_to_bytes, bytes_to_b64};
use pgp_wire_util::encoding::hex::hex_to_bytes;
use pgp_wire_util::encoding::text::decode_utf8;
use pgp_wire_util::encoding::zbase32::{decode_zbase32, encode_zbase32};

fuzz_target!(|data: &[u8]| {
    // Decoders must reject malformed text without panicking
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = hex_to_bytes(text);
        let _ = b64_to_bytes(text);
        let _ = decode_utf8(text);
        if let Ok(decoded) = decode_zbase32(text) {
            assert_eq!(encode_zbase32(&decoded), text);
        }
    }

    assert_eq!(decode_zbase32(&encode_zbase32(data)).unwrap(), data);
    assert_eq!(b64_to_bytes(&bytes_to_b64(data, true)).unwrap(), data);
});
