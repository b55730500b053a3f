//! URI component codec matching the browser's `encodeURIComponent`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use navguard_core::{GuardError, GuardResult};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn decode_uri_component(value: &str) -> GuardResult<String> {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| GuardError::invalid_encoding(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("http://localhost:8090/console/posts?page=2&q=a b"),
            "http%3A%2F%2Flocalhost%3A8090%2Fconsole%2Fposts%3Fpage%3D2%26q%3Da%20b"
        );
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("#/é"), "%23%2F%C3%A9");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = decode_uri_component("%C3%28").unwrap_err();
        assert_eq!(err, GuardError::InvalidEncoding("%C3%28".to_string()));
    }

    proptest! {
        /// Property: decoding an encoded URL reproduces it exactly.
        #[test]
        fn round_trip_reproduces_url(url in any::<String>()) {
            let encoded = encode_uri_component(&url);
            prop_assert_eq!(decode_uri_component(&encoded).unwrap(), url);
        }

        /// Property: encoded output is always in the unreserved set or an escape.
        #[test]
        fn encoded_output_is_query_safe(url in "\\PC*") {
            let encoded = encode_uri_component(&url);
            prop_assert!(encoded
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b"-_.!~*'()%".contains(&b)));
        }
    }
}
