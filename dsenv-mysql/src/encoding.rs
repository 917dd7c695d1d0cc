//! Percent-encoding helpers for connection URL components.

/// Characters left as-is when repairing a credentials segment.
fn is_userinfo_safe(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | ':')
}

/// Percent-encode every character of a raw `user:password` segment that is not
/// alphanumeric or one of `-_.~:`.
///
/// `%` itself is escaped, so a segment that was already encoded is treated as
/// literal text.
pub(crate) fn encode_userinfo(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len() * 3);
    let mut buf = [0u8; 4];
    for c in raw.chars() {
        if is_userinfo_safe(c) {
            encoded.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

/// Decode `%XX` escapes. Malformed escapes are kept verbatim and invalid
/// UTF-8 is replaced rather than rejected.
pub(crate) fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_userinfo_keeps_safe_characters() {
        assert_eq!(encode_userinfo("user.name-1_~:pass"), "user.name-1_~:pass");
    }

    #[test]
    fn test_encode_userinfo_escapes_specials() {
        assert_eq!(encode_userinfo("root:p@ss#w/rd"), "root:p%40ss%23w%2Frd");
        assert_eq!(encode_userinfo("a%b"), "a%25b");
        assert_eq!(encode_userinfo("sp ace"), "sp%20ace");
    }

    #[test]
    fn test_encode_userinfo_keeps_unicode_letters() {
        assert_eq!(encode_userinfo("jürgen"), "jürgen");
        assert_eq!(encode_userinfo("€"), "%E2%82%AC");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("p%40ss"), "p@ss");
        assert_eq!(percent_decode("%E2%82%AC"), "€");
        assert_eq!(percent_decode("plain+text"), "plain+text");
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }
}
