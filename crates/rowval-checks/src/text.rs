//! String and format checks.

/// min <= byte length <= max.
pub fn string_length(value: &str, min: i64, max: i64) -> bool {
    let len = value.len() as i64;
    len >= min && len <= max
}

/// Email shape: exactly one `@`, non-empty local part, and a domain with an
/// interior dot. No whitespace anywhere.
pub fn email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// http or https URL with a non-empty host.
pub fn url(value: &str) -> bool {
    let Some(rest) = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
    else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty() && !value.chars().any(char::is_whitespace)
}

/// Hyphenated UUID: 8-4-4-4-12 hex digit groups, either case.
pub fn uuid(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (index, byte) in bytes.iter().enumerate() {
        match index {
            8 | 13 | 18 | 23 => {
                if *byte != b'-' {
                    return false;
                }
            }
            _ => {
                if !byte.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

/// Dotted-decimal IPv4: exactly four all-digit octets, each 0-255.
pub fn ipv4(value: &str) -> bool {
    let mut octets = 0usize;
    for part in value.split('.') {
        octets += 1;
        if octets > 4 || part.is_empty() || part.len() > 3 {
            return false;
        }
        if !part.bytes().all(|byte| byte.is_ascii_digit()) {
            return false;
        }
        // At most three digits, so this cannot overflow a u16.
        let octet: u16 = part.parse().unwrap_or(u16::MAX);
        if octet > 255 {
            return false;
        }
    }
    octets == 4
}

/// Standard-alphabet base64 with `=` padding only at the end and a length
/// that is a multiple of four.
pub fn base64(value: &str) -> bool {
    let bytes = value.as_bytes();
    if !bytes.len().is_multiple_of(4) {
        return false;
    }
    let mut padding = 0usize;
    for byte in bytes {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => {
                if padding > 0 {
                    return false;
                }
            }
            b'=' => {
                padding += 1;
                if padding > 2 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_length_uses_byte_length() {
        assert!(string_length("abc", 1, 3));
        assert!(!string_length("abcd", 1, 3));
        assert!(string_length("", 0, 0));
        // Multi-byte characters count their encoded bytes.
        assert!(!string_length("é", 1, 1));
        assert!(string_length("é", 2, 2));
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("a@b.com"));
        assert!(email("user0@example.com"));
        assert!(email("first.last@sub.example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!email("invalid"));
        assert!(!email("@example.com"));
        assert!(!email("a@b"));
        assert!(!email("a@.com"));
        assert!(!email("a@b.com."));
        assert!(!email("a b@c.com"));
        assert!(!email("a@b@c.com"));
    }

    #[test]
    fn url_requires_scheme_and_host() {
        assert!(url("https://alice.com"));
        assert!(url("http://bob.io/path?q=1"));
        assert!(!url("not-a-url"));
        assert!(!url("ftp://example.com"));
        assert!(!url("https://"));
        assert!(!url("https:// example.com"));
    }

    #[test]
    fn uuid_checks_groups_and_hex() {
        assert!(uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(uuid("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!uuid("invalid-uuid"));
        assert!(!uuid("550e8400e29b41d4a716446655440000"));
        assert!(!uuid("550e8400-e29b-41d4-a716-44665544000g"));
    }

    #[test]
    fn ipv4_bounds_octets() {
        assert!(ipv4("192.168.1.1"));
        assert!(ipv4("0.0.0.0"));
        assert!(ipv4("255.255.255.255"));
        assert!(!ipv4("999.999.999.999"));
        assert!(!ipv4("1.2.3"));
        assert!(!ipv4("1.2.3.4.5"));
        assert!(!ipv4("1.2.3.x"));
        assert!(!ipv4("1.2.3."));
        assert!(!ipv4("+1.2.3.4"));
    }

    #[test]
    fn base64_checks_alphabet_and_padding() {
        assert!(base64("aGVsbG8="));
        assert!(base64("aGVsbG8h"));
        assert!(base64("YQ=="));
        assert!(base64(""));
        assert!(!base64("aGVsbG8"));
        assert!(!base64("aGV!bG8="));
        assert!(!base64("aG=sbG8="));
        assert!(!base64("YQ==="));
    }
}
