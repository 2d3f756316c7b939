// Character classes shared by the header, cookie and set-cookie parsers.

/// `tchar` from RFC 7230 section 3.2.6.
pub fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-'
            | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
}

/// `cookie-octet` from RFC 6265 section 4.1.1: US-ASCII characters
/// excluding controls, whitespace, DQUOTE, comma, semicolon, and backslash.
pub fn is_cookie_octet(c: u8) -> bool {
    matches!(c, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Visible characters plus the two whitespace characters allowed
/// inside a header field value.
pub fn is_field_value_char(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | 0x21..=0x7E)
}

pub fn is_token<T>(s: T) -> bool
    where T: AsRef<[u8]>
{
    let s = s.as_ref();
    !s.is_empty() && s.iter().copied().all(is_token_char)
}

pub fn is_cookie_value<T>(s: T) -> bool
    where T: AsRef<[u8]>
{
    s.as_ref().iter().copied().all(is_cookie_octet)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn token_characters() {
        assert!(is_token("Content-Length"));
        assert!(is_token("x!#$%&'*+-.^_`|~9"));
        assert!(!is_token(""));
        assert!(!is_token("a b"));
        assert!(!is_token("a:b"));
        assert!(!is_token("a=b"));
        assert!(!is_token("\"a\""));
    }

    #[test]
    fn cookie_octets() {
        assert!(is_cookie_value(""));
        assert!(is_cookie_value("abc123!#/:<>[]{}"));
        for c in &[b' ', b'"', b',', b';', b'\\', 0x7F, 0x1F] {
            assert!(!is_cookie_octet(*c), "{}", c);
        }
    }

    #[test]
    fn field_value_characters() {
        assert!(is_field_value_char(b'\t'));
        assert!(is_field_value_char(b' '));
        assert!(is_field_value_char(b'~'));
        assert!(!is_field_value_char(b'\r'));
        assert!(!is_field_value_char(b'\n'));
        assert!(!is_field_value_char(0x80));
    }

}
