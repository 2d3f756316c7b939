use crate::grammar::{
    is_cookie_octet,
    is_cookie_value,
    is_token,
    is_token_char,
};
use crate::{
    is_valid_hostname,
    Date,
    Error,
};

const SECURE_PREFIX: &str = "__Secure-";
const HOST_PREFIX: &str = "__Host-";

/// Value of the `SameSite` attribute of a `Set-Cookie` header.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SameSite {
    Strict,
    Lax,
}

impl SameSite {
    fn parse(text: &str) -> Result<Self, Error> {
        if text.eq_ignore_ascii_case("strict") {
            Ok(SameSite::Strict)
        } else if text.eq_ignore_ascii_case("lax") {
            Ok(SameSite::Lax)
        } else {
            Err(Error::SetCookieSameSiteInvalid(text.into()))
        }
    }
}

impl std::fmt::Display for SameSite {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
        })
    }
}

// The requirements RFC 6265bis places on cookies whose names carry one of
// the security prefixes.
fn prefix_satisfied(
    name: &str,
    secure: bool,
    domain: Option<&str>,
    path: Option<&str>,
) -> bool {
    if name.starts_with(HOST_PREFIX) {
        secure && domain.is_none() && path == Some("/")
    } else if name.starts_with(SECURE_PREFIX) {
        secure
    } else {
        true
    }
}

fn normalize_domain(domain: &str) -> Result<String, Error> {
    let stripped = domain.trim_start_matches('.');
    if is_valid_hostname(stripped) {
        Ok(stripped.into())
    } else {
        Err(Error::SetCookieDomainInvalid(domain.into()))
    }
}

fn validate_path(path: &str) -> Result<String, Error> {
    if
        path.starts_with('/')
        && path.bytes().all(|c| c != b';' && !c.is_ascii_control())
    {
        Ok(path.into())
    } else {
        Err(Error::SetCookiePathInvalid(path.into()))
    }
}

// `av-octet` from RFC 6265 section 4.1.1.
fn is_attribute_value_octet(c: u8) -> bool {
    c != b';' && !c.is_ascii_control() && c.is_ascii()
}

#[derive(Debug, Eq, PartialEq)]
enum SetCookieState {
    AfterValueQuoted,
    AttributeName,
    AttributeValue,
    BeforeValue,
    Name,
    Semicolon,
    ValueQuoted,
    ValueUnquoted,
}

/// The value of one `Set-Cookie` response header
/// ([RFC 6265 section 4.1](https://tools.ietf.org/html/rfc6265#section-4.1)).
///
/// A cookie whose name starts with `__Secure-` always has the `Secure`
/// attribute.  One whose name starts with `__Host-` additionally has no
/// `Domain` attribute and a `Path` of `/`.  Setters refuse any change which
/// would break these rules, leaving the cookie as it was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetCookie {
    name: String,
    value: String,
    quoted: bool,
    expires: Option<Date>,
    max_age: Option<i64>,
    domain: Option<String>,
    path: Option<String>,
    secure: bool,
    http_only: bool,
    same_site: Option<SameSite>,
}

impl SetCookie {
    /// Build a cookie with no optional attributes, except those its name
    /// prefix requires: `Secure` for a `__Secure-` or `__Host-` name, and a
    /// `Path` of `/` for a `__Host-` name.
    pub fn new<N, V>(
        name: N,
        value: V,
    ) -> Result<Self, Error>
        where
            N: Into<String>,
            V: Into<String>,
    {
        let name = name.into();
        if !is_token(&name) {
            return Err(Error::CookieNameInvalid(name));
        }
        let value = value.into();
        if !is_cookie_value(&value) {
            return Err(Error::CookieValueInvalid(value));
        }
        let is_host = name.starts_with(HOST_PREFIX);
        let secure = is_host || name.starts_with(SECURE_PREFIX);
        Ok(Self {
            name,
            value,
            quoted: false,
            expires: None,
            max_age: None,
            domain: None,
            path: if is_host { Some("/".into()) } else { None },
            secure,
            http_only: false,
            same_site: None,
        })
    }

    fn empty() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            quoted: false,
            expires: None,
            max_age: None,
            domain: None,
            path: None,
            secure: false,
            http_only: false,
            same_site: None,
        }
    }

    pub fn parse<T>(text: T) -> Result<Self, Error>
        where T: AsRef<str>
    {
        let text = text.as_ref();
        Self::parse_inner(text).map_err(|error| {
            log::debug!("rejected Set-Cookie header value {:?}: {}", text, error);
            error
        })
    }

    fn parse_inner(text: &str) -> Result<Self, Error> {
        let invalid = || Error::SetCookieInvalid(text.into());
        let mut cookie = Self::empty();
        let mut state = SetCookieState::Name;
        let mut name_end = 0;
        let mut value_start = 0;
        let mut value_end = 0;
        let mut attribute_start = 0;
        let mut attribute_name_end = 0;
        for (i, c) in text.bytes().enumerate() {
            state = match state {
                SetCookieState::Name => match c {
                    b'=' if i > 0 => {
                        name_end = i;
                        SetCookieState::BeforeValue
                    },
                    c if is_token_char(c) => SetCookieState::Name,
                    _ => return Err(invalid()),
                },
                SetCookieState::BeforeValue => match c {
                    b'"' => {
                        value_start = i + 1;
                        cookie.quoted = true;
                        SetCookieState::ValueQuoted
                    },
                    b';' => {
                        value_start = i;
                        value_end = i;
                        SetCookieState::Semicolon
                    },
                    c if is_cookie_octet(c) => {
                        value_start = i;
                        SetCookieState::ValueUnquoted
                    },
                    _ => return Err(invalid()),
                },
                SetCookieState::ValueUnquoted => match c {
                    b';' => {
                        value_end = i;
                        SetCookieState::Semicolon
                    },
                    c if is_cookie_octet(c) => SetCookieState::ValueUnquoted,
                    _ => return Err(invalid()),
                },
                SetCookieState::ValueQuoted => match c {
                    b'"' => {
                        value_end = i;
                        SetCookieState::AfterValueQuoted
                    },
                    c if is_cookie_octet(c) => SetCookieState::ValueQuoted,
                    _ => return Err(invalid()),
                },
                SetCookieState::AfterValueQuoted => match c {
                    b';' => SetCookieState::Semicolon,
                    _ => return Err(invalid()),
                },
                SetCookieState::Semicolon => match c {
                    b' ' => {
                        attribute_start = i + 1;
                        SetCookieState::AttributeName
                    },
                    _ => return Err(invalid()),
                },
                SetCookieState::AttributeName => match c {
                    b';' if i > attribute_start => {
                        cookie.apply_flag(&text[attribute_start..i])?;
                        SetCookieState::Semicolon
                    },
                    b'=' if i > attribute_start => {
                        attribute_name_end = i;
                        SetCookieState::AttributeValue
                    },
                    c if is_token_char(c) => SetCookieState::AttributeName,
                    _ => return Err(invalid()),
                },
                SetCookieState::AttributeValue => match c {
                    b';' => {
                        cookie.apply_attribute(
                            &text[attribute_start..attribute_name_end],
                            &text[attribute_name_end + 1..i],
                        )?;
                        SetCookieState::Semicolon
                    },
                    c if is_attribute_value_octet(c) => SetCookieState::AttributeValue,
                    _ => return Err(invalid()),
                },
            };
        }
        match state {
            SetCookieState::BeforeValue => {
                value_start = text.len();
                value_end = text.len();
            },
            SetCookieState::ValueUnquoted => value_end = text.len(),
            SetCookieState::AttributeName if text.len() > attribute_start => {
                cookie.apply_flag(&text[attribute_start..])?;
            },
            SetCookieState::AttributeValue => {
                cookie.apply_attribute(
                    &text[attribute_start..attribute_name_end],
                    &text[attribute_name_end + 1..],
                )?;
            },
            SetCookieState::AfterValueQuoted => (),
            SetCookieState::AttributeName
            | SetCookieState::Name
            | SetCookieState::Semicolon
            | SetCookieState::ValueQuoted => return Err(invalid()),
        }
        cookie.name = text[..name_end].into();
        cookie.value = text[value_start..value_end].into();
        cookie.check_prefix(
            &cookie.name,
            cookie.secure,
            cookie.domain.as_deref(),
            cookie.path.as_deref(),
        )?;
        Ok(cookie)
    }

    fn apply_flag(
        &mut self,
        name: &str,
    ) -> Result<(), Error> {
        if name.eq_ignore_ascii_case("secure") {
            self.secure = true;
            Ok(())
        } else if name.eq_ignore_ascii_case("httponly") {
            self.http_only = true;
            Ok(())
        } else {
            self.apply_attribute(name, "")
        }
    }

    fn apply_attribute(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), Error> {
        let name_lower = name.to_ascii_lowercase();
        let known = matches!(
            name_lower.as_str(),
            "expires" | "max-age" | "domain" | "path" | "samesite"
        );
        if !known {
            return Err(Error::SetCookieAttributeUnknown(name.into()));
        }
        if value.is_empty() {
            return Err(Error::SetCookieAttributeEmpty(name.into()));
        }
        match name_lower.as_str() {
            "expires" => self.expires = Some(Date::parse(value)?),
            "max-age" => {
                self.max_age = Some(value.parse().map_err(Error::SetCookieMaxAge)?);
            },
            "domain" => self.domain = Some(normalize_domain(value)?),
            "path" => self.path = Some(validate_path(value)?),
            _ => self.same_site = Some(SameSite::parse(value)?),
        }
        Ok(())
    }

    fn check_prefix(
        &self,
        name: &str,
        secure: bool,
        domain: Option<&str>,
        path: Option<&str>,
    ) -> Result<(), Error> {
        if prefix_satisfied(name, secure, domain, path) {
            Ok(())
        } else {
            log::debug!("cookie {:?} would break its name prefix rules", self.name);
            Err(Error::SecurePrefixViolation(name.into()))
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cookie value, without the double quotes of a quoted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is written between double quotes.
    #[must_use]
    pub fn quoted(&self) -> bool {
        self.quoted
    }

    #[must_use]
    pub fn expires(&self) -> Option<Date> {
        self.expires
    }

    #[must_use]
    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn secure(&self) -> bool {
        self.secure
    }

    #[must_use]
    pub fn http_only(&self) -> bool {
        self.http_only
    }

    #[must_use]
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    pub fn set_name<N>(
        &mut self,
        name: N,
    ) -> Result<(), Error>
        where N: Into<String>
    {
        let name = name.into();
        if !is_token(&name) {
            return Err(Error::CookieNameInvalid(name));
        }
        self.check_prefix(
            &name,
            self.secure,
            self.domain.as_deref(),
            self.path.as_deref(),
        )?;
        self.name = name;
        Ok(())
    }

    pub fn set_value<V>(
        &mut self,
        value: V,
    ) -> Result<(), Error>
        where V: Into<String>
    {
        let value = value.into();
        if !is_cookie_value(&value) {
            return Err(Error::CookieValueInvalid(value));
        }
        self.value = value;
        Ok(())
    }

    pub fn set_quoted(
        &mut self,
        quoted: bool,
    ) {
        self.quoted = quoted;
    }

    pub fn set_expires(
        &mut self,
        expires: Option<Date>,
    ) {
        self.expires = expires;
    }

    pub fn set_max_age(
        &mut self,
        max_age: Option<i64>,
    ) {
        self.max_age = max_age;
    }

    /// Set or clear the `Domain` attribute.  Leading dots are dropped, and
    /// what remains must be a valid host name.
    pub fn set_domain(
        &mut self,
        domain: Option<&str>,
    ) -> Result<(), Error> {
        let domain = domain.map(normalize_domain).transpose()?;
        self.check_prefix(
            &self.name,
            self.secure,
            domain.as_deref(),
            self.path.as_deref(),
        )?;
        self.domain = domain;
        Ok(())
    }

    pub fn set_path(
        &mut self,
        path: Option<&str>,
    ) -> Result<(), Error> {
        let path = path.map(validate_path).transpose()?;
        self.check_prefix(
            &self.name,
            self.secure,
            self.domain.as_deref(),
            path.as_deref(),
        )?;
        self.path = path;
        Ok(())
    }

    pub fn set_secure(
        &mut self,
        secure: bool,
    ) -> Result<(), Error> {
        self.check_prefix(
            &self.name,
            secure,
            self.domain.as_deref(),
            self.path.as_deref(),
        )?;
        self.secure = secure;
        Ok(())
    }

    pub fn set_http_only(
        &mut self,
        http_only: bool,
    ) {
        self.http_only = http_only;
    }

    pub fn set_same_site(
        &mut self,
        same_site: Option<SameSite>,
    ) {
        self.same_site = same_site;
    }
}

impl std::str::FromStr for SetCookie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SetCookie {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if self.quoted {
            write!(f, "{}=\"{}\"", self.name, self.value)?;
        } else {
            write!(f, "{}={}", self.name, self.value)?;
        }
        if let Some(expires) = &self.expires {
            write!(f, "; Expires={}", expires)?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={}", max_age)?;
        }
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={}", domain)?;
        }
        if let Some(path) = &self.path {
            write!(f, "; Path={}", path)?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={}", same_site)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Timestamp;

    #[test]
    fn parse_name_and_value_only() {
        let cookie = SetCookie::parse("SID=31d4d96e407aad42").unwrap();
        assert_eq!("SID", cookie.name());
        assert_eq!("31d4d96e407aad42", cookie.value());
        assert_eq!(None, cookie.expires());
        assert_eq!(None, cookie.max_age());
        assert_eq!(None, cookie.domain());
        assert_eq!(None, cookie.path());
        assert!(!cookie.secure());
        assert!(!cookie.http_only());
        assert_eq!(None, cookie.same_site());
    }

    #[test]
    fn parse_all_attributes() {
        let cookie = SetCookie::parse(concat!(
            "SID=31d4d96e407aad42; Expires=Sat, 06 Apr 2019 17:00:00 GMT; ",
            "Max-Age=3600; Domain=.example.com; Path=/docs; Secure; HttpOnly; ",
            "SameSite=Lax",
        )).unwrap();
        assert_eq!(
            Some(Date::from(Timestamp::new(2019, 4, 6, 17, 0, 0).unwrap())),
            cookie.expires()
        );
        assert_eq!(Some(3600), cookie.max_age());
        assert_eq!(Some("example.com"), cookie.domain());
        assert_eq!(Some("/docs"), cookie.path());
        assert!(cookie.secure());
        assert!(cookie.http_only());
        assert_eq!(Some(SameSite::Lax), cookie.same_site());
    }

    #[test]
    fn attribute_names_are_case_insensitive() {
        let cookie = SetCookie::parse(
            "a=1; SECURE; httponly; samesite=STRICT; max-AGE=-1"
        ).unwrap();
        assert!(cookie.secure());
        assert!(cookie.http_only());
        assert_eq!(Some(SameSite::Strict), cookie.same_site());
        assert_eq!(Some(-1), cookie.max_age());
    }

    #[test]
    fn quoted_values_keep_their_quotes_when_serialized() {
        let mut cookie = SetCookie::parse("a=\"hello\"; Path=/; Secure").unwrap();
        assert_eq!("a=\"hello\"; Path=/; Secure", cookie.to_string());
        assert_eq!("a=\"\"", SetCookie::parse("a=\"\"").unwrap().to_string());
        cookie.set_quoted(false);
        assert_eq!("a=hello; Path=/; Secure", cookie.to_string());
        let mut cookie = SetCookie::new("b", "world").unwrap();
        cookie.set_quoted(true);
        assert_eq!("b=\"world\"", cookie.to_string());
        assert_eq!(cookie, SetCookie::parse(cookie.to_string()).unwrap());
    }

    #[test]
    fn parse_quoted_and_empty_values() {
        let cookie = SetCookie::parse("a=\"hello\"; Path=/").unwrap();
        assert_eq!("hello", cookie.value());
        assert!(cookie.quoted());
        assert_eq!(Some("/"), cookie.path());
        let cookie = SetCookie::parse("a=\"\"").unwrap();
        assert_eq!("", cookie.value());
        assert!(cookie.quoted());
        let cookie = SetCookie::parse("a=").unwrap();
        assert_eq!("", cookie.value());
        assert!(!cookie.quoted());
        let cookie = SetCookie::parse("a=; Secure").unwrap();
        assert_eq!("", cookie.value());
        assert!(cookie.secure());
    }

    #[test]
    fn parse_malformed() {
        for text in &[
            "",
            "a",
            "=1",
            "a=1;",
            "a=1; ",
            "a=1;Secure",
            "a=\"1",
            "a=\"1\"x",
            "a=\"1 2\"",
            "a=1 2",
            "a=1; Secure;",
        ] {
            assert!(
                matches!(SetCookie::parse(text), Err(Error::SetCookieInvalid(_))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn unknown_and_empty_attributes_are_rejected() {
        assert!(matches!(
            SetCookie::parse("a=1; Priority=High"),
            Err(Error::SetCookieAttributeUnknown(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Frobnicate"),
            Err(Error::SetCookieAttributeUnknown(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Path="),
            Err(Error::SetCookieAttributeEmpty(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Domain"),
            Err(Error::SetCookieAttributeEmpty(_))
        ));
    }

    #[test]
    fn malformed_attribute_values_are_rejected() {
        assert!(matches!(
            SetCookie::parse("a=1; Max-Age=99999999999999999999"),
            Err(Error::SetCookieMaxAge(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Max-Age=soon"),
            Err(Error::SetCookieMaxAge(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Path=docs"),
            Err(Error::SetCookiePathInvalid(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Domain=exa_mple.com"),
            Err(Error::SetCookieDomainInvalid(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; SameSite=None"),
            Err(Error::SetCookieSameSiteInvalid(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Expires=tomorrow"),
            Err(Error::DateInvalid(_))
        ));
        assert!(matches!(
            SetCookie::parse("a=1; Expires=Fri, 06 Apr 2019 17:00:00 GMT"),
            Err(Error::DateWeekdayMismatch(_))
        ));
    }

    #[test]
    fn parse_enforces_prefix_rules() {
        assert!(SetCookie::parse("__Secure-a=1; Secure").is_ok());
        assert!(matches!(
            SetCookie::parse("__Secure-a=1"),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert!(SetCookie::parse("__Host-a=1; Secure; Path=/").is_ok());
        assert!(matches!(
            SetCookie::parse("__Host-a=1; Secure; Path=/docs"),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert!(matches!(
            SetCookie::parse("__Host-a=1; Secure; Path=/; Domain=example.com"),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert!(matches!(
            SetCookie::parse("__Host-a=1; Path=/"),
            Err(Error::SecurePrefixViolation(_))
        ));
    }

    #[test]
    fn serialize_round_trip() {
        let text = concat!(
            "SID=31d4d96e407aad42; Expires=Sat, 06 Apr 2019 17:00:00 GMT; ",
            "Max-Age=3600; Domain=example.com; Path=/; Secure; HttpOnly; ",
            "SameSite=Strict",
        );
        let cookie = SetCookie::parse(text).unwrap();
        assert_eq!(text, cookie.to_string());
        assert_eq!(cookie, SetCookie::parse(cookie.to_string()).unwrap());
    }

    #[test]
    fn plain_cookie_may_drop_secure() {
        let mut cookie = SetCookie::new("x", "1").unwrap();
        assert!(!cookie.secure());
        assert!(cookie.set_secure(false).is_ok());
        assert!(cookie.set_secure(true).is_ok());
        assert!(cookie.secure());
    }

    #[test]
    fn secure_prefix_cookie_keeps_secure() {
        let mut cookie = SetCookie::new("x", "1").unwrap();
        cookie.set_secure(true).unwrap();
        cookie.set_name("__Secure-x").unwrap();
        let before = cookie.clone();
        assert!(matches!(
            cookie.set_secure(false),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert_eq!(before, cookie);
    }

    #[test]
    fn prefixed_names_start_out_valid() {
        let cookie = SetCookie::new("__Secure-x", "1").unwrap();
        assert!(cookie.secure());
        assert_eq!(None, cookie.path());
        let cookie = SetCookie::new("__Host-x", "1").unwrap();
        assert!(cookie.secure());
        assert_eq!(Some("/"), cookie.path());
        assert_eq!("__Host-x=1; Path=/; Secure", cookie.to_string());
    }

    #[test]
    fn host_prefix_cookie_refuses_domain() {
        let mut cookie = SetCookie::new("__Host-x", "1").unwrap();
        let before = cookie.clone();
        assert!(matches!(
            cookie.set_domain(Some("a.com")),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert!(matches!(
            cookie.set_path(Some("/docs")),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert!(matches!(
            cookie.set_path(None),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert_eq!(before, cookie);
    }

    #[test]
    fn renaming_checks_prefix_rules() {
        let mut cookie = SetCookie::new("x", "1").unwrap();
        cookie.set_secure(true).unwrap();
        cookie.set_domain(Some("a.com")).unwrap();
        cookie.set_path(Some("/")).unwrap();
        assert!(matches!(
            cookie.set_name("__Host-x"),
            Err(Error::SecurePrefixViolation(_))
        ));
        assert_eq!("x", cookie.name());
        cookie.set_domain(None).unwrap();
        cookie.set_name("__Host-x").unwrap();
        assert_eq!("__Host-x", cookie.name());
    }

    #[test]
    fn setters_validate_before_committing() {
        let mut cookie = SetCookie::new("x", "1").unwrap();
        let before = cookie.clone();
        assert!(matches!(
            cookie.set_name("bad name"),
            Err(Error::CookieNameInvalid(_))
        ));
        assert!(matches!(
            cookie.set_value("bad;value"),
            Err(Error::CookieValueInvalid(_))
        ));
        assert!(matches!(
            cookie.set_domain(Some("-bad.com")),
            Err(Error::SetCookieDomainInvalid(_))
        ));
        assert!(matches!(
            cookie.set_path(Some("relative")),
            Err(Error::SetCookiePathInvalid(_))
        ));
        assert_eq!(before, cookie);
        cookie.set_domain(Some("..Example.com")).unwrap();
        assert_eq!(Some("Example.com"), cookie.domain());
    }

    #[test]
    fn build_programmatically() {
        let mut cookie = SetCookie::new("lang", "en-US").unwrap();
        cookie.set_max_age(Some(-1));
        cookie.set_expires(Some(
            Date::parse("Sun, 06 Nov 1994 08:49:37 GMT").unwrap()
        ));
        cookie.set_http_only(true);
        cookie.set_same_site(Some(SameSite::Lax));
        assert_eq!(
            "lang=en-US; Expires=Sun, 06 Nov 1994 08:49:37 GMT; Max-Age=-1; HttpOnly; SameSite=Lax",
            cookie.to_string()
        );
    }

}
