use crate::grammar::{
    is_cookie_octet,
    is_cookie_value,
    is_token,
    is_token_char,
};
use crate::Error;

/// One `name=value` pair of a `Cookie` header.  The name is always a token
/// and the value is always made of cookie-octets; setters which would break
/// this leave the entry as it was.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CookieEntry {
    name: String,
    value: String,
}

impl CookieEntry {
    pub fn new<N, V>(
        name: N,
        value: V,
    ) -> Result<Self, Error>
        where
            N: Into<String>,
            V: Into<String>,
    {
        let mut entry = Self {
            name: String::new(),
            value: String::new(),
        };
        entry.set_name(name)?;
        entry.set_value(value)?;
        Ok(entry)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
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
}

impl std::fmt::Display for CookieEntry {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[derive(Debug, Eq, PartialEq)]
enum CookieState {
    Name,
    Semicolon,
    Value,
}

/// The value of a `Cookie` request header
/// ([RFC 6265 section 4.2](https://tools.ietf.org/html/rfc6265#section-4.2)):
/// a list of `name=value` pairs, in the order they were given.  The same
/// name may appear more than once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cookie {
    entries: Vec<CookieEntry>,
}

impl Cookie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse<T>(text: T) -> Result<Self, Error>
        where T: AsRef<str>
    {
        let text = text.as_ref();
        let invalid = || {
            log::debug!("rejected Cookie header value {:?}", text);
            Error::CookieInvalid(text.into())
        };
        let mut entries = Vec::new();
        let mut state = CookieState::Name;
        let mut name_start = 0;
        let mut value_start = 0;
        for (i, c) in text.bytes().enumerate() {
            state = match state {
                CookieState::Name => match c {
                    b'=' if i > name_start => {
                        value_start = i + 1;
                        CookieState::Value
                    },
                    c if is_token_char(c) => CookieState::Name,
                    _ => return Err(invalid()),
                },
                CookieState::Value => match c {
                    b';' => {
                        entries.push(CookieEntry {
                            name: text[name_start..value_start - 1].into(),
                            value: text[value_start..i].into(),
                        });
                        CookieState::Semicolon
                    },
                    c if is_cookie_octet(c) => CookieState::Value,
                    _ => return Err(invalid()),
                },
                CookieState::Semicolon => match c {
                    b' ' => {
                        name_start = i + 1;
                        CookieState::Name
                    },
                    _ => return Err(invalid()),
                },
            };
        }
        if state != CookieState::Value {
            return Err(invalid());
        }
        entries.push(CookieEntry {
            name: text[name_start..value_start - 1].into(),
            value: text[value_start..].into(),
        });
        Ok(Self {
            entries,
        })
    }

    pub fn push(
        &mut self,
        entry: CookieEntry,
    ) {
        self.entries.push(entry);
    }

    /// Find the first entry at index `offset` or later with the given name,
    /// returning its index along with it.  Cookie names are case-sensitive.
    #[must_use]
    pub fn find(
        &self,
        name: &str,
        offset: usize,
    ) -> Option<(usize, &CookieEntry)> {
        self.entries.iter()
            .enumerate()
            .skip(offset)
            .find(|(_, entry)| entry.name == name)
    }

    /// Value of the first entry with the given name.
    #[must_use]
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.find(name, 0).map(|(_, entry)| entry.value())
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut CookieEntry> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CookieEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::str::FromStr for Cookie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Cookie {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_and_serialize_round_trip() {
        let cookie = Cookie::parse("a=1; b=2").unwrap();
        assert_eq!(2, cookie.len());
        assert_eq!(Some("1"), cookie.get("a"));
        assert_eq!(Some("2"), cookie.get("b"));
        assert_eq!("a=1; b=2", cookie.to_string());
    }

    #[test]
    fn parse_single_entry() {
        let cookie = Cookie::parse("SID=31d4d96e407aad42").unwrap();
        assert_eq!(1, cookie.len());
        assert_eq!(Some("31d4d96e407aad42"), cookie.get("SID"));
    }

    #[test]
    fn parse_empty_value() {
        let cookie = Cookie::parse("a=; b=2").unwrap();
        assert_eq!(Some(""), cookie.get("a"));
        let cookie = Cookie::parse("a=").unwrap();
        assert_eq!(Some(""), cookie.get("a"));
    }

    #[test]
    fn repeated_names_are_kept_in_order() {
        let cookie = Cookie::parse("a=1; b=2; a=3").unwrap();
        assert_eq!(3, cookie.len());
        let (index, entry) = cookie.find("a", 0).unwrap();
        assert_eq!(0, index);
        assert_eq!("1", entry.value());
        let (index, entry) = cookie.find("a", index + 1).unwrap();
        assert_eq!(2, index);
        assert_eq!("3", entry.value());
        assert!(cookie.find("a", index + 1).is_none());
        assert!(cookie.find("A", 0).is_none());
    }

    #[test]
    fn parse_malformed() {
        for text in &[
            "",
            "a",
            "=1",
            "a=1;",
            "a=1; ",
            "a=1;b=2",
            "a=1;  b=2",
            "a=1 ; b=2",
            "a=\"1\"",
            "a b=1",
            "a=1,b=2",
            "a=1; b",
        ] {
            assert!(
                matches!(Cookie::parse(text), Err(Error::CookieInvalid(_))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let cookie = Cookie::parse("a=b=c").unwrap();
        assert_eq!(Some("b=c"), cookie.get("a"));
    }

    #[test]
    fn build_programmatically() {
        let mut cookie = Cookie::new();
        assert!(cookie.is_empty());
        cookie.push(CookieEntry::new("lang", "en-US").unwrap());
        cookie.push(CookieEntry::new("theme", "dark").unwrap());
        assert_eq!("lang=en-US; theme=dark", cookie.to_string());
        let names = cookie.iter().map(CookieEntry::name).collect::<Vec<_>>();
        assert_eq!(vec!["lang", "theme"], names);
    }

    #[test]
    fn invalid_entries_are_rejected() {
        assert!(matches!(
            CookieEntry::new("", "1"),
            Err(Error::CookieNameInvalid(_))
        ));
        assert!(matches!(
            CookieEntry::new("a;b", "1"),
            Err(Error::CookieNameInvalid(_))
        ));
        assert!(matches!(
            CookieEntry::new("a", "x y"),
            Err(Error::CookieValueInvalid(_))
        ));
    }

    #[test]
    fn failed_mutation_leaves_entry_unchanged() {
        let mut cookie = Cookie::parse("a=1").unwrap();
        let entry = cookie.get_mut(0).unwrap();
        assert!(entry.set_value("bad;value").is_err());
        assert!(entry.set_name("bad name").is_err());
        assert_eq!("a", entry.name());
        assert_eq!("1", entry.value());
        entry.set_value("2").unwrap();
        assert_eq!("a=2", cookie.to_string());
    }

}
