/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
///
/// Variants fall into three families.  Most describe malformed input (a start
/// line, header block, cookie or date that breaks its grammar).
/// [`Error::OutOfSequence`] and [`Error::Closed`] mean the calling code
/// drove a [`Connection`](struct.Connection.html) in the wrong order, which is
/// a bug on the caller's side rather than something a peer can cause.
/// [`Error::Io`] carries a failure of the underlying byte stream unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The message body was requested as text, but the attached bytes are not
    /// valid UTF-8.
    #[error("message body is not valid text")]
    BodyNotValidText(Vec<u8>),

    /// The connection was closed; no further operations are possible on it.
    #[error("connection is closed")]
    Closed,

    /// The attached text does not follow the `Cookie` header grammar.
    #[error("invalid Cookie header value")]
    CookieInvalid(String),

    /// The attached text is not a valid cookie name.
    #[error("invalid cookie name")]
    CookieNameInvalid(String),

    /// The attached text is not a valid cookie value.
    #[error("invalid cookie value")]
    CookieValueInvalid(String),

    /// The attached text is not a valid HTTP-date.
    #[error("invalid HTTP-date")]
    DateInvalid(String),

    /// The day of the week named in the attached HTTP-date does not match the
    /// day the calendar date actually falls on.
    #[error("day of week does not match date")]
    DateWeekdayMismatch(String),

    /// The stream ended, or the buffer filled up, before the blank line ending
    /// the header block was found.
    #[error("header block is incomplete")]
    HeadIncomplete,

    /// A header line in the received head contained a byte which is not
    /// allowed where it appeared.
    #[error("invalid byte {byte:#04x} at offset {offset} in header block")]
    HeaderInvalidByte { byte: u8, offset: usize },

    /// A header name in the received head had no value after its colon.
    #[error("header has no value")]
    HeaderMissingValue(Vec<u8>),

    /// The attached header name cannot be sent because it is not a token.
    #[error("invalid header name")]
    HeaderNameInvalid(String),

    /// The attached bytes are the beginning of a received header name which
    /// exceeds the header name size limit.
    #[error("header name too long")]
    HeaderNameTooLong(Vec<u8>),

    /// The attached header value cannot be sent because it contains a
    /// character not allowed in a header value (such as CR or LF).
    #[error("invalid header value")]
    HeaderValueInvalid(String),

    /// The attached bytes are the beginning of a received header value which
    /// exceeds the header value size limit.
    #[error("header value too long")]
    HeaderValueTooLong(Vec<u8>),

    /// The attached `Content-Length` header value is not a plain decimal
    /// number that fits in a `usize`.
    #[error("invalid Content-Length header value")]
    InvalidContentLength(String),

    /// An error occurred in the underlying byte stream.
    #[error("error in byte stream")]
    Io(#[from] std::io::Error),

    /// An operation was attempted in a phase of the message exchange which
    /// does not allow it.  This indicates a bug in the calling code.
    #[error("{operation} is not allowed in state {state}")]
    OutOfSequence {
        operation: &'static str,
        state: String,
    },

    /// The cookie name carries a `__Secure-` or `__Host-` prefix, but the
    /// cookie attributes do not satisfy the requirements of that prefix.
    #[error("cookie attributes violate the requirements of the name prefix")]
    SecurePrefixViolation(String),

    /// The attached `Set-Cookie` attribute has an empty value.
    #[error("Set-Cookie attribute has an empty value")]
    SetCookieAttributeEmpty(String),

    /// The attached `Set-Cookie` attribute name is not recognized.
    #[error("unknown Set-Cookie attribute")]
    SetCookieAttributeUnknown(String),

    /// The attached `Domain` attribute value is not a valid host name.
    #[error("invalid Set-Cookie domain")]
    SetCookieDomainInvalid(String),

    /// The attached text does not follow the `Set-Cookie` header grammar.
    #[error("invalid Set-Cookie header value")]
    SetCookieInvalid(String),

    /// The `Max-Age` attribute value is not a valid integer.
    #[error("invalid Set-Cookie max-age")]
    SetCookieMaxAge(#[source] std::num::ParseIntError),

    /// The attached `Path` attribute value does not begin with a slash.
    #[error("invalid Set-Cookie path")]
    SetCookiePathInvalid(String),

    /// The attached `SameSite` attribute value is not recognized.
    #[error("invalid Set-Cookie same-site value")]
    SetCookieSameSiteInvalid(String),

    /// The attached bytes did not parse as a valid start line.
    #[error("invalid start line")]
    StartLineInvalid(Vec<u8>),

    /// The attached fields do not make up a valid point in the proleptic
    /// Gregorian calendar supported by this crate.
    #[error("timestamp fields out of range")]
    TimestampOutOfRange {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },
}
