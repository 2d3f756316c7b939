#![warn(clippy::pedantic)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

mod connection;
mod cookie;
mod date;
mod error;
mod grammar;
mod headers;
mod set_cookie;
mod stream;
mod timestamp;

pub use crate::connection::{
    Connection,
    ReceiveState,
    Role,
    SendState,
    StartLine,
    BUFFER_CAPACITY,
    MAX_HEADER_NAME_SIZE,
    MAX_HEADER_VALUE_SIZE,
    MIN_HEAD_SIZE,
};
pub use crate::cookie::{
    Cookie,
    CookieEntry,
};
pub use crate::date::Date;
pub use crate::error::Error;
pub use crate::headers::Header;
pub use crate::set_cookie::{
    SameSite,
    SetCookie,
};
pub use crate::stream::{
    is_valid_hostname,
    ByteStream,
};
pub use crate::timestamp::Timestamp;

// This is the character sequence corresponding to a carriage return (CR)
// followed by a line feed (LF), which officially delimits each
// line of an HTTP message.
const CRLF: &str = "\r\n";

// The only protocol version this crate writes into start lines.
const HTTP_VERSION: &str = "HTTP/1.1";
