use crate::grammar::{
    is_field_value_char,
    is_token,
    is_token_char,
};
use crate::headers::{
    Header,
    HeaderTable,
    HeaderView,
};
use crate::{
    ByteStream,
    Error,
    CRLF,
    HTTP_VERSION,
};

/// Size of the receive buffer.  The start line and every header of a
/// received message must fit in it.
pub const BUFFER_CAPACITY: usize = 8192;

/// Shortest head worth parsing: the length of the shortest legal start
/// line, `HTTP/1.1 200 \r\n`.
pub const MIN_HEAD_SIZE: usize = 15;

/// Longest header name accepted in a received head.
pub const MAX_HEADER_NAME_SIZE: usize = 64;

/// Longest header value accepted in a received head.
pub const MAX_HEADER_VALUE_SIZE: usize = 128;

// Size of the scratch buffer used to collect or throw away a body.
const DISMISS_CHUNK_SIZE: usize = 1024;

// Width of the `HTTP/x.y` version at the start of a status line.
const STATUS_LINE_VERSION_SIZE: usize = 8;

/// Which end of the exchange a connection is.  A server receives requests
/// and sends responses; a client does the reverse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Client,
    Server,
}

/// The first line of a message to send.  Clients send requests and servers
/// send statuses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StartLine<'a> {
    Request {
        method: &'a str,
        target: &'a str,
    },
    Status {
        code: u16,
        phrase: &'a str,
    },
}

/// Progress of the message being sent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SendState {
    /// Nothing sent yet.
    Idle,

    /// Start line sent; headers may follow.
    Headers,

    /// The blank line ending the headers has been sent; body bytes may
    /// follow.
    Body,

    /// The send direction of the stream has been shut down.
    Ended,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SendEvent {
    Body,
    End,
    Header,
    Start,
    StartWithoutHeaders,
}

impl SendState {
    fn transition(
        self,
        event: SendEvent,
        role: Role,
    ) -> Option<Self> {
        match (self, event) {
            (SendState::Idle, SendEvent::Start)
            | (SendState::Headers, SendEvent::Header) => Some(SendState::Headers),
            (SendState::Idle, SendEvent::StartWithoutHeaders)
            | (SendState::Headers, SendEvent::Body)
            | (SendState::Body, SendEvent::Body) => Some(SendState::Body),
            (SendState::Headers, SendEvent::End)
            | (SendState::Body, SendEvent::End) => Some(SendState::Ended),
            // A server is not stopped from writing after its half-close;
            // the stream reports the failure.
            (SendState::Ended, SendEvent::Body) if role == Role::Server => {
                Some(SendState::Ended)
            },
            _ => None,
        }
    }
}

/// Progress of the message being received.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReceiveState {
    /// Nothing received yet.
    Idle,

    /// Start line and headers received; body bytes may follow.
    Head,

    /// The whole body has been received.
    Body,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ReceiveEvent {
    BodyComplete,
    Head,
}

impl ReceiveState {
    fn transition(
        self,
        event: ReceiveEvent,
    ) -> Option<Self> {
        match (self, event) {
            (ReceiveState::Idle, ReceiveEvent::Head) => Some(ReceiveState::Head),
            (ReceiveState::Head, ReceiveEvent::BodyComplete) => Some(ReceiveState::Body),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum HeaderState {
    BeforeValue,
    Cr,
    CrLfCr,
    CrLfCrLf,
    Name,
    Value,
}

fn find_crlf(message: &[u8]) -> Option<usize> {
    message.windows(2).position(|window| window == CRLF.as_bytes())
}

fn find_head_end(message: &[u8]) -> Option<usize> {
    message.windows(4).position(|window| window == b"\r\n\r\n")
}

fn is_visible(c: u8) -> bool {
    c.is_ascii_graphic()
}

// Tokenize the header block starting at `start`, lower-casing names in
// place and recording where each field sits.  Returns the offset just past
// the blank line which ends the block.
fn tokenize_headers(
    buffer: &mut [u8],
    start: usize,
    headers: &mut HeaderTable,
) -> Result<usize, Error> {
    let mut state = HeaderState::Name;
    let mut name_offset = start;
    let mut name_size = 0;
    let mut value_offset = 0;
    let mut value_size = 0;
    for offset in start..buffer.len() {
        let c = buffer[offset];
        let invalid = || Error::HeaderInvalidByte {
            byte: c,
            offset,
        };
        state = match state {
            HeaderState::Name => match c {
                b':' if name_size > 0 => HeaderState::BeforeValue,
                b'\r' if name_size == 0 => HeaderState::CrLfCr,
                c if is_token_char(c) => {
                    if name_size == MAX_HEADER_NAME_SIZE {
                        return Err(Error::HeaderNameTooLong(
                            buffer[name_offset..offset].to_vec()
                        ));
                    }
                    buffer[offset] = c.to_ascii_lowercase();
                    name_size += 1;
                    HeaderState::Name
                },
                _ => return Err(invalid()),
            },
            HeaderState::BeforeValue => match c {
                b' ' | b'\t' => HeaderState::BeforeValue,
                b'\r' | b'\n' => {
                    return Err(Error::HeaderMissingValue(
                        buffer[name_offset..name_offset + name_size].to_vec()
                    ));
                },
                c if is_field_value_char(c) => {
                    value_offset = offset;
                    value_size = 1;
                    HeaderState::Value
                },
                _ => return Err(invalid()),
            },
            HeaderState::Value => match c {
                b'\r' => {
                    headers.push(HeaderView::new(
                        name_offset,
                        name_size,
                        value_offset,
                        value_size,
                    ));
                    name_size = 0;
                    value_size = 0;
                    HeaderState::Cr
                },
                c if is_field_value_char(c) => {
                    if value_size == MAX_HEADER_VALUE_SIZE {
                        return Err(Error::HeaderValueTooLong(
                            buffer[value_offset..offset].to_vec()
                        ));
                    }
                    value_size += 1;
                    HeaderState::Value
                },
                _ => return Err(invalid()),
            },
            HeaderState::Cr => match c {
                b'\n' => {
                    name_offset = offset + 1;
                    HeaderState::Name
                },
                _ => return Err(invalid()),
            },
            HeaderState::CrLfCr => match c {
                b'\n' => HeaderState::CrLfCrLf,
                _ => return Err(invalid()),
            },
            HeaderState::CrLfCrLf => return Ok(offset),
        };
        if state == HeaderState::CrLfCrLf {
            return Ok(offset + 1);
        }
    }
    Err(Error::HeadIncomplete)
}

/// One end of an HTTP/1.x message exchange over a byte stream.
///
/// The connection owns the stream and a fixed receive buffer.  A received
/// head is tokenized in place: headers are handed out as views into the
/// buffer, borrowed from the connection, so they cannot outlive it.
///
/// Sending goes start line, headers, body, end; receiving goes head, body.
/// Calling an operation out of that order fails with
/// [`Error::OutOfSequence`] before anything is written or read.  Once
/// [`close`](#method.close) is called every operation fails with
/// [`Error::Closed`].
pub struct Connection<S> {
    body_remaining: Option<usize>,
    buffer: Box<[u8; BUFFER_CAPACITY]>,
    head_body_offset: usize,
    head_size: usize,
    headers: HeaderTable,
    receive_state: ReceiveState,
    role: Role,
    send_state: SendState,
    // (offset, size) of the three start line fields: method, path and
    // version for a server; version, status code and phrase for a client.
    start_line: [(usize, usize); 3],
    stream: Option<S>,
}

impl<S> Connection<S>
    where S: ByteStream
{
    #[must_use]
    pub fn new(
        stream: S,
        role: Role,
    ) -> Self {
        Self {
            body_remaining: None,
            buffer: Box::new([0; BUFFER_CAPACITY]),
            head_body_offset: 0,
            head_size: 0,
            headers: HeaderTable::default(),
            receive_state: ReceiveState::Idle,
            role,
            send_state: SendState::Idle,
            start_line: [(0, 0); 3],
            stream: Some(stream),
        }
    }

    /// Wrap a stream accepted by a server: requests come in, responses go
    /// out.
    #[must_use]
    pub fn server(stream: S) -> Self {
        Self::new(stream, Role::Server)
    }

    /// Wrap a stream opened by a client: requests go out, responses come
    /// in.
    #[must_use]
    pub fn client(stream: S) -> Self {
        Self::new(stream, Role::Client)
    }

    fn out_of_sequence<T>(
        &self,
        operation: &'static str,
        state: T,
    ) -> Error
        where T: std::fmt::Debug
    {
        log::warn!("{} attempted in state {:?} ({:?} role)", operation, state, self.role);
        Error::OutOfSequence {
            operation,
            state: format!("{:?}", state),
        }
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.stream.is_some() {
            Ok(())
        } else {
            Err(Error::Closed)
        }
    }

    fn send_transition(
        &self,
        operation: &'static str,
        event: SendEvent,
    ) -> Result<SendState, Error> {
        self.ensure_open()?;
        self.send_state.transition(event, self.role)
            .ok_or_else(|| self.out_of_sequence(operation, self.send_state))
    }

    fn require_head(
        &self,
        operation: &'static str,
    ) -> Result<(), Error> {
        self.ensure_open()?;
        if self.receive_state == ReceiveState::Idle {
            Err(self.out_of_sequence(operation, self.receive_state))
        } else {
            Ok(())
        }
    }

    fn write(
        &mut self,
        data: &[u8],
    ) -> Result<(), Error> {
        self.stream.as_mut()
            .ok_or(Error::Closed)?
            .write_all(data)
            .map_err(Error::from)
    }

    fn check_invariants(&self) {
        debug_assert!(!self.body_sent() || self.start_sent());
        debug_assert!(!self.end_sent() || (self.body_sent() && self.start_sent()));
        debug_assert!(!self.body_received() || self.head_received());
        debug_assert!(
            !(self.head_received() && self.role == Role::Server)
                || self.start_line.iter().all(|(_, size)| *size > 0)
        );
        debug_assert!(self.head_body_offset <= self.head_size);
        debug_assert!(self.head_size <= BUFFER_CAPACITY);
    }

    // ===== Receiving =====

    /// Read and tokenize the start line and headers of the next message.
    ///
    /// Returns `Ok(false)` when the stream delivered fewer than
    /// [`MIN_HEAD_SIZE`] bytes before ending, which includes a peer closing
    /// an idle keep-alive connection.  Malformed heads are reported as
    /// errors.  In either case the head is not marked as received.
    pub fn receive_head(&mut self) -> Result<bool, Error> {
        self.ensure_open()?;
        let next_state = self.receive_state.transition(ReceiveEvent::Head)
            .ok_or_else(|| self.out_of_sequence("receive_head", self.receive_state))?;
        let stream = self.stream.as_mut().ok_or(Error::Closed)?;
        // Only the last three bytes of earlier fills can start a terminator
        // completed by a later one.
        let mut scan_start = 0;
        while
            self.head_size < BUFFER_CAPACITY
            && find_head_end(&self.buffer[scan_start..self.head_size]).is_none()
        {
            let received = stream.read(&mut self.buffer[self.head_size..])?;
            if received == 0 {
                break;
            }
            scan_start = self.head_size.saturating_sub(3);
            self.head_size += received;
        }
        if self.head_size < MIN_HEAD_SIZE {
            log::trace!("stream ended after {} bytes of head", self.head_size);
            return Ok(false);
        }
        match self.parse_head() {
            Ok((head_end, body_remaining)) => {
                self.head_body_offset = head_end;
                self.body_remaining = body_remaining;
                self.receive_state = if body_remaining == Some(0) {
                    ReceiveState::Body
                } else {
                    next_state
                };
                log::trace!(
                    "received head of {} bytes with {} headers",
                    head_end,
                    self.headers.len()
                );
                self.check_invariants();
                Ok(true)
            },
            Err(error) => {
                log::debug!("rejected message head: {}", error);
                self.headers.clear();
                self.start_line = [(0, 0); 3];
                Err(error)
            },
        }
    }

    fn parse_head(&mut self) -> Result<(usize, Option<usize>), Error> {
        let start_line_end = match self.role {
            Role::Server => self.parse_request_line()?,
            Role::Client => self.parse_status_line()?,
        };
        let head_end = tokenize_headers(
            &mut self.buffer[..self.head_size],
            start_line_end,
            &mut self.headers,
        )?;
        // A request without a declared length has no body; a response
        // without one runs until the stream ends.
        let body_remaining = match (self.content_length()?, self.role) {
            (Some(content_length), _) => Some(content_length),
            (None, Role::Server) => Some(0),
            (None, Role::Client) => None,
        };
        Ok((head_end, body_remaining))
    }

    fn parse_request_line(&mut self) -> Result<usize, Error> {
        let buffer = &self.buffer[..self.head_size];
        let invalid = || {
            let line_end = find_crlf(buffer).unwrap_or_else(|| buffer.len());
            Error::StartLineInvalid(buffer[..line_end].to_vec())
        };
        let line_end = find_crlf(buffer).ok_or_else(invalid)?;
        let line = &buffer[..line_end];
        let method_end = line.iter()
            .position(|c| *c == b' ')
            .ok_or_else(invalid)?;
        let path_start = method_end + 1;
        let path_end = line[path_start..].iter()
            .position(|c| *c == b' ')
            .map(|delimiter| path_start + delimiter)
            .ok_or_else(invalid)?;
        let version_start = path_end + 1;
        let fields = [
            (0, method_end),
            (path_start, path_end - path_start),
            (version_start, line_end - version_start),
        ];
        let valid = fields.iter().all(|(offset, size)| {
            *size > 0 && line[*offset..*offset + *size].iter().copied().all(is_visible)
        });
        if !valid {
            return Err(invalid());
        }
        self.start_line = fields;
        Ok(line_end + CRLF.len())
    }

    fn parse_status_line(&mut self) -> Result<usize, Error> {
        let buffer = &self.buffer[..self.head_size];
        let invalid = || {
            let line_end = find_crlf(buffer).unwrap_or_else(|| buffer.len());
            Error::StartLineInvalid(buffer[..line_end].to_vec())
        };
        let line_end = find_crlf(buffer).ok_or_else(invalid)?;
        let code_start = STATUS_LINE_VERSION_SIZE + 1;
        let phrase_start = code_start + 4;
        if line_end < phrase_start {
            return Err(invalid());
        }
        let line = &buffer[..line_end];
        let valid = line[..STATUS_LINE_VERSION_SIZE].iter().copied().all(is_visible)
            && line[STATUS_LINE_VERSION_SIZE] == b' '
            && line[code_start..code_start + 3].iter().all(u8::is_ascii_digit)
            && line[phrase_start - 1] == b' '
            && line[phrase_start..].iter().copied().all(is_field_value_char);
        if !valid {
            return Err(invalid());
        }
        self.start_line = [
            (0, STATUS_LINE_VERSION_SIZE),
            (code_start, 3),
            (phrase_start, line_end - phrase_start),
        ];
        Ok(line_end + CRLF.len())
    }

    /// Receive the next part of the message body into `buf`, returning how
    /// many bytes were placed there.
    ///
    /// Body bytes which arrived along with the head are handed out first,
    /// without reading the stream.  Reads never go past the declared
    /// `Content-Length`, so anything after the body stays in the stream for
    /// the next message.  Zero is returned once the body is complete.
    pub fn receive_body(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize, Error> {
        self.require_head("receive_body")?;
        if self.receive_state == ReceiveState::Body {
            return Ok(0);
        }
        let wanted = match self.body_remaining {
            Some(remaining) => buf.len().min(remaining),
            None => buf.len(),
        };
        if wanted == 0 {
            return Ok(0);
        }
        let buffered = self.head_size - self.head_body_offset;
        let received = if buffered > 0 {
            let amount = wanted.min(buffered);
            let start = self.head_body_offset;
            buf[..amount].copy_from_slice(&self.buffer[start..start + amount]);
            self.head_body_offset += amount;
            amount
        } else {
            let stream = self.stream.as_mut().ok_or(Error::Closed)?;
            stream.read(&mut buf[..wanted])?
        };
        let complete = match &mut self.body_remaining {
            Some(remaining) => {
                if received == 0 {
                    log::debug!("stream ended {} bytes short of the body", remaining);
                    return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
                }
                *remaining -= received;
                *remaining == 0
            },
            None => received == 0,
        };
        if complete {
            if let Some(next_state) = self.receive_state.transition(ReceiveEvent::BodyComplete) {
                self.receive_state = next_state;
            }
            log::trace!("message body complete");
        }
        self.check_invariants();
        Ok(received)
    }

    /// Receive the rest of the body and return it as text.
    pub fn receive_body_to_string(&mut self) -> Result<String, Error> {
        self.require_head("receive_body_to_string")?;
        // The declared length only bounds the first allocation; the body
        // grows as bytes actually arrive.
        let mut body = Vec::with_capacity(
            self.body_remaining.unwrap_or(0).min(BUFFER_CAPACITY)
        );
        let mut chunk = [0; DISMISS_CHUNK_SIZE];
        loop {
            let received = self.receive_body(&mut chunk)?;
            if received == 0 {
                break;
            }
            body.extend(&chunk[..received]);
        }
        String::from_utf8(body)
            .map_err(|error| Error::BodyNotValidText(error.into_bytes()))
    }

    /// Read and throw away the rest of the body, returning how many bytes
    /// were dropped.
    pub fn dismiss_body(&mut self) -> Result<usize, Error> {
        self.require_head("dismiss_body")?;
        let mut chunk = [0; DISMISS_CHUNK_SIZE];
        let mut dismissed = 0;
        while self.receive_state == ReceiveState::Head {
            dismissed += self.receive_body(&mut chunk)?;
        }
        log::trace!("dismissed {} body bytes", dismissed);
        Ok(dismissed)
    }

    /// Value of the `Content-Length` header of the received message, if it
    /// has one.
    pub fn content_length(&self) -> Result<Option<usize>, Error> {
        self.header("content-length")
            .map(|value| {
                let digits = value.trim_end();
                let invalid = || Error::InvalidContentLength(value.into());
                if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                digits.parse().map_err(|_| invalid())
            })
            .transpose()
    }

    /// Get ready to receive the next message on a persistent connection.
    ///
    /// Bytes of the next message which were read along with the current one
    /// are kept.  The current body must have been received or dismissed, and
    /// any message being sent must have been sent through its body.
    pub fn next_message(&mut self) -> Result<(), Error> {
        self.ensure_open()?;
        if self.receive_state != ReceiveState::Body {
            return Err(self.out_of_sequence("next_message", self.receive_state));
        }
        if !matches!(self.send_state, SendState::Idle | SendState::Body) {
            return Err(self.out_of_sequence("next_message", self.send_state));
        }
        let carried = self.head_size - self.head_body_offset;
        self.buffer.copy_within(self.head_body_offset..self.head_size, 0);
        self.head_size = carried;
        self.head_body_offset = 0;
        self.body_remaining = None;
        self.headers.clear();
        self.start_line = [(0, 0); 3];
        self.receive_state = ReceiveState::Idle;
        self.send_state = SendState::Idle;
        log::trace!("ready for next message with {} bytes carried over", carried);
        self.check_invariants();
        Ok(())
    }

    fn start_line_field(
        &self,
        index: usize,
    ) -> Option<&str> {
        if self.receive_state == ReceiveState::Idle {
            return None;
        }
        let (offset, size) = self.start_line[index];
        self.buffer.get(offset..offset + size)
            .and_then(|field| std::str::from_utf8(field).ok())
    }

    /// Method of the received request.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        match self.role {
            Role::Server => self.start_line_field(0),
            Role::Client => None,
        }
    }

    /// Target of the received request.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self.role {
            Role::Server => self.start_line_field(1),
            Role::Client => None,
        }
    }

    /// Protocol version of the received message.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self.role {
            Role::Server => self.start_line_field(2),
            Role::Client => self.start_line_field(0),
        }
    }

    /// Status code of the received response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self.role {
            Role::Server => None,
            Role::Client => self.start_line_field(1)
                .and_then(|code| code.parse().ok()),
        }
    }

    /// Reason phrase of the received response.
    #[must_use]
    pub fn status_phrase(&self) -> Option<&str> {
        match self.role {
            Role::Server => None,
            Role::Client => self.start_line_field(2),
        }
    }

    /// Value of the first received header with the given name, ignoring
    /// case.
    #[must_use]
    pub fn header(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.header_at(name, 0).map(|(_, header)| header.value())
    }

    /// Find the first received header at index `offset` or later with the
    /// given name, ignoring case, returning its index along with it.  Pass
    /// one past the returned index to find the next header with the same
    /// name.
    #[must_use]
    pub fn header_at(
        &self,
        name: &str,
        offset: usize,
    ) -> Option<(usize, Header<'_>)> {
        self.headers.find(&self.buffer[..self.head_size], name, offset)
    }

    /// Received headers, in the order they appeared on the wire.
    pub fn headers(&self) -> impl Iterator<Item = Header<'_>> {
        self.headers.iter(&self.buffer[..self.head_size])
    }

    // ===== Sending =====

    /// Send the start line.  With `skip_headers` set, the blank line which
    /// ends the (empty) header block is sent too, and the next thing to
    /// send is the body.
    pub fn send_start(
        &mut self,
        start_line: StartLine<'_>,
        skip_headers: bool,
    ) -> Result<(), Error> {
        let event = if skip_headers {
            SendEvent::StartWithoutHeaders
        } else {
            SendEvent::Start
        };
        let next_state = self.send_transition("send_start", event)?;
        let mut output = match (self.role, start_line) {
            (Role::Client, StartLine::Request { method, target }) => {
                let target_valid = !target.is_empty()
                    && target.bytes().all(is_visible);
                if !is_token(method) || !target_valid {
                    return Err(Error::StartLineInvalid(
                        format!("{} {}", method, target).into_bytes()
                    ));
                }
                format!("{} {} {}{}", method, target, HTTP_VERSION, CRLF)
            },
            (Role::Server, StartLine::Status { code, phrase }) => {
                let phrase_valid = phrase.bytes().all(is_field_value_char);
                if !(100..=999).contains(&code) || !phrase_valid {
                    return Err(Error::StartLineInvalid(
                        format!("{} {}", code, phrase).into_bytes()
                    ));
                }
                format!("{} {} {}{}", HTTP_VERSION, code, phrase, CRLF)
            },
            _ => return Err(self.out_of_sequence("send_start", self.role)),
        };
        if skip_headers {
            output.push_str(CRLF);
        }
        self.write(output.as_bytes())?;
        self.send_state = next_state;
        self.check_invariants();
        Ok(())
    }

    pub fn send_header(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), Error> {
        let next_state = self.send_transition("send_header", SendEvent::Header)?;
        if !is_token(name) {
            return Err(Error::HeaderNameInvalid(name.into()));
        }
        if !value.bytes().all(is_field_value_char) {
            return Err(Error::HeaderValueInvalid(value.into()));
        }
        self.write(format!("{}: {}{}", name, value, CRLF).as_bytes())?;
        self.send_state = next_state;
        self.check_invariants();
        Ok(())
    }

    /// Send part of the body.  The first call also sends the blank line
    /// which ends the headers, if that has not happened yet.
    pub fn send_body(
        &mut self,
        data: &[u8],
    ) -> Result<(), Error> {
        let next_state = self.send_transition("send_body", SendEvent::Body)?;
        if self.send_state == SendState::Headers {
            self.write(CRLF.as_bytes())?;
            self.send_state = SendState::Body;
        }
        if !data.is_empty() {
            self.write(data)?;
        }
        self.send_state = next_state;
        self.check_invariants();
        Ok(())
    }

    /// Finish the message by shutting down the send direction of the
    /// stream.  The receive direction stays open.
    pub fn send_end(&mut self) -> Result<(), Error> {
        let next_state = self.send_transition("send_end", SendEvent::End)?;
        if self.send_state == SendState::Headers {
            self.write(CRLF.as_bytes())?;
            self.send_state = SendState::Body;
        }
        self.stream.as_mut()
            .ok_or(Error::Closed)?
            .shutdown_send()?;
        self.send_state = next_state;
        log::trace!("send direction shut down");
        self.check_invariants();
        Ok(())
    }

    // ===== Lifecycle =====

    /// Release the stream.  Every later operation fails with
    /// [`Error::Closed`].
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            log::trace!("connection closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    #[must_use]
    pub fn send_state(&self) -> SendState {
        self.send_state
    }

    #[must_use]
    pub fn receive_state(&self) -> ReceiveState {
        self.receive_state
    }

    #[must_use]
    pub fn start_sent(&self) -> bool {
        self.send_state != SendState::Idle
    }

    #[must_use]
    pub fn body_sent(&self) -> bool {
        matches!(self.send_state, SendState::Body | SendState::Ended)
    }

    #[must_use]
    pub fn end_sent(&self) -> bool {
        self.send_state == SendState::Ended
    }

    #[must_use]
    pub fn head_received(&self) -> bool {
        self.receive_state != ReceiveState::Idle
    }

    #[must_use]
    pub fn body_received(&self) -> bool {
        self.receive_state == ReceiveState::Body
    }
}
