use std::io::Write as _;
use std::net::{
    Shutdown,
    TcpStream,
};

/// This is the interface a [`Connection`](struct.Connection.html) needs from
/// the bidirectional byte stream it owns.  Reads and writes block the calling
/// thread.  Closing the stream is done by dropping it.
pub trait ByteStream {
    /// Read at most `buf.len()` bytes into `buf`, returning how many were
    /// read.  Zero means the peer will send nothing more.
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> std::io::Result<usize>;

    /// Write all of `buf`, or fail.
    fn write_all(
        &mut self,
        buf: &[u8],
    ) -> std::io::Result<()>;

    /// Shut down the send direction of the stream, leaving the receive
    /// direction open.
    fn shutdown_send(&mut self) -> std::io::Result<()>;
}

impl ByteStream for TcpStream {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> std::io::Result<usize> {
        std::io::Read::read(self, buf)
    }

    fn write_all(
        &mut self,
        buf: &[u8],
    ) -> std::io::Result<()> {
        std::io::Write::write_all(self, buf)?;
        self.flush()
    }

    fn shutdown_send(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}

#[cfg(unix)]
impl ByteStream for std::os::unix::net::UnixStream {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> std::io::Result<usize> {
        std::io::Read::read(self, buf)
    }

    fn write_all(
        &mut self,
        buf: &[u8],
    ) -> std::io::Result<()> {
        std::io::Write::write_all(self, buf)?;
        self.flush()
    }

    fn shutdown_send(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Write)
    }
}

fn is_valid_ipv4_literal(host: &str) -> bool {
    let octets = host.split('.').collect::<Vec<_>>();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.len() <= 3
                && octet.bytes().all(|c| c.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && *first != b'-'
                && *last != b'-'
                && bytes.iter().all(|c| c.is_ascii_alphanumeric() || *c == b'-')
        },
        _ => false,
    }
}

/// Determine whether the given text is a host name which could be used to
/// open a byte stream: either a dotted IPv4 literal or an RFC 1123 host name
/// made of letters, digits and hyphens.
#[must_use]
pub fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    if host.bytes().all(|c| c.is_ascii_digit() || c == b'.') {
        return is_valid_ipv4_literal(host);
    }
    host.split('.').all(is_valid_label)
}
