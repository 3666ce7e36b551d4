use crate::http::compression;
use bytes::{BufMut, Bytes, BytesMut};
use std::io::{self, Write};
use tracing::{debug, warn};

const CRLF: &[u8] = b"\r\n";

/// Largest chunk written on the wire; longer bodies are split.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Writes a header block followed by a chunked transfer-coded body.
#[derive(Debug)]
pub struct ChunkedEncoder<W: Write> {
    inner: W,
    buf: BytesMut,
}

impl<W: Write> ChunkedEncoder<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(CHUNK_SIZE + 16),
        }
    }

    /// Buffers one header line; the block goes out with [`Self::end_headers`].
    pub fn write_header_line(&mut self, line: &str) {
        self.buf.put_slice(line.as_bytes());
        self.buf.put_slice(CRLF);
    }

    /// Terminates the header block with an empty line.
    pub fn end_headers(&mut self) -> io::Result<()> {
        self.buf.put_slice(CRLF);
        self.flush_buf()
    }

    /// Frames `data` as one or more chunks. Empty input writes nothing, since
    /// a zero-size chunk would end the body.
    pub fn write_body(&mut self, data: &[u8]) -> io::Result<()> {
        for chunk in data.chunks(CHUNK_SIZE) {
            self.buf.put_slice(format!("{:X}", chunk.len()).as_bytes());
            self.buf.put_slice(CRLF);
            self.buf.put_slice(chunk);
            self.buf.put_slice(CRLF);
            self.flush_buf()?;
        }
        Ok(())
    }

    /// Writes the last-chunk marker, flushes, and hands back the stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.buf.put_slice(b"0\r\n\r\n");
        self.flush_buf()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.buf)?;
        self.buf.clear();
        Ok(())
    }
}

/// Sends a complete response: optional gzip, `Transfer-Encoding: chunked`,
/// the header block, the body chunks and the terminating chunk.
pub fn send<W: Write>(
    writer: W,
    lines: Vec<String>,
    body: Option<Bytes>,
    gzip: bool,
) -> io::Result<W> {
    let (lines, body) = if gzip {
        compress_body(lines, body, compression::gzip)
    } else {
        (lines, body)
    };

    let mut encoder = ChunkedEncoder::new(writer);
    for line in lines
        .iter()
        .map(String::as_str)
        .chain(["Transfer-Encoding: chunked"])
    {
        debug!("{}", line);
        encoder.write_header_line(line);
    }
    encoder.end_headers()?;

    if let Some(body) = body {
        encoder.write_body(&body)?;
    }
    encoder.finish()
}

/// A compression failure leaves the body and headers untouched.
fn compress_body<F>(
    mut lines: Vec<String>,
    body: Option<Bytes>,
    compress: F,
) -> (Vec<String>, Option<Bytes>)
where
    F: FnOnce(&[u8]) -> io::Result<Vec<u8>>,
{
    let Some(body) = body else {
        return (lines, None);
    };

    match compress(&body) {
        Ok(compressed) => {
            lines.push("Content-encoding: gzip".to_string());
            (lines, Some(Bytes::from(compressed)))
        }
        Err(e) => {
            warn!(error = %e, "gzip failed, sending body uncompressed");
            (lines, Some(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn frames_headers_and_single_chunk() {
        let out = send(Vec::new(), lines(&["HTTP/1.1 200 OK"]), Some(Bytes::from_static(b"hello")), false)
            .unwrap();
        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nhello\r\n0\r\n\r\n"
        );
    }

    #[test]
    fn header_lines_are_held_until_block_ends() {
        let mut out = Vec::new();
        let mut encoder = ChunkedEncoder::new(&mut out);
        encoder.write_header_line("HTTP/1.1 200 OK");
        encoder.write_header_line("Connection: close");
        encoder.end_headers().unwrap();
        encoder.finish().unwrap();

        assert_eq!(out, b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n0\r\n\r\n");
    }

    #[test]
    fn missing_body_still_terminates() {
        let out = send(Vec::new(), lines(&["HTTP/1.1 200 OK"]), None, true).unwrap();
        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n0\r\n\r\n"
        );
    }

    #[test]
    fn empty_body_writes_only_terminator() {
        let out = send(Vec::new(), Vec::new(), Some(Bytes::new()), false).unwrap();
        assert_eq!(out, b"Transfer-Encoding: chunked\r\n\r\n0\r\n\r\n");
    }

    #[test]
    fn long_body_is_split_with_hex_sizes() {
        let body = vec![b'a'; CHUNK_SIZE + 10];
        let out = send(Vec::new(), Vec::new(), Some(Bytes::from(body)), false).unwrap();

        let head = b"Transfer-Encoding: chunked\r\n\r\n2000\r\n";
        assert!(out.starts_with(head));
        let rest = &out[head.len() + CHUNK_SIZE..];
        assert_eq!(rest, b"\r\nA\r\naaaaaaaaaa\r\n0\r\n\r\n");
    }

    #[test]
    fn gzip_adds_header_before_transfer_encoding() {
        let out = send(
            Vec::new(),
            lines(&["HTTP/1.1 200 OK"]),
            Some(Bytes::from_static(b"compress me")),
            true,
        )
        .unwrap();

        let head = b"HTTP/1.1 200 OK\r\nContent-encoding: gzip\r\nTransfer-Encoding: chunked\r\n\r\n";
        assert!(out.starts_with(head));

        let framed = &out[head.len()..];
        let size_end = framed.windows(2).position(|w| w == CRLF).unwrap();
        let size = usize::from_str_radix(std::str::from_utf8(&framed[..size_end]).unwrap(), 16).unwrap();
        let data = &framed[size_end + 2..size_end + 2 + size];

        let mut decoded = Vec::new();
        GzDecoder::new(data).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"compress me");
        assert!(out.ends_with(b"\r\n0\r\n\r\n"));
    }

    #[test]
    fn compression_failure_falls_back_to_plain_body() {
        let (lines, body) = compress_body(
            lines(&["HTTP/1.1 200 OK"]),
            Some(Bytes::from_static(b"plain")),
            |_| Err(io::Error::other("no space")),
        );
        assert_eq!(lines, ["HTTP/1.1 200 OK"]);
        assert_eq!(body.unwrap().as_ref(), b"plain");
    }
}
