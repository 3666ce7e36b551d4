use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Write};

/// Gzip-compresses `body` in memory.
pub fn gzip(body: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(body.len() / 2), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn output_is_a_gzip_member_of_the_input() {
        let body = b"hello hello hello hello".repeat(50);
        let compressed = gzip(&body).unwrap();

        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
        assert!(compressed.len() < body.len());

        let mut decoded = Vec::new();
        GzDecoder::new(&compressed[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn empty_body_still_produces_valid_stream() {
        let compressed = gzip(b"").unwrap();
        let mut decoded = Vec::new();
        GzDecoder::new(&compressed[..]).read_to_end(&mut decoded).unwrap();
        assert!(decoded.is_empty());
    }
}
