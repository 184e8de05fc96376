use std::io::Write;

use super::Error;

/// Marks the file as 8-bit data for transports sniffing the first kilobyte. Required to follow
/// the version banner whenever any stream carries binary content.
const BINARY_COMMENT: [u8; 8] = [0x25, 0xC2, 0xA5, 0xC2, 0xB1, 0xC3, 0xAB, 0x0A];

/// The file header: a version banner plus the fixed binary-detection comment.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    /// Version (major, minor).
    pub version: (u8, u8)
}

impl Header {
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        let (major, minor) = self.version;
        writeln!(w, "%PDF-{major}.{minor}")?;
        w.write_all(&BINARY_COMMENT)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write() {
        let mut out = Vec::new();
        Header { version: (1, 7) }.write(&mut out).unwrap();
        assert_eq!(out, b"%PDF-1.7\n%\xC2\xA5\xC2\xB1\xC3\xAB\n");
        assert_eq!(out.len(), 9 + 8);
    }
}
