use std::io::{self, Write};

use crate::base::types::*;

/// A byte sink counting everything written through it.
///
/// Offset bookkeeping across the object graph relies on one property only: the cursor advances
/// monotonically with every write and is never rewound. [`Sink::offset()`] therefore reports the
/// offset the next written byte will land at.
pub struct Sink<W: Write> {
    inner: W,
    offset: Offset
}

impl<W: Write> Sink<W> {
    pub fn new(inner: W) -> Sink<W> {
        Sink { inner, offset: 0 }
    }

    /// The number of bytes written so far, i.e. the file offset of the next byte.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written as Offset;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let mut sink = Sink::new(Vec::new());
        assert_eq!(sink.offset(), 0);
        sink.write_all(b"%PDF-1.7\n").unwrap();
        assert_eq!(sink.offset(), 9);
        write!(sink, "{} 0 obj", 12).unwrap();
        assert_eq!(sink.offset(), 17);
        assert_eq!(sink.into_inner(), b"%PDF-1.7\n12 0 obj");
    }
}
