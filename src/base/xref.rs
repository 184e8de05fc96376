use std::io::Write;

use super::types::*;
use super::Error;

/// The format in which a cross-reference section appears in a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XRefType {
    /// Classical table (`xref ... trailer << ... >>`)
    Table,
    /// A cross-reference stream (`<< /Type/XRef ... >> stream ... endstream`)
    Stream
}

impl XRefType {
    /// Cross-reference streams require format version 1.5.
    pub fn for_version(version: (u8, u8)) -> XRefType {
        if version >= (1, 5) {
            XRefType::Stream
        } else {
            XRefType::Table
        }
    }
}

/// A single record in a cross-reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    /// An uncompressed object (`n` entry).
    Used {
        /// The generation number.
        gen: ObjGen,
        /// Location of the object in the file (w.r.t. `%PDF`).
        offset: Offset,
    },
    /// An object number marked as free (`f` entry).
    Free {
        /// The generation number to be used if this object number is reused for a new object.
        gen: ObjGen,
        /// The next number in the free object list, or zero if `gen` is 65535 (`u16::MAX`).
        next: ObjNum,
    },
    /// An object stored compressed within an object stream. The generation number of both
    /// the compressed object and the containing stream is zero.
    Compr {
        /// The object number of the object stream.
        num_within: ObjNum,
        /// 0-based order of this compressed object within the object stream.
        index: ObjIndex,
    },
}

impl Default for Record {
    /// Returns the head of the free object list, `Record::Free { gen: 65535, next: 0 }`.
    fn default() -> Self {
        Record::Free { gen: 65535, next: 0 }
    }
}

/// One resolved cross-reference entry: an object number and the record saying where that object
/// lives. Immutable once constructed; an offset is only known after the object has been written
/// out in full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRefEntry {
    pub num: ObjNum,
    pub record: Record
}

impl XRefEntry {
    /// Renders the fixed-width record of the classical table encoding: a 10-digit offset,
    /// a 5-digit generation number and the `n`/`f` marker, space-separated and space-terminated.
    /// The caller appends the line terminator, arriving at the canonical 20 bytes.
    ///
    /// An offset (or free-list link) over 10 decimal digits does not fit the format and is
    /// reported as an [`Error`] rather than written out truncated.
    pub fn text_record(&self) -> Result<[u8; 19], Error> {
        let (field, gen, kind) = match self.record {
            Record::Used { gen, offset } => (offset, gen, 'n'),
            Record::Free { gen, next } => (next, gen, 'f'),
            Record::Compr { .. } =>
                return Err(Error::Encode("compressed entry in a classical xref table")),
        };
        if field > 9_999_999_999 {
            return Err(Error::Encode("offset too large for a classical xref table"));
        }
        let mut buf = [0u8; 19];
        write!(&mut buf[..], "{field:010} {gen:05} {kind} ")
            .map_err(|_| Error::Encode("xref record overflow"))?;
        Ok(buf)
    }

    /// Packs the entry as three big-endian unsigned integers of the given byte widths (type
    /// code, offset-like field, generation-like field), starting at `pos`. Returns the advanced
    /// cursor.
    ///
    /// The caller guarantees the widths are large enough: a value wider than its field is
    /// truncated to the low-order bytes, which matches how undersized `/W` arrays have always
    /// been (mis)handled. A warning is logged when that happens.
    pub fn binary_record(&self, buf: &mut [u8], pos: usize, widths: [usize; 3]) -> usize {
        let (tpe, field1, field2) = match self.record {
            Record::Used { gen, offset } => (1, offset, gen as u64),
            Record::Free { gen, next } => (0, next, gen as u64),
            Record::Compr { num_within, index } => (2, num_within, index as u64),
        };
        let mut pos = pos;
        for (value, width) in [(tpe, widths[0]), (field1, widths[1]), (field2, widths[2])] {
            if width < 8 && value >> (8 * width) != 0 {
                log::warn!("Object {}: truncating {value} to {width} bytes in a cross-reference stream.",
                    self.num);
            }
            for i in (0..width).rev() {
                buf[pos] = (value >> (8 * i)) as u8;
                pos += 1;
            }
        }
        pos
    }

    /// The historical notion of sameness used for deduplication: two entries are "the same"
    /// when they point at the same byte location, regardless of object number, generation or
    /// kind. Deliberately kept apart from [`PartialEq`], which compares all fields; use this
    /// only where the deduplication behavior is actually wanted.
    pub fn same_location(&self, other: &XRefEntry) -> bool {
        self.location() == other.location()
    }

    fn location(&self) -> Offset {
        match self.record {
            Record::Used { offset, .. } => offset,
            Record::Free { next, .. } => next,
            Record::Compr { num_within, .. } => num_within,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_version() {
        assert_eq!(XRefType::for_version((1, 4)), XRefType::Table);
        assert_eq!(XRefType::for_version((1, 5)), XRefType::Stream);
        assert_eq!(XRefType::for_version((1, 7)), XRefType::Stream);
        assert_eq!(XRefType::for_version((2, 0)), XRefType::Stream);
    }

    #[test]
    fn test_text_record() {
        let entry = XRefEntry { num: 3, record: Record::Used { gen: 0, offset: 15 } };
        assert_eq!(&entry.text_record().unwrap(), b"0000000015 00000 n ");

        let entry = XRefEntry { num: 0, record: Record::default() };
        assert_eq!(&entry.text_record().unwrap(), b"0000000000 65535 f ");

        let entry = XRefEntry { num: 1, record: Record::Used { gen: 2, offset: 9_999_999_999 } };
        assert_eq!(&entry.text_record().unwrap(), b"9999999999 00002 n ");

        let entry = XRefEntry { num: 1, record: Record::Used { gen: 0, offset: 10_000_000_000 } };
        assert!(entry.text_record().is_err());

        let entry = XRefEntry { num: 1, record: Record::Compr { num_within: 2, index: 0 } };
        assert!(entry.text_record().is_err());
    }

    #[test]
    fn test_binary_record() {
        let mut buf = [0xFFu8; 8];
        let entry = XRefEntry { num: 1, record: Record::Used { gen: 0, offset: 0x0102 } };
        let pos = entry.binary_record(&mut buf, 0, [1, 2, 1]);
        assert_eq!(pos, 4);
        assert_eq!(buf[..4], [1, 0x01, 0x02, 0]);

        let entry = XRefEntry { num: 5, record: Record::Compr { num_within: 7, index: 3 } };
        let pos = entry.binary_record(&mut buf, pos, [1, 2, 1]);
        assert_eq!(pos, 8);
        assert_eq!(buf[4..], [2, 0, 7, 3]);

        // truncation keeps the low-order bytes
        let entry = XRefEntry { num: 1, record: Record::Used { gen: 0, offset: 0x123456 } };
        entry.binary_record(&mut buf, 0, [1, 2, 1]);
        assert_eq!(buf[..4], [1, 0x34, 0x56, 0]);
    }

    #[test]
    fn test_same_location() {
        let fst = XRefEntry { num: 1, record: Record::Used { gen: 0, offset: 40 } };
        let snd = XRefEntry { num: 2, record: Record::Used { gen: 1, offset: 40 } };
        let trd = XRefEntry { num: 1, record: Record::Used { gen: 0, offset: 41 } };
        assert!(fst.same_location(&snd));
        assert!(!fst.same_location(&trd));
        assert_ne!(fst, snd);
    }
}
