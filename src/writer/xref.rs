use std::io::Write;

use crate::base::*;
use crate::base::types::*;

use super::{Sink, Trailer, write_indirect};

/// Collects the objects of a document and writes them out along with the cross-reference
/// section locating them.
///
/// Insertion order determines write order and thereby every byte offset in the file, so it is
/// part of the contract. The table accumulates one entry per object as it writes; [`output()`]
/// consumes the table, making the single-pass lifecycle explicit (a second pass would re-walk
/// the object set and duplicate every entry).
///
/// [`output()`]: XRefTable::output
pub struct XRefTable {
    objects: Vec<(ObjRef, Object)>,
    entries: Vec<XRefEntry>,
    trailer: Trailer
}

impl XRefTable {
    /// Creates a table for a document whose catalog is `root`.
    pub fn new(root: ObjRef) -> XRefTable {
        XRefTable { objects: Vec::new(), entries: Vec::new(), trailer: Trailer::new(root) }
    }

    /// Schedules an object for output at the next free position.
    ///
    /// Object number 0 is reserved for the head of the free list and refused, as is a number
    /// already scheduled.
    pub fn add(&mut self, objref: ObjRef, obj: Object) -> Result<(), Error> {
        if objref.num == 0 {
            return Err(Error::Encode("object number 0 is reserved for the free list head"));
        }
        if self.objects.iter().any(|(oref, _obj)| oref.num == objref.num) {
            return Err(Error::Encode("duplicate object number"));
        }
        self.objects.push((objref, obj));
        Ok(())
    }

    /// References the information dictionary from the trailer.
    pub fn set_info(&mut self, info: ObjRef) {
        self.trailer.info = Some(info);
    }

    /// Writes the complete file: header, every object in insertion order, the cross-reference
    /// section in the encoding `version` calls for, and the `startxref` tail.
    ///
    /// The cross-reference section necessarily comes last: its content is the byte offsets the
    /// preceding writes produced, and its own start offset is only known once everything before
    /// it is out.
    pub fn output<W: Write>(mut self, version: (u8, u8), sink: &mut Sink<W>) -> Result<(), Error> {
        Header { version }.write(sink)?;
        if self.objects.is_empty() {
            log::warn!("Writing a document with no objects.");
        }
        let objects = std::mem::take(&mut self.objects);
        let mut prev = None;
        for (objref, obj) in &objects {
            let offset = sink.offset();
            debug_assert!(prev.map_or(true, |prev| offset > prev),
                "sink offset did not advance between objects");
            prev = Some(offset);
            write_indirect(sink, objref, obj)?;
            self.entries.push(XRefEntry {
                num: objref.num,
                record: Record::Used { gen: objref.gen, offset }
            });
        }
        let start = match XRefType::for_version(version) {
            XRefType::Table => self.write_table(sink)?,
            XRefType::Stream => self.write_stream(sink)?,
        };
        write!(sink, "startxref\n{start}\n%%EOF\n")?;
        Ok(())
    }

    /// Classical encoding: the `xref` keyword, fixed-width record blocks, and a `trailer`
    /// dictionary. Returns the offset the section starts at.
    fn write_table<W: Write>(&mut self, sink: &mut Sink<W>) -> Result<Offset, Error> {
        self.entries.sort_unstable_by_key(|entry| entry.num);
        let size = self.entries.last().map(|entry| entry.num + 1).unwrap_or(1);
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(XRefEntry { num: 0, record: Record::default() });
        entries.extend_from_slice(&self.entries);

        let start = sink.offset();
        sink.write_all(b"xref\n")?;
        let mut rest: &[XRefEntry] = &entries;
        for (first, count) in subsections(&entries) {
            writeln!(sink, "{first} {count}")?;
            let (block, tail) = rest.split_at(count);
            rest = tail;
            for entry in block {
                sink.write_all(&entry.text_record()?)?;
                sink.write_all(b"\n")?;
            }
        }
        sink.write_all(b"trailer\n")?;
        self.trailer.size = size;
        writeln!(sink, "{}", self.trailer.to_dict(XRefType::Table))?;
        Ok(start)
    }

    /// Stream encoding: the whole section becomes one more indirect object, self-referentially
    /// listed in its own entry table. Returns the offset the object starts at.
    fn write_stream<W: Write>(&mut self, sink: &mut Sink<W>) -> Result<Offset, Error> {
        let start = sink.offset();
        self.entries.sort_unstable_by_key(|entry| entry.num);
        let stream_num = self.entries.last().map(|entry| entry.num + 1).unwrap_or(1);
        let size = stream_num + 1;
        self.entries.push(XRefEntry {
            num: stream_num,
            record: Record::Used { gen: 0, offset: start }
        });

        // Slot 0 is a fixed all-zero row, not the free-list sentinel of the classical form.
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(XRefEntry { num: 0, record: Record::Free { gen: 0, next: 0 } });
        entries.extend_from_slice(&self.entries);

        self.trailer.size = size;
        let index = subsections(&entries);
        if index != [(0, size as usize)] {
            self.trailer.index = Some(index);
        }
        // The stream's own offset bounds every offset recorded before it, so it determines the
        // field width. See DESIGN.md for the caveat this inherits.
        let widths = [1, byte_width(start), 1];
        self.trailer.widths = Some(widths);

        let row = widths.iter().sum::<usize>();
        let mut data = vec![0u8; entries.len() * row];
        let mut pos = 0;
        for entry in &entries {
            pos = entry.binary_record(&mut data, pos, widths);
        }

        let stm = Stream::new(self.trailer.to_dict(XRefType::Stream), data);
        write_indirect(sink, &ObjRef { num: stream_num, gen: 0 }, &Object::Stream(stm))?;
        Ok(start)
    }
}

/// Splits entries sorted by object number into maximal runs of consecutive numbers, as
/// `(first, count)` pairs.
fn subsections(entries: &[XRefEntry]) -> Vec<(ObjNum, usize)> {
    let mut runs: Vec<(ObjNum, usize)> = Vec::new();
    for entry in entries {
        match runs.last_mut() {
            Some((first, count)) if *first + *count as ObjNum == entry.num => *count += 1,
            _ => runs.push((entry.num, 1))
        }
    }
    runs
}

/// The least number of big-endian bytes that can hold `value`. A zero input is clamped to 1,
/// keeping the logarithm defined for degenerate near-empty files.
fn byte_width(value: Offset) -> usize {
    let bits = Offset::BITS - value.max(1).leading_zeros();
    ((bits + 7) / 8) as usize
}
