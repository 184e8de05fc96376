use std::io::Write;

use crate::base::*;

use super::Sink;

/// Serializes one complete indirect object definition, `obj` through `endobj`.
///
/// Every indirect object in the file goes through here, including the cross-reference stream.
/// Non-stream bodies are the object's `Display` rendering; streams write their dictionary
/// followed by the raw data bytes bracketed by the `stream`/`endstream` keywords.
pub fn write_indirect<W: Write>(sink: &mut Sink<W>, objref: &ObjRef, obj: &Object) -> Result<(), Error> {
    writeln!(sink, "{objref} obj")?;
    match obj {
        Object::Stream(stm) => {
            writeln!(sink, "{}", stm.dict)?;
            sink.write_all(b"stream\n")?;
            sink.write_all(&stm.data)?;
            sink.write_all(b"\nendstream")?;
        },
        obj => write!(sink, "{obj}")?
    }
    sink.write_all(b"\nendobj\n")?;
    Ok(())
}
