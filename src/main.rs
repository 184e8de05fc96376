use pdfwrite::base::*;
use pdfwrite::codecs::{self, Filter};
use pdfwrite::writer::{Sink, XRefTable};

use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), pdfwrite::Error> {
    stderrlog::new()
        .verbosity(log::Level::Warn)
        .init()
        .unwrap();

    let fname = std::env::args().nth(1).unwrap_or("hello.pdf".into());
    let version = std::env::args().nth(2)
        .and_then(|arg| {
            let (major, minor) = arg.split_once('.')?;
            Some((major.parse().ok()?, minor.parse().ok()?))
        })
        .unwrap_or((1, 7));

    let mut table = XRefTable::new(ObjRef { num: 1, gen: 0 });
    table.add(ObjRef { num: 1, gen: 0 }, Object::Dict(Dict::from(vec![
        (Name::from(b"Type"), Object::new_name(b"Catalog")),
        (Name::from(b"Pages"), Object::Ref(ObjRef { num: 2, gen: 0 })),
    ])))?;
    table.add(ObjRef { num: 2, gen: 0 }, Object::Dict(Dict::from(vec![
        (Name::from(b"Type"), Object::new_name(b"Pages")),
        (Name::from(b"Kids"), Object::Array(vec![Object::Ref(ObjRef { num: 3, gen: 0 })])),
        (Name::from(b"Count"), Object::Number(Number::Int(1))),
    ])))?;
    table.add(ObjRef { num: 3, gen: 0 }, Object::Dict(Dict::from(vec![
        (Name::from(b"Type"), Object::new_name(b"Page")),
        (Name::from(b"Parent"), Object::Ref(ObjRef { num: 2, gen: 0 })),
        (Name::from(b"MediaBox"), Object::Array([0, 0, 595, 842].iter()
            .map(|&x| Object::Number(Number::Int(x)))
            .collect())),
        (Name::from(b"Resources"), Object::Dict(Dict::from(vec![
            (Name::from(b"Font"), Object::Dict(Dict::from(vec![
                (Name::from(b"F1"), Object::Ref(ObjRef { num: 5, gen: 0 })),
            ]))),
        ]))),
        (Name::from(b"Contents"), Object::Ref(ObjRef { num: 4, gen: 0 })),
    ])))?;
    let content = b"BT /F1 24 Tf 72 720 Td (Hello from pdfwrite!) Tj ET";
    table.add(ObjRef { num: 4, gen: 0 },
        Object::Stream(codecs::make_stream(Dict::default(), content, &[Filter::Flate])?))?;
    table.add(ObjRef { num: 5, gen: 0 }, Object::Dict(Dict::from(vec![
        (Name::from(b"Type"), Object::new_name(b"Font")),
        (Name::from(b"Subtype"), Object::new_name(b"Type1")),
        (Name::from(b"BaseFont"), Object::new_name(b"Helvetica")),
    ])))?;

    let mut sink = Sink::new(BufWriter::new(File::create(&fname)?));
    table.output(version, &mut sink)?;
    sink.flush()?;

    Ok(())
}
