use crate::base::*;
use crate::base::types::*;

/// The trailer parameters, collected field by field over the course of a write and rendered
/// into a dictionary exactly once.
///
/// In the classical encoding this becomes the `trailer` dictionary; in the stream encoding it
/// doubles as the cross-reference stream's dictionary, which is where the extra `/Type`, `/W`
/// and `/Index` entries come from.
#[derive(Debug, Clone)]
pub struct Trailer {
    /// Reference to the document catalog.
    pub root: ObjRef,
    /// Reference to the information dictionary, if the document has one.
    pub info: Option<ObjRef>,
    /// One more than the highest object number in the final entry set.
    pub size: ObjNum,
    /// `(first, count)` subsection bounds, stream encoding only. `None` stands for the whole
    /// ID space, `[0, size]`.
    pub index: Option<Vec<(ObjNum, usize)>>,
    /// Byte widths of the three binary fields, stream encoding only.
    pub widths: Option<[usize; 3]>
}

impl Trailer {
    pub fn new(root: ObjRef) -> Trailer {
        Trailer { root, info: None, size: 0, index: None, widths: None }
    }

    pub(crate) fn to_dict(&self, tpe: XRefType) -> Dict {
        let mut pairs = Vec::new();
        if tpe == XRefType::Stream {
            pairs.push((Name::from(b"Type"), Object::new_name(b"XRef")));
        }
        pairs.push((Name::from(b"Size"), Object::Number(Number::Int(self.size as i64))));
        if let Some(widths) = self.widths {
            pairs.push((Name::from(b"W"), Object::Array(widths.iter()
                .map(|&width| Object::Number(Number::Int(width as i64)))
                .collect())));
        }
        if let Some(index) = &self.index {
            pairs.push((Name::from(b"Index"), Object::Array(index.iter()
                .flat_map(|&(first, count)| [
                    Object::Number(Number::Int(first as i64)),
                    Object::Number(Number::Int(count as i64)),
                ])
                .collect())));
        }
        pairs.push((Name::from(b"Root"), Object::Ref(self.root)));
        if let Some(info) = self.info {
            pairs.push((Name::from(b"Info"), Object::Ref(info)));
        }
        Dict::from(pairs)
    }
}
