mod flate;
mod asciihex;

use crate::base::*;

/// Supported PDF filters, in the encoding direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// `/FlateDecode`
    Flate,
    /// `/ASCIIHexDecode`
    AsciiHex,
}

impl Filter {
    /// The name under which a reader will look this filter up in `/Filter`.
    pub fn name(&self) -> Name {
        match self {
            Filter::Flate => Name::from(b"FlateDecode"),
            Filter::AsciiHex => Name::from(b"ASCIIHexDecode"),
        }
    }

    fn encode(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        match self {
            Filter::Flate => flate::encode(data),
            Filter::AsciiHex => Ok(asciihex::encode(data)),
        }
    }
}

/// Passes `data` through `filters` in the given order and wraps the result in a [`Stream`]
/// carrying `dict`, with `/Filter` (and `/Length`) filled in.
///
/// The `/Filter` value lists the filters in decoding order, i.e. the reverse of the order they
/// were applied in here.
pub fn make_stream(dict: Dict, data: &[u8], filters: &[Filter]) -> Result<Stream, Error> {
    let mut data = data.to_vec();
    for filter in filters {
        data = filter.encode(&data)?;
    }
    let mut dict = dict;
    match filters {
        [] => (),
        &[filter] => dict.set(b"Filter", Object::Name(filter.name())),
        filters => dict.set(b"Filter", Object::Array(filters.iter().rev()
            .map(|filter| Object::Name(filter.name()))
            .collect())),
    }
    Ok(Stream::new(dict, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_stream() {
        let stm = make_stream(Dict::default(), b"plain", &[]).unwrap();
        assert_eq!(stm.dict.lookup(b"Filter"), &Object::Null);
        assert_eq!(stm.data, b"plain");

        let stm = make_stream(Dict::default(), b"test", &[Filter::AsciiHex]).unwrap();
        assert_eq!(stm.dict.lookup(b"Filter"), &Object::new_name(b"ASCIIHexDecode"));
        assert_eq!(stm.data, b"74657374>");
        assert_eq!(stm.dict.lookup(b"Length"), &Object::Number(Number::Int(9)));

        let stm = make_stream(Dict::default(), b"test", &[Filter::Flate, Filter::AsciiHex]).unwrap();
        assert_eq!(stm.dict.lookup(b"Filter"), &Object::Array(vec![
            Object::new_name(b"ASCIIHexDecode"),
            Object::new_name(b"FlateDecode"),
        ]));
    }
}
