use super::*;

/// A PDF stream object with its data held in memory.
///
/// The writer only ever deals with detached data, so unlike dictionaries the data is owned
/// directly. `/Length` is maintained by the constructor; the other dictionary entries are the
/// caller's business.
#[derive(Debug, PartialEq, Clone)]
pub struct Stream {
    /// The stream dictionary.
    pub dict: Dict,
    /// The raw data bytes, exactly as they will appear between `stream` and `endstream`.
    pub data: Vec<u8>
}

impl Stream {
    /// Wraps `data` in a stream carrying `dict`, setting its `/Length` to the data length.
    pub fn new(mut dict: Dict, data: Vec<u8>) -> Stream {
        dict.set(b"Length", Object::Number(Number::Int(data.len() as i64)));
        Stream { dict, data }
    }
}
