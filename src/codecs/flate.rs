use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::base::Error;

pub fn encode(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use flate2::bufread::ZlibDecoder;

    #[test]
    fn test_roundtrip() {
        let input = b"BT /F1 12 Tf 72 720 Td (Hello) Tj ET".repeat(8);
        let encoded = encode(&input).unwrap();
        assert!(encoded.len() < input.len());
        let mut decoded = Vec::new();
        ZlibDecoder::new(&encoded[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, input);
    }
}
