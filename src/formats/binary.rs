//! 二进制调色板 (768 字节, R,G,B 交错)

use crate::error::Result;
use crate::image::Palette;
use std::io::{Read, Write};

pub fn encode<W: Write>(palette: &Palette, mut writer: W) -> Result<()> {
    writer.write_all(&palette.to_bytes())?;
    Ok(())
}

pub fn decode<R: Read>(name: &str, mut reader: R) -> Result<Palette> {
    let mut bytes = Vec::with_capacity(768);
    reader.read_to_end(&mut bytes)?;
    Palette::from_bytes(name, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use crate::image::GLOWBOW;

    #[test]
    fn test_layout() {
        let mut buf = Vec::new();
        encode(&GLOWBOW, &mut buf).unwrap();
        assert_eq!(buf.len(), 768);
        assert_eq!(&buf[765..], &[46, 46, 46]);
    }

    #[test]
    fn test_truncated() {
        let buf = vec![0u8; 300];
        assert!(matches!(
            decode("short", &buf[..]),
            Err(PaletteError::InvalidLength { expected: 256, actual: 100 })
        ));
    }

    #[test]
    fn test_trailing_byte() {
        let buf = [GLOWBOW.to_bytes(), vec![0]].concat();
        assert_eq!(buf.len(), 769);
        assert!(matches!(decode("long", &buf[..]), Err(PaletteError::Parse(_))));
    }
}
