//! RGB565 查找表导出
//!
//! 256 个字节交换后的 RGB565 值, 按小端写出; 落盘字节即 SPI 显示屏要求的大端像素顺序

use crate::error::Result;
use crate::image::Palette;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

pub fn encode<W: Write>(palette: &Palette, mut writer: W) -> Result<()> {
    for value in palette.rgb565_table(true) {
        writer.write_u16::<LittleEndian>(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GLOWBOW;
    use crate::image::palette::GLOWBOW_RGB565;
    use byteorder::{BigEndian, ReadBytesExt};
    use std::io::Cursor;

    #[test]
    fn test_encode_table() {
        let mut buf = Vec::new();
        encode(&GLOWBOW, &mut buf).unwrap();
        assert_eq!(buf.len(), 512);
        // (16,16,16) -> 0x1082, 大端落盘
        assert_eq!(&buf[..2], &[0x10, 0x82]);

        let mut cursor = Cursor::new(buf);
        for expected in GLOWBOW_RGB565 {
            assert_eq!(cursor.read_u16::<BigEndian>().unwrap(), expected);
        }
    }
}
