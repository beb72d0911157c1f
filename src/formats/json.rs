//! JSON 调色板: `[[r, g, b], ...]`, 每项一行

use crate::error::Result;
use crate::image::{Color, Palette};
use std::io::{Read, Write};

pub fn encode<W: Write>(palette: &Palette, mut writer: W) -> Result<()> {
    writer.write_all(b"[\n")?;
    for (i, color) in palette.iter().enumerate() {
        writer.write_all(b"  ")?;
        serde_json::to_writer(&mut writer, &color)?;
        if i + 1 < palette.entries().len() {
            writer.write_all(b",")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.write_all(b"]\n")?;
    Ok(())
}

pub fn decode<R: Read>(name: &str, reader: R) -> Result<Palette> {
    let colors: Vec<Color> = serde_json::from_reader(reader)?;
    Palette::from_colors(name, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaletteError;
    use crate::image::GLOWBOW;

    #[test]
    fn test_encode_shape() {
        let mut buf = Vec::new();
        encode(&GLOWBOW, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("[\n  [16,16,16],\n  [19,17,18],"));
        assert!(text.ends_with("  [46,46,46]\n]\n"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(256));
    }

    #[test]
    fn test_rejects_out_of_range_component() {
        let text = "[[256, 0, 0]]";
        assert!(matches!(decode("bad", text.as_bytes()), Err(PaletteError::Json(_))));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let text = serde_json::to_string(&vec![[1u8, 2, 3]; 10]).unwrap();
        assert!(matches!(
            decode("bad", text.as_bytes()),
            Err(PaletteError::InvalidLength { expected: 256, actual: 10 })
        ));
    }

    #[test]
    fn test_rejects_one_entry_off() {
        let colors: Vec<Color> = GLOWBOW.iter().collect();

        let short = serde_json::to_string(&colors[..255]).unwrap();
        assert!(matches!(
            decode("short", short.as_bytes()),
            Err(PaletteError::InvalidLength { expected: 256, actual: 255 })
        ));

        let mut long = colors.clone();
        long.push(Color::new(1, 2, 3));
        let long = serde_json::to_string(&long).unwrap();
        assert!(matches!(
            decode("long", long.as_bytes()),
            Err(PaletteError::InvalidLength { expected: 256, actual: 257 })
        ));
    }
}
