//! 索引 PNG 色板: 16x16 像素, 像素 i 的索引为 i, 颜色存在 PLTE 块中

use crate::error::{PaletteError, Result};
use crate::image::{Palette, render};
use std::io::{Cursor, Read, Write};

const SWATCH_SIZE: u32 = 16;

pub fn encode<W: Write>(palette: &Palette, writer: W) -> Result<()> {
    let indices: Vec<u8> = (0..=255u8).collect();
    render::write_indexed_png(&indices, SWATCH_SIZE, SWATCH_SIZE, palette, writer)
}

/// 只读取 PLTE 块, 不解码像素数据
pub fn decode<R: Read>(name: &str, mut reader: R) -> Result<Palette> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let decoder = png::Decoder::new(Cursor::new(data));
    let png_reader = decoder.read_info()?;
    let info = png_reader.info();

    if info.color_type != png::ColorType::Indexed {
        return Err(PaletteError::Parse(format!(
            "PNG 不是索引图像: {:?}",
            info.color_type
        )));
    }

    let plte = info
        .palette
        .as_ref()
        .ok_or_else(|| PaletteError::Parse("PNG 缺少 PLTE 块".to_string()))?;

    Palette::from_bytes(name, plte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GLOWBOW;

    #[test]
    fn test_swatch_pixels() {
        let mut buf = Vec::new();
        encode(&GLOWBOW, &mut buf).unwrap();

        let image = image::load_from_memory(&buf).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.get_pixel(0, 0).0, [16, 16, 16]);
        assert_eq!(image.get_pixel(1, 0).0, [19, 17, 18]);
        assert_eq!(image.get_pixel(15, 15).0, [46, 46, 46]);
    }

    #[test]
    fn test_rejects_rgb_png() {
        let rgb = image::RgbImage::new(4, 4);
        let mut buf = Cursor::new(Vec::new());
        rgb.write_to(&mut buf, image::ImageFormat::Png).unwrap();

        assert!(matches!(
            decode("rgb", Cursor::new(buf.into_inner())),
            Err(PaletteError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_short_plte() {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 4, 4);
            encoder.set_color(png::ColorType::Indexed);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_palette(GLOWBOW.to_bytes()[..16 * 3].to_vec());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0u8; 16]).unwrap();
            writer.finish().unwrap();
        }

        assert!(matches!(
            decode("short", Cursor::new(buf)),
            Err(PaletteError::InvalidLength { expected: 256, actual: 16 })
        ));
    }
}
