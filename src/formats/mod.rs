//! 调色板交换格式
//!
//! 支持的格式：
//! - 二进制 (.pal/.bin): 768 字节, 每项 R,G,B
//! - CSV (.csv): 每行 `r,g,b`
//! - JSON (.json): `[[r,g,b], ...]`
//! - PNG (.png): 16x16 索引图, 像素 i 对应索引 i
//! - RGB565 (.565): 256 个字节交换后的 RGB565 值, 小端写出, 只能导出

pub mod binary;
pub mod csv;
pub mod json;
pub mod png_swatch;
pub mod rgb565;

use crate::error::{PaletteError, Result};
use crate::image::Palette;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// 调色板文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// 二进制 RGB (.pal/.bin)
    Binary,
    /// 逗号分隔文本 (.csv)
    Csv,
    /// JSON 数组 (.json)
    Json,
    /// 索引 PNG 色板图 (.png)
    Png,
    /// RGB565 查找表 (.565), 只能导出
    Rgb565,
}

impl PaletteFormat {
    pub const ALL: [PaletteFormat; 5] = [
        PaletteFormat::Binary,
        PaletteFormat::Csv,
        PaletteFormat::Json,
        PaletteFormat::Png,
        PaletteFormat::Rgb565,
    ];

    /// 从文件扩展名识别格式 (带或不带前导点, 不区分大小写)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pal" | "bin" => Some(PaletteFormat::Binary),
            "csv" => Some(PaletteFormat::Csv),
            "json" => Some(PaletteFormat::Json),
            "png" => Some(PaletteFormat::Png),
            "565" => Some(PaletteFormat::Rgb565),
            _ => None,
        }
    }

    /// 从路径识别格式
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| {
            tracing::error!("不支持的文件格式: {:?}", path);
            PaletteError::UnsupportedFormat(extension.to_string())
        })
    }

    /// 获取主文件扩展名
    pub fn extension(&self) -> &str {
        match self {
            PaletteFormat::Binary => ".pal",
            PaletteFormat::Csv => ".csv",
            PaletteFormat::Json => ".json",
            PaletteFormat::Png => ".png",
            PaletteFormat::Rgb565 => ".565",
        }
    }

    /// 获取格式名称
    pub fn name(&self) -> &str {
        match self {
            PaletteFormat::Binary => "Binary RGB",
            PaletteFormat::Csv => "CSV",
            PaletteFormat::Json => "JSON",
            PaletteFormat::Png => "Indexed PNG",
            PaletteFormat::Rgb565 => "RGB565",
        }
    }

    /// 编码后能否无损解码
    pub fn is_lossless(&self) -> bool {
        !matches!(self, PaletteFormat::Rgb565)
    }
}

/// 按指定格式编码调色板
pub fn encode<W: Write>(palette: &Palette, format: PaletteFormat, writer: W) -> Result<()> {
    tracing::debug!("编码调色板 {} 为 {}", palette.name(), format.name());

    match format {
        PaletteFormat::Binary => binary::encode(palette, writer),
        PaletteFormat::Csv => csv::encode(palette, writer),
        PaletteFormat::Json => json::encode(palette, writer),
        PaletteFormat::Png => png_swatch::encode(palette, writer),
        PaletteFormat::Rgb565 => rgb565::encode(palette, writer),
    }
}

/// 按指定格式解码调色板
pub fn decode<R: Read>(format: PaletteFormat, name: &str, reader: R) -> Result<Palette> {
    tracing::debug!("解码 {} 调色板: {}", format.name(), name);

    match format {
        PaletteFormat::Binary => binary::decode(name, reader),
        PaletteFormat::Csv => csv::decode(name, reader),
        PaletteFormat::Json => json::decode(name, reader),
        PaletteFormat::Png => png_swatch::decode(name, reader),
        PaletteFormat::Rgb565 => Err(PaletteError::UnsupportedFormat(
            "RGB565 只能导出".to_string(),
        )),
    }
}

/// 保存调色板, 格式由扩展名决定
pub fn save(palette: &Palette, path: &Path) -> Result<PaletteFormat> {
    let format = PaletteFormat::from_path(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    encode(palette, format, &mut writer)?;
    writer.flush()?;

    tracing::debug!("保存成功: {:?}", path);
    Ok(format)
}

/// 加载调色板, 格式由扩展名决定, 文件名 (不含扩展名) 作为调色板名称
pub fn load(path: &Path) -> Result<Palette> {
    let format = PaletteFormat::from_path(path)?;
    load_as(path, format)
}

/// 按指定格式加载调色板
pub fn load_as(path: &Path, format: PaletteFormat) -> Result<Palette> {
    tracing::debug!("开始加载调色板: {:?} ({})", path, format.name());

    if !path.exists() {
        return Err(PaletteError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("文件未找到: {}", path.display()),
        )));
    }

    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("palette")
        .to_string();

    let reader = BufReader::new(File::open(path)?);
    decode(format, &name, reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GLOWBOW;
    use std::io::Cursor;

    #[test]
    fn test_from_extension() {
        assert_eq!(PaletteFormat::from_extension("pal"), Some(PaletteFormat::Binary));
        assert_eq!(PaletteFormat::from_extension(".BIN"), Some(PaletteFormat::Binary));
        assert_eq!(PaletteFormat::from_extension("Csv"), Some(PaletteFormat::Csv));
        assert_eq!(PaletteFormat::from_extension(".565"), Some(PaletteFormat::Rgb565));
        assert_eq!(PaletteFormat::from_extension("gif"), None);
        for format in PaletteFormat::ALL {
            assert_eq!(PaletteFormat::from_extension(format.extension()), Some(format));
        }
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            PaletteFormat::from_path(Path::new("out/glowbow.json")).unwrap(),
            PaletteFormat::Json
        );
        assert!(matches!(
            PaletteFormat::from_path(Path::new("glowbow")),
            Err(PaletteError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_round_trip_lossless_formats() {
        for format in PaletteFormat::ALL.into_iter().filter(|f| f.is_lossless()) {
            let mut buf = Vec::new();
            encode(&GLOWBOW, format, &mut buf).unwrap();
            let decoded = decode(format, "Glowbow", Cursor::new(buf)).unwrap();
            assert_eq!(decoded.entries(), GLOWBOW.entries(), "{}", format.name());
        }
    }

    #[test]
    fn test_rgb565_decode_unsupported() {
        assert!(matches!(
            decode(PaletteFormat::Rgb565, "x", Cursor::new(vec![0u8; 512])),
            Err(PaletteError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("glowbow_save_{}.csv", std::process::id()));
        assert_eq!(save(&GLOWBOW, &path).unwrap(), PaletteFormat::Csv);

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.entries(), GLOWBOW.entries());
        assert_eq!(loaded.name(), format!("glowbow_save_{}", std::process::id()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("glowbow_does_not_exist.pal");
        assert!(matches!(load(&path), Err(PaletteError::Io(_))));
    }

    #[test]
    fn test_load_as_ignores_extension() {
        let path = std::env::temp_dir().join(format!("glowbow_load_as_{}.dat", std::process::id()));
        let mut buf = Vec::new();
        encode(&GLOWBOW, PaletteFormat::Json, &mut buf).unwrap();
        std::fs::write(&path, buf).unwrap();

        assert!(matches!(load(&path), Err(PaletteError::UnsupportedFormat(_))));
        let loaded = load_as(&path, PaletteFormat::Json).unwrap();
        assert_eq!(loaded.entries(), GLOWBOW.entries());
        assert!(matches!(
            load_as(&path, PaletteFormat::Binary),
            Err(PaletteError::InvalidLength { .. }) | Err(PaletteError::Parse(_))
        ));

        let _ = std::fs::remove_file(&path);
    }
}
