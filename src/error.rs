//! 错误类型定义

use thiserror::Error;

/// 调色板错误类型
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("索引超出范围: {0} (有效范围 0-255)")]
    IndexOutOfRange(usize),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("图片编码错误: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("PNG 编码错误: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("PNG 解码错误: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("长度不匹配: 期望 {expected}, 实际 {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("无效的图像尺寸: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("不支持的格式: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
