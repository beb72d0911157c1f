//! Glowbow - Lepton 热成像 8 位索引数据的调色板
//!
//! 提供 256 项 glowbow 调色板 (暗 -> 红 -> 橙 -> 黄 -> 白), 以及:
//! - 按 8 位索引取色, 宽索引越界时返回 `IndexOutOfRange`
//! - RGB565 快速查找表
//! - 索引帧渲染 (RGB 图像, RGB565 显示缓冲区, 索引 PNG)
//! - 调色板交换格式 (二进制, CSV, JSON, PNG, RGB565)

pub mod error;
pub mod formats;
pub mod image;

pub use error::{PaletteError, Result};
pub use crate::image::palette::{color_at, get_color, glowbow};
pub use crate::image::{Color, GLOWBOW, PALETTE_SIZE, Palette};
