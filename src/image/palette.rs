//! 调色板定义和查找

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// 调色板项数 (每个 8 位像素值对应一项)
pub const PALETTE_SIZE: usize = 256;

/// RGB 颜色结构
///
/// 序列化为 `[r, g, b]` 三元组.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 创建黑色
    pub const fn black() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }

    /// 创建白色
    pub const fn white() -> Self {
        Self { r: 255, g: 255, b: 255 }
    }

    /// 转换为 u32 (0x00RRGGBB)
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// 从 u32 (0x00RRGGBB) 创建颜色, 高 8 位被忽略
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// 转换为 16 位 RGB565
    pub const fn to_rgb565(self) -> u16 {
        let (r, g, b) = (self.r as u16, self.g as u16, self.b as u16);
        ((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3)
    }

    /// 转换为字节交换后的 RGB565 (显示驱动按大端读取)
    pub const fn to_rgb565_swapped(self) -> u16 {
        let (r, g, b) = (self.r as u16, self.g as u16, self.b as u16);
        ((b & 0xF8) << 5) | (r & 0xF8) | ((g & 0xE0) >> 5) | ((g & 0x1C) << 11)
    }

    /// 计算颜色的亮度 (使用标准亮度公式)
    pub fn brightness(self) -> u8 {
        ((299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000) as u8
    }

    /// 与另一颜色的欧几里得距离平方
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// 格式化为十六进制颜色字符串 (如 "#FF0000")
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// 格式化为 RGB 字符串 (如 "rgb(255, 0, 0)")
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_array())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color(#{:02X}{:02X}{:02X})", self.r, self.g, self.b)
    }
}

impl std::fmt::LowerHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::UpperHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// 重新导出生成的调色板常量
pub use crate::image::palette_data::{GLOWBOW_PALETTE, GLOWBOW_RGB565};

/// 内置 glowbow 调色板, 进程生命周期内只读
pub static GLOWBOW: Palette = Palette::from_static("Glowbow", GLOWBOW_PALETTE);

/// 固定 256 项的只读调色板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: Cow<'static, str>,
    entries: [Color; PALETTE_SIZE],
}

impl Palette {
    /// 从编译期常量创建调色板
    pub const fn from_static(name: &'static str, entries: [Color; PALETTE_SIZE]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            entries,
        }
    }

    pub fn new(name: impl Into<String>, entries: [Color; PALETTE_SIZE]) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            entries,
        }
    }

    /// 从颜色列表创建调色板, 项数必须正好为 256
    pub fn from_colors(name: impl Into<String>, colors: Vec<Color>) -> Result<Self> {
        let actual = colors.len();
        let entries: [Color; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::InvalidLength {
                expected: PALETTE_SIZE,
                actual,
            })?;
        Ok(Self::new(name, entries))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Color; PALETTE_SIZE] {
        &self.entries
    }

    /// 获取指定 8 位索引的颜色, 对所有 u8 都有定义
    #[inline]
    pub fn color_at(&self, index: u8) -> Color {
        self.entries[index as usize]
    }

    /// 按更宽的整数索引取色, 超出 0-255 返回 `IndexOutOfRange`
    #[inline]
    pub fn get(&self, index: usize) -> Result<Color> {
        self.entries
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().copied()
    }

    /// 生成 RGB565 快速查找表
    pub fn rgb565_table(&self, swapped: bool) -> [u16; PALETTE_SIZE] {
        let mut table = [0u16; PALETTE_SIZE];
        for (slot, color) in table.iter_mut().zip(self.entries.iter()) {
            *slot = if swapped {
                color.to_rgb565_swapped()
            } else {
                color.to_rgb565()
            };
        }
        table
    }

    /// 查找最接近的颜色索引 (距离相同时取较小索引)
    pub fn find_closest(&self, color: Color) -> u8 {
        let mut best_index = 0;
        let mut best_distance = u32::MAX;

        for (i, &palette_color) in self.entries.iter().enumerate() {
            let distance = palette_color.distance_sq(color);
            if distance < best_distance {
                best_distance = distance;
                best_index = i;
                if distance == 0 {
                    break;
                }
            }
        }

        best_index as u8
    }

    /// 展开为 R,G,B 交错的 768 字节
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|c| c.to_array()).collect()
    }

    /// 从 R,G,B 交错字节创建调色板
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let trailing = bytes.len() % 3;
        if trailing != 0 {
            return Err(PaletteError::Parse(format!(
                "末尾多出 {} 字节, 不足一项 RGB",
                trailing
            )));
        }
        if bytes.len() != PALETTE_SIZE * 3 {
            return Err(PaletteError::InvalidLength {
                expected: PALETTE_SIZE,
                actual: bytes.len() / 3,
            });
        }
        let colors = bytes
            .chunks_exact(3)
            .map(|rgb| Color::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Self::from_colors(name, colors)
    }
}

impl std::ops::Index<u8> for Palette {
    type Output = Color;

    fn index(&self, index: u8) -> &Color {
        &self.entries[index as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        GLOWBOW.clone()
    }
}

/// 获取内置 glowbow 调色板
pub fn glowbow() -> &'static Palette {
    &GLOWBOW
}

/// 从 glowbow 调色板索引获取颜色
#[inline]
pub fn color_at(index: u8) -> Color {
    GLOWBOW_PALETTE[index as usize]
}

/// 按宽索引从 glowbow 调色板取色
#[inline]
pub fn get_color(index: usize) -> Result<Color> {
    GLOWBOW.get(index)
}

/// 从 glowbow 调色板索引获取 RGB565 颜色
#[inline]
pub fn get_color_rgb565(index: u8) -> u16 {
    GLOWBOW_RGB565[index as usize]
}

/// 调色板迭代器
pub fn iter_palette() -> impl Iterator<Item = Color> {
    GLOWBOW_PALETTE.iter().copied()
}
