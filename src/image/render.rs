//! Lepton 索引图像渲染
//!
//! 把 8 位索引帧 (每像素一个调色板索引) 转成可显示的图像:
//! RGB 图像, RGB565 显示缓冲区, 或自带 PLTE 的索引 PNG.
//! 放大只做像素复制, 不做插值.

use crate::error::{PaletteError, Result};
use crate::image::palette::Palette;
use crate::image::scaled_dimensions;
use image::RgbImage;
use std::io::Write;
use std::path::Path;

/// Lepton 图像宽度
pub const LEP_WIDTH: u32 = 160;
/// Lepton 图像高度
pub const LEP_HEIGHT: u32 = 120;
/// 显示缓冲区放大倍数
pub const IMG_BUF_MULT_FACTOR: u32 = 2;

/// 渲染选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 放大倍数 (>= 1), 每个源像素复制为 scale x scale 块
    pub scale: u32,
    /// RGB565 输出是否字节交换
    pub swap_rgb565: bool,
}

impl RenderOptions {
    /// 320x240 显示屏使用的设置
    pub const fn display() -> Self {
        Self {
            scale: IMG_BUF_MULT_FACTOR,
            swap_rgb565: true,
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            swap_rgb565: false,
        }
    }
}

/// 检查帧长度和尺寸, 返回放大后的尺寸
fn check_frame(len: usize, width: u32, height: u32, scale: u32) -> Result<(u32, u32)> {
    let (out_w, out_h) = scaled_dimensions(width, height, scale)
        .ok_or(PaletteError::InvalidDimensions { width, height })?;

    let expected = width as usize * height as usize;
    if len != expected {
        return Err(PaletteError::InvalidLength {
            expected,
            actual: len,
        });
    }

    Ok((out_w, out_h))
}

/// 将 8 位索引帧着色为 RGB 图像
pub fn colorize(
    indices: &[u8],
    width: u32,
    height: u32,
    palette: &Palette,
    options: &RenderOptions,
) -> Result<RgbImage> {
    let scale = options.scale;
    let (out_w, out_h) = check_frame(indices.len(), width, height, scale)?;

    tracing::debug!(
        "着色 {}x{} -> {}x{}, 调色板: {}",
        width,
        height,
        out_w,
        out_h,
        palette.name()
    );

    let image = RgbImage::from_fn(out_w, out_h, |x, y| {
        let src = (y / scale) as usize * width as usize + (x / scale) as usize;
        palette.color_at(indices[src]).into()
    });

    Ok(image)
}

/// 着色 16 位 AGC 帧, 只使用每个像素的低 8 位作为索引
pub fn colorize_agc(
    words: &[u16],
    width: u32,
    height: u32,
    palette: &Palette,
    options: &RenderOptions,
) -> Result<RgbImage> {
    let indices: Vec<u8> = words.iter().map(|&w| (w & 0xFF) as u8).collect();
    colorize(&indices, width, height, palette, options)
}

/// 使用 RGB565 查找表填充显示缓冲区
///
/// `out` 的长度必须等于放大后的像素数.
pub fn render_rgb565(
    indices: &[u8],
    width: u32,
    height: u32,
    lut: &[u16; 256],
    scale: u32,
    out: &mut [u16],
) -> Result<()> {
    let (out_w, out_h) = check_frame(indices.len(), width, height, scale)?;

    let expected = out_w as usize * out_h as usize;
    if out.len() != expected {
        return Err(PaletteError::InvalidLength {
            expected,
            actual: out.len(),
        });
    }

    let row_len = out_w as usize;
    let scale = scale as usize;

    for (src_y, src_row) in indices.chunks_exact(width as usize).enumerate() {
        let row_start = src_y * scale * row_len;

        // 复制源行中的每个像素
        let dst = &mut out[row_start..row_start + row_len];
        for (block, &index) in dst.chunks_exact_mut(scale).zip(src_row) {
            block.fill(lut[index as usize]);
        }

        // 复制目标行
        for rep in 1..scale {
            out.copy_within(row_start..row_start + row_len, row_start + rep * row_len);
        }
    }

    Ok(())
}

/// 用调色板的 RGB565 表渲染, 按选项决定是否字节交换
pub fn render_rgb565_buffer(
    indices: &[u8],
    width: u32,
    height: u32,
    palette: &Palette,
    options: &RenderOptions,
) -> Result<Vec<u16>> {
    let (out_w, out_h) = check_frame(indices.len(), width, height, options.scale)?;
    let lut = palette.rgb565_table(options.swap_rgb565);
    let mut out = vec![0u16; out_w as usize * out_h as usize];
    render_rgb565(indices, width, height, &lut, options.scale, &mut out)?;
    Ok(out)
}

/// 写出索引 PNG, 调色板写入 PLTE 块
pub fn write_indexed_png<W: Write>(
    indices: &[u8],
    width: u32,
    height: u32,
    palette: &Palette,
    writer: W,
) -> Result<()> {
    check_frame(indices.len(), width, height, 1)?;

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_bytes());

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(indices)?;
    png_writer.finish()?;

    Ok(())
}

/// 读取原始 8 位帧文件, 长度必须为 width * height
pub fn read_raw_frame(path: &Path, width: u32, height: u32) -> Result<Vec<u8>> {
    tracing::debug!("读取原始帧: {:?}", path);

    let data = std::fs::read(path)?;
    check_frame(data.len(), width, height, 1)?;
    Ok(data)
}

/// 渲染原始帧文件并保存为 PNG
pub fn render_file(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    palette: &Palette,
    options: &RenderOptions,
    indexed: bool,
) -> Result<()> {
    let frame = read_raw_frame(input, width, height)?;

    if indexed {
        if options.scale != 1 {
            tracing::warn!("索引 PNG 不支持放大, 忽略 scale={}", options.scale);
        }
        let file = std::fs::File::create(output)?;
        write_indexed_png(&frame, width, height, palette, std::io::BufWriter::new(file))?;
    } else {
        let rgb = colorize(&frame, width, height, palette, options)?;
        rgb.save_with_format(output, image::ImageFormat::Png)?;
    }

    tracing::debug!("已保存: {:?}", output);
    Ok(())
}
