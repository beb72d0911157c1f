//! CSV 调色板, 每行一项 `r,g,b`

use crate::error::{PaletteError, Result};
use crate::image::{Color, Palette};
use std::io::{BufRead, BufReader, Read, Write};

pub fn encode<W: Write>(palette: &Palette, mut writer: W) -> Result<()> {
    for color in palette.iter() {
        writeln!(writer, "{},{},{}", color.r, color.g, color.b)?;
    }
    Ok(())
}

/// 解析 CSV; 空行和 `#` 注释行被跳过, 首个数据行之前最多忽略一行表头
pub fn decode<R: Read>(name: &str, reader: R) -> Result<Palette> {
    let mut colors = Vec::with_capacity(256);
    let mut header_skipped = false;

    for (line_no, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = if line_no == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            &line
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if colors.is_empty()
            && !header_skipped
            && fields.iter().all(|f| f.parse::<i64>().is_err())
        {
            tracing::warn!("忽略 CSV 表头: {}", line);
            header_skipped = true;
            continue;
        }

        colors.push(parse_row(&fields, line_no + 1)?);
    }

    Palette::from_colors(name, colors)
}

fn parse_row(fields: &[&str], line_no: usize) -> Result<Color> {
    if fields.len() != 3 {
        return Err(PaletteError::Parse(format!(
            "第 {} 行: 需要 3 个分量, 实际 {}",
            line_no,
            fields.len()
        )));
    }

    let mut rgb = [0u8; 3];
    for (slot, field) in rgb.iter_mut().zip(fields) {
        *slot = field.parse::<u8>().map_err(|e| {
            PaletteError::Parse(format!("第 {} 行: 无效分量 '{}': {}", line_no, field, e))
        })?;
    }

    Ok(Color::from(rgb))
}
