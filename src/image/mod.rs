//! 图像处理模块

pub mod palette;
pub mod palette_data;
pub mod render;

pub use palette::{Color, GLOWBOW, PALETTE_SIZE, Palette};
pub use render::{LEP_HEIGHT, LEP_WIDTH, RenderOptions};

/// 缩放后的图像尺寸, 溢出或为零时返回 None
pub fn scaled_dimensions(width: u32, height: u32, scale: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 || scale == 0 {
        return None;
    }
    Some((width.checked_mul(scale)?, height.checked_mul(scale)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimensions() {
        assert_eq!(scaled_dimensions(160, 120, 2), Some((320, 240)));
        assert_eq!(scaled_dimensions(160, 120, 0), None);
        assert_eq!(scaled_dimensions(0, 120, 1), None);
        assert_eq!(scaled_dimensions(u32::MAX, 1, 2), None);
    }
}
