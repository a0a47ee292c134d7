use nalgebra::Vector2;

/// Pixel scale applied when moving UV coordinates between the normalized
/// in-mesh form and the pixel-unit form stored on disk. Both operations
/// take it explicitly; there is no ambient image lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvScale {
    pub width: f32,
    pub height: f32,
}

impl UvScale {
    pub fn new(width: u32, height: u32) -> UvScale {
        UvScale {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Normalized UV to pixel units.
    pub fn to_pixels(&self, uv: Vector2<f32>) -> [f32; 2] {
        [uv.x * self.width, uv.y * self.height]
    }

    /// Pixel units back to normalized UV.
    pub fn to_normalized(&self, pair: [f32; 2]) -> Vector2<f32> {
        Vector2::new(pair[0] / self.width, pair[1] / self.height)
    }
}

impl From<(u32, u32)> for UvScale {
    fn from(size: (u32, u32)) -> UvScale {
        UvScale::new(size.0, size.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_and_normalized_forms_are_inverse() {
        let scale = UvScale::new(640, 480);

        assert_eq!(scale.to_pixels(Vector2::new(0.25, 0.5)), [160., 240.]);
        assert_eq!(scale.to_normalized([160., 240.]), Vector2::new(0.25, 0.5));

        // outside the unit square is not special
        assert_eq!(scale.to_pixels(Vector2::new(-0.5, 1.5)), [-320., 720.]);
    }

    #[test]
    fn converts_from_pixel_dimensions() {
        let scale = UvScale::from((1024, 512));
        assert_eq!(scale, UvScale { width: 1024., height: 512. });
    }
}
