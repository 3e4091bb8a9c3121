use firemap_shared::LatLng;

/// A point in image-pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine transform between image-pixel space and the engine's logical
/// coordinate space: `logical = center + pixel * scale` per axis.
///
/// The default constants are the ones the tile imagery and the stored marker
/// dataset were authored against. Stored records already carry logical
/// coordinates; this transform serves ad-hoc interaction, not data loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    pub scale_x: f64,
    pub center_x: f64,
    pub scale_y: f64,
    pub center_y: f64,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self {
            scale_x: 0.02072,
            center_x: 117.3,
            scale_y: 0.0205,
            center_y: 172.8,
        }
    }
}

impl MapTransform {
    /// Convert an image-pixel point to logical coordinates.
    pub fn to_logical(&self, pixel: PixelPoint) -> LatLng {
        LatLng::new(
            self.center_y + pixel.y * self.scale_y,
            self.center_x + pixel.x * self.scale_x,
        )
    }

    /// Convert logical coordinates back to image-pixel space.
    pub fn to_pixel(&self, logical: LatLng) -> PixelPoint {
        PixelPoint::new(
            (logical.lng - self.center_x) / self.scale_x,
            (logical.lat - self.center_y) / self.scale_y,
        )
    }
}

/// Pixel scale factor for a zoom level of the power-of-two pyramid.
pub fn scale_for_zoom(zoom: f64) -> f64 {
    2f64.powf(zoom)
}

/// Zoom level whose pyramid scale is `scale`. Inverse of [`scale_for_zoom`].
pub fn zoom_for_scale(scale: f64) -> f64 {
    scale.log2()
}
