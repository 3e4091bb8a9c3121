use firemap_shared::LatLng;

/// Zoom bounds of both tile pyramids.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 5;

/// Panning past the image edge shows empty space, never a repeated tile.
pub const NO_WRAP: bool = true;

/// View defaults consumed by the host when it instantiates the engine.
pub const VIEW_MIN_ZOOM: u8 = 1;
pub const INITIAL_ZOOM: u8 = 3;
pub const INITIAL_CENTER: LatLng = LatLng { lat: 0.0, lng: 0.0 };
pub const PREFER_CANVAS: bool = true;

/// One of the two interchangeable base-layer pyramids. Exactly one is the
/// active base layer at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStyle {
    Atlas,
    Satellite,
}

impl TileStyle {
    pub const ALL: [TileStyle; 2] = [TileStyle::Atlas, TileStyle::Satellite];

    /// Name shown in the engine's layer control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Atlas => "Estilo Atlas",
            Self::Satellite => "Estilo Satélite",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    fn template_base(self) -> &'static str {
        match self {
            Self::Atlas => "ImgMapInteractive/styleAtlas",
            Self::Satellite => "ImgMapInteractive/styleSatelite",
        }
    }

    /// Tile address within this pyramid.
    pub fn tile_url(self, zoom: u8, x: u32, y: u32) -> String {
        format!("{}/{zoom}/{x}/{y}.webp", self.template_base())
    }

    /// Container background behind the tiles; pure UI feedback on style switch.
    pub fn background_tint(self) -> &'static str {
        match self {
            Self::Atlas => "#0FA8D2",
            Self::Satellite => "#153E69",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_url_substitution() {
        assert_eq!(
            TileStyle::Atlas.tile_url(3, 5, 2),
            "ImgMapInteractive/styleAtlas/3/5/2.webp"
        );
        assert_eq!(
            TileStyle::Satellite.tile_url(0, 0, 0),
            "ImgMapInteractive/styleSatelite/0/0/0.webp"
        );
    }

    #[test]
    fn labels_round_trip() {
        for style in TileStyle::ALL {
            assert_eq!(TileStyle::from_label(style.label()), Some(style));
        }
        assert_eq!(TileStyle::from_label("Estilo Papel"), None);
    }

    #[test]
    fn styles_have_distinct_tints() {
        assert_eq!(TileStyle::Atlas.background_tint(), "#0FA8D2");
        assert_eq!(TileStyle::Satellite.background_tint(), "#153E69");
    }

    #[test]
    fn zoom_bounds() {
        assert_eq!(MIN_ZOOM, 0);
        assert_eq!(MAX_ZOOM, 5);
        assert!(VIEW_MIN_ZOOM >= MIN_ZOOM && INITIAL_ZOOM <= MAX_ZOOM);
    }

    #[test]
    fn view_defaults_match_the_shipped_map() {
        assert_eq!(INITIAL_CENTER, LatLng::new(0.0, 0.0));
        assert_eq!(INITIAL_ZOOM, 3);
        assert!(PREFER_CANVAS);
        assert!(NO_WRAP);
    }
}
