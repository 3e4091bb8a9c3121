use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the engine's logical coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Blip identifier. The dataset mixes numeric ids and named ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconId {
    Number(u32),
    Name(String),
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

/// One record of the static marker document.
///
/// `group` stays a raw string on the wire so a record referencing an unknown
/// category can be rejected on its own instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub group: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "iconNum")]
    pub icon_num: IconId,
    #[serde(rename = "popupText")]
    pub popup_text: PopupText,
}

impl MarkerRecord {
    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Popup fields. The core hands these to the host's templating collaborator
/// as data; it never generates markup itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopupText {
    /// Unique across the whole dataset; primary key for lookups.
    pub title: String,
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub referencia: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub images: Vec<String>,
}
