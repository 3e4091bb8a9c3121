//! Core of the SAFD risk-map component: custom CRS, tile-pyramid addressing,
//! and the marker/group registry that keeps map layers, popups, and the side
//! menu consistent. The tile engine, DOM, icon delivery, popup templating,
//! and the marker fetch are host collaborators behind [`surface::RenderSurface`]
//! and [`MapView`]'s narrow entry points.

pub mod crs;
pub mod error;
pub mod icons;
pub mod interaction;
pub mod layers;
pub mod map;
pub mod menu;
pub mod registry;
pub mod surface;
pub mod tiles;

pub use error::MapError;
pub use map::{MapEvent, MapNotice, MapView};
pub use surface::{MarkerHandle, PopupContent, RenderSurface, TooltipOptions};
pub use tiles::TileStyle;
