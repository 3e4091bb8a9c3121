use firemap_shared::{Group, LatLng, PopupText};

use crate::icons::MarkerIcon;

/// Opaque reference to a marker placed on the rendering surface. Issued and
/// owned by the surface; the core never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// How a tooltip attaches to its marker: permanence, placement side, and
/// offset from the icon's hot-spot in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipOptions {
    pub permanent: bool,
    pub direction: &'static str,
    pub offset: (i32, i32),
}

/// Popup payload handed to the host's templating collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupContent {
    /// Structured fields of a registered marker; the collaborator turns them
    /// into markup.
    Fields(PopupText),
    /// Pre-formatted plain text (pin-drop coordinates).
    Plain(String),
}

/// Narrow interface to the third-party tile/pan/zoom engine. Everything the
/// core ever asks of the engine goes through here, so the registry and layer
/// manager stay free of engine-specific detail.
pub trait RenderSurface {
    /// Make a group's layer part of the map.
    fn add_group_layer(&mut self, group: Group);

    /// Detach a group's layer (its markers stop rendering but stay bound).
    fn remove_group_layer(&mut self, group: Group);

    /// Place a marker on a group's layer, or loose on the map when `group`
    /// is `None` (the pin-drop marker).
    fn place_marker(&mut self, group: Option<Group>, at: LatLng, icon: &MarkerIcon) -> MarkerHandle;

    fn remove_marker(&mut self, handle: MarkerHandle);

    fn bind_popup(&mut self, handle: MarkerHandle, content: PopupContent);

    fn open_popup(&mut self, handle: MarkerHandle);

    fn bind_tooltip(&mut self, handle: MarkerHandle, text: &str, options: TooltipOptions);

    fn unbind_tooltip(&mut self, handle: MarkerHandle);

    fn open_tooltip(&mut self, handle: MarkerHandle);
}
