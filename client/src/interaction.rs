use firemap_shared::LatLng;

use crate::icons;
use crate::registry::MarkerRegistry;
use crate::surface::{MarkerHandle, PopupContent, RenderSurface, TooltipOptions};

/// Hover tooltips sit above the marker at a fixed offset and stay open for
/// as long as the pointer rests on it.
pub const MARKER_TOOLTIP: TooltipOptions = TooltipOptions {
    permanent: true,
    direction: "top",
    offset: (-12, -23),
};

/// Direct map interaction: the transient pin-drop marker and hover tooltips.
///
/// The pin marker alternates Absent → Present → Absent on successive map
/// clicks. It is never registered; there is at most one at a time.
#[derive(Debug, Default)]
pub struct InteractionController {
    pin: Option<MarkerHandle>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self) -> Option<MarkerHandle> {
        self.pin
    }

    /// A click on empty map space: drop the pin, or lift it if present.
    pub fn handle_click<S: RenderSurface>(&mut self, surface: &mut S, at: LatLng) {
        if let Some(handle) = self.pin.take() {
            surface.remove_marker(handle);
            return;
        }
        let handle = surface.place_marker(None, at, &icons::pin_icon());
        surface.bind_popup(
            handle,
            PopupContent::Plain(format!("Coordenadas: {:.2}, {:.2}", at.lat, at.lng)),
        );
        surface.open_popup(handle);
        self.pin = Some(handle);
    }

    /// Hovering a registered marker shows a permanent tooltip with its title.
    /// Purely presentational; unknown titles are ignored.
    pub fn hover_in<S: RenderSurface>(
        &self,
        surface: &mut S,
        registry: &MarkerRegistry,
        title: &str,
    ) {
        if let Some(entity) = registry.lookup(title) {
            surface.bind_tooltip(entity.handle, &entity.title, MARKER_TOOLTIP);
            surface.open_tooltip(entity.handle);
        }
    }

    pub fn hover_out<S: RenderSurface>(
        &self,
        surface: &mut S,
        registry: &MarkerRegistry,
        title: &str,
    ) {
        if let Some(entity) = registry.lookup(title) {
            surface.unbind_tooltip(entity.handle);
        }
    }

    /// Drop the pin on teardown so its handle is not left dangling.
    pub fn release<S: RenderSurface>(&mut self, surface: &mut S) {
        if let Some(handle) = self.pin.take() {
            surface.remove_marker(handle);
        }
    }
}
