use tracing::warn;

use firemap_shared::{Group, LatLng, MarkerRecord};

use crate::crs::MapTransform;
use crate::error::MapError;
use crate::interaction::InteractionController;
use crate::layers::{GroupLayerManager, LayerEvent};
use crate::menu::{self, MenuNode, MenuState};
use crate::registry::MarkerRegistry;
use crate::surface::RenderSurface;
use crate::tiles::TileStyle;

/// Engine-emitted events the component consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Click on empty map space, already in logical coordinates.
    Click(LatLng),
    BaseLayerChanged(TileStyle),
    OverlayAdded(Group),
    OverlayRemoved(Group),
    MarkerHoverIn(String),
    MarkerHoverOut(String),
}

/// Outgoing notifications for the host's UI chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum MapNotice {
    /// Base style switched; `tint` is the container background to apply.
    StyleChanged {
        style: TileStyle,
        tint: &'static str,
    },
    ActiveGroupChanged(Option<Group>),
}

/// One interactive map instance: registry, layer table, menu state, and the
/// interaction controller, all owned here so two views never share state.
#[derive(Debug)]
pub struct MapView<S: RenderSurface> {
    surface: S,
    transform: MapTransform,
    registry: MarkerRegistry,
    layers: GroupLayerManager,
    pub menu: MenuState,
    interaction: InteractionController,
    base_style: TileStyle,
    notices: Vec<MapNotice>,
}

impl<S: RenderSurface> MapView<S> {
    /// Build the view over a surface: every group layer created visible,
    /// Atlas as the starting base style, empty registry until the host's
    /// one-shot fetch resolves.
    pub fn new(surface: S) -> Self {
        let mut surface = surface;
        let layers = GroupLayerManager::new(&mut surface);
        Self {
            surface,
            transform: MapTransform::default(),
            registry: MarkerRegistry::new(),
            layers,
            menu: MenuState::default(),
            interaction: InteractionController::new(),
            base_style: TileStyle::Atlas,
            notices: Vec::new(),
        }
    }

    /// Load the marker document the host fetched. Parse failure is terminal
    /// for the session's dataset but not for the view: the registry stays
    /// empty, the failure is logged and reported. Returns accepted count.
    pub fn load_markers(&mut self, json: &str) -> Result<usize, MapError> {
        let records: Vec<MarkerRecord> = serde_json::from_str(json).inspect_err(|err| {
            warn!("marker data fetch unusable: {err}");
        })?;
        Ok(self.registry.load_all(&mut self.surface, &records))
    }

    /// Dispatch one engine event. All mutation funnels through here and the
    /// explicit methods below; there is exactly one dispatcher.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Click(at) => self.interaction.handle_click(&mut self.surface, at),
            MapEvent::BaseLayerChanged(style) => self.set_base_style(style),
            MapEvent::OverlayAdded(group) => self.layers.note_overlay_added(group),
            MapEvent::OverlayRemoved(group) => self.layers.note_overlay_removed(group),
            MapEvent::MarkerHoverIn(title) => {
                self.interaction
                    .hover_in(&mut self.surface, &self.registry, &title)
            }
            MapEvent::MarkerHoverOut(title) => {
                self.interaction
                    .hover_out(&mut self.surface, &self.registry, &title)
            }
        }
        self.pump_layer_events();
    }

    /// Toggle a group layer from the component side (menu checkbox).
    pub fn set_group_visible(&mut self, group: Group, visible: bool) {
        self.layers.set_visible(&mut self.surface, group, visible);
        self.pump_layer_events();
    }

    /// Menu leaf selection: open the marker's popup, silently ignoring a
    /// stale title.
    pub fn open_popup(&mut self, title: &str) {
        self.layers
            .open_popup(&mut self.surface, &self.registry, title);
    }

    /// Current menu projection.
    pub fn menu_tree(&self) -> Vec<MenuNode> {
        menu::build(&self.registry, &self.layers, &self.menu)
    }

    pub fn base_style(&self) -> TileStyle {
        self.base_style
    }

    /// The pixel↔logical transform the host hands to the engine's CRS.
    pub fn transform(&self) -> &MapTransform {
        &self.transform
    }

    pub fn registry(&self) -> &MarkerRegistry {
        &self.registry
    }

    pub fn layers(&self) -> &GroupLayerManager {
        &self.layers
    }

    /// Drain pending UI notifications, in emission order.
    pub fn drain_notices(&mut self) -> Vec<MapNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Release every handle this view placed. The surface tears down its
    /// layers afterwards; nothing here may reference a handle again.
    pub fn teardown(&mut self) {
        self.interaction.release(&mut self.surface);
        self.registry.clear(&mut self.surface);
    }

    fn set_base_style(&mut self, style: TileStyle) {
        if self.base_style == style {
            return;
        }
        self.base_style = style;
        self.notices.push(MapNotice::StyleChanged {
            style,
            tint: style.background_tint(),
        });
    }

    fn pump_layer_events(&mut self) {
        for event in self.layers.drain_events() {
            match event {
                LayerEvent::ActiveGroupChanged(group) => {
                    self.notices.push(MapNotice::ActiveGroupChanged(group));
                }
            }
        }
    }
}
