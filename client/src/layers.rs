use std::collections::{HashMap, VecDeque};

use firemap_shared::Group;
use firemap_shared::group::ALL_GROUPS;

use crate::registry::MarkerRegistry;
use crate::surface::RenderSurface;

/// Notifications for host UI highlighting, drained by the event dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerEvent {
    /// A layer became the single "active" group (added), or none is active
    /// (any layer removed) — the original layer control's highlight rule,
    /// kept even though several layers can be visible at once.
    ActiveGroupChanged(Option<Group>),
}

/// Per-instance layer table: one togglable layer per group, all created
/// visible, plus the single-selection active group.
#[derive(Debug)]
pub struct GroupLayerManager {
    visible: HashMap<Group, bool>,
    active: Option<Group>,
    events: VecDeque<LayerEvent>,
}

impl GroupLayerManager {
    /// Create every group layer on the surface, visible, active group none.
    pub fn new<S: RenderSurface>(surface: &mut S) -> Self {
        let mut visible = HashMap::with_capacity(ALL_GROUPS.len());
        for group in ALL_GROUPS {
            surface.add_group_layer(group);
            visible.insert(group, true);
        }
        Self {
            visible,
            active: None,
            events: VecDeque::new(),
        }
    }

    pub fn is_visible(&self, group: Group) -> bool {
        self.visible.get(&group).copied().unwrap_or(false)
    }

    pub fn active_group(&self) -> Option<Group> {
        self.active
    }

    /// Toggle a layer from the component side. No-op (and no event) when the
    /// layer is already in the requested state.
    pub fn set_visible<S: RenderSurface>(&mut self, surface: &mut S, group: Group, visible: bool) {
        if self.is_visible(group) == visible {
            return;
        }
        if visible {
            surface.add_group_layer(group);
        } else {
            surface.remove_group_layer(group);
        }
        self.visible.insert(group, visible);
        self.track_toggle(group, visible);
    }

    /// Record a layer the engine's own control just added. The surface change
    /// already happened on the engine side.
    pub fn note_overlay_added(&mut self, group: Group) {
        self.visible.insert(group, true);
        self.track_toggle(group, true);
    }

    /// Record a layer the engine's own control just removed.
    pub fn note_overlay_removed(&mut self, group: Group) {
        self.visible.insert(group, false);
        self.track_toggle(group, false);
    }

    fn track_toggle(&mut self, group: Group, visible: bool) {
        self.active = if visible { Some(group) } else { None };
        self.events
            .push_back(LayerEvent::ActiveGroupChanged(self.active));
    }

    pub fn drain_events(&mut self) -> Vec<LayerEvent> {
        self.events.drain(..).collect()
    }

    /// Open a registered marker's bound popup. A miss is a usability guard,
    /// not an error: no surface call, nothing surfaced to the user.
    pub fn open_popup<S: RenderSurface>(
        &self,
        surface: &mut S,
        registry: &MarkerRegistry,
        title: &str,
    ) {
        if let Some(entity) = registry.lookup(title) {
            surface.open_popup(entity.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use firemap_shared::{IconId, MarkerRecord, PopupText};

    use super::*;
    use crate::surface::mock::{MockSurface, SurfaceCall};

    fn manager(surface: &mut MockSurface) -> GroupLayerManager {
        let mut layers = GroupLayerManager::new(surface);
        layers.drain_events();
        layers
    }

    #[test]
    fn all_layers_start_visible() {
        let mut surface = MockSurface::new();
        let layers = GroupLayerManager::new(&mut surface);
        for group in ALL_GROUPS {
            assert!(layers.is_visible(group));
        }
        assert_eq!(layers.active_group(), None);
        assert_eq!(surface.calls.len(), ALL_GROUPS.len());
    }

    #[test]
    fn toggle_emits_exactly_one_event_each_way() {
        let mut surface = MockSurface::new();
        let mut layers = manager(&mut surface);

        layers.set_visible(&mut surface, Group::ZonasDeRiesgo, false);
        assert!(!layers.is_visible(Group::ZonasDeRiesgo));
        assert_eq!(
            layers.drain_events(),
            vec![LayerEvent::ActiveGroupChanged(None)]
        );

        layers.set_visible(&mut surface, Group::ZonasDeRiesgo, true);
        assert!(layers.is_visible(Group::ZonasDeRiesgo));
        assert_eq!(
            layers.drain_events(),
            vec![LayerEvent::ActiveGroupChanged(Some(Group::ZonasDeRiesgo))]
        );
    }

    #[test]
    fn redundant_toggle_is_silent() {
        let mut surface = MockSurface::new();
        let mut layers = manager(&mut surface);
        let before = surface.calls.len();

        layers.set_visible(&mut surface, Group::SaedSapd, true);
        assert_eq!(surface.calls.len(), before);
        assert!(layers.drain_events().is_empty());
    }

    #[test]
    fn engine_driven_toggles_update_active_group() {
        let mut surface = MockSurface::new();
        let mut layers = manager(&mut surface);

        layers.note_overlay_added(Group::CasosAislados);
        assert_eq!(layers.active_group(), Some(Group::CasosAislados));

        // Removing any layer reverts the highlight, matching the original.
        layers.note_overlay_removed(Group::SaedSapd);
        assert_eq!(layers.active_group(), None);
        assert_eq!(
            layers.drain_events(),
            vec![
                LayerEvent::ActiveGroupChanged(Some(Group::CasosAislados)),
                LayerEvent::ActiveGroupChanged(None),
            ]
        );
    }

    #[test]
    fn open_popup_on_missing_title_makes_no_surface_call() {
        let mut surface = MockSurface::new();
        let layers = manager(&mut surface);
        let registry = MarkerRegistry::new();
        let before = surface.calls.len();

        layers.open_popup(&mut surface, &registry, "nonexistent");
        assert_eq!(surface.calls.len(), before);
    }

    #[test]
    fn open_popup_targets_the_bound_marker() {
        let mut surface = MockSurface::new();
        let layers = manager(&mut surface);
        let mut registry = MarkerRegistry::new();
        let handle = registry
            .register(
                &mut surface,
                &MarkerRecord {
                    group: "SAED - SAPD".into(),
                    lat: 1.0,
                    lng: 2.0,
                    icon_num: IconId::Number(2),
                    popup_text: PopupText {
                        title: "Comisaria".into(),
                        ..PopupText::default()
                    },
                },
            )
            .unwrap()
            .handle;

        layers.open_popup(&mut surface, &registry, "Comisaria");
        assert_eq!(surface.calls.last(), Some(&SurfaceCall::OpenPopup(handle)));
    }
}
