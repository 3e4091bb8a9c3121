use std::collections::HashSet;

use firemap_shared::Group;
use firemap_shared::group::ALL_GROUPS;

use crate::icons;
use crate::layers::GroupLayerManager;
use crate::registry::MarkerRegistry;

/// Expand/collapse flags, plus the hamburger flag for the whole menu panel.
/// Toggling a node is local: no other node and no map state changes.
#[derive(Debug, Default)]
pub struct MenuState {
    expanded: HashSet<Group>,
    pub open: bool,
}

impl MenuState {
    pub fn toggle_menu(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_group(&mut self, group: Group) {
        if !self.expanded.insert(group) {
            self.expanded.remove(&group);
        }
    }

    pub fn is_expanded(&self, group: Group) -> bool {
        self.expanded.contains(&group)
    }
}

/// One menu leaf; selecting it opens the marker's popup by title.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLeaf {
    pub title: String,
    pub icon_url: String,
}

/// One top-level menu node. `markers` is populated only while expanded;
/// `active` mirrors the layer manager's single-selection highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    pub group: Group,
    pub label: &'static str,
    pub icon_url: String,
    pub expanded: bool,
    pub active: bool,
    pub markers: Vec<MenuLeaf>,
}

/// Project registry + layer state into the navigable tree: all groups in
/// enumeration order, each group's markers in registry insertion order.
pub fn build(
    registry: &MarkerRegistry,
    layers: &GroupLayerManager,
    state: &MenuState,
) -> Vec<MenuNode> {
    ALL_GROUPS
        .into_iter()
        .map(|group| {
            let expanded = state.is_expanded(group);
            let markers = if expanded {
                registry
                    .all_by_group(group)
                    .map(|entity| MenuLeaf {
                        title: entity.title.clone(),
                        icon_url: icons::blip_url(&entity.icon),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            MenuNode {
                group,
                label: group.label(),
                icon_url: icons::group_icon_url(group),
                expanded,
                active: layers.active_group() == Some(group),
                markers,
            }
        })
        .collect()
}
