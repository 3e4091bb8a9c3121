use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use firemap_shared::{Group, IconId, LatLng, MarkerRecord};

use crate::error::MapError;
use crate::icons;
use crate::surface::{MarkerHandle, PopupContent, RenderSurface};

/// A registered marker: the indexed view of one accepted record plus the
/// render handle the surface issued for it. The surface owns the handle's
/// lifecycle; the registry only holds it between registration and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerEntity {
    pub title: String,
    pub group: Group,
    pub icon: IconId,
    pub at: LatLng,
    pub handle: MarkerHandle,
}

/// Index of all registered markers, keyed by their unique title, with
/// per-group insertion order preserved for the menu.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    entities: HashMap<String, MarkerEntity>,
    by_group: HashMap<Group, Vec<String>>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and place one record. Records naming a category outside the
    /// fixed set are rejected; the caller continues with the rest.
    ///
    /// A duplicate title replaces the prior entity: its handle is removed
    /// from the surface first, and the group bucket keeps a single entry (at
    /// the first-insertion position when the group is unchanged).
    pub fn register<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        record: &MarkerRecord,
    ) -> Result<&MarkerEntity, MapError> {
        let group = Group::from_label(&record.group).ok_or_else(|| MapError::UnknownGroup {
            group: record.group.clone(),
            title: record.popup_text.title.clone(),
        })?;
        let title = record.popup_text.title.clone();

        match self.entities.get(&title) {
            Some(prev) => {
                surface.remove_marker(prev.handle);
                if prev.group != group {
                    if let Some(bucket) = self.by_group.get_mut(&prev.group) {
                        bucket.retain(|t| t != &title);
                    }
                    self.by_group.entry(group).or_default().push(title.clone());
                }
            }
            None => {
                self.by_group.entry(group).or_default().push(title.clone());
            }
        }

        let handle = surface.place_marker(
            Some(group),
            record.lat_lng(),
            &icons::marker_icon(&record.icon_num),
        );
        surface.bind_popup(handle, PopupContent::Fields(record.popup_text.clone()));

        let entity = MarkerEntity {
            title: title.clone(),
            group,
            icon: record.icon_num.clone(),
            at: record.lat_lng(),
            handle,
        };
        match self.entities.entry(title) {
            Entry::Occupied(mut slot) => {
                slot.insert(entity);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(entity)),
        }
    }

    pub fn lookup(&self, title: &str) -> Option<&MarkerEntity> {
        self.entities.get(title)
    }

    /// A group's entities in insertion order.
    pub fn all_by_group(&self, group: Group) -> impl Iterator<Item = &MarkerEntity> {
        self.by_group
            .get(&group)
            .into_iter()
            .flatten()
            .filter_map(|title| self.entities.get(title))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Replace the whole registry with `records`. Existing handles are
    /// released first; rejected records are logged and skipped. Returns the
    /// number of accepted records.
    pub fn load_all<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        records: &[MarkerRecord],
    ) -> usize {
        self.clear(surface);
        let mut rejected = 0usize;
        for record in records {
            if let Err(err) = self.register(surface, record) {
                warn!("skipping marker record: {err}");
                rejected += 1;
            }
        }
        debug!(
            accepted = self.entities.len(),
            rejected, "marker registry loaded"
        );
        self.entities.len()
    }

    /// Release every handle and drop all index state.
    pub fn clear<S: RenderSurface>(&mut self, surface: &mut S) {
        for entity in self.entities.values() {
            surface.remove_marker(entity.handle);
        }
        self.entities.clear();
        self.by_group.clear();
    }
}
