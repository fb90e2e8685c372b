//! Damage map: which exterior regions of the vehicle are marked as damaged

pub mod catalog;

pub use catalog::{all_regions, find_region, region_name, regions_for, Region, View};

use std::collections::BTreeSet;
use std::fmt;

/// Called with the full selection after every change.
pub type DamageListener = Box<dyn FnMut(&[String]) + Send>;

/// Selection state for one evaluation's damage map.
pub struct DamageMap {
    view: View,
    selected: BTreeSet<String>,
    listener: Option<DamageListener>,
}

impl DamageMap {
    /// Seeds the selection from the record's stored markers.
    ///
    /// The seed is copied once. Later edits to the source record are not
    /// seen by this instance; build a new map to pick them up.
    pub fn new<I, S>(initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            view: View::default(),
            selected: initial.into_iter().map(Into::into).collect(),
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(&[String]) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&[String]) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn active_regions(&self) -> &'static [Region] {
        regions_for(self.view)
    }

    pub fn is_selected(&self, region_id: &str) -> bool {
        self.selected.contains(region_id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flips the region's membership. Ids are not checked against the catalog.
    pub fn toggle(&mut self, region_id: &str) {
        if !self.selected.remove(region_id) {
            self.selected.insert(region_id.to_string());
        }
        self.notify();
    }

    /// Drops every marker, including those on views other than the active one.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.notify();
    }

    pub fn serialize(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Display names for the current selection.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selected.iter().map(|id| region_name(id)).collect()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let snapshot: Vec<String> = self.selected.iter().cloned().collect();
            listener(&snapshot);
        }
    }
}

impl Default for DamageMap {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl fmt::Debug for DamageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DamageMap")
            .field("view", &self.view)
            .field("selected", &self.selected)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
