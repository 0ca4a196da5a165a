//! Selection tracking over entry names, with a derived selection mode.

use std::collections::BTreeSet;

use crate::model::DirectoryListing;

/// Derived classification of how many entries are currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode
{
  None,
  Single,
  Multi,
}

/// Set of selected entry names. Names are the unit of identity within a
/// listing; the set is kept a subset of the live listing by [`retain`]
/// after any entry-set change, and cleared on navigation.
///
/// [`retain`]: SelectionTracker::retain
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker
{
  selected: BTreeSet<String>,
}

impl SelectionTracker
{
  pub fn new() -> Self
  {
    Self::default()
  }

  /// Mode is always recomputed from the live set, never cached.
  pub fn mode(&self) -> SelectionMode
  {
    match self.selected.len()
    {
      0 => SelectionMode::None,
      1 => SelectionMode::Single,
      _ => SelectionMode::Multi,
    }
  }

  pub fn len(&self) -> usize
  {
    self.selected.len()
  }

  pub fn is_empty(&self) -> bool
  {
    self.selected.is_empty()
  }

  pub fn contains(
    &self,
    name: &str,
  ) -> bool
  {
    self.selected.contains(name)
  }

  pub fn select(
    &mut self,
    name: &str,
  )
  {
    self.selected.insert(name.to_string());
  }

  pub fn deselect(
    &mut self,
    name: &str,
  )
  {
    self.selected.remove(name);
  }

  pub fn toggle(
    &mut self,
    name: &str,
  )
  {
    if !self.selected.remove(name)
    {
      self.selected.insert(name.to_string());
    }
  }

  /// Select every name present in the listing. Names not present are never
  /// introduced.
  pub fn select_all(
    &mut self,
    listing: &DirectoryListing,
  )
  {
    for e in &listing.entries
    {
      self.selected.insert(e.name.clone());
    }
  }

  pub fn deselect_all(&mut self)
  {
    self.selected.clear();
  }

  /// Called on navigation.
  pub fn clear(&mut self)
  {
    self.selected.clear();
  }

  /// Drop names no longer present in the listing.
  pub fn retain(
    &mut self,
    listing: &DirectoryListing,
  )
  {
    self.selected.retain(|n| listing.contains(n));
  }

  /// Selected names in deterministic (lexical) order.
  pub fn names(&self) -> Vec<String>
  {
    self.selected.iter().cloned().collect()
  }
}
