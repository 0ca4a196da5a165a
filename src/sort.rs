//! Sort engine: column/direction ordering with deterministic tie-breaking.

use std::cmp::Ordering;

use crate::model::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey
{
  Name,
  Size,
  Modified,
}

/// Active sort column and direction.
///
/// Re-selecting the active column toggles the direction; selecting a new
/// column resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState
{
  pub key:     SortKey,
  pub reverse: bool,
}

impl Default for SortState
{
  fn default() -> Self
  {
    Self { key: SortKey::Name, reverse: false }
  }
}

impl SortState
{
  pub fn select(
    &mut self,
    key: SortKey,
  )
  {
    if self.key == key
    {
      self.reverse = !self.reverse;
    }
    else
    {
      self.key = key;
      self.reverse = false;
    }
  }
}

fn fold(name: &str) -> String
{
  name.to_lowercase()
}

fn primary(
  a: &Entry,
  b: &Entry,
  key: SortKey,
) -> Ordering
{
  match key
  {
    SortKey::Name => fold(&a.name).cmp(&fold(&b.name)),
    // Absent size (directories, unknown) compares as zero.
    SortKey::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
    // Absent mtime compares as the epoch, so it always sorts oldest.
    SortKey::Modified =>
    {
      a.last_modified.unwrap_or(0).cmp(&b.last_modified.unwrap_or(0))
    }
  }
}

/// Compare two entries under the given column and direction.
///
/// The direction reverses the chosen column's comparison only; ties then
/// break directories-before-files, then case-insensitive name, then raw
/// name. With unique names within a listing this is a total order, so a
/// re-sort of an unchanged set is always a no-op.
pub fn compare(
  a: &Entry,
  b: &Entry,
  state: SortState,
) -> Ordering
{
  let mut ord = primary(a, b, state.key);
  if state.reverse
  {
    ord = ord.reverse();
  }
  ord
    .then_with(|| match (a.is_dir(), b.is_dir())
    {
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      _ => Ordering::Equal,
    })
    .then_with(|| fold(&a.name).cmp(&fold(&b.name)))
    .then_with(|| a.name.cmp(&b.name))
}

/// Order `entries` per the active column and direction.
pub fn sort_entries(
  entries: &mut [Entry],
  state: SortState,
)
{
  entries.sort_by(|a, b| compare(a, b, state));
}
