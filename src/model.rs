//! Entry model and directory listings as received from a listing source.

/// Kind of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind
{
  File,
  Dir,
}

/// One normalized item within a listing.
///
/// `size` is absent for directories or when unknown; a size of zero is a
/// real value and renders as `0`, not blank. `last_modified` is seconds
/// since the epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry
{
  pub name:          String,
  pub kind:          EntryKind,
  pub size:          Option<u64>,
  pub last_modified: Option<i64>,
}

impl Entry
{
  pub fn is_dir(&self) -> bool
  {
    matches!(self.kind, EntryKind::Dir)
  }
}

/// An item exactly as a listing source reported it, before validation.
/// `kind` is a free-form string; anything other than "file" or "dir" is a
/// collaborator contract violation and gets filtered at ingestion.
#[derive(Debug, Clone)]
pub struct RawEntry
{
  pub name:          String,
  pub kind:          String,
  pub size:          Option<u64>,
  pub last_modified: Option<i64>,
}

/// Raw navigation response: path context plus unvalidated entries.
#[derive(Debug, Clone)]
pub struct RawListing
{
  pub site_name:      String,
  pub base_path:      String,
  pub requested_path: String,
  pub entries:        Vec<RawEntry>,
}

/// One browsed location. Constructed once per navigation from a fresh
/// source response, immutable for the duration of that view, and replaced
/// wholesale on the next navigation.
#[derive(Debug, Clone)]
pub struct DirectoryListing
{
  pub site_name:      String,
  pub base_path:      String,
  pub requested_path: String,
  pub entries:        Vec<Entry>,
}

impl DirectoryListing
{
  /// An empty listing used before the first navigation completes.
  pub fn empty(site_name: &str) -> Self
  {
    Self {
      site_name:      site_name.to_string(),
      base_path:      String::new(),
      requested_path: String::new(),
      entries:        Vec::new(),
    }
  }

  pub fn contains(
    &self,
    name: &str,
  ) -> bool
  {
    self.entries.iter().any(|e| e.name == name)
  }

  pub fn entry(
    &self,
    name: &str,
  ) -> Option<&Entry>
  {
    self.entries.iter().find(|e| e.name == name)
  }
}

/// Validate a raw listing into a [`DirectoryListing`].
///
/// Items with an empty name or an unrecognized kind are dropped, as is any
/// item whose name was already seen (first occurrence wins). Drops are
/// traced, never surfaced; a malformed item must not take down the listing.
pub fn ingest(raw: RawListing) -> DirectoryListing
{
  let mut entries: Vec<Entry> = Vec::with_capacity(raw.entries.len());
  for item in raw.entries
  {
    if item.name.is_empty()
    {
      crate::trace::log("[ingest] dropped entry with empty name");
      continue;
    }
    let kind = match item.kind.as_str()
    {
      "file" => EntryKind::File,
      "dir" => EntryKind::Dir,
      other =>
      {
        crate::trace::log(format!(
          "[ingest] dropped '{}': unknown kind '{}'",
          item.name, other
        ));
        continue;
      }
    };
    if entries.iter().any(|e: &Entry| e.name == item.name)
    {
      crate::trace::log(format!("[ingest] dropped duplicate '{}'", item.name));
      continue;
    }
    entries.push(Entry {
      name: item.name,
      kind,
      size: item.size,
      last_modified: item.last_modified,
    });
  }
  DirectoryListing {
    site_name: raw.site_name,
    base_path: raw.base_path,
    requested_path: raw.requested_path,
    entries,
  }
}
