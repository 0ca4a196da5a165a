//! Listing sources: the navigation collaborator behind the controller.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
  time::UNIX_EPOCH,
};

use crate::model::{
  RawEntry,
  RawListing,
};

/// Resolves a requested path to a raw listing. Implementations own path
/// resolution and any transport; the controller only consumes the result.
pub trait ListingSource
{
  fn fetch(
    &mut self,
    path: &str,
  ) -> io::Result<RawListing>;
}

/// Filesystem-backed source serving a local directory tree as the site.
pub struct LocalSource
{
  root:        PathBuf,
  site_name:   String,
  show_hidden: bool,
}

impl LocalSource
{
  pub fn new(
    root: PathBuf,
    site_name: &str,
    show_hidden: bool,
  ) -> Self
  {
    Self { root, site_name: site_name.to_string(), show_hidden }
  }

  /// Resolve a requested path under the root. Relative traversal segments
  /// are rejected rather than resolved.
  fn resolve(
    &self,
    path: &str,
  ) -> io::Result<PathBuf>
  {
    let mut out = self.root.clone();
    for seg in path.split('/').filter(|s| !s.is_empty())
    {
      if seg == "." || seg == ".."
      {
        return Err(io::Error::new(
          io::ErrorKind::InvalidInput,
          format!("invalid path segment in '{}'", path),
        ));
      }
      out.push(seg);
    }
    Ok(out)
  }
}

impl ListingSource for LocalSource
{
  fn fetch(
    &mut self,
    path: &str,
  ) -> io::Result<RawListing>
  {
    let dir = self.resolve(path)?;
    let entries = read_dir_raw(&dir, self.show_hidden)?;
    Ok(RawListing {
      site_name:      self.site_name.clone(),
      base_path:      self.root.display().to_string(),
      requested_path: path.trim_matches('/').to_string(),
      entries,
    })
  }
}

/// Read one directory into raw entries, in directory-iteration order.
/// Hidden files (dotfiles) are filtered when `show_hidden` is false.
/// Unreadable items are skipped, not fatal to the listing.
pub fn read_dir_raw(
  dir: &Path,
  show_hidden: bool,
) -> io::Result<Vec<RawEntry>>
{
  use std::fs;
  let entries: Vec<RawEntry> = fs::read_dir(dir)?
    .filter_map(|res| res.ok())
    .filter_map(|e| {
      let name = e.file_name().to_string_lossy().to_string();
      if !show_hidden && name.starts_with('.')
      {
        return None;
      }
      match e.file_type()
      {
        Ok(ft) =>
        {
          let is_dir = ft.is_dir();
          let meta = fs::metadata(e.path()).ok();
          let size = if is_dir
          {
            None
          }
          else
          {
            meta.as_ref().map(|m| m.len())
          };
          let mtime = meta
            .as_ref()
            .and_then(|m| m.modified().ok())
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64);
          Some(RawEntry {
            name,
            kind: if is_dir { "dir" } else { "file" }.to_string(),
            size,
            last_modified: mtime,
          })
        }
        Err(_) => None,
      }
    })
    .collect();
  Ok(entries)
}
