//! Navigation, stale-response guarding, and the sorted projection.

use std::io;

use crate::{
  app::{
    App,
    PendingNav,
  },
  breadcrumb,
  model::{
    DirectoryListing,
    Entry,
  },
  sort,
  sort::SortKey,
  trace,
};

impl App
{
  /// Request navigation to `path`.
  ///
  /// The previous listing stays on screen until the result arrives; a
  /// second request before then supersedes the first, whose late result is
  /// discarded by [`complete_navigation`].
  ///
  /// [`complete_navigation`]: App::complete_navigation
  pub fn request_navigation(
    &mut self,
    path: &str,
  ) -> PendingNav
  {
    self.nav_seq += 1;
    let pending = PendingNav { seq: self.nav_seq, path: path.to_string() };
    trace::log(format!("[nav] request seq={} path='{}'", pending.seq, path));
    self.pending_nav = Some(pending.clone());
    pending
  }

  /// Take the outstanding navigation request, if any, for the runtime to
  /// hand to the listing source.
  pub fn take_pending_nav(&mut self) -> Option<PendingNav>
  {
    self.pending_nav.take()
  }

  /// Deliver a navigation result.
  ///
  /// A result whose sequence number is not the most recent request is
  /// stale and silently discarded. On success the listing is swapped in
  /// wholesale and selection and sort reset to defaults; on failure the
  /// last known-good listing and selection are kept and the failure is
  /// surfaced as a message.
  pub fn complete_navigation(
    &mut self,
    seq: u64,
    result: io::Result<DirectoryListing>,
  )
  {
    if seq != self.nav_seq
    {
      trace::log(format!(
        "[nav] stale result seq={} (current {}), discarded",
        seq, self.nav_seq
      ));
      return;
    }
    // The request is answered either way; nothing may re-fetch it.
    if self.pending_nav.as_ref().is_some_and(|p| p.seq == seq)
    {
      self.pending_nav = None;
    }
    match result
    {
      Ok(mut listing) =>
      {
        if listing.entries.len() > self.config.max_list_items
        {
          listing.entries.truncate(self.config.max_list_items);
        }
        trace::log(format!(
          "[nav] arrived seq={} path='{}' entries={}",
          seq,
          listing.requested_path,
          listing.entries.len()
        ));
        self.listing = listing;
        self.selection.clear();
        self.sort = crate::sort::SortState::default();
        self.resort();
        self.list_state.select(
          if self.visible_entries.is_empty() { None } else { Some(0) },
        );
        self.force_full_redraw = true;
      }
      Err(e) =>
      {
        trace::log(format!("[nav] failed seq={}: {}", seq, e));
        self.add_message(&format!("Open failed: {}", e));
      }
    }
  }

  /// Rebuild the sorted projection, keeping the cursor on the same entry
  /// when it survives the re-order.
  pub(crate) fn resort(&mut self)
  {
    let current_name = self.cursor_entry().map(|e| e.name.clone());
    self.visible_entries = self.listing.entries.clone();
    sort::sort_entries(&mut self.visible_entries, self.sort);
    if let Some(name) = current_name
      && let Some(idx) =
        self.visible_entries.iter().position(|e| e.name == name)
    {
      self.list_state.select(Some(idx));
      return;
    }
    // Clamp the cursor when the remembered entry is gone
    let max_idx = self.visible_entries.len().saturating_sub(1);
    match self.list_state.selected()
    {
      Some(sel) =>
      {
        self.list_state.select(
          if self.visible_entries.is_empty()
          {
            None
          }
          else
          {
            Some(sel.min(max_idx))
          },
        );
      }
      None =>
      {
        if !self.visible_entries.is_empty()
        {
          self.list_state.select(Some(0));
        }
      }
    }
  }

  /// Select a sort column; re-selecting the active column flips direction.
  pub fn sort_by(
    &mut self,
    key: SortKey,
  )
  {
    self.sort.select(key);
    self.resort();
    self.force_full_redraw = true;
  }

  pub fn cursor_entry(&self) -> Option<&Entry>
  {
    self.list_state.selected().and_then(|i| self.visible_entries.get(i))
  }

  pub fn cursor_index(&self) -> Option<usize>
  {
    self.list_state.selected()
  }

  pub fn move_cursor(
    &mut self,
    delta: isize,
  )
  {
    if self.visible_entries.is_empty()
    {
      return;
    }
    let len = self.visible_entries.len() as isize;
    let cur = self.list_state.selected().unwrap_or(0) as isize;
    let idx = (cur + delta).clamp(0, len - 1);
    self.list_state.select(Some(idx as usize));
  }

  pub fn cursor_top(&mut self)
  {
    if !self.visible_entries.is_empty()
    {
      self.list_state.select(Some(0));
    }
  }

  pub fn cursor_bottom(&mut self)
  {
    if !self.visible_entries.is_empty()
    {
      self.list_state.select(Some(self.visible_entries.len() - 1));
    }
  }

  /// Enter the directory under the cursor, if any.
  pub fn open_cursor_entry(&mut self) -> Option<PendingNav>
  {
    let target = match self.cursor_entry()
    {
      Some(e) if e.is_dir() =>
      {
        breadcrumb::child_path(&self.listing.requested_path, &e.name)
      }
      _ => return None,
    };
    Some(self.request_navigation(&target))
  }

  /// Navigate to the parent location, if not already at the root.
  pub fn open_parent(&mut self) -> Option<PendingNav>
  {
    let parent = breadcrumb::parent_path(&self.listing.requested_path)?;
    Some(self.request_navigation(&parent))
  }
}
