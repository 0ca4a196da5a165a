//! Render-ready projection of the controller state.
//!
//! Renderers (and tests) consume this instead of reaching into the
//! controller, so the view model can be exercised without a terminal.

use crate::{
  app::{
    App,
    ExplorerMode,
  },
  breadcrumb::{
    self,
    Crumb,
  },
  ui::format,
};

/// One listed entry, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row
{
  pub name:          String,
  pub is_dir:        bool,
  pub selected:      bool,
  /// Humanized size; `"0 B"` for an actual zero, blank when absent.
  pub size_text:     String,
  pub modified_text: String,
}

/// Everything a renderer needs for one frame of the directory view.
#[derive(Debug, Clone)]
pub struct ViewModel
{
  pub site_name: String,
  pub crumbs:    Vec<Crumb>,
  pub mode:      ExplorerMode,
  pub rows:      Vec<Row>,
  pub selected:  usize,
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn build(app: &App) -> ViewModel
{
  let listing = app.listing();
  let fmt =
    app.config().date_format.as_deref().unwrap_or(DATE_FORMAT).to_string();
  let rows = app
    .visible_entries()
    .iter()
    .map(|e| {
      Row {
        name:          e.name.clone(),
        is_dir:        e.is_dir(),
        selected:      app.selection().contains(&e.name),
        size_text:     e
          .size
          .map(format::human_size)
          .unwrap_or_default(),
        modified_text: e
          .last_modified
          .map(|t| format::format_epoch(t, &fmt))
          .unwrap_or_default(),
      }
    })
    .collect();
  ViewModel {
    site_name: listing.site_name.clone(),
    crumbs:    breadcrumb::build(&listing.site_name, &listing.requested_path),
    mode:      app.explorer_mode(),
    rows,
    selected:  app.selection().len(),
  }
}
