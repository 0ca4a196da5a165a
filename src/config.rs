//! Session configuration, built once by the host and passed into the
//! controller. Nothing in the core reads ambient/global state.

use crate::app::ExplorerMode;

#[derive(Debug, Clone)]
pub struct Config
{
  /// Name of the serving root, used as the breadcrumb root label.
  pub site_name:      String,
  /// Whether the serving host permits local-process commands (exec,
  /// open-in-browser). Fixed for the lifetime of the session.
  pub is_local:       bool,
  /// Show dotfiles in local listings.
  pub show_hidden:    bool,
  /// chrono format string for the modified column.
  pub date_format:    Option<String>,
  /// Cap on entries kept per listing.
  pub max_list_items: usize,
  /// Rendering style at startup.
  pub start_mode:     ExplorerMode,
}

impl Default for Config
{
  fn default() -> Self
  {
    Self {
      site_name:      String::from("site"),
      is_local:       true,
      show_hidden:    false,
      date_format:    None,
      max_list_items: 5000,
      start_mode:     ExplorerMode::Table,
    }
  }
}
