//! Core controller state, used both by the TUI and integration tests.
//!
//! The [`App`] struct is the single mutation point for every event:
//! navigation, selection changes, sort changes, explorer mode switches, and
//! command panel interaction. The binary owns an instance, but tests can
//! create their own and drive it without a terminal.

use ratatui::widgets::ListState;

use crate::{
  commands::{
    Command,
    CommandRequest,
    Prompt,
  },
  config::Config,
  model::{
    DirectoryListing,
    Entry,
  },
  selection::SelectionTracker,
  sort::SortState,
};

mod nav;
mod panel;
mod select;

/// Rendering style for the same underlying entries. Switching never alters
/// the selection or the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerMode
{
  Table,
  Gallery,
  Gallery2,
}

impl ExplorerMode
{
  pub fn next(self) -> Self
  {
    match self
    {
      Self::Table => Self::Gallery,
      Self::Gallery => Self::Gallery2,
      Self::Gallery2 => Self::Table,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PanelState
{
  pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct PromptState
{
  pub command: Command,
  pub prompt:  Prompt,
  pub input:   String,
  pub cursor:  usize,
}

#[derive(Debug, Clone)]
pub enum Overlay
{
  None,
  Messages,
  Panel(Box<PanelState>),
  Prompt(Box<PromptState>),
}

/// A navigation that has been requested but whose listing has not arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNav
{
  pub seq:  u64,
  pub path: String,
}

/// Long-lived controller driving the directory view and command panel.
pub struct App
{
  pub(crate) config:            Config,
  pub(crate) listing:           DirectoryListing,
  // Sorted projection of `listing.entries`; the listing itself stays in
  // server order and is never patched in place.
  pub(crate) visible_entries:   Vec<Entry>,
  pub(crate) list_state:        ListState,
  pub(crate) selection:         SelectionTracker,
  pub(crate) sort:              SortState,
  pub(crate) explorer_mode:     ExplorerMode,
  pub(crate) nav_seq:           u64,
  pub(crate) pending_nav:       Option<PendingNav>,
  pub(crate) pending_command:   Option<CommandRequest>,
  pub(crate) overlay:           Overlay,
  pub(crate) recent_messages:   Vec<String>,
  pub(crate) force_full_redraw: bool,
  pub(crate) should_quit:       bool,
}

impl App
{
  /// Construct a controller with an empty listing; the first navigation is
  /// requested by the caller.
  pub fn new(config: Config) -> Self
  {
    let listing = DirectoryListing::empty(&config.site_name);
    let explorer_mode = config.start_mode;
    Self {
      config,
      listing,
      visible_entries: Vec::new(),
      list_state: ListState::default(),
      selection: SelectionTracker::new(),
      sort: SortState::default(),
      explorer_mode,
      nav_seq: 0,
      pending_nav: None,
      pending_command: None,
      overlay: Overlay::None,
      recent_messages: Vec::new(),
      force_full_redraw: false,
      should_quit: false,
    }
  }

  pub fn config(&self) -> &Config
  {
    &self.config
  }

  pub fn listing(&self) -> &DirectoryListing
  {
    &self.listing
  }

  pub fn visible_entries(&self) -> &[Entry]
  {
    &self.visible_entries
  }

  pub fn selection(&self) -> &SelectionTracker
  {
    &self.selection
  }

  pub fn sort_state(&self) -> SortState
  {
    self.sort
  }

  pub fn explorer_mode(&self) -> ExplorerMode
  {
    self.explorer_mode
  }

  /// Cycle table -> gallery -> gallery2 -> table.
  pub fn cycle_explorer_mode(&mut self)
  {
    self.explorer_mode = self.explorer_mode.next();
    self.force_full_redraw = true;
  }

  pub fn get_quit(&self) -> bool
  {
    self.should_quit
  }

  pub fn request_quit(&mut self)
  {
    self.should_quit = true;
  }

  pub fn get_force_full_redraw(&self) -> bool
  {
    self.force_full_redraw
  }

  pub fn set_force_full_redraw(
    &mut self,
    v: bool,
  )
  {
    self.force_full_redraw = v;
  }

  pub fn get_show_messages(&self) -> bool
  {
    matches!(self.overlay, Overlay::Messages)
  }

  pub fn toggle_messages(&mut self)
  {
    self.overlay = match self.overlay
    {
      Overlay::Messages => Overlay::None,
      _ => Overlay::Messages,
    };
    self.force_full_redraw = true;
  }

  pub fn recent_messages(&self) -> &[String]
  {
    &self.recent_messages
  }

  pub fn add_message(
    &mut self,
    msg: &str,
  )
  {
    let m = msg.trim().to_string();
    if m.is_empty()
    {
      return;
    }
    self.recent_messages.push(m);
    if self.recent_messages.len() > 100
    {
      let _ = self.recent_messages.drain(0..self.recent_messages.len() - 100);
    }
    self.force_full_redraw = true;
  }

  pub(crate) fn close_overlay(&mut self)
  {
    self.overlay = Overlay::None;
    self.force_full_redraw = true;
  }
}
