//! Selection operations routed through the controller.

use crate::{
  app::App,
  commands::SelectionSummary,
};

impl App
{
  pub fn toggle_select_current(&mut self)
  {
    if let Some(name) = self.cursor_entry().map(|e| e.name.clone())
    {
      self.selection.toggle(&name);
    }
  }

  pub fn select_all(&mut self)
  {
    self.selection.select_all(&self.listing);
  }

  pub fn deselect_all(&mut self)
  {
    self.selection.deselect_all();
  }

  /// Selection summary used by command availability.
  pub fn selection_summary(&self) -> SelectionSummary
  {
    SelectionSummary::of(&self.selection, &self.listing)
  }
}
