//! Input handling for keyboard events.

use std::io;

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
};

use crate::{
  app::App,
  sort::SortKey,
};

/// Accept a terminal key event and mutate the [`App`] accordingly.
///
/// Returns `Ok(true)` when the caller should exit. Overlays capture input
/// first; the remaining keys drive the directory view.
pub fn handle_key(
  app: &mut App,
  key: KeyEvent,
) -> io::Result<bool>
{
  // Ignore key release/repeat events to avoid double-processing (esp. on
  // Windows)
  if key.kind != KeyEventKind::Press
  {
    return Ok(false);
  }

  if app.get_show_prompt()
  {
    handle_prompt_key(app, key);
    return Ok(false);
  }
  if app.get_show_panel()
  {
    handle_panel_key(app, key);
    return Ok(false);
  }
  if app.get_show_messages()
  {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('m'))
    {
      app.toggle_messages();
    }
    return Ok(false);
  }

  match key.code
  {
    KeyCode::Char('q') =>
    {
      app.request_quit();
      return Ok(true);
    }
    KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
    KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
    KeyCode::Char('g') => app.cursor_top(),
    KeyCode::Char('G') => app.cursor_bottom(),
    KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right =>
    {
      let _ = app.open_cursor_entry();
    }
    KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left =>
    {
      let _ = app.open_parent();
    }
    KeyCode::Char(' ') => app.toggle_select_current(),
    KeyCode::Char('a') => app.select_all(),
    KeyCode::Char('A') => app.deselect_all(),
    KeyCode::Char('n') => app.sort_by(SortKey::Name),
    KeyCode::Char('s') => app.sort_by(SortKey::Size),
    KeyCode::Char('t') => app.sort_by(SortKey::Modified),
    KeyCode::Char('v') => app.cycle_explorer_mode(),
    KeyCode::Char('c') => app.open_panel(),
    KeyCode::Char('m') => app.toggle_messages(),
    KeyCode::Char('r') =>
    {
      let path = app.listing().requested_path.clone();
      let _ = app.request_navigation(&path);
    }
    _ =>
    {}
  }
  Ok(false)
}

fn handle_prompt_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match key.code
  {
    KeyCode::Esc => app.cancel_prompt(),
    KeyCode::Enter => app.confirm_prompt(),
    KeyCode::Backspace => app.prompt_backspace(),
    KeyCode::Char(ch) => app.prompt_insert(ch),
    _ =>
    {}
  }
}

fn handle_panel_key(
  app: &mut App,
  key: KeyEvent,
)
{
  match key.code
  {
    KeyCode::Esc | KeyCode::Char('c') => app.close_overlay(),
    KeyCode::Char('j') | KeyCode::Down => app.panel_move(1),
    KeyCode::Char('k') | KeyCode::Up => app.panel_move(-1),
    KeyCode::Enter => app.activate_panel_entry(),
    _ =>
    {}
  }
}
