use std::{
  io,
  time::Duration,
};

use crossterm::{
  event,
  event::Event,
  execute,
  terminal::{
    EnterAlternateScreen,
    LeaveAlternateScreen,
    disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
};

use crate::{
  app::App,
  executor::CommandExecutor,
  model,
  source::ListingSource,
};

/// Hand outstanding navigation and command work to the collaborators.
///
/// Kept separate from drawing so tests can drive the same drain logic with
/// fake sources and executors.
pub fn drain_pending(
  app: &mut App,
  source: &mut dyn ListingSource,
  executor: &mut dyn CommandExecutor,
)
{
  if let Some(nav) = app.take_pending_nav()
  {
    let result = source.fetch(&nav.path).map(model::ingest);
    app.complete_navigation(nav.seq, result);
  }
  if let Some(req) = app.take_pending_command()
  {
    let result = executor.execute(&req);
    app.on_command_result(req.command, result);
    // A successful command re-requests the current path; resolve that
    // navigation in the same pass so the refresh is visible immediately.
    if let Some(nav) = app.take_pending_nav()
    {
      let result = source.fetch(&nav.path).map(model::ingest);
      app.complete_navigation(nav.seq, result);
    }
  }
}

pub fn run_app(
  app: &mut App,
  source: &mut dyn ListingSource,
  executor: &mut dyn CommandExecutor,
) -> Result<(), Box<dyn std::error::Error>>
{
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;
  terminal.clear()?;

  // Ensure we always restore the terminal even if an error occurs during
  // event handling
  let res: Result<(), Box<dyn std::error::Error>> = {
    let mut result: Result<(), Box<dyn std::error::Error>> = Ok(());
    loop
    {
      drain_pending(app, source, executor);
      if app.get_force_full_redraw()
      {
        let _ = terminal.clear();
        app.set_force_full_redraw(false);
      }
      if let Err(e) = terminal.draw(|f| crate::ui::draw(f, app))
      {
        result = Err(e.into());
        break;
      }
      match crossterm::event::poll(Duration::from_millis(200))
      {
        Ok(true) => match event::read()
        {
          Ok(Event::Key(key)) => match crate::input::handle_key(app, key)
          {
            Ok(true) => break, // graceful exit
            Ok(false) =>
            {}
            Err(e) =>
            {
              result = Err(e.into());
              break;
            }
          },
          Ok(Event::Resize(_, _)) =>
          {}
          Ok(_) =>
          {}
          Err(e) =>
          {
            result = Err(e.into());
            break;
          }
        },
        Ok(false) =>
        {}
        Err(e) =>
        {
          result = Err(e.into());
          break;
        }
      }
    }
    result
  };

  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;
  res
}
