//! Command panel interaction: opening, choosing a command, prompt flow,
//! and staging dispatch requests for the runtime.

use crate::{
  app::{
    App,
    Overlay,
    PanelState,
    PromptState,
  },
  commands::{
    self,
    Availability,
    Command,
    CommandRequest,
  },
  trace,
};

impl App
{
  /// Availability of one command under the current selection and session.
  pub fn availability(
    &self,
    cmd: Command,
  ) -> Availability
  {
    commands::availability(cmd, self.selection_summary(), &self.config)
  }

  /// Availability of every command, in panel order.
  pub fn availability_table(&self) -> Vec<(Command, Availability)>
  {
    commands::availability_table(self.selection_summary(), &self.config)
  }

  /// Commands currently visible in the panel.
  pub fn panel_commands(&self) -> Vec<(Command, Availability)>
  {
    self.availability_table().into_iter().filter(|(_, a)| a.visible).collect()
  }

  pub fn get_show_panel(&self) -> bool
  {
    matches!(self.overlay, Overlay::Panel(_))
  }

  pub fn open_panel(&mut self)
  {
    self.overlay = Overlay::Panel(Box::new(PanelState { selected: 0 }));
    self.force_full_redraw = true;
  }

  pub fn panel_selected(&self) -> usize
  {
    match self.overlay
    {
      Overlay::Panel(ref s) => s.selected,
      _ => 0,
    }
  }

  pub fn panel_move(
    &mut self,
    delta: isize,
  )
  {
    let len = self.panel_commands().len();
    if len == 0
    {
      return;
    }
    if let Overlay::Panel(ref mut s) = self.overlay
    {
      let idx = (s.selected as isize + delta).clamp(0, len as isize - 1);
      s.selected = idx as usize;
    }
  }

  /// Activate the highlighted panel entry. Disabled entries do nothing;
  /// prompt-carrying commands open the prompt overlay; the rest are staged
  /// for dispatch immediately.
  pub fn activate_panel_entry(&mut self)
  {
    let idx = match self.overlay
    {
      Overlay::Panel(ref s) => s.selected,
      _ => return,
    };
    let Some((cmd, avail)) = self.panel_commands().into_iter().nth(idx)
    else
    {
      return;
    };
    if !avail.enabled
    {
      return;
    }
    match avail.prompt
    {
      Some(prompt) =>
      {
        self.overlay = Overlay::Prompt(Box::new(PromptState {
          command: cmd,
          prompt,
          input: String::new(),
          cursor: 0,
        }));
        self.force_full_redraw = true;
      }
      None =>
      {
        self.close_overlay();
        self.stage_command(cmd, None);
      }
    }
  }

  pub fn get_show_prompt(&self) -> bool
  {
    matches!(self.overlay, Overlay::Prompt(_))
  }

  pub fn prompt_state(&self) -> Option<&PromptState>
  {
    match self.overlay
    {
      Overlay::Prompt(ref s) => Some(s),
      _ => None,
    }
  }

  pub fn prompt_insert(
    &mut self,
    ch: char,
  )
  {
    if let Overlay::Prompt(ref mut s) = self.overlay
    {
      s.input.insert(s.cursor, ch);
      s.cursor += ch.len_utf8();
    }
  }

  pub fn prompt_backspace(&mut self)
  {
    if let Overlay::Prompt(ref mut s) = self.overlay
      && s.cursor > 0
    {
      let prev = s.input[..s.cursor]
        .chars()
        .next_back()
        .map(|c| c.len_utf8())
        .unwrap_or(0);
      s.cursor -= prev;
      s.input.remove(s.cursor);
    }
  }

  /// Accept the prompt input and stage the command.
  pub fn confirm_prompt(&mut self)
  {
    if let Overlay::Prompt(state) =
      std::mem::replace(&mut self.overlay, Overlay::None)
    {
      let st = *state;
      self.force_full_redraw = true;
      if st.input.trim().is_empty()
      {
        self.add_message("Cancelled: empty destination");
        return;
      }
      self.stage_command(st.command, Some(st.input));
    }
  }

  pub fn cancel_prompt(&mut self)
  {
    if matches!(self.overlay, Overlay::Prompt(_))
    {
      self.close_overlay();
    }
  }

  /// Build and stage a dispatch request for the runtime.
  ///
  /// The panel guarantees this is only reachable for enabled commands; an
  /// unavailable command here is a programming error, not user input.
  pub fn stage_command(
    &mut self,
    cmd: Command,
    destination: Option<String>,
  )
  {
    let avail = self.availability(cmd);
    assert!(
      avail.visible && avail.enabled,
      "command {:?} staged without meeting its precondition",
      cmd
    );
    let req = CommandRequest {
      command: cmd,
      names: self.selection.names(),
      path: self.listing.requested_path.clone(),
      destination,
    };
    trace::log(format!(
      "[panel] staged {:?} names={} path='{}'",
      req.command,
      req.names.len(),
      req.path
    ));
    self.pending_command = Some(req);
  }

  /// Take the staged dispatch request, if any, for the runtime to hand to
  /// the executor.
  pub fn take_pending_command(&mut self) -> Option<CommandRequest>
  {
    self.pending_command.take()
  }

  /// Surface an executor result. Success refreshes the current path;
  /// failure keeps the listing and the selection so the user can retry the
  /// same command on the same entries.
  pub fn on_command_result(
    &mut self,
    cmd: Command,
    result: std::io::Result<String>,
  )
  {
    match result
    {
      Ok(note) =>
      {
        if !note.is_empty()
        {
          self.add_message(&note);
        }
        let path = self.listing.requested_path.clone();
        self.request_navigation(&path);
      }
      Err(e) =>
      {
        self.add_message(&format!("{}: {}", crate::enums::command_to_str(cmd), e));
      }
    }
  }
}
