//! Command panel: the command catalog, availability rules, and dispatch
//! request type.
//!
//! Availability is a pure function of the selection summary and the session
//! capabilities, so tests can enumerate every input combination instead of
//! poking at per-widget flags.

use crate::{
  config::Config,
  model::DirectoryListing,
  selection::SelectionTracker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command
{
  Mkdir,
  Mkzip,
  Mkfile,
  Upload,
  UploadDir,
  Source,
  Exec,
  Browse,
  Edit,
  EditX,
  Download,
  Move,
  Copy,
  Link,
  Delete,
}

/// Every command, in panel display order.
pub const ALL: [Command; 15] = [
  Command::Mkdir,
  Command::Mkzip,
  Command::Mkfile,
  Command::Upload,
  Command::UploadDir,
  Command::Source,
  Command::Exec,
  Command::Browse,
  Command::Edit,
  Command::EditX,
  Command::Download,
  Command::Move,
  Command::Copy,
  Command::Link,
  Command::Delete,
];

/// Selection precondition of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Need
{
  /// No selection required; available regardless of the selection.
  Nothing,
  /// Exactly one entry selected.
  Single,
  /// Exactly one entry selected, and it must be a file.
  SingleFile,
  /// One or more entries selected.
  OneOrMore,
}

fn need(cmd: Command) -> Need
{
  use Command::*;
  match cmd
  {
    Mkdir | Mkzip | Mkfile | Upload | UploadDir | Source | Exec | Browse =>
    {
      Need::Nothing
    }
    Edit | EditX => Need::SingleFile,
    Download => Need::Single,
    Move | Copy | Link | Delete => Need::OneOrMore,
  }
}

/// Commands meaningless outside a local session. These stay visible when
/// the session is not local, but disabled, so the capability is
/// discoverable even when unavailable.
fn local_only(cmd: Command) -> bool
{
  matches!(cmd, Command::Exec | Command::Browse)
}

/// Opaque prompt label key plus the selection count to substitute into it.
/// The controller never interprets localized text beyond this substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt
{
  pub key:   &'static str,
  pub count: usize,
}

fn prompt_for(
  cmd: Command,
  count: usize,
) -> Option<Prompt>
{
  let key = match (cmd, count)
  {
    (Command::Move, 1) => "prompt.move.one",
    (Command::Move, _) => "prompt.move.many",
    (Command::Copy, 1) => "prompt.copy.one",
    (Command::Copy, _) => "prompt.copy.many",
    (Command::Link, 1) => "prompt.link.one",
    (Command::Link, _) => "prompt.link.many",
    // Delete confirmation is an external collaborator concern.
    _ => return None,
  };
  Some(Prompt { key, count })
}

/// What the selection currently looks like, as far as availability cares.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSummary
{
  pub count:          usize,
  pub single_is_file: bool,
}

impl SelectionSummary
{
  /// Summarize a tracker against its listing.
  pub fn of(
    selection: &SelectionTracker,
    listing: &DirectoryListing,
  ) -> Self
  {
    let names = selection.names();
    let single_is_file = match names.as_slice()
    {
      [name] => listing.entry(name).map(|e| !e.is_dir()).unwrap_or(false),
      _ => false,
    };
    Self { count: names.len(), single_is_file }
  }
}

/// Availability of one command: hidden, visible-but-disabled, or enabled,
/// plus the prompt it requires before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability
{
  pub visible: bool,
  pub enabled: bool,
  pub prompt:  Option<Prompt>,
}

impl Availability
{
  const HIDDEN: Self = Self { visible: false, enabled: false, prompt: None };
}

/// Compute one command's availability from the selection summary and the
/// session capabilities.
///
/// A command whose selection precondition is unmet is hidden outright;
/// `exec`/`browse` under a non-local session are the one exception, kept
/// visible but disabled.
pub fn availability(
  cmd: Command,
  sel: SelectionSummary,
  config: &Config,
) -> Availability
{
  let met = match need(cmd)
  {
    Need::Nothing => true,
    Need::Single => sel.count == 1,
    Need::SingleFile => sel.count == 1 && sel.single_is_file,
    Need::OneOrMore => sel.count >= 1,
  };
  if !met
  {
    return Availability::HIDDEN;
  }
  if local_only(cmd) && !config.is_local
  {
    return Availability { visible: true, enabled: false, prompt: None };
  }
  Availability { visible: true, enabled: true, prompt: prompt_for(cmd, sel.count) }
}

/// Availability of every command, in panel order.
pub fn availability_table(
  sel: SelectionSummary,
  config: &Config,
) -> Vec<(Command, Availability)>
{
  ALL.iter().map(|&c| (c, availability(c, sel, config))).collect()
}

/// A dispatch request handed to the external operation executor.
///
/// `destination` carries the answered move/copy/link prompt input; it is
/// `None` for promptless commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest
{
  pub command:     Command,
  pub names:       Vec<String>,
  pub path:        String,
  pub destination: Option<String>,
}
