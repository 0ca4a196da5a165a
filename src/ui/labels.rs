//! Label-key lookup: the i18n collaborator boundary.
//!
//! The controller references labels and prompts by opaque key only; this
//! module resolves keys to display text, substituting the selection count
//! into the plural prompt forms. Swapping in a real localization backend
//! only touches this file.

use crate::commands::{
  Command,
  Prompt,
};

pub fn command_label(cmd: Command) -> &'static str
{
  match cmd
  {
    Command::Mkdir => "New Folder",
    Command::Mkzip => "New Zip",
    Command::Mkfile => "New File",
    Command::Upload => "Upload Files",
    Command::UploadDir => "Upload Folder",
    Command::Source => "View Source",
    Command::Exec => "Run Natively",
    Command::Browse => "Open in Browser",
    Command::Edit => "Edit",
    Command::EditX => "Edit (extended)",
    Command::Download => "Download",
    Command::Move => "Move",
    Command::Copy => "Copy",
    Command::Link => "Create Link",
    Command::Delete => "Delete",
  }
}

/// Resolve a prompt key, substituting the selection count into plural
/// forms.
pub fn prompt_text(prompt: Prompt) -> String
{
  match prompt.key
  {
    "prompt.move.one" => String::from("Move selected item to:"),
    "prompt.move.many" =>
    {
      format!("Move {} selected items to:", prompt.count)
    }
    "prompt.copy.one" => String::from("Copy selected item to:"),
    "prompt.copy.many" =>
    {
      format!("Copy {} selected items to:", prompt.count)
    }
    "prompt.link.one" => String::from("Link selected item into:"),
    "prompt.link.many" =>
    {
      format!("Link {} selected items into:", prompt.count)
    }
    other => other.to_string(),
  }
}
