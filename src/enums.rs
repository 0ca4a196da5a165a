// Centralized helpers to convert between enums and strings

use crate::{
  app::ExplorerMode,
  commands::Command,
  sort::SortKey,
};

#[inline]
pub fn sort_key_to_str(k: SortKey) -> &'static str {
  match k {
    SortKey::Name => "name",
    SortKey::Size => "size",
    SortKey::Modified => "last_modified",
  }
}

pub fn sort_key_from_str(s: &str) -> Option<SortKey> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "name" | "n" => Some(SortKey::Name),
    "size" | "s" => Some(SortKey::Size),
    "last_modified" | "modified" | "mtime" | "time" | "date" | "t" => {
      Some(SortKey::Modified)
    }
    _ => None,
  }
}

#[inline]
pub fn explorer_mode_to_str(m: ExplorerMode) -> &'static str {
  match m {
    ExplorerMode::Table => "table",
    ExplorerMode::Gallery => "gallery",
    ExplorerMode::Gallery2 => "gallery2",
  }
}

pub fn explorer_mode_from_str(s: &str) -> Option<ExplorerMode> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "table" | "t" => Some(ExplorerMode::Table),
    "gallery" | "g" => Some(ExplorerMode::Gallery),
    "gallery2" | "g2" => Some(ExplorerMode::Gallery2),
    _ => None,
  }
}

#[inline]
pub fn command_to_str(c: Command) -> &'static str {
  match c {
    Command::Mkdir => "mkdir",
    Command::Mkzip => "mkzip",
    Command::Mkfile => "mkfile",
    Command::Upload => "upload",
    Command::UploadDir => "uploaddir",
    Command::Source => "source",
    Command::Exec => "exec",
    Command::Browse => "browse",
    Command::Edit => "edit",
    Command::EditX => "editx",
    Command::Download => "download",
    Command::Move => "move",
    Command::Copy => "copy",
    Command::Link => "link",
    Command::Delete => "delete",
  }
}

pub fn command_from_str(s: &str) -> Option<Command> {
  let low = s.to_ascii_lowercase();
  match low.as_str() {
    "mkdir" => Some(Command::Mkdir),
    "mkzip" => Some(Command::Mkzip),
    "mkfile" => Some(Command::Mkfile),
    "upload" => Some(Command::Upload),
    "uploaddir" => Some(Command::UploadDir),
    "source" => Some(Command::Source),
    "exec" => Some(Command::Exec),
    "browse" => Some(Command::Browse),
    "edit" => Some(Command::Edit),
    "editx" => Some(Command::EditX),
    "download" => Some(Command::Download),
    "move" => Some(Command::Move),
    "copy" => Some(Command::Copy),
    "link" => Some(Command::Link),
    "delete" => Some(Command::Delete),
    _ => None,
  }
}
