//! Command executors: the operation collaborator consuming dispatch
//! requests emitted by the controller.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use crate::commands::{
  Command,
  CommandRequest,
};

/// Executes a dispatch request, returning a short note for the message log.
pub trait CommandExecutor
{
  fn execute(
    &mut self,
    req: &CommandRequest,
  ) -> io::Result<String>;
}

/// Executor operating directly on a local directory tree.
///
/// Commands bound to a remote serving host (upload, archive creation,
/// source/edit/download views) report an error here; they belong to
/// collaborators this executor does not ship.
pub struct LocalExecutor
{
  root:     PathBuf,
  is_local: bool,
}

impl LocalExecutor
{
  pub fn new(
    root: PathBuf,
    is_local: bool,
  ) -> Self
  {
    Self { root, is_local }
  }

  fn resolve(
    &self,
    path: &str,
  ) -> io::Result<PathBuf>
  {
    let mut out = self.root.clone();
    for seg in path.split('/').filter(|s| !s.is_empty())
    {
      if seg == "." || seg == ".."
      {
        return Err(io::Error::new(
          io::ErrorKind::InvalidInput,
          format!("invalid path segment in '{}'", path),
        ));
      }
      out.push(seg);
    }
    Ok(out)
  }

  fn destination(
    &self,
    req: &CommandRequest,
  ) -> io::Result<PathBuf>
  {
    let dest = req.destination.as_deref().ok_or_else(|| {
      io::Error::new(io::ErrorKind::InvalidInput, "missing destination")
    })?;
    self.resolve(dest)
  }

  /// Transfer each selected item into the destination directory, skipping
  /// items that already exist there.
  fn transfer(
    &self,
    req: &CommandRequest,
    op: Transfer,
  ) -> io::Result<String>
  {
    let src_dir = self.resolve(&req.path)?;
    let dest_dir = self.destination(req)?;
    std::fs::create_dir_all(&dest_dir)?;
    let mut ok = 0usize;
    let mut skipped = 0usize;
    for name in &req.names
    {
      let src = src_dir.join(name);
      let dst = dest_dir.join(name);
      if dst.exists()
      {
        skipped += 1;
        continue;
      }
      match op
      {
        Transfer::Move => move_path_with_fallback(&src, &dst)?,
        Transfer::Copy => copy_path_recursive(&src, &dst)?,
        Transfer::Link => link_path(&src, &dst)?,
      }
      ok += 1;
    }
    Ok(format!("{:?}: ok={} skipped={}", op, ok, skipped))
  }
}

#[derive(Debug, Clone, Copy)]
enum Transfer
{
  Move,
  Copy,
  Link,
}

impl CommandExecutor for LocalExecutor
{
  fn execute(
    &mut self,
    req: &CommandRequest,
  ) -> io::Result<String>
  {
    match req.command
    {
      Command::Mkdir =>
      {
        let dir = self.resolve(&req.path)?;
        let target = unique_child(&dir, "new-folder", "");
        std::fs::create_dir(&target)?;
        Ok(format!("Created folder '{}'", file_name(&target)))
      }
      Command::Mkfile =>
      {
        let dir = self.resolve(&req.path)?;
        let target = unique_child(&dir, "new-file", ".txt");
        std::fs::File::create_new(&target)?;
        Ok(format!("Created file '{}'", file_name(&target)))
      }
      Command::Delete =>
      {
        let dir = self.resolve(&req.path)?;
        for name in &req.names
        {
          remove_path_all(&dir.join(name))?;
        }
        Ok(format!("Deleted {} item(s)", req.names.len()))
      }
      Command::Move => self.transfer(req, Transfer::Move),
      Command::Copy => self.transfer(req, Transfer::Copy),
      Command::Link => self.transfer(req, Transfer::Link),
      Command::Exec =>
      {
        if !self.is_local
        {
          return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "exec requires a local session",
          ));
        }
        let dir = self.resolve(&req.path)?;
        for name in &req.names
        {
          std::process::Command::new(dir.join(name)).spawn()?;
        }
        Ok(String::new())
      }
      Command::Browse =>
      {
        if !self.is_local
        {
          return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "browse requires a local session",
          ));
        }
        let dir = self.resolve(&req.path)?;
        std::process::Command::new(opener_program()).arg(&dir).spawn()?;
        Ok(String::new())
      }
      Command::Mkzip
      | Command::Upload
      | Command::UploadDir
      | Command::Source
      | Command::Edit
      | Command::EditX
      | Command::Download => Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "handled by the serving host, not available here",
      )),
    }
  }
}

fn file_name(p: &Path) -> String
{
  p.file_name().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
}

/// First non-existing `stem`, `stem-1`, `stem-2`, ... child of `dir`.
fn unique_child(
  dir: &Path,
  stem: &str,
  ext: &str,
) -> PathBuf
{
  let plain = dir.join(format!("{}{}", stem, ext));
  if !plain.exists()
  {
    return plain;
  }
  let mut n = 1usize;
  loop
  {
    let candidate = dir.join(format!("{}-{}{}", stem, n, ext));
    if !candidate.exists()
    {
      return candidate;
    }
    n += 1;
  }
}

#[cfg(target_os = "macos")]
fn opener_program() -> &'static str
{
  "open"
}

#[cfg(not(target_os = "macos"))]
fn opener_program() -> &'static str
{
  "xdg-open"
}

/// Recursively copy a file or directory tree from `src` to `dst`.
pub fn copy_path_recursive(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  let meta = std::fs::metadata(src)?;
  if meta.is_dir()
  {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)?
    {
      let de = entry?;
      let target = dst.join(de.file_name());
      copy_path_recursive(&de.path(), &target)?;
    }
    Ok(())
  }
  else
  {
    std::fs::copy(src, dst).map(|_| ())
  }
}

/// Move a path via rename, falling back to copy+remove on cross-device
/// moves.
pub fn move_path_with_fallback(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  match std::fs::rename(src, dst)
  {
    Ok(()) => Ok(()),
    Err(_e) =>
    {
      copy_path_recursive(src, dst)?;
      let meta = std::fs::metadata(src)?;
      if meta.is_dir()
      {
        std::fs::remove_dir_all(src)
      }
      else
      {
        std::fs::remove_file(src)
      }
    }
  }
}

/// Remove a path (file or directory recursively).
pub fn remove_path_all(path: &Path) -> io::Result<()>
{
  if path.is_dir()
  {
    std::fs::remove_dir_all(path)
  }
  else
  {
    std::fs::remove_file(path)
  }
}

#[cfg(unix)]
fn link_path(
  src: &Path,
  dst: &Path,
) -> io::Result<()>
{
  std::os::unix::fs::symlink(src, dst)
}

#[cfg(not(unix))]
fn link_path(
  _src: &Path,
  _dst: &Path,
) -> io::Result<()>
{
  Err(io::Error::new(io::ErrorKind::Unsupported, "symlinks unavailable"))
}
