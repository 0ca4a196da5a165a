use std::{
  fs,
  io,
};

use drex::{
  App,
  commands::{
    Command,
    CommandRequest,
  },
  config::Config,
  executor::{
    CommandExecutor,
    LocalExecutor,
  },
  model::EntryKind,
  runtime,
  source::{
    ListingSource,
    LocalSource,
  },
};

fn request(
  command: Command,
  names: &[&str],
  path: &str,
  destination: Option<&str>,
) -> CommandRequest
{
  CommandRequest {
    command,
    names: names.iter().map(|s| s.to_string()).collect(),
    path: path.to_string(),
    destination: destination.map(|s| s.to_string()),
  }
}

#[test]
fn local_source_lists_files_and_dirs()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  fs::write(tmp.path().join("a.txt"), b"hello").unwrap();
  fs::create_dir(tmp.path().join("sub")).unwrap();
  fs::write(tmp.path().join(".hidden"), b"").unwrap();

  let mut src = LocalSource::new(tmp.path().to_path_buf(), "t", false);
  let listing = src.fetch("").expect("fetch");
  assert_eq!(listing.site_name, "t");

  let a = listing.entries.iter().find(|e| e.name == "a.txt").unwrap();
  assert_eq!(a.kind, "file");
  assert_eq!(a.size, Some(5));
  assert!(a.last_modified.is_some());

  let sub = listing.entries.iter().find(|e| e.name == "sub").unwrap();
  assert_eq!(sub.kind, "dir");
  assert_eq!(sub.size, None);

  assert!(!listing.entries.iter().any(|e| e.name == ".hidden"));

  let mut src = LocalSource::new(tmp.path().to_path_buf(), "t", true);
  let listing = src.fetch("").expect("fetch");
  assert!(listing.entries.iter().any(|e| e.name == ".hidden"));
}

#[test]
fn local_source_rejects_traversal_segments()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  let mut src = LocalSource::new(tmp.path().to_path_buf(), "t", false);
  let err = src.fetch("../escape").expect_err("traversal must fail");
  assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn executor_creates_and_deletes()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), true);

  exec.execute(&request(Command::Mkdir, &[], "", None)).expect("mkdir");
  assert!(tmp.path().join("new-folder").is_dir());
  // A second mkdir picks a fresh name.
  exec.execute(&request(Command::Mkdir, &[], "", None)).expect("mkdir");
  assert!(tmp.path().join("new-folder-1").is_dir());

  exec.execute(&request(Command::Mkfile, &[], "", None)).expect("mkfile");
  assert!(tmp.path().join("new-file.txt").is_file());

  exec
    .execute(&request(
      Command::Delete,
      &["new-file.txt", "new-folder-1"],
      "",
      None,
    ))
    .expect("delete");
  assert!(!tmp.path().join("new-file.txt").exists());
  assert!(!tmp.path().join("new-folder-1").exists());
}

#[test]
fn executor_moves_and_copies_into_destination()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  fs::write(tmp.path().join("m.txt"), b"m").unwrap();
  fs::write(tmp.path().join("c.txt"), b"c").unwrap();
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), true);

  exec
    .execute(&request(Command::Move, &["m.txt"], "", Some("moved")))
    .expect("move");
  assert!(!tmp.path().join("m.txt").exists());
  assert!(tmp.path().join("moved/m.txt").is_file());

  exec
    .execute(&request(Command::Copy, &["c.txt"], "", Some("copied")))
    .expect("copy");
  assert!(tmp.path().join("c.txt").is_file());
  assert!(tmp.path().join("copied/c.txt").is_file());
}

#[cfg(unix)]
#[test]
fn executor_links_into_destination()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  fs::write(tmp.path().join("l.txt"), b"l").unwrap();
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), true);

  exec
    .execute(&request(Command::Link, &["l.txt"], "", Some("links")))
    .expect("link");
  let link = tmp.path().join("links/l.txt");
  assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
}

#[test]
fn remote_session_refuses_exec()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), false);
  let err = exec
    .execute(&request(Command::Exec, &["x"], "", None))
    .expect_err("exec must fail");
  assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
}

#[test]
fn host_bound_commands_are_unsupported()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), true);
  for cmd in [Command::Upload, Command::Mkzip, Command::Download]
  {
    let err = exec
      .execute(&request(cmd, &["x"], "", None))
      .expect_err("unsupported");
    assert_eq!(err.kind(), io::ErrorKind::Unsupported, "cmd {:?}", cmd);
  }
}

#[test]
fn drain_pending_navigates_and_executes_end_to_end()
{
  let tmp = tempfile::tempdir().expect("tempdir");
  fs::write(tmp.path().join("doomed.txt"), b"x").unwrap();
  fs::write(tmp.path().join("keeper.txt"), b"x").unwrap();

  let config = Config { site_name: "t".to_string(), ..Config::default() };
  let mut src = LocalSource::new(tmp.path().to_path_buf(), "t", false);
  let mut exec = LocalExecutor::new(tmp.path().to_path_buf(), true);
  let mut app = App::new(config);

  app.request_navigation("");
  runtime::drain_pending(&mut app, &mut src, &mut exec);
  assert_eq!(app.listing().entries.len(), 2);
  assert!(app.listing().entries.iter().all(|e| e.kind == EntryKind::File));

  // Select "doomed.txt" and delete it through the panel contract.
  app.cursor_top();
  app.toggle_select_current();
  assert_eq!(app.selection().names(), ["doomed.txt"]);
  app.stage_command(Command::Delete, None);
  runtime::drain_pending(&mut app, &mut src, &mut exec);

  assert!(!tmp.path().join("doomed.txt").exists());
  // The refresh resolved in the same pass.
  let names: Vec<&str> =
    app.listing().entries.iter().map(|e| e.name.as_str()).collect();
  assert_eq!(names, ["keeper.txt"]);
  assert!(app.selection().is_empty());
}
