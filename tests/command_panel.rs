use drex::{
  commands::{
    self,
    Command,
    SelectionSummary,
  },
  config::Config,
  ui::labels,
};

fn local() -> Config
{
  Config { is_local: true, ..Config::default() }
}

fn remote() -> Config
{
  Config { is_local: false, ..Config::default() }
}

fn summary(
  count: usize,
  single_is_file: bool,
) -> SelectionSummary
{
  SelectionSummary { count, single_is_file }
}

#[test]
fn creation_commands_need_no_selection()
{
  for cmd in [
    Command::Mkdir,
    Command::Mkzip,
    Command::Mkfile,
    Command::Upload,
    Command::UploadDir,
    Command::Source,
  ]
  {
    for count in [0usize, 1, 5]
    {
      let a = commands::availability(cmd, summary(count, false), &local());
      assert!(a.visible && a.enabled, "cmd {:?} count {}", cmd, count);
      assert!(a.prompt.is_none());
    }
  }
}

#[test]
fn exec_and_browse_visible_but_disabled_when_remote()
{
  for cmd in [Command::Exec, Command::Browse]
  {
    let a = commands::availability(cmd, summary(0, false), &remote());
    assert!(a.visible, "cmd {:?}", cmd);
    assert!(!a.enabled, "cmd {:?}", cmd);

    let a = commands::availability(cmd, summary(0, false), &local());
    assert!(a.visible && a.enabled, "cmd {:?}", cmd);
  }
}

#[test]
fn selection_commands_hidden_without_selection()
{
  for cmd in [
    Command::Edit,
    Command::EditX,
    Command::Download,
    Command::Move,
    Command::Copy,
    Command::Link,
    Command::Delete,
  ]
  {
    let a = commands::availability(cmd, summary(0, false), &local());
    assert!(!a.visible, "cmd {:?} should be hidden", cmd);
    assert!(!a.enabled);
  }
}

#[test]
fn edit_requires_single_file()
{
  for cmd in [Command::Edit, Command::EditX]
  {
    let a = commands::availability(cmd, summary(1, true), &local());
    assert!(a.visible && a.enabled, "cmd {:?}", cmd);
    // Single selected directory: hidden.
    let a = commands::availability(cmd, summary(1, false), &local());
    assert!(!a.visible, "cmd {:?}", cmd);
    // Multiple selected: hidden.
    let a = commands::availability(cmd, summary(2, true), &local());
    assert!(!a.visible, "cmd {:?}", cmd);
  }
}

#[test]
fn download_requires_single_of_any_kind()
{
  let a = commands::availability(Command::Download, summary(1, false), &local());
  assert!(a.visible && a.enabled);
  let a = commands::availability(Command::Download, summary(2, false), &local());
  assert!(!a.visible);
}

#[test]
fn transfer_prompts_follow_selection_count()
{
  for (cmd, one, many) in [
    (Command::Move, "prompt.move.one", "prompt.move.many"),
    (Command::Copy, "prompt.copy.one", "prompt.copy.many"),
    (Command::Link, "prompt.link.one", "prompt.link.many"),
  ]
  {
    let a = commands::availability(cmd, summary(1, true), &local());
    assert_eq!(a.prompt.map(|p| p.key), Some(one));

    let a = commands::availability(cmd, summary(3, false), &local());
    let p = a.prompt.expect("plural prompt");
    assert_eq!(p.key, many);
    assert_eq!(p.count, 3);
  }
}

#[test]
fn delete_has_no_prompt()
{
  let a = commands::availability(Command::Delete, summary(4, false), &local());
  assert!(a.visible && a.enabled);
  assert!(a.prompt.is_none());
}

#[test]
fn table_covers_every_command_in_panel_order()
{
  let table = commands::availability_table(summary(1, true), &local());
  assert_eq!(table.len(), commands::ALL.len());
  for (i, (cmd, _)) in table.iter().enumerate()
  {
    assert_eq!(*cmd, commands::ALL[i]);
  }
}

#[test]
fn prompt_text_substitutes_count()
{
  let a = commands::availability(Command::Move, summary(2, false), &local());
  let text = labels::prompt_text(a.prompt.expect("prompt"));
  assert!(text.contains('2'), "got: {}", text);

  let a = commands::availability(Command::Move, summary(1, true), &local());
  let text = labels::prompt_text(a.prompt.expect("prompt"));
  assert!(!text.contains('1'), "got: {}", text);
}
