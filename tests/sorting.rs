use std::cmp::Ordering;

use drex::{
  model::{
    Entry,
    EntryKind,
  },
  sort::{
    self,
    SortKey,
    SortState,
  },
};

fn file(
  name: &str,
  size: u64,
  mtime: i64,
) -> Entry
{
  Entry {
    name:          name.to_string(),
    kind:          EntryKind::File,
    size:          Some(size),
    last_modified: Some(mtime),
  }
}

fn dir(name: &str) -> Entry
{
  Entry {
    name:          name.to_string(),
    kind:          EntryKind::Dir,
    size:          None,
    last_modified: None,
  }
}

fn names(entries: &[Entry]) -> Vec<&str>
{
  entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn name_ascending_is_case_insensitive()
{
  let mut entries = vec![file("b.txt", 0, 0), dir("A")];
  sort::sort_entries(&mut entries, SortState::default());
  assert_eq!(names(&entries), ["A", "b.txt"]);
}

#[test]
fn directories_precede_files_on_column_ties()
{
  // Both compare as size 0; the directory wins the tie.
  let mut entries = vec![file("aaa", 0, 0), dir("zzz")];
  sort::sort_entries(
    &mut entries,
    SortState { key: SortKey::Size, reverse: false },
  );
  assert_eq!(names(&entries), ["zzz", "aaa"]);
}

#[test]
fn tie_break_falls_back_to_name()
{
  let mut entries = vec![file("b", 10, 0), file("a", 10, 0), file("C", 10, 0)];
  sort::sort_entries(
    &mut entries,
    SortState { key: SortKey::Size, reverse: false },
  );
  assert_eq!(names(&entries), ["a", "b", "C"]);
}

#[test]
fn absent_mtime_sorts_oldest()
{
  let mut entries =
    vec![file("new", 0, 1_700_000_000), dir("nodate"), file("old", 0, 1)];
  sort::sort_entries(
    &mut entries,
    SortState { key: SortKey::Modified, reverse: false },
  );
  assert_eq!(names(&entries), ["nodate", "old", "new"]);
}

#[test]
fn descending_reverses_column_but_not_tie_breaks()
{
  let mut entries = vec![file("small", 1, 0), file("big", 9, 0), dir("d")];
  sort::sort_entries(
    &mut entries,
    SortState { key: SortKey::Size, reverse: true },
  );
  // big (9) first; then the size-0 tie, still directory before file.
  assert_eq!(names(&entries), ["big", "small", "d"]);

  let mut entries = vec![file("aaa", 0, 0), dir("zzz")];
  sort::sort_entries(
    &mut entries,
    SortState { key: SortKey::Size, reverse: true },
  );
  assert_eq!(names(&entries), ["zzz", "aaa"]);
}

#[test]
fn total_order_even_under_case_fold_collision()
{
  let a = file("README", 0, 0);
  let b = dir("readme");
  let state = SortState::default();
  assert_ne!(sort::compare(&a, &b, state), Ordering::Equal);
  // Directory wins the folded-name tie.
  assert_eq!(sort::compare(&b, &a, state), Ordering::Less);
}

#[test]
fn resorting_is_idempotent()
{
  let mut entries = vec![
    file("c", 3, 30),
    dir("b"),
    file("a", 1, 10),
    dir("D"),
    file("e", 3, 30),
  ];
  let state = SortState { key: SortKey::Size, reverse: false };
  sort::sort_entries(&mut entries, state);
  let once = entries.clone();
  sort::sort_entries(&mut entries, state);
  assert_eq!(entries, once);
}

#[test]
fn reselecting_column_toggles_direction()
{
  let mut state = SortState::default();
  assert!(!state.reverse);
  state.select(SortKey::Name);
  assert!(state.reverse);
  state.select(SortKey::Name);
  assert!(!state.reverse);
}

#[test]
fn selecting_new_column_resets_ascending()
{
  let mut state = SortState::default();
  state.select(SortKey::Name); // now descending
  state.select(SortKey::Size);
  assert_eq!(state.key, SortKey::Size);
  assert!(!state.reverse);
}
