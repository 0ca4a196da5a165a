use drex::{
  model::{
    DirectoryListing,
    Entry,
    EntryKind,
  },
  selection::{
    SelectionMode,
    SelectionTracker,
  },
};

fn listing(names: &[&str]) -> DirectoryListing
{
  DirectoryListing {
    site_name:      "site".to_string(),
    base_path:      String::new(),
    requested_path: String::new(),
    entries:        names
      .iter()
      .map(|n| {
        Entry {
          name:          n.to_string(),
          kind:          EntryKind::File,
          size:          Some(0),
          last_modified: None,
        }
      })
      .collect(),
  }
}

#[test]
fn mode_is_derived_from_set_size()
{
  let mut sel = SelectionTracker::new();
  assert_eq!(sel.mode(), SelectionMode::None);
  sel.select("a");
  assert_eq!(sel.mode(), SelectionMode::Single);
  sel.select("b");
  assert_eq!(sel.mode(), SelectionMode::Multi);
  sel.deselect("b");
  assert_eq!(sel.mode(), SelectionMode::Single);
}

#[test]
fn select_all_then_deselect_all_restores_none()
{
  let l = listing(&["a", "b", "c"]);
  let mut sel = SelectionTracker::new();
  sel.select_all(&l);
  assert_eq!(sel.mode(), SelectionMode::Multi);
  assert_eq!(sel.len(), 3);
  sel.deselect_all();
  assert_eq!(sel.mode(), SelectionMode::None);
}

#[test]
fn toggle_flips_membership()
{
  let mut sel = SelectionTracker::new();
  sel.toggle("x");
  assert!(sel.contains("x"));
  sel.toggle("x");
  assert!(!sel.contains("x"));
}

#[test]
fn retain_drops_names_absent_from_listing()
{
  let mut sel = SelectionTracker::new();
  sel.select("a");
  sel.select("gone");
  sel.retain(&listing(&["a", "b"]));
  assert!(sel.contains("a"));
  assert!(!sel.contains("gone"));
  assert_eq!(sel.mode(), SelectionMode::Single);
}

#[test]
fn names_are_deterministic()
{
  let mut sel = SelectionTracker::new();
  sel.select("z");
  sel.select("a");
  sel.select("m");
  assert_eq!(sel.names(), ["a", "m", "z"]);
}
