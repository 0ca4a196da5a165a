//! Breadcrumb trail construction from a requested path.

/// One segment of the breadcrumb trail.
///
/// `subpath` is the joined prefix up to and including this segment and is a
/// strict prefix of the requested path for every element except the last.
/// Exactly one element per trail has `is_last` set; it is the current
/// location and renders non-navigable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb
{
  pub label:     String,
  pub subpath:   String,
  pub separator: Option<char>,
  pub is_last:   bool,
}

pub const SEPARATOR: char = '/';

/// Build the breadcrumb trail for `requested_path`.
///
/// The root element is always present, labeled with the site name and an
/// empty subpath. A trailing separator does not produce a spurious empty
/// segment.
pub fn build(
  site_name: &str,
  requested_path: &str,
) -> Vec<Crumb>
{
  let segments: Vec<&str> = requested_path
    .split(SEPARATOR)
    .filter(|s| !s.is_empty())
    .collect();

  let mut crumbs = Vec::with_capacity(segments.len() + 1);
  crumbs.push(Crumb {
    label:     site_name.to_string(),
    subpath:   String::new(),
    separator: if segments.is_empty() { None } else { Some(SEPARATOR) },
    is_last:   segments.is_empty(),
  });

  let mut joined = String::new();
  for (i, seg) in segments.iter().enumerate()
  {
    if !joined.is_empty()
    {
      joined.push(SEPARATOR);
    }
    joined.push_str(seg);
    let last = i + 1 == segments.len();
    crumbs.push(Crumb {
      label:     seg.to_string(),
      subpath:   joined.clone(),
      separator: if last { None } else { Some(SEPARATOR) },
      is_last:   last,
    });
  }
  crumbs
}

/// Path of the parent location, if the requested path is not the root.
pub fn parent_path(requested_path: &str) -> Option<String>
{
  let segments: Vec<&str> = requested_path
    .split(SEPARATOR)
    .filter(|s| !s.is_empty())
    .collect();
  if segments.is_empty()
  {
    return None;
  }
  Some(segments[..segments.len() - 1].join(&SEPARATOR.to_string()))
}

/// Join a child name onto a requested path.
pub fn child_path(
  requested_path: &str,
  name: &str,
) -> String
{
  let trimmed = requested_path.trim_end_matches(SEPARATOR);
  if trimmed.is_empty()
  {
    name.to_string()
  }
  else
  {
    format!("{}{}{}", trimmed, SEPARATOR, name)
  }
}
