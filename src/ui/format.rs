pub fn human_size(bytes: u64) -> String
{
  const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
  let mut val = bytes as f64;
  let mut idx = 0usize;
  while val >= 1024.0 && idx + 1 < UNITS.len()
  {
    val /= 1024.0;
    idx += 1;
  }
  if idx == 0
  {
    format!("{} {}", bytes, UNITS[idx])
  }
  else
  {
    format!("{:.1} {}", val, UNITS[idx])
  }
}

/// Format an epoch-seconds timestamp in the local timezone.
pub fn format_epoch(
  secs: i64,
  fmt: &str,
) -> String
{
  use chrono::{
    DateTime,
    Local,
  };
  match DateTime::from_timestamp(secs, 0)
  {
    Some(dt) => dt.with_timezone(&Local).format(fmt).to_string(),
    None => String::from("-"),
  }
}
