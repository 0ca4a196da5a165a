use drex::ui::format::{
  format_epoch,
  human_size,
};

#[test]
fn human_size_whole_bytes_below_one_kib()
{
  assert_eq!(human_size(0), "0 B");
  assert_eq!(human_size(1023), "1023 B");
}

#[test]
fn human_size_scales_with_one_decimal()
{
  assert_eq!(human_size(1024), "1.0 KB");
  assert_eq!(human_size(1536), "1.5 KB");
  assert_eq!(human_size(1024 * 1024), "1.0 MB");
  assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0 GB");
}

#[test]
fn format_epoch_round_trips_the_timestamp()
{
  // %s is timezone-independent.
  assert_eq!(format_epoch(1_700_000_000, "%s"), "1700000000");
  assert_eq!(format_epoch(0, "%s"), "0");
}

#[test]
fn format_epoch_out_of_range_is_a_dash()
{
  assert_eq!(format_epoch(i64::MAX, "%Y"), "-");
}

#[test]
fn format_epoch_honours_custom_patterns()
{
  let text = format_epoch(1_700_000_000, "%Y-%m-%d %H:%M");
  assert_eq!(text.len(), "2023-11-14 22:13".len());
  assert!(text.starts_with("2023-11-1"), "got: {}", text);
}
