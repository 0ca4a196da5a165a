pub mod format;
pub mod gallery;
pub mod labels;
pub mod overlays;
pub mod table;

use ratatui::layout::{Direction, Layout, Constraint, Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::ExplorerMode;

pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut crate::App,
) {
  let vm = crate::view::build(app);

  // Split top header (1 row), content, status (1 row)
  let full = f.area();
  let vchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(1),
      Constraint::Length(1),
    ])
    .split(full);

  draw_header(f, vchunks[0], &vm);

  match vm.mode {
    ExplorerMode::Table => table::draw_table(f, vchunks[1], app, &vm),
    ExplorerMode::Gallery => gallery::draw_gallery(f, vchunks[1], app, &vm, false),
    ExplorerMode::Gallery2 => gallery::draw_gallery(f, vchunks[1], app, &vm, true),
  }

  draw_status(f, vchunks[2], app, &vm);

  // Overlays last so they appear on top
  if app.get_show_panel() {
    overlays::draw_panel(f, full, app);
  }
  if app.get_show_prompt() {
    overlays::draw_prompt(f, full, app);
  }
  if app.get_show_messages() {
    overlays::draw_messages(f, full, app);
  }
}

fn draw_header(f: &mut ratatui::Frame, area: Rect, vm: &crate::view::ViewModel) {
  // Left: {user}@{host}:{crumb trail}
  let user = whoami::username().unwrap_or_default();
  let host = whoami::hostname().unwrap_or_default();
  let mut trail = String::new();
  for c in &vm.crumbs {
    trail.push_str(&c.label);
    if let Some(sep) = c.separator {
      trail.push(sep);
    }
  }
  let left_full = format!("{}@{}:{}", user, host, trail);
  let left = truncate_to_width(&left_full, area.width as usize);

  let style = Style::default().fg(Color::Gray);
  let left_p = Paragraph::new(left).alignment(Alignment::Left).style(style);
  f.render_widget(left_p, area);
}

fn draw_status(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  vm: &crate::view::ViewModel,
) {
  let sort = app.sort_state();
  let arrow = if sort.reverse { "v" } else { "^" };
  let right = format!(
    "{} selected | sort: {}{} | {}",
    vm.selected,
    crate::enums::sort_key_to_str(sort.key),
    arrow,
    crate::enums::explorer_mode_to_str(vm.mode),
  );
  let left = app
    .recent_messages()
    .last()
    .map(|s| s.as_str())
    .unwrap_or("c: commands  space: select  v: view  q: quit");

  let total = area.width as usize;
  let right_w = UnicodeWidthStr::width(right.as_str());
  let left_max = total.saturating_sub(right_w + 1);
  let left = truncate_to_width(left, left_max);

  let style = Style::default().fg(Color::Gray);
  let left_p = Paragraph::new(left).alignment(Alignment::Left).style(style);
  let right_p = Paragraph::new(right).alignment(Alignment::Right).style(style);
  f.render_widget(left_p, area);
  f.render_widget(right_p, area);
}

pub(crate) fn truncate_to_width(s: &str, max_w: usize) -> String {
  if max_w == 0 { return String::new(); }
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars() {
    let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w { break; }
    out.push(ch);
    w += cw;
  }
  out
}
