//! Table explorer mode: one row per entry with size and modified columns.

use ratatui::{
  layout::Rect,
  style::{
    Color,
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Block,
    Borders,
    Clear,
    List,
    ListItem,
  },
};
use unicode_width::UnicodeWidthStr;

use crate::view::{
  Row,
  ViewModel,
};

const INFO_WIDTH: usize = 28;

pub fn draw_table(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut crate::App,
  vm: &ViewModel,
)
{
  f.render_widget(Clear, area);
  let block = Block::default().borders(Borders::ALL).title(vm.site_name.clone());
  f.render_widget(block.clone(), area);
  let inner = block.inner(area);

  let items: Vec<ListItem> = vm
    .rows
    .iter()
    .map(|r| ListItem::new(build_row_line(r, inner.width)))
    .collect();

  let list = List::new(items).highlight_symbol("").highlight_style(
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
  );
  f.render_stateful_widget(list, inner, &mut app.list_state);
}

fn build_row_line(
  r: &Row,
  inner_width: u16,
) -> Line<'static>
{
  let mut spans: Vec<Span> = Vec::new();

  let indicator = if r.selected { "\u{2503}" } else { " " };
  spans.push(Span::styled(
    indicator.to_string(),
    Style::default().fg(Color::Cyan),
  ));
  spans.push(Span::raw(" "));

  let marker = if r.is_dir { "/" } else { "" };
  let mut left = format!("{}{}", r.name, marker);

  let right = format!("{:>10}  {:>16}", r.size_text, r.modified_text);
  let right_w = INFO_WIDTH.min(right.len());

  let total_w = (inner_width as usize).saturating_sub(2);
  let left_allowed = total_w.saturating_sub(right_w);
  if UnicodeWidthStr::width(left.as_str()) > left_allowed
  {
    left = truncate_with_tilde(&left, left_allowed);
  }

  let base_style = if r.is_dir
  {
    Style::default().fg(Color::Blue)
  }
  else
  {
    Style::default()
  };
  let left_w = UnicodeWidthStr::width(left.as_str());
  spans.push(Span::styled(left, base_style));

  let pad = total_w.saturating_sub(left_w + right_w);
  if pad > 0
  {
    spans.push(Span::raw(" ".repeat(pad)));
  }
  spans.push(Span::styled(right, Style::default().fg(Color::Gray)));

  Line::from(spans)
}

pub(crate) fn truncate_with_tilde(
  s: &str,
  max_w: usize,
) -> String
{
  if max_w == 0
  {
    return String::new();
  }
  let w = UnicodeWidthStr::width(s);
  if w <= max_w
  {
    return s.to_string();
  }
  if max_w == 1
  {
    return "~".to_string();
  }
  let mut out = String::new();
  let mut used = 0usize;
  for ch in s.chars()
  {
    let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    if used + cw + 1 > max_w
    {
      break;
    }
    out.push(ch);
    used += cw;
  }
  out.push('~');
  out
}
