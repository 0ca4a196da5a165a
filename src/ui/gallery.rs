//! Gallery explorer modes: the same entries as the table, laid out as a
//! grid. `gallery` uses wide cells with size info; `gallery2` is a denser
//! names-only grid.

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
    Paragraph,
  },
};
use unicode_width::UnicodeWidthStr;

use crate::view::ViewModel;

pub fn draw_gallery(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
  vm: &ViewModel,
  dense: bool,
)
{
  f.render_widget(Clear, area);
  let block =
    Block::default().borders(Borders::ALL).title(vm.site_name.clone());
  f.render_widget(block.clone(), area);
  let inner = block.inner(area);
  if inner.width == 0 || inner.height == 0
  {
    return;
  }

  let cell_w = if dense { 16usize } else { 26usize };
  let cols = ((inner.width as usize) / cell_w).max(1);
  let cursor = app.cursor_index();

  let mut lines: Vec<Line> = Vec::new();
  for (row_idx, chunk) in vm.rows.chunks(cols).enumerate()
  {
    if row_idx >= inner.height as usize
    {
      break;
    }
    let mut spans: Vec<Span> = Vec::new();
    for (col_idx, r) in chunk.iter().enumerate()
    {
      let idx = row_idx * cols + col_idx;
      let marker = if r.is_dir { "/" } else { "" };
      let text = if dense || r.size_text.is_empty()
      {
        format!("{}{}", r.name, marker)
      }
      else
      {
        format!("{}{} ({})", r.name, marker, r.size_text)
      };
      let indicator = if r.selected { "\u{2503}" } else { " " };
      let body =
        super::table::truncate_with_tilde(&text, cell_w.saturating_sub(3));
      let pad = cell_w
        .saturating_sub(2 + UnicodeWidthStr::width(body.as_str()));

      let mut style = if r.is_dir
      {
        Style::default().fg(Color::Blue)
      }
      else
      {
        Style::default()
      };
      if Some(idx) == cursor
      {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
      }
      spans.push(Span::styled(
        indicator.to_string(),
        Style::default().fg(Color::Cyan),
      ));
      spans.push(Span::raw(" "));
      spans.push(Span::styled(body, style));
      spans.push(Span::raw(" ".repeat(pad)));
    }
    lines.push(Line::from(spans));
  }
  f.render_widget(Paragraph::new(lines), inner);
}
