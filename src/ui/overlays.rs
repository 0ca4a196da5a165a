//! Overlay panels: command panel, prompt, and messages.

use ratatui::{
  layout::{
    Constraint,
    Direction,
    Layout,
    Rect,
  },
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
    Wrap,
  },
};

use crate::ui::labels;

fn centered(
  area: Rect,
  width: u16,
  height: u16,
) -> Rect
{
  Rect::new(
    area.x + area.width.saturating_sub(width) / 2,
    area.y + area.height.saturating_sub(height) / 2,
    width.min(area.width),
    height.min(area.height),
  )
}

pub fn draw_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let entries = app.panel_commands();
  let selected = app.panel_selected();

  let height = (entries.len() as u16).saturating_add(2).clamp(3, area.height);
  let popup = centered(area, 34, height);
  f.render_widget(Clear, popup);

  let block = Block::default().borders(Borders::ALL).title(Span::styled(
    "Commands",
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines: Vec<Line> = entries
    .iter()
    .enumerate()
    .map(|(i, (cmd, avail))| {
      let mut style = if avail.enabled
      {
        Style::default()
      }
      else
      {
        Style::default().fg(Color::DarkGray)
      };
      if i == selected
      {
        style = style.add_modifier(Modifier::BOLD).fg(Color::Cyan);
      }
      let suffix = if avail.prompt.is_some() { "\u{2026}" } else { "" };
      Line::from(Span::styled(
        format!("{}{}", labels::command_label(*cmd), suffix),
        style,
      ))
    })
    .collect();
  f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_prompt(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let Some(state) = app.prompt_state()
  else
  {
    return;
  };

  let popup = centered(area, 50, 5);
  f.render_widget(Clear, popup);

  let block = Block::default().borders(Borders::ALL).title(Span::styled(
    labels::prompt_text(state.prompt),
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let lines: Vec<Line> =
    vec![Line::from(""), Line::from(Span::raw(state.input.clone()))];
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn draw_messages(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let messages = app.recent_messages();
  let min_h = ((area.height as u32 * 20) / 100).max(3) as u16;
  let max_h = ((area.height as u32 * 50) / 100).max(min_h as u32) as u16;
  let needed = (messages.len() as u16).saturating_add(2).max(3);
  let panel_h = needed.min(max_h).max(min_h).min(area.height);

  let block = Block::default().borders(Borders::ALL).title(Span::styled(
    "Messages",
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(panel_h)])
    .split(area);
  let panel = layout[1];
  f.render_widget(Clear, panel);

  let avail_rows = panel_h.saturating_sub(2) as usize;
  let start = messages.len().saturating_sub(avail_rows);
  let lines: Vec<Line> =
    messages[start..].iter().map(|m| Line::from(m.clone())).collect();
  let inner = block.inner(panel);
  f.render_widget(block, panel);
  f.render_widget(Paragraph::new(lines), inner);
}
