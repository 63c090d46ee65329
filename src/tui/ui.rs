//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, Mode};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Tree view
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_tree_area(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let name_display = if app.mode == Mode::EditName {
        format!("{}_", app.project_name)
    } else if app.project_name.is_empty() {
        "<none>".to_string()
    } else {
        app.project_name.clone()
    };

    let header_text = format!(
        " Type: {}  │  Name: {}",
        app.project_type().display_name(),
        name_display
    );

    let block = Block::default()
        .title(" Scaffold Picker ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let Some(snapshot) = app.snapshot.as_ref().filter(|s| !s.is_empty()) else {
        let message = match &app.name_error {
            Some(error) => error.as_str(),
            None => "No files to show",
        };

        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    };

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset = calculate_scroll_offset(app.selected, visible_height, snapshot.len());

    for (i, row) in snapshot
        .rows()
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
    {
        let y = inner_area.y + (i - scroll_offset) as u16;
        let is_selected = i == app.selected;

        let marker = if snapshot.is_checked(i) { "[x]" } else { "[ ]" };
        let indent = "  ".repeat(row.indent_spacers);

        let name_style = if row.entry.is_dir {
            Style::default().fg(Color::Cyan).bold()
        } else if row.entry.is_common {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let name = if row.entry.is_dir {
            format!("{}/", row.entry.display_name())
        } else {
            row.entry.display_name().to_string()
        };

        let mut line = Line::from(vec![
            Span::raw(format!(" {} ", marker)),
            Span::raw(indent),
            Span::styled(name, name_style),
        ]);

        if is_selected {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }

        frame.render_widget(
            Paragraph::new(line),
            Rect::new(inner_area.x, y, inner_area.width, 1),
        );
    }
}

fn calculate_scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(padding)
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::EditName => " Enter/Esc: done  Backspace: erase  type to edit name",
        _ => " space: toggle  n: name  tab: type  enter: confirm  ?: help  q: quit",
    };

    let status = match (&app.status_message, &app.name_error) {
        (Some(message), _) => message.as_str(),
        (None, Some(error)) => error.as_str(),
        (None, None) => "",
    };

    let lines = vec![
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(Color::Yellow),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    let help_text = vec![
        Line::from("  Navigation"),
        Line::from("    j / Down       move down"),
        Line::from("    k / Up         move up"),
        Line::from("    g / Home       first row"),
        Line::from("    G / End        last row"),
        Line::from(""),
        Line::from("  Selection"),
        Line::from("    space          toggle checkbox"),
        Line::from("    enter          confirm selection"),
        Line::from(""),
        Line::from("  Project"),
        Line::from("    n              edit project name"),
        Line::from("    tab / t        next project type"),
        Line::from("    r              rebuild tree"),
        Line::from(""),
        Line::from("  q / Esc quits, ? closes this help"),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

/// Centered rect taking the given percentages of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
