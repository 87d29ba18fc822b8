use crate::app::AppState;
use crate::domain::TaskSnapshot;
use crate::report::format_clock;
use crate::ui::styles::{
    border_style, cursor_style, date_style, default_style, hint_style, idle_style, running_style,
    selected_style, title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list under the active filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let today = app.today();
    let title = format!(
        " Tasks: {} ({}) ",
        app.filter.name(),
        today.format("%a %b %d")
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let hint = if app.registry.is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match this filter."
        };
        f.render_widget(Paragraph::new(hint).style(hint_style()).block(block), area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let selected = app.selected.as_deref() == Some(task.name.as_str());
            let line = create_task_line(task, selected, today);
            let style = if idx == app.cursor {
                cursor_style()
            } else {
                default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Create a single line for a task
/// Format: ▶ write — 01:05  2026-10-19  RUNNING
fn create_task_line(task: &TaskSnapshot, selected: bool, today: NaiveDate) -> Line<'static> {
    let mut spans = Vec::new();

    if selected {
        spans.push(Span::styled("▶ ".to_string(), selected_style()));
    } else {
        spans.push(Span::raw("  ".to_string()));
    }

    spans.push(Span::raw(format!(
        "{} — {}",
        task.name,
        format_clock(task.elapsed_secs)
    )));

    let date = if task.last_active == today {
        "today".to_string()
    } else {
        task.last_active.format("%Y-%m-%d").to_string()
    };
    spans.push(Span::styled(format!("  {}", date), date_style()));

    if task.running {
        spans.push(Span::styled("  RUNNING".to_string(), running_style()));
    } else {
        spans.push(Span::styled("  IDLE".to_string(), idle_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::date;

    fn snapshot(running: bool, day: &str) -> TaskSnapshot {
        TaskSnapshot {
            name: "write".to_string(),
            elapsed_secs: 65.0,
            accumulated_secs: 30.0,
            last_active: date(day),
            running,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let line = create_task_line(&snapshot(true, "2026-10-19"), true, date("2026-10-19"));
        assert_eq!(text(&line), "▶ write — 01:05  today  RUNNING");
    }

    #[test]
    fn test_create_task_line_previous_day() {
        let line = create_task_line(&snapshot(false, "2026-10-02"), false, date("2026-10-19"));
        assert_eq!(text(&line), "  write — 01:05  2026-10-02  IDLE");
    }
}
