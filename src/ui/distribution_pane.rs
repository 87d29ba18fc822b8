use crate::app::AppState;
use crate::report::{bar, format_clock, format_hours_minutes, Slice};
use crate::ui::styles::{bar_style, border_style, hint_style, running_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the share of tracked time per task
pub fn render_distribution_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines = distribution_lines(&app.distribution(), inner_width);

    if let Some(task) = app.registry.running_task() {
        let elapsed = task.current_elapsed(app.registry.clock());
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("⏱ ", running_style()),
            Span::styled(
                format!("{} {}", task.name(), format_clock(elapsed)),
                running_style(),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Time distribution ", title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Two lines per slice: label with totals, then a proportional bar
pub fn distribution_lines(slices: &[Slice], width: usize) -> Vec<Line<'static>> {
    if slices.is_empty() {
        return vec![Line::styled("Nothing tracked yet.", hint_style())];
    }

    let mut lines = Vec::with_capacity(slices.len() * 2);
    for slice in slices {
        lines.push(Line::raw(format!(
            "{}  {} ({:.0}%)",
            slice.label,
            format_hours_minutes(slice.seconds),
            slice.percent
        )));
        lines.push(Line::styled(bar(slice.percent, width), bar_style()));
    }
    lines
}
