use crate::app::AppState;
use crate::report::render_report;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the full time distribution report
pub fn render_report_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let report = render_report(&app.distribution(), app.today());

    let mut lines: Vec<Line> = report.lines().map(|l| Line::raw(l.to_string())).collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[r]", modal_title_style()),
        Span::raw(" Close  "),
        Span::styled("[q]", modal_title_style()),
        Span::raw(" Quit"),
    ]));

    let height = (lines.len() as u16 + 2).min(area.height);
    let modal_area = create_modal_area(area, height);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Report ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}
