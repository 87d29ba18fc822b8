pub mod distribution_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::{AppState, UiMode};
use distribution_pane::render_distribution_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_report_modal;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use styles::{error_style, hint_style, info_style};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);
    render_distribution_pane(f, app, layout.distribution_area);
    render_status_line(f, app, layout.status_area);

    match app.ui_mode {
        UiMode::AddingTask => render_input_form(f, app, size),
        UiMode::Report => render_report_modal(f, app, size),
        UiMode::Normal => {}
    }
}

/// Status line: last message, else the selected task's clock
fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let span = match (&app.status, &app.selected) {
        (Some(status), _) => {
            let style = if status.is_error { error_style() } else { info_style() };
            Span::styled(format!(" {}", status.text), style)
        }
        (None, Some(name)) => Span::styled(
            format!(
                " Selected: {} {}",
                name,
                app.selected_clock().unwrap_or_default()
            ),
            hint_style(),
        ),
        (None, None) => Span::styled(" Press Enter on a task to select it", hint_style()),
    };

    f.render_widget(Paragraph::new(span), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Command;
    use crate::persistence::JsonTaskStore;
    use crate::registry::TaskRegistry;
    use crate::timer::testing::{date, ManualClock};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_all_modes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let clock = ManualClock::new(date("2026-10-19"));
        let registry = TaskRegistry::load(
            Box::new(JsonTaskStore::new(temp_dir.path().join("tasks.json"))),
            Box::new(clock.clone()),
        )
        .unwrap();
        let mut app = AppState::new(registry);
        app.apply(Command::AddTask("coding".to_string())).unwrap();
        app.apply(Command::SelectTask("coding".to_string())).unwrap();
        app.apply(Command::StartTimer).unwrap();
        clock.advance_secs(125);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("coding — 02:05"));
        assert!(text.contains("RUNNING"));

        app.begin_add();
        terminal.draw(|f| render(f, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Add Task"));

        app.cancel_input();
        app.apply(Command::PauseTimer).unwrap();
        app.toggle_report();
        terminal.draw(|f| render(f, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Coding"));
    }
}
