use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::super::state::App;

/// Render the quote table: a header row followed by one ticker per row.
pub(super) fn render_quotes(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mut lines = vec![Line::styled(
        "Ticker",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if app.quotes.is_empty() {
        lines.push(Line::styled(
            "No tickers tracked. Press + to add some.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.extend(
        app.quotes
            .quotes
            .iter()
            .take(area.height.saturating_sub(1) as usize)
            .map(|quote| Line::raw(quote.ticker.clone())),
    );
    frame.render_widget(Paragraph::new(lines), area);
}
