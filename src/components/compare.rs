//! Comparison panel - two countries side by side

use crate::controller::Controller;
use crate::projection::CountryDetails;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_compare_panel(frame: &mut Frame, area: Rect, controller: &Controller) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let selection = controller.comparison_selection();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let name_or_prompt = |name: &str| {
        if name.is_empty() {
            "Choose a country...".to_string()
        } else {
            name.to_string()
        }
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("First (a): ", label),
        Span::styled(name_or_prompt(&selection.country_a), value),
        Span::styled("   Second (b): ", label),
        Span::styled(name_or_prompt(&selection.country_b), value),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Compare Countries ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, chunks[0]);

    match &controller.views().comparison {
        Some(comparison) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);
            render_details(frame, columns[0], &comparison.left, Color::Cyan);
            render_details(frame, columns[1], &comparison.right, Color::Magenta);
        }
        None => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Select two countries to compare.",
                    Style::default().fg(Color::Yellow),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, chunks[1]);
        }
    }
}

/// Label/value lines for one country; shared with the statistics panel
pub fn detail_lines(details: &CountryDetails) -> Vec<Line<'static>> {
    details
        .rows()
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", format!("{}:", label)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

fn render_details(frame: &mut Frame, area: Rect, details: &CountryDetails, accent: Color) {
    let mut lines = vec![Line::from(Span::styled(
        details.flag.clone(),
        Style::default().fg(Color::DarkGray),
    ))];
    lines.push(Line::from(""));
    lines.extend(detail_lines(details));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", details.name))
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::*;
    use crate::model::CountryStore;
    use crate::projection::{ComparisonSlot, FlagGalleryOptions};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_prompt_until_both_selected() {
        let store = CountryStore::new(vec![
            with_capital(country("Peru", "Americas", Some(1)), "Lima"),
            with_capital(country("Chile", "Americas", Some(2)), "Santiago"),
        ]);
        let mut controller = Controller::new(FlagGalleryOptions::default());
        controller.attach(&store);

        let render = |controller: &Controller| {
            let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
            terminal
                .draw(|frame| draw_compare_panel(frame, frame.area(), controller))
                .unwrap();
            let screen: String = terminal
                .backend()
                .buffer()
                .content
                .iter()
                .map(|c| c.symbol())
                .collect();
            screen
        };

        controller.set_comparison(&store, ComparisonSlot::A, "Peru".to_string());
        assert!(render(&controller).contains("Select two countries to compare."));

        controller.set_comparison(&store, ComparisonSlot::B, "Chile".to_string());
        let screen = render(&controller);
        assert!(screen.contains("Lima"));
        assert!(screen.contains("Santiago"));
    }
}
