//! Statistics panel - totals, selected country and the two charts

use crate::components::compare::detail_lines;
use crate::components::layout::truncate_to_width;
use crate::controller::Controller;
use crate::projection::{format, CountryStats, PopulationBar, RegionShare};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Colors cycled through the region rows
const REGION_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

pub fn draw_statistics_panel(frame: &mut Frame, area: Rect, controller: &Controller) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let views = controller.views();
    render_totals(frame, top[0], controller);
    render_country_stats(frame, top[1], controller.stats_country(), &views.country_stats);
    render_region_chart(frame, bottom[0], &views.region_chart);
    render_population_chart(frame, bottom[1], &views.population_chart);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_totals(frame: &mut Frame, area: Rect, controller: &Controller) {
    let stats = &controller.views().aggregate;
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        row("Countries", format::group_digits(stats.country_count as u64)),
        row("Total population", stats.population_label()),
        row("Total area", stats.area_label()),
        row("Languages", format::group_digits(stats.language_count as u64)),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("World Totals")), area);
}

fn render_country_stats(frame: &mut Frame, area: Rect, selected: &str, stats: &CountryStats) {
    let title = if selected.is_empty() {
        "Country Statistics".to_string()
    } else {
        format!("Country Statistics: {}", selected)
    };

    let lines = match stats {
        CountryStats::Empty => vec![Line::from(Span::styled(
            "Press c to choose a country.",
            Style::default().fg(Color::Yellow),
        ))],
        CountryStats::NotFound(name) => vec![Line::from(Span::styled(
            format!("No data for \"{}\".", name),
            Style::default().fg(Color::Yellow),
        ))],
        CountryStats::Found {
            details,
            subregion,
            timezones,
        } => {
            let mut lines = detail_lines(details);
            for (label, value) in [("Subregion", subregion), ("Timezones", timezones)] {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", format!("{}:", label)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(value.clone(), Style::default().fg(Color::White)),
                ]));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(&title));
    frame.render_widget(paragraph, area);
}

fn render_region_chart(frame: &mut Frame, area: Rect, shares: &[RegionShare]) {
    let block = panel("Countries by Region");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, share) in shares.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let label_width = 11.min(inner.width);
        let label_area = Rect::new(inner.x, y, label_width, 1);
        let gauge_area = Rect::new(
            inner.x + label_width,
            y,
            inner.width.saturating_sub(label_width),
            1,
        );

        frame.render_widget(
            Paragraph::new(truncate_to_width(&share.region, (label_width as usize).saturating_sub(1))),
            label_area,
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(REGION_COLORS[i % REGION_COLORS.len()]))
            .ratio((share.percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{} ({:.1}%)", share.count, share.percent));
        frame.render_widget(gauge, gauge_area);
    }
}

/// Millions with one decimal, for bar values
fn millions(population: u64) -> String {
    format!("{:.1}M", population as f64 / 1_000_000.0)
}

fn population_bars(bars: &[PopulationBar], bar_width: u16) -> Vec<Bar<'static>> {
    bars.iter()
        .map(|bar| {
            Bar::default()
                .value(bar.population)
                .text_value(millions(bar.population))
                .label(Line::from(truncate_to_width(&bar.name, bar_width as usize)))
        })
        .collect()
}

fn render_population_chart(frame: &mut Frame, area: Rect, bars: &[PopulationBar]) {
    let block = panel("Top 10 by Population");
    if bars.is_empty() {
        frame.render_widget(Paragraph::new("No population data.").block(block), area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let count = bars.len() as u16;
    let bar_width = (inner_width.saturating_sub(count) / count.max(1)).clamp(3, 12);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&population_bars(bars, bar_width)))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}
