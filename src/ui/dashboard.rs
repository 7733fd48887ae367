/// Fixture-backed dashboard
///
/// Stats grid, filter button row, and the tracked report cards.
/// The filter selection only changes which button is highlighted;
/// the fixture list renders in full either way.

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::state::fixtures::{Priority, ReportRecord, ReportStatus, StatTile, DASHBOARD_STATS};
use crate::store::StatusFilter;
use crate::Message;

const MUTED: Color = Color::from_rgb(0.7, 0.7, 0.7);
const GLOW: Color = Color::from_rgb(0.55, 0.75, 1.0);
const LEAF: Color = Color::from_rgb(0.45, 0.85, 0.6);
const AMBER: Color = Color::from_rgb(0.95, 0.7, 0.3);
const ALERT: Color = Color::from_rgb(0.9, 0.35, 0.35);

pub fn view<'a>(filter: StatusFilter, reports: &'a [ReportRecord]) -> Element<'a, Message> {
    let header = column![
        text("Live Dashboard").size(32),
        text(
            "Track all civic issues in real-time. Monitor progress, view statistics, \
             and see how your community is making a difference.",
        )
        .size(15)
        .color(MUTED),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let stats = row(DASHBOARD_STATS.iter().map(stat_card)).spacing(16);

    let mut filters = row![].spacing(8);
    for choice in StatusFilter::ALL {
        let style = if choice == filter {
            button::primary
        } else {
            button::secondary
        };
        filters = filters.push(
            button(text(choice.label()).size(14))
                .on_press(Message::FilterSelected(choice))
                .style(style)
                .padding(10),
        );
    }
    // Unwired affordance
    filters = filters.push(
        button(text("⚙ More Filters").size(14))
            .style(button::secondary)
            .padding(10),
    );

    let cards = column(reports.iter().map(report_card)).spacing(16);

    let load_more = container(button(text("Load More Issues").size(14)).padding(12))
        .width(Length::Fill)
        .center_x(Length::Fill);

    let content = column![header, stats, filters, cards, load_more]
        .spacing(24)
        .max_width(900);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}

fn stat_card(stat: &StatTile) -> Element<'static, Message> {
    let body = column![
        text(stat.label).size(13).color(MUTED),
        text(stat.value).size(24),
        text(format!("{} from last month", stat.change)).size(12).color(GLOW),
    ]
    .spacing(4);

    container(body)
        .style(container::bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

fn report_card(report: &ReportRecord) -> Element<'_, Message> {
    let badges = row![
        text(report.id).size(12).color(MUTED),
        text(report.status.label()).size(13).color(status_color(report.status)),
        text(format!("{} Priority", report.priority.label()))
            .size(13)
            .color(priority_color(report.priority)),
    ]
    .spacing(14)
    .align_y(Alignment::Center);

    let details = column![
        badges,
        text(report.category_label).size(18),
        text(report.description).size(14).color(MUTED),
        row![
            text(format!("📍 {}", report.location)).size(13).color(MUTED),
            text(format!("📅 {}", report.reported_at)).size(13).color(MUTED),
        ]
        .spacing(16),
        text(format!("Assigned to: {}", report.assigned_to)).size(13),
    ]
    .spacing(8)
    .width(Length::Fill);

    let mut actions = row![button(text("View Details").size(13)).style(button::secondary).padding(8)]
        .spacing(8);
    if report.status != ReportStatus::Resolved {
        actions = actions.push(button(text("🔔").size(13)).style(button::text).padding(8));
    }

    let progress = column![
        text(format!("{}%", report.progress)).size(22).color(GLOW),
        text("Progress").size(11).color(MUTED),
        progress_bar(0.0..=100.0, f32::from(report.progress)).height(8),
        actions,
    ]
    .spacing(6)
    .align_x(Alignment::Center)
    .width(Length::Fixed(180.0));

    let body = row![details, progress].spacing(20).align_y(Alignment::Center);

    container(body)
        .style(container::bordered_box)
        .padding(20)
        .width(Length::Fill)
        .into()
}

fn status_color(status: ReportStatus) -> Color {
    match status {
        ReportStatus::Resolved => LEAF,
        ReportStatus::InProgress => AMBER,
        ReportStatus::Submitted => MUTED,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => ALERT,
        Priority::Medium => AMBER,
        Priority::Low => LEAF,
    }
}
