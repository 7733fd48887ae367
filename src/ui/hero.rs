/// Hero promo section: headline, tagline, feature cards, stats
///
/// Pure rendering of static copy. The two call-to-action buttons
/// are decorative in the demo.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::state::fixtures::{HeroStat, HERO_STATS};
use crate::Message;

const GLOW: Color = Color::from_rgb(0.55, 0.75, 1.0);
const LEAF: Color = Color::from_rgb(0.45, 0.85, 0.6);
const MUTED: Color = Color::from_rgb(0.7, 0.7, 0.7);

pub fn view() -> Element<'static, Message> {
    let headline = column![
        text("Report.").size(56),
        text("Track.").size(56).color(GLOW),
        text("Resolve.").size(56).color(LEAF),
    ];

    let tagline = text(
        "Transform your city with crowdsourced civic issue reporting. \
         Citizens report, government responds, community thrives.",
    )
    .size(18)
    .color(MUTED);

    let actions = row![
        button(text("📷  Report an Issue")).padding(14),
        button(text("📍  View Dashboard"))
            .padding(14)
            .style(button::secondary),
    ]
    .spacing(12);

    let stats = row(HERO_STATS.iter().map(stat_block)).spacing(40);

    let features = column![
        feature_card("📷", "Instant Reporting", "Snap, tag location, and submit in seconds"),
        feature_card("⏱", "Real-time Tracking", "Follow your report from submission to resolution"),
        feature_card("👥", "Community Impact", "Join thousands making cities better"),
    ]
    .spacing(12);

    let content = column![headline, tagline, actions, stats, features]
        .spacing(24)
        .max_width(760);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}

fn stat_block(stat: &HeroStat) -> Element<'static, Message> {
    column![
        text(stat.value).size(28).color(GLOW),
        text(stat.caption).size(13).color(MUTED),
    ]
    .align_x(Alignment::Center)
    .into()
}

fn feature_card(glyph: &'static str, title: &'static str, blurb: &'static str) -> Element<'static, Message> {
    let body = row![
        text(glyph).size(28),
        column![
            text(title).size(17),
            text(blurb).size(14).color(MUTED),
        ]
        .spacing(2),
    ]
    .spacing(14)
    .align_y(Alignment::Center);

    container(body)
        .style(container::bordered_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}
