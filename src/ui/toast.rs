/// Toast notification banners
///
/// Renders the active toast queue as a banner strip at the top of
/// the window. Error toasts get destructive coloring.

use iced::widget::{column, container, text};
use iced::{Color, Element, Length};

use crate::notify::{Toast, ToastKind, Toasts};
use crate::Message;

const MUTED: Color = Color::from_rgb(0.7, 0.7, 0.7);
const LEAF: Color = Color::from_rgb(0.45, 0.85, 0.6);
const ALERT: Color = Color::from_rgb(0.9, 0.35, 0.35);

pub fn view(toasts: &Toasts) -> Element<'_, Message> {
    let banners = column(toasts.iter().map(banner)).spacing(6);

    container(banners)
        .width(Length::Fill)
        .padding(10)
        .into()
}

fn banner(toast: &Toast) -> Element<'_, Message> {
    let title_color = match toast.kind {
        ToastKind::Info => LEAF,
        ToastKind::Error => ALERT,
    };

    let body = column![
        text(toast.title.as_str()).size(15).color(title_color),
        text(toast.body.as_str()).size(13).color(MUTED),
    ]
    .spacing(2);

    container(body)
        .style(container::bordered_box)
        .padding(12)
        .width(Length::Fill)
        .into()
}
