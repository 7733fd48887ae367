/// Issue submission form
///
/// Renders the report draft: category selector grid, description
/// and location inputs, photo attachment area, and the submit
/// button with its in-flight spinner text.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Color, Element, Length};

use crate::state::draft::{Category, ReportDraft};
use crate::Message;

const MUTED: Color = Color::from_rgb(0.7, 0.7, 0.7);
const LEAF: Color = Color::from_rgb(0.45, 0.85, 0.6);

pub fn view(draft: &ReportDraft) -> Element<'_, Message> {
    let header = column![
        text("Report a Civic Issue").size(32),
        text(
            "Help make your community better by reporting issues that need attention. \
             Your report will be tracked and resolved by the relevant authorities.",
        )
        .size(15)
        .color(MUTED),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    // 3 + 2 grid, first category row then the remainder
    let category_grid = column![
        row(Category::ALL[..3].iter().map(|c| category_button(*c, draft.category))).spacing(10),
        row(Category::ALL[3..].iter().map(|c| category_button(*c, draft.category))).spacing(10),
    ]
    .spacing(10);

    let description = column![
        text("Description").size(14),
        text_input("Describe the issue in detail...", &draft.description)
            .on_input(Message::DescriptionChanged)
            .padding(12),
    ]
    .spacing(6);

    let location = column![
        text("Location").size(14),
        row![
            text_input("Enter location or coordinates...", &draft.location)
                .on_input(Message::LocationChanged)
                .padding(12),
            button(text("📍"))
                .on_press(Message::UseCurrentLocation)
                .padding(12)
                .style(button::secondary),
        ]
        .spacing(8),
    ]
    .spacing(6);

    let upload_area = match &draft.image {
        Some(image) => column![
            text("✔ Image uploaded").size(15).color(LEAF),
            text(image.name.as_str()).size(12).color(MUTED),
        ],
        None => column![
            text("📷 Add a photo").size(15),
            text("Click to upload or take a picture").size(12).color(MUTED),
        ],
    }
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let upload = column![
        text("Photo Evidence").size(14),
        button(upload_area)
            .on_press(Message::PickImage)
            .padding(24)
            .width(Length::Fill)
            .style(button::text),
    ]
    .spacing(6);

    // The control is disabled while the simulated call is in flight
    let submit_label = if draft.submitting {
        "⏳ Submitting Report..."
    } else {
        "⬆ Submit Report"
    };
    let mut submit = button(
        text(submit_label)
            .size(16)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .padding(14)
    .width(Length::Fill);
    if !draft.submitting {
        submit = submit.on_press(Message::SubmitReport);
    }

    let form = column![
        column![text("Issue Type").size(14), category_grid].spacing(6),
        description,
        location,
        upload,
        submit,
    ]
    .spacing(20);

    let card = container(form)
        .style(container::bordered_box)
        .padding(30)
        .width(Length::Fill);

    let tips = row![
        tip("📸 Add clear photos"),
        tip("📍 Include exact location"),
        tip("📝 Be specific in description"),
    ]
    .spacing(10);

    let content = column![header, card, tips]
        .spacing(24)
        .align_x(Alignment::Center)
        .max_width(680);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(40)
        .into()
}

fn category_button(category: Category, selected: Option<Category>) -> Element<'static, Message> {
    let content = column![
        text(category.glyph()).size(20),
        text(category.label()).size(13),
    ]
    .spacing(4);

    let style = if selected == Some(category) {
        button::primary
    } else {
        button::secondary
    };

    button(content)
        .on_press(Message::CategorySelected(category))
        .style(style)
        .padding(14)
        .width(Length::Fill)
        .into()
}

fn tip(label: &'static str) -> Element<'static, Message> {
    container(text(label).size(12).color(MUTED))
        .style(container::rounded_box)
        .padding(8)
        .into()
}
