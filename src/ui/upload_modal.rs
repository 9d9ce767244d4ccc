use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, scrollable,
    stack, text, Column,
};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::state::upload::{format_file_size, UploadDialog};
use crate::Message;

/// The upload dialog body
pub fn view<'a>(dialog: &'a UploadDialog) -> Element<'a, Message> {
    let title = row![
        text("Upload Files").size(22),
        horizontal_space(),
        button(text("✕").size(16))
            .style(button::text)
            .on_press(Message::CloseUpload),
    ]
    .align_y(Alignment::Center);

    let drag_active = dialog.drag_active;
    let drop_zone = container(
        column![
            text("⇪").size(40),
            text("Drop files here or click to upload").size(18),
            text("Supports images, videos, documents and archives").size(13),
            row![
                button(text("Choose Files"))
                    .padding([8, 20])
                    .style(button::primary)
                    .on_press(Message::ChooseFiles),
                button(text("Choose Folder"))
                    .padding([8, 20])
                    .style(button::secondary)
                    .on_press(Message::ChooseFolder),
            ]
            .spacing(8),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(move |theme: &Theme| drop_zone_style(theme, drag_active));

    let mut body = column![drop_zone].spacing(16);

    if let Some(notice) = dialog.notice() {
        body = body.push(text(notice).size(13).color(Color::from_rgb8(0xdc, 0x26, 0x26)));
    }

    if !dialog.pending().is_empty() {
        let mut files = Column::new().spacing(6);
        for (index, file) in dialog.pending().iter().enumerate() {
            files = files.push(
                container(
                    row![
                        column![
                            text(file.name.as_str()).size(14),
                            text(format_file_size(file.size)).size(12),
                        ]
                        .spacing(2),
                        horizontal_space(),
                        button(text("✕").size(14))
                            .style(button::text)
                            .on_press(Message::RemovePending(index)),
                    ]
                    .align_y(Alignment::Center),
                )
                .padding(10)
                .style(container::rounded_box),
            );
        }

        body = body
            .push(text(format!("Selected Files ({})", dialog.pending().len())).size(14))
            .push(scrollable(files).height(Length::Fixed(180.0)));
    }

    let count = dialog.pending().len();
    let upload_label = if count > 0 {
        format!("Upload ({})", count)
    } else {
        "Upload".to_string()
    };

    let footer = row![
        horizontal_space(),
        button(text("Cancel"))
            .padding([8, 20])
            .style(button::secondary)
            .on_press(Message::CloseUpload),
        button(text(upload_label))
            .padding([8, 20])
            .style(button::primary)
            .on_press_maybe((count > 0).then_some(Message::ConfirmUpload)),
    ]
    .spacing(8);

    container(column![title, body, footer].spacing(20))
        .width(Length::Fixed(640.0))
        .padding(24)
        .style(container::rounded_box)
        .into()
}

/// Dashed-looking zone that lights up while files hover the window
fn drop_zone_style(theme: &Theme, active: bool) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(if active {
            palette.primary.weak.color.into()
        } else {
            palette.background.weak.color.into()
        }),
        border: Border {
            color: if active {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            },
            width: 2.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Show `content` centered over a dimmed `base`; clicking the backdrop emits `on_blur`
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.5,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
