/// User interface module
///
/// Pure view functions: each takes a snapshot of the state and returns
/// an `Element` that emits `Message`s. No state is changed here.
///
/// - `sidebar.rs` - category filters and folder labels
/// - `header.rs` - search box, view toggle, upload button
/// - `grid.rs` / `list.rs` - the two ways of showing assets
/// - `upload_modal.rs` - the upload dialog and modal overlay
/// - `thumbnail.rs` - canvas placeholder tiles

pub mod sidebar;
pub mod header;
pub mod grid;
pub mod list;
pub mod upload_modal;
pub mod thumbnail;

use iced::widget::{button, container, text};
use iced::{Border, Color, Element, Length, Theme};

use crate::state::data::AssetType;
use crate::Message;

/// Accent colour per asset type
pub fn accent(kind: AssetType) -> Color {
    match kind {
        AssetType::Video => Color::from_rgb8(0x93, 0x33, 0xea),
        AssetType::Image => Color::from_rgb8(0x25, 0x63, 0xeb),
        AssetType::Document => Color::from_rgb8(0xea, 0x58, 0x0c),
        AssetType::Archive => Color::from_rgb8(0x16, 0xa3, 0x4a),
    }
}

const STAR_GOLD: Color = Color::from_rgb(0.98, 0.75, 0.14);

/// Star toggle shared by grid and list
pub fn star_button<'a>(id: &str, starred: bool) -> Element<'a, Message> {
    let glyph = if starred {
        text("★").size(16).color(STAR_GOLD)
    } else {
        text("☆").size(16)
    };

    button(glyph)
        .padding([2, 6])
        .style(button::text)
        .on_press(Message::ToggleStar(id.to_string()))
        .into()
}

/// "⋮" button plus, when open, the Download / Share / Delete entries
pub fn action_menu<'a>(id: &str, open: bool) -> Element<'a, Message> {
    let toggle = button(text("⋮").size(16))
        .padding([2, 8])
        .style(button::text)
        .on_press(Message::ToggleMenu(id.to_string()));

    if !open {
        return toggle.into();
    }

    let entry = |label: &'a str, message: Message| {
        button(text(label).size(14))
            .width(Length::Fixed(120.0))
            .padding([6, 12])
            .style(button::text)
            .on_press(message)
    };

    let menu = iced::widget::column![
        entry("Download", Message::Download(id.to_string())),
        entry("Share", Message::Share(id.to_string())),
        entry("Delete", Message::Delete(id.to_string())).style(button::danger),
    ]
    .spacing(2);

    iced::widget::column![toggle, container(menu).padding(4).style(container::bordered_box)]
        .spacing(4)
        .into()
}

/// White rounded panel with a border that turns primary when selected
pub fn panel_style(theme: &Theme, selected: bool) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: if selected {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            },
            width: if selected { 2.0 } else { 1.0 },
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}
