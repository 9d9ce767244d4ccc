use iced::widget::{center, column, container, mouse_area, row, text, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::Asset;
use crate::state::library::Library;
use crate::Message;

// Column widths: Name | Folder | Size | Modified | Actions
const NAME: u16 = 5;
const FOLDER: u16 = 2;
const SIZE: u16 = 2;
const MODIFIED: u16 = 2;
const ACTIONS: u16 = 2;

/// Table of assets with one row each
pub fn view<'a>(
    assets: &[&'a Asset],
    library: &Library,
    open_menu: Option<&str>,
) -> Element<'a, Message> {
    if assets.is_empty() {
        return empty_state();
    }

    let heading = row![
        cell(text("Name").size(13), NAME),
        cell(text("Folder").size(13), FOLDER),
        cell(text("Size").size(13), SIZE),
        cell(text("Modified").size(13), MODIFIED),
        cell(text("Actions").size(13), ACTIONS),
    ]
    .padding([10, 24]);

    let mut rows = Column::new().push(heading);
    for &asset in assets {
        rows = rows.push(asset_row(
            asset,
            library.is_selected(&asset.id),
            open_menu == Some(asset.id.as_str()),
        ));
    }

    container(rows)
        .width(Length::Fill)
        .style(|theme: &Theme| super::panel_style(theme, false))
        .into()
}

fn asset_row<'a>(asset: &'a Asset, selected: bool, menu_open: bool) -> Element<'a, Message> {
    let name = row![
        container(text(asset.kind.label()).size(11).color(super::accent(asset.kind)))
            .width(Length::Fixed(72.0)),
        text(asset.name.as_str()).size(14),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let actions = row![
        super::star_button(&asset.id, asset.starred),
        super::action_menu(&asset.id, menu_open),
    ]
    .spacing(4);

    let line = row![
        cell(name, NAME),
        cell(text(asset.folder.as_str()).size(14), FOLDER),
        cell(text(asset.size.as_str()).size(14), SIZE),
        cell(text(asset.modified.as_str()).size(14), MODIFIED),
        cell(actions, ACTIONS),
    ]
    .align_y(Alignment::Center)
    .padding([10, 24]);

    let body = container(line)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let mut style = container::Style::default();
            if selected {
                style.background = Some(theme.extended_palette().primary.weak.color.into());
            }
            style
        });

    mouse_area(body)
        .on_press(Message::ToggleSelect(asset.id.clone()))
        .into()
}

fn cell<'a>(content: impl Into<Element<'a, Message>>, portion: u16) -> Element<'a, Message> {
    container(content)
        .width(Length::FillPortion(portion))
        .into()
}

/// Shown by both views when nothing matches
pub fn empty_state<'a>() -> Element<'a, Message> {
    center(column![text("No files found").size(18)].align_x(Alignment::Center))
        .height(Length::Fixed(240.0))
        .into()
}
