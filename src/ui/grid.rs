use iced::widget::{canvas, column, container, horizontal_space, mouse_area, row, stack, text};
use iced::{Element, Length, Pixels, Theme};
use iced_aw::Wrap;

use super::thumbnail::TypeTile;
use crate::state::data::Asset;
use crate::state::library::Library;
use crate::Message;

/// Width of a card in the grid
const CARD_WIDTH: f32 = 240.0;

/// Height of the placeholder tile on each card
const TILE_HEIGHT: f32 = 135.0;

/// Cards wrapped into as many columns as fit the window
pub fn view<'a>(
    assets: &[&'a Asset],
    library: &Library,
    open_menu: Option<&str>,
) -> Element<'a, Message> {
    if assets.is_empty() {
        return super::list::empty_state();
    }

    let cards: Vec<Element<'a, Message>> = assets
        .iter()
        .map(|&asset| {
            card(
                asset,
                library.is_selected(&asset.id),
                open_menu == Some(asset.id.as_str()),
            )
        })
        .collect();

    Wrap::with_elements(cards)
        .spacing(Pixels(16.0))
        .line_spacing(Pixels(16.0))
        .into()
}

/// One asset card; clicking anywhere outside the buttons toggles selection
fn card<'a>(asset: &'a Asset, selected: bool, menu_open: bool) -> Element<'a, Message> {
    let tile = canvas(TypeTile::new(asset.kind))
        .width(Length::Fill)
        .height(Length::Fixed(TILE_HEIGHT));

    let controls = row![
        horizontal_space(),
        super::star_button(&asset.id, asset.starred),
        super::action_menu(&asset.id, menu_open),
    ]
    .spacing(4)
    .padding(8);

    let details = column![
        text(asset.name.as_str()).size(15),
        row![
            text(asset.size.as_str()).size(13),
            horizontal_space(),
            text(asset.modified.as_str()).size(13),
        ],
        text(asset.folder.as_str()).size(12),
    ]
    .spacing(4)
    .padding(12);

    let body = container(column![stack![tile, controls], details])
        .width(Length::Fixed(CARD_WIDTH))
        .style(move |theme: &Theme| super::panel_style(theme, selected));

    mouse_area(body)
        .on_press(Message::ToggleSelect(asset.id.clone()))
        .into()
}
