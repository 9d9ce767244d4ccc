use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::ViewMode;
use crate::Message;

/// Top bar: search, grid/list toggle, upload button, owner badge
pub fn view<'a>(search: &str, mode: ViewMode, initials: &'a str) -> Element<'a, Message> {
    let search_box = text_input("Search assets...", search)
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::FillPortion(3));

    let mode_button = |label: &'a str, target: ViewMode| {
        let style: fn(&Theme, button::Status) -> button::Style = if mode == target {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(14))
            .padding([8, 12])
            .style(style)
            .on_press(Message::ViewModeSelected(target))
    };

    let toggle = row![
        mode_button("Grid", ViewMode::Grid),
        mode_button("List", ViewMode::List),
    ]
    .spacing(4);

    let upload = button(text("⇪ Upload").size(15))
        .padding([10, 16])
        .style(button::primary)
        .on_press(Message::OpenUpload);

    let badge = container(text(initials).size(14))
        .padding(10)
        .style(container::rounded_box);

    let bar = row![search_box, iced::widget::horizontal_space(), toggle, upload, badge]
        .spacing(12)
        .align_y(Alignment::Center);

    container(bar)
        .padding([12, 24])
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
