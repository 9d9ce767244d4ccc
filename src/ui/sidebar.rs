use iced::widget::{button, column, container, horizontal_rule, row, text, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::FilterType;
use crate::Message;

/// Left navigation: brand, category filters, folder labels
pub fn view<'a>(active: FilterType, folders: Vec<&'a str>) -> Element<'a, Message> {
    let brand = row![
        container(text("A").size(18))
            .padding([4, 10])
            .style(container::rounded_box),
        text("Air").size(22),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut filters = Column::new().spacing(4);
    for filter in FilterType::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if filter == active {
            button::primary
        } else {
            button::text
        };

        filters = filters.push(
            button(text(filter.title()).size(15))
                .width(Length::Fill)
                .padding([8, 12])
                .style(style)
                .on_press(Message::FilterSelected(filter)),
        );
    }

    let mut folder_list = Column::new().spacing(6);
    for folder in folders {
        folder_list = folder_list.push(text(format!("📁 {}", folder)).size(14));
    }

    let content = column![
        brand,
        filters,
        horizontal_rule(1),
        text("FOLDERS").size(12),
        folder_list,
    ]
    .spacing(16)
    .padding(16);

    container(content)
        .width(Length::Fixed(240.0))
        .height(Length::Fill)
        .style(container::bordered_box)
        .into()
}
