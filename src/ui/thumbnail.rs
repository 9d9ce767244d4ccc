/// Placeholder thumbnails
/// Draws a type glyph on a tinted tile until real previews exist
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle, Size};

use crate::state::data::AssetType;

/// Canvas program for one asset tile
#[derive(Debug, Clone, Copy)]
pub struct TypeTile {
    pub kind: AssetType,
}

impl TypeTile {
    pub fn new(kind: AssetType) -> Self {
        Self { kind }
    }

    /// Media gets a neutral tile, files get their type colour
    fn colors(&self) -> (Color, Color) {
        match self.kind {
            AssetType::Video | AssetType::Image => {
                (Color::from_rgb8(0xe5, 0xe7, 0xeb), Color::from_rgb8(0x9c, 0xa3, 0xaf))
            }
            AssetType::Document | AssetType::Archive => {
                let accent = super::accent(self.kind);
                (Color { a: 0.15, ..accent }, accent)
            }
        }
    }
}

impl<Message> canvas::Program<Message> for TypeTile {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let (background, glyph) = self.colors();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), background);

        // Glyph is a square in the middle, a third of the tile height
        let side = (bounds.height / 3.0).max(8.0);
        let center = frame.center();
        let left = center.x - side / 2.0;
        let top = center.y - side / 2.0;

        match self.kind {
            AssetType::Video => {
                // Play triangle
                let play = Path::new(|b| {
                    b.move_to(Point::new(left + side * 0.2, top));
                    b.line_to(Point::new(left + side, center.y));
                    b.line_to(Point::new(left + side * 0.2, top + side));
                    b.close();
                });
                frame.fill(&play, glyph);
            }
            AssetType::Image => {
                // Sun over a mountain
                let sun = Path::circle(Point::new(left + side * 0.75, top + side * 0.25), side * 0.15);
                let mountain = Path::new(|b| {
                    b.move_to(Point::new(left, top + side));
                    b.line_to(Point::new(left + side * 0.4, top + side * 0.35));
                    b.line_to(Point::new(left + side, top + side));
                    b.close();
                });
                frame.fill(&sun, glyph);
                frame.fill(&mountain, glyph);
            }
            AssetType::Document => {
                // Page with text lines
                let page = Path::rectangle(
                    Point::new(left + side * 0.15, top),
                    Size::new(side * 0.7, side),
                );
                frame.stroke(&page, Stroke::default().with_color(glyph).with_width(2.0));

                for i in 1..4 {
                    let y = top + side * 0.25 * i as f32;
                    let line = Path::line(
                        Point::new(left + side * 0.3, y),
                        Point::new(left + side * 0.7, y),
                    );
                    frame.stroke(&line, Stroke::default().with_color(glyph).with_width(2.0));
                }
            }
            AssetType::Archive => {
                // Box with a zipper strip
                let body = Path::rectangle(
                    Point::new(left, top + side * 0.2),
                    Size::new(side, side * 0.8),
                );
                let lid = Path::rectangle(Point::new(left, top), Size::new(side, side * 0.2));
                let strip = Path::line(
                    Point::new(center.x, top),
                    Point::new(center.x, top + side),
                );
                frame.stroke(&body, Stroke::default().with_color(glyph).with_width(2.0));
                frame.fill(&lid, glyph);
                frame.stroke(&strip, Stroke::default().with_color(glyph).with_width(2.0));
            }
        }

        vec![frame.into_geometry()]
    }
}
