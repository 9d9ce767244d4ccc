/// Transient view state: what the user is looking at, not what is stored

use super::data::{FilterType, ViewMode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Active sidebar category
    pub filter: FilterType,
    /// Free-text search from the header
    pub search: String,
    /// Grid or list
    pub mode: ViewMode,
    /// Asset whose action menu is open (at most one)
    pub open_menu: Option<String>,
}

impl ViewState {
    pub fn new(mode: ViewMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn set_filter(&mut self, filter: FilterType) {
        self.filter = filter;
        self.open_menu = None;
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.open_menu = None;
    }

    /// Heading for the file area
    pub fn title(&self) -> &'static str {
        self.filter.title()
    }

    /// Open the menu for `id`, or close it if it is already open
    pub fn toggle_menu(&mut self, id: &str) {
        if self.open_menu.as_deref() == Some(id) {
            self.open_menu = None;
        } else {
            self.open_menu = Some(id.to_string());
        }
    }

    pub fn close_menu(&mut self) {
        self.open_menu = None;
    }
}

/// "1 item" / "N items"
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ViewState::new(ViewMode::List);
        assert_eq!(view.filter, FilterType::All);
        assert!(view.search.is_empty());
        assert_eq!(view.mode, ViewMode::List);
        assert_eq!(view.title(), "All Files");
    }

    #[test]
    fn test_titles() {
        let mut view = ViewState::default();
        view.set_filter(FilterType::Starred);
        assert_eq!(view.title(), "Starred");
        view.set_filter(FilterType::Video);
        assert_eq!(view.title(), "Videos");
        view.set_filter(FilterType::Image);
        assert_eq!(view.title(), "Images");
    }

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(6), "6 items");
    }

    #[test]
    fn test_menu_toggle() {
        let mut view = ViewState::default();
        view.toggle_menu("1");
        assert_eq!(view.open_menu.as_deref(), Some("1"));

        // Opening another menu closes the first
        view.toggle_menu("2");
        assert_eq!(view.open_menu.as_deref(), Some("2"));

        view.toggle_menu("2");
        assert_eq!(view.open_menu, None);
    }

    #[test]
    fn test_switching_view_closes_menu() {
        let mut view = ViewState::default();
        view.toggle_menu("1");
        view.set_mode(ViewMode::List);
        assert_eq!(view.open_menu, None);

        view.toggle_menu("1");
        view.set_filter(FilterType::Image);
        assert_eq!(view.open_menu, None);
    }
}
