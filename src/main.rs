use iced::event::{self, Event};
use iced::widget::{column, container, horizontal_space, row, scrollable, text};
use iced::{keyboard, window, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod error;
mod import;
mod state;
mod ui;

use config::{AppConfig, ThemeChoice};
use state::data::{FileDescriptor, FilterType, ViewMode};
use state::library::{self, Library};
use state::upload::UploadDialog;
use state::view::{item_count_label, ViewState};

/// Main application state
struct AssetBrowser {
    /// Every asset plus the selection
    library: Library,
    /// Filter, search, display mode, open menu
    view: ViewState,
    /// Files waiting in the upload dialog
    upload: UploadDialog,
    config: AppConfig,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User typed in the search box
    SearchChanged(String),
    /// User picked a sidebar category
    FilterSelected(FilterType),
    ViewModeSelected(ViewMode),
    ToggleStar(String),
    ToggleSelect(String),
    ToggleMenu(String),
    Download(String),
    Share(String),
    Delete(String),
    /// Header "Upload" button
    OpenUpload,
    CloseUpload,
    /// "Choose Files" in the dialog
    ChooseFiles,
    /// "Choose Folder" in the dialog
    ChooseFolder,
    /// Background metadata read finished
    FilesDescribed(Vec<FileDescriptor>),
    /// Background folder scan failed
    ImportFailed(String),
    RemovePending(usize),
    ConfirmUpload,
    /// Files are being dragged over the window
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    /// Escape closes the dialog, or the open menu and the selection
    EscapePressed,
}

impl AssetBrowser {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let library = if config.load_sample_library {
            Library::sample()
        } else {
            Library::new()
        };

        if library.is_empty() {
            log::info!("Asset browser initialized with an empty library");
        } else {
            log::info!("Asset browser initialized with {} assets", library.len());
        }

        (
            AssetBrowser {
                library,
                view: ViewState::new(config.view_mode),
                upload: UploadDialog::new(),
                config,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.view.search = query;
            }
            Message::FilterSelected(filter) => {
                self.view.set_filter(filter);
            }
            Message::ViewModeSelected(mode) => {
                self.view.set_mode(mode);
            }
            Message::ToggleStar(id) => {
                if !self.library.toggle_star(&id) {
                    log::debug!("Star ignored for unknown asset {}", id);
                }
            }
            Message::ToggleSelect(id) => {
                self.view.close_menu();
                self.library.toggle_select(&id);
            }
            Message::ToggleMenu(id) => {
                self.view.toggle_menu(&id);
            }
            Message::Download(id) | Message::Share(id) => {
                // No storage backend: acknowledge and close the menu
                log::info!("Action requested for asset {}", id);
                self.view.close_menu();
            }
            Message::Delete(id) => {
                self.view.close_menu();
                match self.library.delete(&id) {
                    Some(asset) => log::info!("Deleted {}", asset.name),
                    None => log::debug!("Delete ignored for unknown asset {}", id),
                }
            }
            Message::OpenUpload => {
                self.upload.open();
            }
            Message::CloseUpload => {
                self.upload.close();
            }
            Message::ChooseFiles => {
                // Show the native file picker
                let files = FileDialog::new()
                    .set_title("Select Files to Upload")
                    .pick_files();

                if let Some(paths) = files {
                    return Task::perform(import::describe_files(paths), Message::FilesDescribed);
                }
            }
            Message::ChooseFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Folder to Upload")
                    .pick_folder();

                if let Some(folder) = folder {
                    return Task::perform(import::scan_folder(folder), |result| match result {
                        Ok(files) => Message::FilesDescribed(files),
                        Err(e) => Message::ImportFailed(e),
                    });
                }
            }
            Message::FilesDescribed(files) => {
                let added = self.upload.add_files(files);
                log::debug!("{} files added to the upload dialog", added);
            }
            Message::ImportFailed(reason) => {
                self.upload.set_notice(reason);
            }
            Message::RemovePending(index) => {
                self.upload.remove(index);
            }
            Message::ConfirmUpload => {
                if let Some(files) = self.upload.confirm() {
                    let created = self.library.upload(files);
                    log::info!("Uploaded {} files", created.len());
                }
            }
            Message::FileHovered => {
                self.upload.set_drag_active(true);
            }
            Message::FilesHoveredLeft => {
                self.upload.set_drag_active(false);
            }
            Message::FileDropped(path) => {
                // Dropping anywhere on the window opens the dialog
                self.upload.set_drag_active(false);
                self.upload.open();
                return Task::perform(import::describe_files(vec![path]), Message::FilesDescribed);
            }
            Message::EscapePressed => {
                if self.upload.is_open {
                    self.upload.close();
                } else {
                    self.view.close_menu();
                    self.library.clear_selection();
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = library::filter(self.library.list(), &self.view.search, self.view.filter);

        let selected = self.library.selection().len();
        let count = if selected > 0 {
            format!("{} selected · {}", selected, item_count_label(visible.len()))
        } else {
            item_count_label(visible.len())
        };

        let summary = row![
            text(self.view.title()).size(26),
            horizontal_space(),
            text(count).size(14),
        ]
        .align_y(Alignment::Center);

        let open_menu = self.view.open_menu.as_deref();
        let files = match self.view.mode {
            ViewMode::Grid => ui::grid::view(&visible, &self.library, open_menu),
            ViewMode::List => ui::list::view(&visible, &self.library, open_menu),
        };

        let main = scrollable(column![summary, files].spacing(16).padding(24))
            .height(Length::Fill);

        let content = row![
            ui::sidebar::view(self.view.filter, self.library.folders()),
            column![
                ui::header::view(&self.view.search, self.view.mode, &self.config.owner_initials),
                main,
            ],
        ];

        let page = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.upload.is_open {
            ui::upload_modal::modal(page, ui::upload_modal::view(&self.upload), Message::CloseUpload)
        } else {
            page.into()
        }
    }

    /// Listen for files dragged onto the window and the Escape key
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(window_events)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

/// Map drag-and-drop and unhandled Escape presses to messages
fn window_events(event: Event, status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    }
}

fn main() -> iced::Result {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .init();

    let config = AppConfig::load_or_default();

    iced::application("Air", AssetBrowser::update, AssetBrowser::view)
        .theme(AssetBrowser::theme)
        .subscription(AssetBrowser::subscription)
        .centered()
        .run_with(move || AssetBrowser::new(config))
}
