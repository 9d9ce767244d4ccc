/// State management module
///
/// This module handles all application state, including:
/// - The in-memory asset library and selection (library.rs)
/// - Shared data structures (data.rs)
/// - Filter, search and display mode (view.rs)
/// - Files waiting in the upload dialog (upload.rs)

pub mod library;
pub mod data;
pub mod view;
pub mod upload;
