//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Panels are free draw functions over the controller; dialogs implement
//! `Component` and communicate through Actions.

pub mod compare;
pub mod countries;
pub mod detail_dialog;
pub mod flags;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod loading;
pub mod picker_dialog;
pub mod quit_dialog;
pub mod statistics;

pub use detail_dialog::CountryDetailDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use loading::LoadingScreen;
pub use picker_dialog::PickerDialog;
pub use quit_dialog::QuitDialog;
