pub mod account_menu;
pub mod header;

pub use account_menu::AccountMenu;
pub use header::Header;
