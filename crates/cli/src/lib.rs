//! Console front end for the inventory store.
//!
//! Everything here is presentation: menus, prompts, id assignment and table
//! rendering. Domain rules live in `stockkeep-inventory`.

pub mod config;
pub mod console;
pub mod error;
pub mod ids;
pub mod menu;
pub mod session;
pub mod table;

pub use config::CliConfig;
pub use error::CliError;
pub use session::Session;
