mod field_resolve;
mod history_store;
mod models;
mod sections;
mod size_format;
#[cfg(test)]
mod test_store;
#[cfg(windows)]
mod windows_devices;
#[cfg(windows)]
mod windows_registry;

pub use field_resolve::{resolve_friendly_name, resolve_last_connected, UNKNOWN_DEVICE};
pub use history_store::{walk_nodes, HistoryNode};
pub use models::*;
pub use sections::*;
pub use size_format::format_size;
#[cfg(windows)]
pub use windows_devices::{enumerate_usb_drives, match_supplementary};
#[cfg(windows)]
pub use windows_registry::walk_history;
