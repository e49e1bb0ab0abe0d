//! Registry adapter for the device-history store.
//!
//! Maps the [`HistoryNode`] abstraction onto `winreg` keys. Every child
//! open is a fresh scoped `RegKey` released on drop, so handle lifetime
//! stays bounded per traversal step across the class/instance fan-out.

use std::io;

use winreg::enums::HKEY_LOCAL_MACHINE;
use winreg::RegKey;

use crate::history_store::{walk_nodes, HistoryNode};
use crate::models::{HistoryDevice, UsbHistoryError};

/// Root of the USB mass-storage device history.
const HISTORY_ROOT: &str = r"SYSTEM\CurrentControlSet\Enum\USBSTOR";

impl HistoryNode for RegKey {
    fn child(&self, name: &str) -> Result<Self, UsbHistoryError> {
        self.open_subkey(name)
            .map_err(|e| UsbHistoryError::InstanceUnreadable(format!("{name}: {e}")))
    }

    fn child_names(&self) -> Vec<String> {
        self.enum_keys().filter_map(|name| name.ok()).collect()
    }

    fn string_value(&self, name: &str) -> Option<String> {
        self.get_value::<String, _>(name).ok()
    }

    fn qword_value(&self, name: &str) -> Option<u64> {
        self.get_value::<u64, _>(name).ok()
    }
}

/// Walks the persistent device-history store, yielding one record per
/// readable instance ever registered with the host.
///
/// A missing root key is the [`UsbHistoryError::StoreNotFound`]
/// condition: valid on a host with no USB storage history, reported
/// as a single line, never an abort. Any other failure to open the root
/// is [`UsbHistoryError::SourceUnavailable`]. All reads are
/// non-mutating.
pub fn walk_history() -> Result<Vec<HistoryDevice>, UsbHistoryError> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let root = hklm.open_subkey(HISTORY_ROOT).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            UsbHistoryError::StoreNotFound
        } else {
            UsbHistoryError::SourceUnavailable(e.to_string())
        }
    })?;

    Ok(walk_nodes(&root))
}
