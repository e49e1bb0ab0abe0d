//! This module provides the error taxonomy for USB inventory operations.
//!
//! `UsbHistoryError` distinguishes the three failure conditions the
//! inventory passes can hit: a live management interface that cannot be
//! reached, a history store whose root does not exist, and a single
//! history node that cannot be opened. Only the first two ever reach a
//! caller; the third is consumed inside the tree walker.

use thiserror::Error;

/// Represents a failure in one of the inventory data sources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsbHistoryError {
    /// A live query interface (WMI/COM) could not be reached or denied
    /// access, or the history store root failed to open for a reason
    /// other than absence. Fails the whole section; sibling sections
    /// still run.
    #[error("management interface unavailable: {0}")]
    SourceUnavailable(String),

    /// The device-history root key does not exist. A valid outcome on a
    /// host with no recorded USB storage history, reported as a single
    /// user-facing line rather than an abort.
    #[error("USB device history store not found")]
    StoreNotFound,

    /// One history node could not be opened. Localized: the walker logs
    /// it, omits the node, and continues with its siblings.
    #[error("history node unreadable: {0}")]
    InstanceUnreadable(String),
}

#[cfg(windows)]
impl From<wmi::WMIError> for UsbHistoryError {
    fn from(value: wmi::WMIError) -> Self {
        UsbHistoryError::SourceUnavailable(value.to_string())
    }
}
