//! This module provides the structure for a currently attached USB drive.
//!
//! `UsbDrive` holds the identity and capacity facts extracted from one
//! live disk-drive query row. Instances are constructed fresh per query
//! and discarded after display; nothing is cached or written back.

/// Represents one USB mass-storage drive currently attached to the host.
///
/// Fields that the live interface does not report degrade to sentinel
/// values (`"Unknown"` for strings, `0` for the size) at construction
/// time, so a `UsbDrive` is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct UsbDrive {
    /// Manufacturer and product name as reported by the drive
    model: String,
    /// Hardware serial number as reported by the drive
    serial_number: String,
    /// Total capacity in bytes
    size_bytes: u64,
}

impl UsbDrive {
    /// Creates a new `UsbDrive` from already-resolved query fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use win_usb_history::UsbDrive;
    ///
    /// let drive = UsbDrive::new(
    ///     String::from("SanDisk Cruzer Glide USB Device"),
    ///     String::from("4C530001230731118015"),
    ///     15_376_000_000,
    /// );
    /// assert_eq!(drive.model(), "SanDisk Cruzer Glide USB Device");
    /// ```
    pub fn new(model: String, serial_number: String, size_bytes: u64) -> Self {
        UsbDrive {
            model,
            serial_number,
            size_bytes,
        }
    }

    /// Returns the manufacturer and product name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the hardware serial number.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the total capacity in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
