//! This module provides the structure for one device-history record.
//!
//! A `HistoryDevice` is the fully resolved form of one instance node in
//! the persistent device-history store: every storage device ever
//! registered with the host appears as one instance under its device
//! class. Records are immutable once resolved; there is no write-back.

/// Represents one storage device instance extracted from the history store.
///
/// The compound key is `device_class` + `instance_id`: instance ids are
/// unique within their class but not guaranteed unique across classes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct HistoryDevice {
    /// Unique serial/instance suffix within the device class
    instance_id: String,
    /// Vendor/product grouping key of the class node this instance sits under
    device_class: String,
    /// Resolved human-readable name, `"Unknown Device"` when unresolvable
    friendly_name: String,
    /// Resolved last-connection timestamp, `None` when unresolvable
    last_connected: Option<String>,
}

impl HistoryDevice {
    /// Creates a new `HistoryDevice` from resolved fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use win_usb_history::HistoryDevice;
    ///
    /// let device = HistoryDevice::new(
    ///     String::from("4C530001230731118015&0"),
    ///     String::from("Disk&Ven_SanDisk&Prod_Cruzer_Glide&Rev_1.00"),
    ///     String::from("SanDisk Cruzer Glide"),
    ///     Some(String::from("2024-03-17 09:41:02")),
    /// );
    /// assert_eq!(device.friendly_name(), "SanDisk Cruzer Glide");
    /// ```
    pub fn new(
        instance_id: String,
        device_class: String,
        friendly_name: String,
        last_connected: Option<String>,
    ) -> Self {
        HistoryDevice {
            instance_id,
            device_class,
            friendly_name,
            last_connected,
        }
    }

    /// Returns the instance id (unique within the device class).
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Returns the raw device-class key this instance belongs to.
    pub fn device_class(&self) -> &str {
        &self.device_class
    }

    /// Returns the resolved human-readable name.
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    /// Returns the resolved last-connection timestamp, if one was found.
    pub fn last_connected(&self) -> Option<&str> {
        self.last_connected.as_deref()
    }
}
