//! Live WMI queries: attached USB drives and the supplementary
//! plug-and-play pass.

use crate::models::{PnpEntity, UsbDrive, UsbHistoryError};
use std::collections::HashMap;
use wmi::{COMLibrary, Variant, WMIConnection};

/// Constants for WMI queries
const USB_DISK_QUERY: &str =
    "SELECT Model, SerialNumber, Size FROM Win32_DiskDrive WHERE InterfaceType='USB'";
const USB_STORAGE_CLASS_GUID: &str = "{36FC9E60-C465-11CF-8056-444553540000}";

/// Sentinel for string fields the live interface did not report
const UNKNOWN_VALUE: &str = "Unknown";

/// Enumerates USB mass-storage drives currently attached to the host.
///
/// An empty vector is a valid outcome (nothing attached); a COM or query
/// failure maps to [`UsbHistoryError::SourceUnavailable`]. No retry is
/// attempted; the caller decides how to surface a failed section.
pub fn enumerate_usb_drives() -> Result<Vec<UsbDrive>, UsbHistoryError> {
    let com_con = COMLibrary::new()?;
    let wmi_con = WMIConnection::new(com_con)?;

    let rows: Vec<HashMap<String, Variant>> = wmi_con.raw_query(USB_DISK_QUERY)?;
    Ok(rows.iter().map(drive_from_row).collect())
}

/// Builds a fully populated drive record from one query row, degrading
/// absent fields to sentinels instead of failing the row.
fn drive_from_row(row: &HashMap<String, Variant>) -> UsbDrive {
    UsbDrive::new(
        get_string_value(row, "Model").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        get_string_value(row, "SerialNumber").unwrap_or_else(|| UNKNOWN_VALUE.to_string()),
        get_u64_value(row, "Size").unwrap_or(0),
    )
}

/// Queries plug-and-play entities under the USB-storage device class and
/// retains the ones carrying the textual USB marker.
///
/// Best-effort enrichment only: results are an independent list with no
/// identity join back to history records.
pub fn match_supplementary() -> Result<Vec<PnpEntity>, UsbHistoryError> {
    let com_con = COMLibrary::new()?;
    let wmi_con = WMIConnection::new(com_con)?;

    let query = format!(
        "SELECT Caption, Description, Manufacturer, DeviceID \
         FROM Win32_PnPEntity WHERE ClassGuid='{USB_STORAGE_CLASS_GUID}'"
    );
    let rows: Vec<HashMap<String, Variant>> = wmi_con.raw_query(query)?;

    Ok(rows.iter().filter_map(entity_from_row).collect())
}

fn entity_from_row(row: &HashMap<String, Variant>) -> Option<PnpEntity> {
    let caption = get_string_value(row, "Caption");
    let description = get_string_value(row, "Description");

    if !PnpEntity::matches_usb_marker(caption.as_deref(), description.as_deref()) {
        return None;
    }

    Some(PnpEntity::new(
        caption?,
        description,
        get_string_value(row, "Manufacturer"),
        get_string_value(row, "DeviceID").unwrap_or_default(),
    ))
}

// Helper functions

pub(super) fn get_string_value(map: &HashMap<String, Variant>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Variant::String(value)) => Some(value.clone()),
        _ => None,
    }
}

/// Reads an unsigned 64-bit value. CIM uint64 properties arrive either
/// as native integers or as decimal strings depending on the query path,
/// so both representations are accepted.
pub(super) fn get_u64_value(map: &HashMap<String, Variant>, key: &str) -> Option<u64> {
    match map.get(key) {
        Some(Variant::UI8(value)) => Some(*value),
        Some(Variant::UI4(value)) => Some(*value as u64),
        Some(Variant::String(value)) => value.parse().ok(),
        _ => None,
    }
}
