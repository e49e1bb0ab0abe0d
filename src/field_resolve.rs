//! Fallback-chain resolution of per-instance display fields.
//!
//! Device instances record their name and last-arrival time in different
//! places depending on driver and OS version, and any of the locations
//! may be absent. Each field is therefore resolved through an ordered
//! rule table (sub-node path plus value name, first hit wins), so a new
//! fallback location is one more table row, not another nested branch.
//! No input, including a handle that failed to open, makes these
//! resolvers panic or return an error.

use chrono::{DateTime, Local};

use crate::history_store::HistoryNode;

/// Sentinel name for instances whose name cannot be resolved.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Windows FILETIME epoch (1601-01-01) to Unix epoch offset in seconds.
const FILETIME_UNIX_DIFF_SECS: i64 = 11_644_473_600;
/// FILETIME ticks (100 ns) per second.
const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

/// One lookup location: a sub-node path below the instance node and the
/// value name to read there. An empty path reads the instance node itself.
struct Lookup {
    path: &'static [&'static str],
    value_name: &'static str,
}

/// Name locations, most specific first.
const FRIENDLY_NAME_CHAIN: &[Lookup] = &[
    Lookup {
        path: &[],
        value_name: "FriendlyName",
    },
    Lookup {
        path: &["Device Parameters"],
        value_name: "Label",
    },
];

/// Last-arrival location.
const LAST_ARRIVAL: Lookup = Lookup {
    path: &["Properties"],
    value_name: "LastArrivalDate",
};

/// Descends `rule.path` from `node`, treating any unopenable sub-node as
/// absence, and returns the node holding the rule's value.
fn descend<N: HistoryNode>(node: &N, rule: &Lookup) -> Option<N> {
    let (first, rest) = rule.path.split_first()?;
    let mut current = node.child(first).ok()?;
    for step in rest {
        current = current.child(step).ok()?;
    }
    Some(current)
}

fn lookup_string<N: HistoryNode>(node: &N, rule: &Lookup) -> Option<String> {
    match rule.path {
        [] => node.string_value(rule.value_name),
        _ => descend(node, rule)?.string_value(rule.value_name),
    }
}

fn lookup_qword<N: HistoryNode>(node: &N, rule: &Lookup) -> Option<u64> {
    match rule.path {
        [] => node.qword_value(rule.value_name),
        _ => descend(node, rule)?.qword_value(rule.value_name),
    }
}

/// Resolves the human-readable name of a device instance.
///
/// Tries `FriendlyName` on the instance node, then `Label` under its
/// `Device Parameters` sub-node; when both are absent or unreadable, or
/// when the instance handle itself is missing, returns
/// [`UNKNOWN_DEVICE`].
pub fn resolve_friendly_name<N: HistoryNode>(instance: Option<&N>) -> String {
    instance
        .and_then(|node| {
            FRIENDLY_NAME_CHAIN
                .iter()
                .find_map(|rule| lookup_string(node, rule))
        })
        .unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}

/// Resolves the last-connection timestamp of a device instance.
///
/// Reads `LastArrivalDate` under the instance's `Properties` sub-node as
/// a 64-bit FILETIME and renders it as a local calendar timestamp.
/// Absent, unreadable, or unconvertible values, and a missing instance
/// handle, all resolve to `None`; the record is then displayed without a
/// last-connected line rather than with a placeholder.
pub fn resolve_last_connected<N: HistoryNode>(instance: Option<&N>) -> Option<String> {
    let filetime = lookup_qword(instance?, &LAST_ARRIVAL)?;
    filetime_to_local(filetime).map(|stamp| stamp.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Converts a FILETIME (100-ns ticks since 1601-01-01 UTC) to local time.
fn filetime_to_local(filetime: u64) -> Option<DateTime<Local>> {
    let secs = (filetime / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_UNIX_DIFF_SECS;
    let nanos = ((filetime % FILETIME_TICKS_PER_SEC) * 100) as u32;
    DateTime::from_timestamp(secs, nanos).map(|utc| utc.with_timezone(&Local))
}
