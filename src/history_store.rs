//! Traversal of the persistent device-history store.
//!
//! The store is a three-level hierarchy: device-class nodes group
//! device-instance nodes, each of which carries a property bag. The walk
//! is expressed over the [`HistoryNode`] trait so the same code runs
//! against the real registry store and against an in-memory tree in
//! tests; the Windows adapter lives in `windows_registry`.

use crate::field_resolve::{resolve_friendly_name, resolve_last_connected};
use crate::models::{HistoryDevice, UsbHistoryError};

/// Read access to one node of the device-history tree.
///
/// Implementations open children as fresh scoped handles (released when
/// the returned node is dropped) and treat every read as fallible:
/// missing or unreadable values surface as `None`, an unopenable child
/// as `Err`. Nothing here mutates the store.
pub trait HistoryNode: Sized {
    /// Opens the named child node.
    fn child(&self, name: &str) -> Result<Self, UsbHistoryError>;

    /// Enumerates child node names in store-native order.
    fn child_names(&self) -> Vec<String>;

    /// Reads a string value from this node's property bag.
    fn string_value(&self, name: &str) -> Option<String>;

    /// Reads a 64-bit integer value from this node's property bag.
    fn qword_value(&self, name: &str) -> Option<u64>;
}

/// Walks a device-history tree rooted at `root`, yielding one fully
/// resolved [`HistoryDevice`] per readable instance node.
///
/// Traversal is two levels deep in store-native order. A class or
/// instance node that fails to open is logged and omitted; it never
/// aborts traversal of its siblings and is not counted. Failures below
/// an opened instance node degrade to resolver defaults instead.
pub fn walk_nodes<N: HistoryNode>(root: &N) -> Vec<HistoryDevice> {
    let mut devices = Vec::new();

    for class_name in root.child_names() {
        let class_node = match root.child(&class_name) {
            Ok(node) => node,
            Err(error) => {
                tracing::warn!(class = %class_name, %error, "skipping device class node");
                continue;
            }
        };

        for instance_name in class_node.child_names() {
            let instance_node = match class_node.child(&instance_name) {
                Ok(node) => node,
                Err(error) => {
                    tracing::warn!(
                        class = %class_name,
                        instance = %instance_name,
                        %error,
                        "skipping device instance node"
                    );
                    continue;
                }
            };

            devices.push(HistoryDevice::new(
                instance_name,
                class_name.clone(),
                resolve_friendly_name(Some(&instance_node)),
                resolve_last_connected(Some(&instance_node)),
            ));
        }
    }

    tracing::debug!(count = devices.len(), "history walk complete");
    devices
}
