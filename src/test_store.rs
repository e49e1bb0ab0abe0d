//! In-memory device-history tree used by unit tests.

use std::collections::HashMap;

use crate::history_store::HistoryNode;
use crate::models::UsbHistoryError;

/// A fake history node: insertion-ordered children, per-name unreadable
/// flags, and typed value bags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    strings: HashMap<String, String>,
    qwords: HashMap<String, u64>,
    children: Vec<(String, MemoryNode)>,
    unreadable: Vec<String>,
}

impl MemoryNode {
    pub fn with_string(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_qword(mut self, name: &str, value: u64) -> Self {
        self.qwords.insert(name.to_string(), value);
        self
    }

    pub fn add_child(&mut self, name: &str, child: MemoryNode) {
        self.children.push((name.to_string(), child));
    }

    /// Makes the named child fail to open while staying enumerable,
    /// mimicking an access-denied or corrupt store node.
    pub fn mark_unreadable(&mut self, name: &str) {
        self.unreadable.push(name.to_string());
    }

    pub fn child_mut(&mut self, name: &str) -> &mut MemoryNode {
        self.children
            .iter_mut()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, child)| child)
            .unwrap_or_else(|| panic!("no child named {name}"))
    }
}

impl HistoryNode for MemoryNode {
    fn child(&self, name: &str) -> Result<Self, UsbHistoryError> {
        if self.unreadable.iter().any(|blocked| blocked == name) {
            return Err(UsbHistoryError::InstanceUnreadable(name.to_string()));
        }
        self.children
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, child)| child.clone())
            .ok_or_else(|| UsbHistoryError::InstanceUnreadable(name.to_string()))
    }

    fn child_names(&self) -> Vec<String> {
        self.children.iter().map(|(name, _)| name.clone()).collect()
    }

    fn string_value(&self, name: &str) -> Option<String> {
        self.strings.get(name).cloned()
    }

    fn qword_value(&self, name: &str) -> Option<u64> {
        self.qwords.get(name).copied()
    }
}
