//! Unsaved edit copy for record modals.
//!
//! The modal edits `DraftState::draft` field by field; nothing reaches the
//! backend until the owner's save callback runs. `is_submitting` is tracked
//! apart from the load lifecycle's `is_loading`.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::Notification;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save changes";

/// A record a modal can edit by field name.
pub trait EditableRecord: Clone {
    fn record_id(&self) -> &str;

    /// Set a named field from form input. Returns `false` for unknown names.
    fn set_field(&mut self, name: &str, value: String) -> bool;
}

impl EditableRecord for Notification {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            "title" => self.title = value,
            "content" => self.content = value,
            "type" => self.kind = value,
            _ => return false,
        }
        true
    }
}

/// Find a record by id in an already-loaded collection.
pub fn find_by_id<T: EditableRecord>(items: &[T], id: &str) -> Option<T> {
    items.iter().find(|item| item.record_id() == id).cloned()
}

/// Replace the record with the same id in place. Returns `false` if absent.
pub fn replace_by_id<T: EditableRecord>(items: &mut [T], record: T) -> bool {
    match items.iter_mut().find(|item| item.record_id() == record.record_id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Draft plus submission status for one modal.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftState<T> {
    pub draft: Option<T>,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl<T> Default for DraftState<T> {
    fn default() -> Self {
        Self { draft: None, is_submitting: false, error: None }
    }
}

impl<T: EditableRecord> DraftState<T> {
    /// Start editing a copy of `record`.
    pub fn load(&mut self, record: T) {
        self.draft = Some(record);
        self.error = None;
        self.is_submitting = false;
    }

    pub fn edit(&mut self, name: &str, value: String) -> bool {
        match self.draft.as_mut() {
            Some(draft) => draft.set_field(name, value),
            None => false,
        }
    }

    /// Mark a save in flight and hand back the draft to persist. `None` when
    /// there is nothing to save or a save is already running.
    pub fn begin_submit(&mut self) -> Option<T> {
        if self.is_submitting {
            return None;
        }
        let draft = self.draft.clone()?;
        self.is_submitting = true;
        self.error = None;
        Some(draft)
    }

    /// Record the save outcome. Failure keeps the draft for another attempt.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.is_submitting = false;
        if let Err(reason) = outcome {
            log::warn!("saving draft failed: {reason}");
            self.error = Some(SAVE_FAILED_MESSAGE.to_owned());
        }
    }
}
