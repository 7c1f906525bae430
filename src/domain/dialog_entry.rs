//! Dialog entry combining a booking dialog with session metadata.

use chrono::{DateTime, Utc};

use super::DialogId;
use super::booking_dialog::BookingDialog;

/// Session wrapping a [`BookingDialog`] with bookkeeping fields.
///
/// Each open dialog in the registry is stored as a `DialogEntry`.
#[derive(Debug)]
pub struct DialogEntry {
    /// Unique session identifier (immutable after creation).
    pub dialog_id: DialogId,

    /// The wizard state. Updated on every accepted command.
    pub dialog: BookingDialog,

    /// When the session was created (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// When the last accepted command was applied.
    pub last_modified_at: DateTime<Utc>,
}

impl DialogEntry {
    /// Creates a new entry for `dialog`.
    #[must_use]
    pub fn new(dialog_id: DialogId, dialog: BookingDialog) -> Self {
        let now = Utc::now();
        Self {
            dialog_id,
            dialog,
            created_at: now,
            last_modified_at: now,
        }
    }

    /// Records that the dialog changed.
    pub fn touch(&mut self) {
        self.last_modified_at = Utc::now();
    }
}
