//! Domain layer: records, identifiers, and the booking dialog.
//!
//! Contains the catalog record shapes (events, bookings, users), their
//! typed identifiers, the booking dialog state machine, and the registry
//! that keeps open dialog sessions.

pub mod booking;
pub mod booking_dialog;
pub mod dialog_entry;
pub mod dialog_registry;
pub mod event;
pub mod ids;
pub mod user;

pub use booking::{Booking, BookingStatus};
pub use booking_dialog::{BookingDialog, DialogStep, PaymentDetails, TicketQuantity};
pub use dialog_entry::DialogEntry;
pub use dialog_registry::DialogRegistry;
pub use event::{Category, Event, Price};
pub use ids::{BookingId, DialogId, EventId, UserId};
pub use user::{Role, User};
