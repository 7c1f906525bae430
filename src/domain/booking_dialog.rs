//! Three-step ticket purchase wizard.
//!
//! [`BookingDialog`] models the dialog on the event detail page as an
//! explicit state machine:
//!
//! ```text
//!            proceed_to_payment          pay
//! Selection ───────────────────► Payment ────► Confirmation
//!     ▲                             │
//!     └────────────── back ─────────┘
//!
//! close(): any step ──► closed, reset to Selection { quantity: 1 }
//! open():  closed   ──► visible at Selection
//! ```
//!
//! Payment is simulated: `pay` always reaches `Confirmation` and never
//! inspects the card fields. A real payment processor would add its failure
//! states at the `Payment -> Confirmation` edge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::event::{Event, Price};
use super::EventId;

/// Number of tickets selected in the first step. Only 1 to 4 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TicketQuantity(u8);

impl TicketQuantity {
    /// Quantities offered by the ticket selector.
    pub const OPTIONS: [u8; 4] = [1, 2, 3, 4];

    /// Validates a requested quantity.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::InvalidQuantity`] unless `quantity` is one of
    /// [`Self::OPTIONS`].
    pub fn new(quantity: i64) -> Result<Self, DialogError> {
        u8::try_from(quantity)
            .ok()
            .filter(|q| Self::OPTIONS.contains(q))
            .map(Self)
            .ok_or(DialogError::InvalidQuantity(quantity))
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for TicketQuantity {
    fn default() -> Self {
        Self(1)
    }
}

/// Card fields typed into the payment step. Never validated or stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaymentDetails {
    /// Card number as typed.
    #[serde(default)]
    pub card_number: String,
    /// Expiry as typed (`MM/YY`).
    #[serde(default)]
    pub expiry: String,
    /// Card verification code as typed.
    #[serde(default)]
    pub cvc: String,
}

impl PaymentDetails {
    /// Last four digits of the card number, if it contains at least four.
    #[must_use]
    pub fn last_four(&self) -> Option<String> {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let start = digits.len().checked_sub(4)?;
        digits.get(start..).map(|tail| tail.iter().collect())
    }
}

/// Outcome of the simulated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaymentReceipt {
    /// Simulated transaction reference.
    pub transaction_id: uuid::Uuid,
    /// Amount charged.
    #[schema(value_type = f64)]
    pub amount: Price,
    /// Last four digits of the card, when the typed number had them.
    pub card_last_four: Option<String>,
    /// When the payment was simulated.
    pub paid_at: DateTime<Utc>,
}

/// Current step of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogStep {
    /// Step 1: choose a ticket quantity.
    Selection {
        /// Currently selected quantity.
        quantity: TicketQuantity,
    },
    /// Step 2: enter card details.
    Payment {
        /// Quantity carried over from selection.
        quantity: TicketQuantity,
    },
    /// Step 3: terminal confirmation.
    Confirmation {
        /// Quantity that was paid for.
        quantity: TicketQuantity,
        /// Simulated payment receipt.
        receipt: PaymentReceipt,
    },
}

impl DialogStep {
    /// Stable lowercase name of the step.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Selection { .. } => "selection",
            Self::Payment { .. } => "payment",
            Self::Confirmation { .. } => "confirmation",
        }
    }

    /// 1-based position of the step in the wizard.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Selection { .. } => 1,
            Self::Payment { .. } => 2,
            Self::Confirmation { .. } => 3,
        }
    }

    /// Quantity selected at this step.
    #[must_use]
    pub const fn quantity(&self) -> TicketQuantity {
        match self {
            Self::Selection { quantity }
            | Self::Payment { quantity }
            | Self::Confirmation { quantity, .. } => *quantity,
        }
    }
}

impl Default for DialogStep {
    fn default() -> Self {
        Self::Selection {
            quantity: TicketQuantity::default(),
        }
    }
}

/// Commands rejected by the wizard. The wizard itself has no failure
/// states; these only guard against commands sent out of order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    /// Quantity outside the offered options.
    #[error("ticket quantity must be between 1 and 4, got {0}")]
    InvalidQuantity(i64),

    /// The command does not apply to the current step.
    #[error("cannot {command} during the {step} step")]
    InvalidTransition {
        /// Rejected command.
        command: &'static str,
        /// Step the dialog was in.
        step: &'static str,
    },

    /// The dialog is closed; only `open` and `close` are accepted.
    #[error("booking dialog is closed")]
    Closed,
}

/// Booking dialog for one event.
#[derive(Debug, Clone)]
pub struct BookingDialog {
    event_id: EventId,
    event_title: String,
    unit_price: Price,
    open: bool,
    step: DialogStep,
}

impl BookingDialog {
    /// Creates a closed dialog for `event`, positioned at the selection step.
    #[must_use]
    pub fn new(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            unit_price: event.price,
            open: false,
            step: DialogStep::default(),
        }
    }

    /// Event this dialog books tickets for.
    #[must_use]
    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Title of the event.
    #[must_use]
    pub fn event_title(&self) -> &str {
        &self.event_title
    }

    /// Price of a single ticket.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Whether the dialog is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> &DialogStep {
        &self.step
    }

    /// Total for the selected quantity: unit price × quantity.
    #[must_use]
    pub fn total(&self) -> Price {
        self.unit_price
            .times(u64::from(self.step.quantity().get()))
    }

    /// Text shown on the confirmation step.
    #[must_use]
    pub fn confirmation_message(&self) -> String {
        format!(
            "Your tickets for {} are confirmed. A confirmation email has been sent to you.",
            self.event_title
        )
    }

    /// Shows the dialog. Opening an already open dialog is a no-op.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the dialog and resets it to the selection step with one ticket.
    pub fn close(&mut self) {
        self.open = false;
        self.step = DialogStep::default();
    }

    /// Changes the ticket quantity.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::InvalidQuantity`] for quantities outside 1–4,
    /// [`DialogError::Closed`] when closed, and
    /// [`DialogError::InvalidTransition`] outside the selection step.
    pub fn select_quantity(&mut self, quantity: i64) -> Result<(), DialogError> {
        self.ensure_open()?;
        let DialogStep::Selection { .. } = self.step else {
            return Err(self.rejected("select a quantity"));
        };
        let quantity = TicketQuantity::new(quantity)?;
        self.step = DialogStep::Selection { quantity };
        Ok(())
    }

    /// Moves from selection to payment.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Closed`] when closed and
    /// [`DialogError::InvalidTransition`] outside the selection step.
    pub fn proceed_to_payment(&mut self) -> Result<(), DialogError> {
        self.ensure_open()?;
        let DialogStep::Selection { quantity } = self.step else {
            return Err(self.rejected("proceed to payment"));
        };
        self.step = DialogStep::Payment { quantity };
        Ok(())
    }

    /// Returns from payment to selection, keeping the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Closed`] when closed and
    /// [`DialogError::InvalidTransition`] outside the payment step.
    pub fn back(&mut self) -> Result<(), DialogError> {
        self.ensure_open()?;
        let DialogStep::Payment { quantity } = self.step else {
            return Err(self.rejected("go back"));
        };
        self.step = DialogStep::Selection { quantity };
        Ok(())
    }

    /// Simulates the payment and moves to confirmation.
    ///
    /// The card fields are not validated; any contents succeed.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Closed`] when closed and
    /// [`DialogError::InvalidTransition`] outside the payment step.
    pub fn pay(&mut self, details: &PaymentDetails) -> Result<PaymentReceipt, DialogError> {
        self.ensure_open()?;
        let DialogStep::Payment { quantity } = self.step else {
            return Err(self.rejected("pay"));
        };
        let receipt = PaymentReceipt {
            transaction_id: uuid::Uuid::new_v4(),
            amount: self.total(),
            card_last_four: details.last_four(),
            paid_at: Utc::now(),
        };
        self.step = DialogStep::Confirmation {
            quantity,
            receipt: receipt.clone(),
        };
        Ok(receipt)
    }

    fn ensure_open(&self) -> Result<(), DialogError> {
        if self.open {
            Ok(())
        } else {
            Err(DialogError::Closed)
        }
    }

    fn rejected(&self, command: &'static str) -> DialogError {
        DialogError::InvalidTransition {
            command,
            step: self.step.name(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::NaiveDate;

    fn festival() -> Event {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 8, 15) else {
            panic!("valid date");
        };
        Event {
            id: EventId::from("1"),
            title: "Starlight Music Festival".to_string(),
            description: String::new(),
            date,
            time: "4:00 PM".to_string(),
            location: "Sunset Valley".to_string(),
            category: Category::Music,
            organizer: "Starlight Events".to_string(),
            price: Price::from_major(150),
            image_url: String::new(),
            image_hint: String::new(),
        }
    }

    fn opened() -> BookingDialog {
        let mut dialog = BookingDialog::new(&festival());
        dialog.open();
        dialog
    }

    #[test]
    fn starts_closed_at_selection_with_one_ticket() {
        let dialog = BookingDialog::new(&festival());
        assert!(!dialog.is_open());
        assert_eq!(dialog.step().number(), 1);
        assert_eq!(dialog.step().quantity().get(), 1);
        assert_eq!(dialog.total(), Price::from_major(150));
    }

    #[test]
    fn every_quantity_reaches_confirmation_regardless_of_card_fields() {
        let junk = PaymentDetails {
            card_number: "not a card".to_string(),
            expiry: String::new(),
            cvc: "??".to_string(),
        };
        for q in TicketQuantity::OPTIONS {
            let mut dialog = opened();
            assert!(dialog.select_quantity(i64::from(q)).is_ok());
            assert!(dialog.proceed_to_payment().is_ok());
            let Ok(receipt) = dialog.pay(&junk) else {
                panic!("payment is simulated and cannot fail");
            };
            assert_eq!(receipt.amount, Price::from_major(150).times(u64::from(q)));
            assert_eq!(receipt.card_last_four, None);
            assert_eq!(dialog.step().name(), "confirmation");
            assert_eq!(dialog.step().quantity().get(), q);
        }
    }

    #[test]
    fn closing_from_confirmation_and_reopening_resets_to_selection() {
        let mut dialog = opened();
        let _ = dialog.select_quantity(3);
        let _ = dialog.proceed_to_payment();
        let _ = dialog.pay(&PaymentDetails::default());
        assert_eq!(dialog.step().number(), 3);

        dialog.close();
        assert!(!dialog.is_open());
        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.step(), &DialogStep::default());
        assert_eq!(dialog.total(), Price::from_major(150));
    }

    #[test]
    fn back_keeps_selected_quantity() {
        let mut dialog = opened();
        let _ = dialog.select_quantity(2);
        let _ = dialog.proceed_to_payment();
        assert!(dialog.back().is_ok());
        assert_eq!(
            dialog.step(),
            &DialogStep::Selection {
                quantity: TicketQuantity(2)
            }
        );
    }

    #[test]
    fn rejects_quantities_outside_options() {
        let mut dialog = opened();
        assert_eq!(dialog.select_quantity(0), Err(DialogError::InvalidQuantity(0)));
        assert_eq!(dialog.select_quantity(5), Err(DialogError::InvalidQuantity(5)));
        assert_eq!(dialog.select_quantity(300), Err(DialogError::InvalidQuantity(300)));
        assert_eq!(dialog.select_quantity(-1), Err(DialogError::InvalidQuantity(-1)));
        assert_eq!(dialog.step().quantity().get(), 1);
    }

    #[test]
    fn out_of_order_commands_leave_state_unchanged() {
        let mut dialog = opened();
        let err = dialog.pay(&PaymentDetails::default());
        assert_eq!(
            err.err(),
            Some(DialogError::InvalidTransition {
                command: "pay",
                step: "selection"
            })
        );
        assert!(dialog.back().is_err());
        assert_eq!(dialog.step(), &DialogStep::default());

        let _ = dialog.proceed_to_payment();
        assert!(dialog.select_quantity(2).is_err());
        assert_eq!(dialog.step().name(), "payment");
    }

    #[test]
    fn closed_dialog_rejects_wizard_commands() {
        let mut dialog = BookingDialog::new(&festival());
        assert_eq!(dialog.proceed_to_payment(), Err(DialogError::Closed));
        assert_eq!(dialog.select_quantity(2), Err(DialogError::Closed));
    }

    #[test]
    fn last_four_ignores_separators() {
        let details = PaymentDetails {
            card_number: "4242 4242 4242 1234".to_string(),
            ..PaymentDetails::default()
        };
        assert_eq!(details.last_four().as_deref(), Some("1234"));
    }

    #[test]
    fn confirmation_names_the_event() {
        let dialog = opened();
        assert_eq!(
            dialog.confirmation_message(),
            "Your tickets for Starlight Music Festival are confirmed. A confirmation email has been sent to you."
        );
    }
}
