//! Booking dialog rendering.

use serde::Serialize;
use utoipa::ToSchema;

use super::format::format_inr;
use crate::domain::{BookingDialog, DialogId, DialogStep, EventId, TicketQuantity};

/// Rendered booking dialog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DialogView {
    /// Session identifier used in the dialog endpoints.
    pub dialog_id: DialogId,
    /// Event being booked.
    pub event_id: EventId,
    /// Title of the event being booked.
    pub event_title: String,
    /// Whether the dialog is visible.
    pub open: bool,
    /// `selection`, `payment` or `confirmation`.
    pub step: &'static str,
    /// 1-based step number.
    pub step_number: u8,
    /// Dialog heading.
    pub title: &'static str,
    /// Text under the heading.
    pub description: String,
    /// Selected ticket quantity.
    pub quantity: u8,
    /// Offered quantities.
    pub quantity_options: Vec<u8>,
    /// Price of one ticket.
    pub unit_price: String,
    /// Unit price times quantity.
    pub total: String,
    /// Label of the primary button.
    pub primary_action: String,
    /// Receipt of the simulated payment, on the confirmation step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptView>,
}

/// Payment receipt as displayed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReceiptView {
    /// Simulated transaction reference.
    pub transaction_id: String,
    /// Amount charged.
    pub amount: String,
    /// Masked card number, when one was typed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// RFC 3339 payment time.
    pub paid_at: String,
}

impl DialogView {
    /// Renders `dialog` for the session `dialog_id`.
    #[must_use]
    pub fn new(dialog_id: DialogId, dialog: &BookingDialog) -> Self {
        let total = format_inr(dialog.total());
        let (title, description, primary_action, receipt) = match dialog.step() {
            DialogStep::Selection { .. } => (
                "Book Your Spot",
                "Select the number of tickets you want to purchase.".to_string(),
                "Proceed to Payment".to_string(),
                None,
            ),
            DialogStep::Payment { .. } => (
                "Payment Simulation",
                "Enter dummy card details to complete the booking.".to_string(),
                format!("Pay {total}"),
                None,
            ),
            DialogStep::Confirmation { receipt, .. } => (
                "Booking Confirmed!",
                dialog.confirmation_message(),
                "Done".to_string(),
                Some(ReceiptView {
                    transaction_id: receipt.transaction_id.to_string(),
                    amount: format_inr(receipt.amount),
                    card: receipt
                        .card_last_four
                        .as_ref()
                        .map(|last| format!("**** **** **** {last}")),
                    paid_at: receipt.paid_at.to_rfc3339(),
                }),
            ),
        };
        Self {
            dialog_id,
            event_id: dialog.event_id().clone(),
            event_title: dialog.event_title().to_string(),
            open: dialog.is_open(),
            step: dialog.step().name(),
            step_number: dialog.step().number(),
            title,
            description,
            quantity: dialog.step().quantity().get(),
            quantity_options: TicketQuantity::OPTIONS.to_vec(),
            unit_price: format_inr(dialog.unit_price()),
            total,
            primary_action,
            receipt,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::domain::PaymentDetails;

    fn open_dialog() -> BookingDialog {
        let Some(event) = seed::events().into_iter().nth(1) else {
            panic!("seed has events");
        };
        let mut dialog = BookingDialog::new(&event);
        dialog.open();
        dialog
    }

    #[test]
    fn selection_step_shows_total_for_quantity() {
        let mut dialog = open_dialog();
        assert!(dialog.select_quantity(2).is_ok());
        let view = DialogView::new(DialogId::new(), &dialog);
        assert_eq!(view.step, "selection");
        assert_eq!(view.title, "Book Your Spot");
        assert_eq!(view.unit_price, "₹2,500");
        assert_eq!(view.total, "₹5,000");
        assert!(view.receipt.is_none());
    }

    #[test]
    fn payment_button_carries_the_total() {
        let mut dialog = open_dialog();
        assert!(dialog.select_quantity(3).is_ok());
        assert!(dialog.proceed_to_payment().is_ok());
        let view = DialogView::new(DialogId::new(), &dialog);
        assert_eq!(view.step_number, 2);
        assert_eq!(view.primary_action, "Pay ₹7,500");
    }

    #[test]
    fn confirmation_masks_the_card() {
        let mut dialog = open_dialog();
        assert!(dialog.proceed_to_payment().is_ok());
        let details = PaymentDetails {
            card_number: "4242 4242 4242 1234".to_string(),
            ..PaymentDetails::default()
        };
        assert!(dialog.pay(&details).is_ok());

        let view = DialogView::new(DialogId::new(), &dialog);
        assert_eq!(view.title, "Booking Confirmed!");
        assert_eq!(
            view.description,
            "Your tickets for AI in Tech Summit are confirmed. A confirmation email has been sent to you."
        );
        let Some(receipt) = view.receipt else {
            panic!("receipt expected");
        };
        assert_eq!(receipt.card.as_deref(), Some("**** **** **** 1234"));
        assert_eq!(receipt.amount, "₹2,500");
    }
}
