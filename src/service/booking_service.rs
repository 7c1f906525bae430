//! Booking service: drives booking dialog sessions and cancellations.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::booking_dialog::DialogError;
use crate::domain::dialog_entry::DialogEntry;
use crate::domain::{BookingDialog, BookingId, DialogId, DialogRegistry, EventId, PaymentDetails};
use crate::error::AppError;
use crate::view::{DialogView, Toast};

/// Orchestration layer for the booking flow.
///
/// Stateless coordinator: reads events from the [`Catalog`] and keeps one
/// [`BookingDialog`] per session in the [`DialogRegistry`]. Every command
/// follows the pattern: acquire entry lock → apply to the dialog → touch
/// metadata → log → render.
#[derive(Debug, Clone)]
pub struct BookingService {
    catalog: Arc<dyn Catalog>,
    registry: Arc<DialogRegistry>,
}

impl BookingService {
    /// Creates a new `BookingService`.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, registry: Arc<DialogRegistry>) -> Self {
        Self { catalog, registry }
    }

    /// Returns a reference to the inner [`DialogRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<DialogRegistry> {
        &self.registry
    }

    /// Opens a booking dialog for an event ("Book Tickets").
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EventNotFound`] for unknown events.
    pub async fn open_dialog(&self, event_id: &EventId) -> Result<DialogView, AppError> {
        let event = self.catalog.get_event(event_id).await?;
        let mut dialog = BookingDialog::new(&event);
        dialog.open();

        let dialog_id = DialogId::new();
        let view = DialogView::new(dialog_id, &dialog);
        self.registry
            .insert(DialogEntry::new(dialog_id, dialog))
            .await?;

        tracing::info!(%dialog_id, %event_id, "booking dialog opened");
        Ok(view)
    }

    /// Renders the current state of a dialog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] for unknown sessions.
    pub async fn dialog(&self, dialog_id: DialogId) -> Result<DialogView, AppError> {
        let entry_lock = self.registry.get(dialog_id).await?;
        let entry = entry_lock.read().await;
        Ok(DialogView::new(dialog_id, &entry.dialog))
    }

    /// Changes the ticket quantity on the selection step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for quantities outside 1–4 and
    /// [`AppError::DialogConflict`] outside the selection step.
    pub async fn select_quantity(
        &self,
        dialog_id: DialogId,
        quantity: i64,
    ) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "quantity selected", |dialog| {
            dialog.select_quantity(quantity)
        })
        .await
    }

    /// Moves from selection to payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogConflict`] outside the selection step.
    pub async fn proceed_to_payment(&self, dialog_id: DialogId) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "proceeded to payment", BookingDialog::proceed_to_payment)
            .await
    }

    /// Returns from payment to selection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogConflict`] outside the payment step.
    pub async fn back(&self, dialog_id: DialogId) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "returned to selection", BookingDialog::back)
            .await
    }

    /// Simulates the payment and moves to confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogConflict`] outside the payment step.
    pub async fn pay(
        &self,
        dialog_id: DialogId,
        details: &PaymentDetails,
    ) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "payment simulated", |dialog| {
            dialog.pay(details).map(|_| ())
        })
        .await
    }

    /// Closes the dialog, resetting it to the first step ("Done" or
    /// dismiss).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] for unknown sessions.
    pub async fn close(&self, dialog_id: DialogId) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "booking dialog closed", |dialog| {
            dialog.close();
            Ok(())
        })
        .await
    }

    /// Shows a closed dialog again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] for unknown sessions.
    pub async fn reopen(&self, dialog_id: DialogId) -> Result<DialogView, AppError> {
        self.apply(dialog_id, "booking dialog reopened", |dialog| {
            dialog.open();
            Ok(())
        })
        .await
    }

    /// Drops a dialog session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DialogNotFound`] for unknown sessions.
    pub async fn discard(&self, dialog_id: DialogId) -> Result<(), AppError> {
        self.registry.remove(dialog_id).await?;
        tracing::info!(%dialog_id, "booking dialog discarded");
        Ok(())
    }

    /// Acknowledges "Cancel Booking". The booking record is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BookingNotFound`] for unknown bookings.
    pub async fn cancel_booking(&self, booking_id: &BookingId) -> Result<Toast, AppError> {
        let booking = self.catalog.get_booking(booking_id).await?;
        tracing::info!(%booking_id, status = %booking.status, "booking cancellation acknowledged");
        Ok(Toast::booking_cancelled())
    }

    async fn apply<F>(
        &self,
        dialog_id: DialogId,
        action: &'static str,
        command: F,
    ) -> Result<DialogView, AppError>
    where
        F: FnOnce(&mut BookingDialog) -> Result<(), DialogError>,
    {
        let entry_lock = self.registry.get(dialog_id).await?;
        let mut entry = entry_lock.write().await;

        if let Err(err) = command(&mut entry.dialog) {
            tracing::warn!(%dialog_id, error = %err, "booking dialog command rejected");
            return Err(err.into());
        }
        entry.touch();

        let dialog = &entry.dialog;
        tracing::info!(
            %dialog_id,
            step = dialog.step().name(),
            quantity = dialog.step().quantity().get(),
            open = dialog.is_open(),
            "{action}"
        );
        Ok(DialogView::new(dialog_id, dialog))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn make_service() -> BookingService {
        let Ok(catalog) = StaticCatalog::seeded() else {
            panic!("seed data is consistent");
        };
        BookingService::new(Arc::new(catalog), Arc::new(DialogRegistry::new()))
    }

    async fn open(service: &BookingService) -> DialogId {
        let Ok(view) = service.open_dialog(&EventId::from("1")).await else {
            panic!("event 1 exists");
        };
        view.dialog_id
    }

    #[tokio::test]
    async fn open_dialog_starts_visible_at_selection() {
        let service = make_service();
        let Ok(view) = service.open_dialog(&EventId::from("1")).await else {
            panic!("event 1 exists");
        };
        assert!(view.open);
        assert_eq!(view.step, "selection");
        assert_eq!(view.quantity, 1);
        assert_eq!(view.total, "₹150");
        assert_eq!(service.registry().len().await, 1);
    }

    #[tokio::test]
    async fn open_dialog_for_unknown_event_is_not_found() {
        let service = make_service();
        let result = service.open_dialog(&EventId::from("99")).await;
        assert!(matches!(result, Err(AppError::EventNotFound(_))));
        assert!(service.registry().is_empty().await);
    }

    #[tokio::test]
    async fn full_booking_flow() {
        let service = make_service();
        let id = open(&service).await;

        let Ok(view) = service.select_quantity(id, 2).await else {
            panic!("quantity accepted");
        };
        assert_eq!(view.total, "₹300");

        let Ok(view) = service.proceed_to_payment(id).await else {
            panic!("proceed accepted");
        };
        assert_eq!(view.step, "payment");

        let Ok(view) = service.back(id).await else {
            panic!("back accepted");
        };
        assert_eq!(view.step, "selection");
        assert_eq!(view.quantity, 2);

        let _ = service.proceed_to_payment(id).await;
        let Ok(view) = service.pay(id, &PaymentDetails::default()).await else {
            panic!("pay accepted");
        };
        assert_eq!(view.step, "confirmation");
        assert!(view.receipt.is_some());

        let Ok(view) = service.close(id).await else {
            panic!("close accepted");
        };
        assert!(!view.open);
        assert_eq!(view.step, "selection");
        assert_eq!(view.quantity, 1);

        let Ok(view) = service.reopen(id).await else {
            panic!("reopen accepted");
        };
        assert!(view.open);
    }

    #[tokio::test]
    async fn out_of_order_commands_leave_state_unchanged() {
        let service = make_service();
        let id = open(&service).await;

        let result = service.pay(id, &PaymentDetails::default()).await;
        assert!(matches!(result, Err(AppError::DialogConflict(_))));
        let result = service.select_quantity(id, 5).await;
        assert!(matches!(result, Err(AppError::Validation { field: "quantity", .. })));

        let Ok(view) = service.dialog(id).await else {
            panic!("dialog exists");
        };
        assert_eq!(view.step, "selection");
        assert_eq!(view.quantity, 1);
    }

    #[tokio::test]
    async fn discard_removes_the_session() {
        let service = make_service();
        let id = open(&service).await;
        assert!(service.discard(id).await.is_ok());
        assert!(matches!(
            service.dialog(id).await,
            Err(AppError::DialogNotFound(_))
        ));
        assert!(matches!(
            service.discard(id).await,
            Err(AppError::DialogNotFound(_))
        ));
    }

    #[tokio::test]
    async fn cancel_booking_returns_toast_for_known_booking() {
        let service = make_service();
        let Ok(toast) = service.cancel_booking(&BookingId::from("b1")).await else {
            panic!("b1 exists");
        };
        assert_eq!(toast, Toast::booking_cancelled());
        assert!(matches!(
            service.cancel_booking(&BookingId::from("b9")).await,
            Err(AppError::BookingNotFound(_))
        ));
    }
}
