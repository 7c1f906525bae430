//! Service layer: business logic orchestration.
//!
//! [`BookingService`] drives booking dialog sessions stored in the
//! [`super::domain::DialogRegistry`] and acknowledges cancellations.

pub mod booking_service;

pub use booking_service::BookingService;
