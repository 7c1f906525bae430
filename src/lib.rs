//! # eventflow
//!
//! REST API for an event discovery and booking application: a static
//! catalog of events, bookings and users, a simulated three-step ticket
//! booking dialog, read-only admin tables, and AI event recommendations
//! generated by a hosted language model.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BookingService (service/)      RecommendationService (recommendation/)
//!     │       │                                   │
//!     ├── DialogRegistry (domain/)        LanguageModel ── chat completions API
//!     │
//!     ├── View models (view/)
//!     │
//!     └── Catalog (catalog/) ── seed data
//! ```

pub mod api;
pub mod app_state;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod recommendation;
pub mod service;
pub mod view;
