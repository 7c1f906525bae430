//! Data Transfer Objects for REST request/response serialization.
//!
//! Response bodies wrap the display-ready view models from
//! [`crate::view`]; prices and dates arrive preformatted.

pub mod common_dto;
pub mod dashboard_dto;
pub mod dialog_dto;
pub mod event_dto;
pub mod recommendation_dto;

pub use common_dto::*;
pub use dashboard_dto::*;
pub use dialog_dto::*;
pub use event_dto::*;
pub use recommendation_dto::*;
