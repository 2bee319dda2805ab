//! Core domain types: the cat entity, its validation rules, the storage
//! trait, and the typed error hierarchy

pub mod cat;
pub mod error;
pub mod service;
pub mod validation;

pub use cat::{Cat, CatParams, CatPayload};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use service::CatService;
pub use validation::{Violations, validate};
