//! # Catnip
//!
//! A minimal JSON API for managing cat adoption profiles.
//!
//! The crate is split along the seams of the system:
//!
//! - [`core`]: the `Cat` entity, its validation rule set, the `CatService`
//!   storage trait, and the typed error hierarchy
//! - [`storage`]: storage backends (currently in-memory)
//! - [`server`]: axum handlers and the route table
//! - [`config`]: server configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catnip::prelude::*;
//!
//! let state = AppState::new(Arc::new(InMemoryCatService::new()));
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! Write requests are validated before they reach storage: every business
//! field must be non-blank and `enjoys` must contain at least 10 characters.
//! A rejected request gets a 422 whose body maps each offending field to its
//! list of messages.

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        cat::{Cat, CatParams, CatPayload},
        error::{ApiError, ApiResult, ErrorResponse},
        service::CatService,
        validation::{Violations, validate},
    };

    // === Storage ===
    pub use crate::storage::InMemoryCatService;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
