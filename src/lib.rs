//! # Backoffice
//!
//! A small-business back office in one crate: in-memory collections with
//! a reusable list-management engine, and the admin/public REST API on
//! top of it.
//!
//! ## Features
//!
//! - **Collection stores**: typed in-memory collections behind a swap-in
//!   `Collection` trait, mutations serialized and all-or-nothing
//! - **Query engine**: free-text search over designated fields plus
//!   conjunctive categorical filters, recomputed per request
//! - **Paginator**: clamped page cursors, page count never below 1
//! - **Selection set**: page-scoped select-all with indeterminate state,
//!   cleared after bulk commits
//! - **Form buffers**: copy-on-edit drafts, discarded on cancel
//! - **Envelope API**: every endpoint speaks `{ success, data?, message? }`
//! - **Admin auth**: one shared credential, opaque tokens in an HTTP-only
//!   cookie
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     tracing_subscriber::fmt::init();
//!
//!     ServerBuilder::new()
//!         .with_config(AppConfig::from_yaml_file("backoffice.yaml")?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        draft::{DraftMode, FormBuffer},
        envelope::Envelope,
        error::{ApiResult, BackofficeError, CollectionError, FieldError},
        extract::ValidatedJson,
        field::{FieldFormat, FieldValue},
        list::ListController,
        paginate::{PageInfo, PageRequest, Paginated, paginate},
        query::SearchQuery,
        record::{Faceted, Record, Searchable},
        repository::Collection,
        selection::{PageSelection, SelectionSet},
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Entities ===
    pub use crate::entities::{
        Application, ApplicationDraft, ApplicationStatus, ApplicationUpdate, BulkAction, Category,
        CategoryDraft, ColorScheme, ContactRequest, Job, JobDraft, JobUpdate, Message,
        MessageDraft, MessageUpdate, Product, ProductDraft, ProductStatus, ProductUpdate,
        SiteSettings,
    };

    // === Auth ===
    pub use crate::auth::{AdminUser, SessionStore};

    // === Config ===
    pub use crate::config::{AdminAccount, AppConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === Storage ===
    pub use crate::storage::InMemoryCollection;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
