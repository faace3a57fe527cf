//! Entity definitions for every admin screen

pub mod application;
pub mod category;
pub mod contact;
pub mod job;
pub mod macros;
pub mod message;
pub mod product;
pub mod settings;

pub use application::{Application, ApplicationDraft, ApplicationStatus, ApplicationUpdate};
pub use category::{Category, CategoryDraft};
pub use contact::ContactRequest;
pub use job::{Job, JobDraft, JobUpdate};
pub use message::{BulkAction, Message, MessageDraft, MessageUpdate, export_csv};
pub use product::{Product, ProductDraft, ProductStatus, ProductUpdate};
pub use settings::{ColorScheme, SiteSettings};
