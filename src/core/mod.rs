//! Core abstractions: records, the list-management engine, errors

pub mod draft;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod field;
pub mod list;
pub mod paginate;
pub mod query;
pub mod record;
pub mod repository;
pub mod selection;

pub use draft::{DraftMode, FormBuffer};
pub use envelope::Envelope;
pub use error::{ApiResult, BackofficeError, CollectionError, FieldError};
pub use extract::ValidatedJson;
pub use field::{FieldFormat, FieldValue};
pub use list::ListController;
pub use paginate::{PageInfo, PageRequest, Paginated, paginate};
pub use query::SearchQuery;
pub use record::{Faceted, Record, Searchable};
pub use repository::Collection;
pub use selection::{PageSelection, SelectionSet};
