//! Request-level models shared by every service
//!
//! User input is validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod lenient;
pub mod pagination;
pub mod search;
pub mod validation;

pub use lenient::{require_int, IntOrText};
pub use pagination::{paginate, PageParams, Pagination, PAGE_SIZE};
pub use search::{fold_case, like_pattern, SearchTerm, LIKE_ESCAPE_CLAUSE};
pub use validation::{require_text, ValidationError};
