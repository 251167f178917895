//! Testing utilities for code built on `sequery`.
//!
//! - **Assertions**: compare operator outputs with expected results
//! - **Fixtures**: small relational datasets (departments, employees, people,
//!   orders) for exercising grouping and join operators
//!
//! # Quick Start
//!
//! ```
//! use sequery::*;
//! use sequery::testing::*;
//!
//! let staff = employees();
//! let names = from_slice(&staff)
//!     .filter(|e| e.department_id == 1)
//!     .iter()
//!     .map(|e| e.name.clone())
//!     .collect::<Vec<_>>();
//! assert_collections_equal(&names, &["John".to_string(), "Alice".into(), "Charlie".into()]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
