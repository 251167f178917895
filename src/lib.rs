//! # Sequery
//!
//! **Query-style sequence operators** for Rust: filter, project, aggregate,
//! sort, group and join over borrowed slices, in the spirit of LINQ.
//!
//! ## Key Features
//!
//! - **Pure operators** - nothing mutates the input; every result is freshly allocated
//! - **Absent-aware** - a [`Sequence`] may stand for a missing source, which degrades to an empty result
//! - **Lenient aggregation** - `sum`, `min`, `max`, `average` coerce numbers, booleans, digits
//!   and currency strings such as `"$2,500.50"` (see [`coerce`])
//! - **Stable ordering** - equal keys keep their source order in both directions
//! - **Ordered grouping** - [`Grouping`] keeps first-seen key order
//! - **Joins** - inner, left outer and group joins with a hashed inner side
//!
//! ## Quick Start
//!
//! ```
//! use sequery::*;
//!
//! let numbers: Vec<i32> = (1..=10).collect();
//! let seq = from_slice(&numbers);
//!
//! assert_eq!(seq.filter(|n| n % 2 == 0), vec![2, 4, 6, 8, 10]);
//! assert_eq!(seq.select(|n| format!("N:{n}"))[0], "N:1");
//! assert_eq!(seq.take(3), vec![1, 2, 3]);
//! assert_eq!(seq.sum(), 55.0);
//! assert_eq!(seq.average(), 5.5);
//! assert!(seq.all(|n| *n > 0));
//! assert_eq!(seq.find_index(|n| *n == 4), Some(3));
//! ```
//!
//! ## Core Concepts
//!
//! ### Sequence
//!
//! A [`Sequence<'a, T>`] borrows a slice, or is [`absent`]. It converts from
//! `&[T]`, `&Vec<T>`, `&[T; N]` and their `Option` forms, so operators that
//! take a second source (the joins) accept any of those directly.
//!
//! ### Operators
//!
//! #### Predicate queries
//! - [`any`](Sequence::any) / [`any_match`](Sequence::any_match) - existence
//! - [`all`](Sequence::all) - universality (vacuously `true`)
//! - [`first_or_default`](Sequence::first_or_default) / [`first_or_default_by`](Sequence::first_or_default_by) - first (matching) element
//! - [`find_index`](Sequence::find_index) - position of the first match
//!
//! #### Transformation
//! - [`filter`](Sequence::filter) - keep matching elements (LINQ `Where`)
//! - [`select`](Sequence::select) / [`select_many`](Sequence::select_many) - project / project and flatten
//! - [`distinct`](Sequence::distinct) / [`distinct_by`](Sequence::distinct_by) - first occurrences only
//! - [`take`](Sequence::take) / [`skip`](Sequence::skip) - prefix / suffix
//! - [`ordered`](Sequence::ordered), [`order_by`](Sequence::order_by), [`order_by_descending`](Sequence::order_by_descending) - stable sorts
//!
//! #### Aggregation
//! - [`count`](Sequence::count) / [`count_where`](Sequence::count_where)
//! - [`sum`](Sequence::sum), [`min`](Sequence::min), [`max`](Sequence::max), [`average`](Sequence::average) and their `_by` forms
//! - [`aggregate`](Sequence::aggregate) with any [`CombineFn`] from [`aggregators`]
//!
//! #### Relational
//! - [`group_by`](Sequence::group_by) / [`group_by_with`](Sequence::group_by_with) - into a [`Grouping`]
//! - [`join`](Sequence::join), [`left_join`](Sequence::left_join), [`group_join`](Sequence::group_join)
//!
//! ### Absent callbacks
//!
//! Rust closures cannot be null. When callbacks arrive as `Option`s, use the
//! [`nullable`] functions, which map every missing argument to a documented
//! default (`-1` for [`nullable::find_index`], `false` for [`nullable::all`]
//! with a missing predicate, and so on).
//!
//! ## Error Handling
//!
//! No operator fails. Malformed numeric input coerces to `0.0` (logged at
//! `trace` level through `tracing`); [`coerce::parse_numeric`] is available
//! when a strict `anyhow::Result` is wanted instead.
//!
//! ## Feature Flags
//!
//! - `json` (default) - coerce `serde_json::Value` elements in aggregations
//!
//! ## Module Overview
//!
//! - [`sequence`] - the [`Sequence`] view
//! - [`coerce`] - numeric coercion ([`ToDouble`], [`Coercible`])
//! - [`aggregators`] - built-in combiners ([`Sum`], [`Min`], [`Max`], [`AverageF64`], [`Count`])
//! - [`grouping`] - the [`Grouping`] result type
//! - [`nullable`] - entry points accepting absent callbacks
//! - [`testing`] - assertions and fixtures

pub mod aggregators;
pub mod coerce;
pub mod grouping;
pub mod nullable;
pub mod sequence;
pub mod testing;
mod ops;

// General re-exports
pub use aggregators::{AverageF64, CombineFn, Count, Max, Min, Sum};
pub use coerce::{Coercible, ToDouble, safe_to_double};
pub use grouping::Grouping;
pub use ops::SortOrder;
pub use sequence::{Sequence, absent, from_slice};
