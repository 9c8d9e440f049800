//! Search strategies over sorted sequences, instrumented to count element reads.
//!
//! Every strategy answers the same question (is `query` in the sequence, and
//! where?) and reports how many elements it had to read to decide. The plain
//! scan in [`linear_scan`] is the reference: the [`verify`] module checks every
//! other strategy against it.
//!
//! ```
//! use lfs_core::{Query, Sequence};
//! use lfs_search::Strategy;
//!
//! let sequence = Sequence::new(vec![1, 3, 5, 7, 9, 11, 13, 15]).unwrap();
//! let query = Query::new(9).unwrap();
//!
//! let fit = Strategy::LineFit.search(&sequence, query);
//! assert_eq!((fit.index, fit.guesses), (Some(4), 1));
//!
//! let bisect = Strategy::BinarySearch.search(&sequence, query);
//! assert_eq!((bisect.index, bisect.guesses), (Some(4), 3));
//! ```
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

mod binary;
mod bracket;
mod hybrid;
mod line_fit;
mod linear;
mod strategy;
pub mod verify;

pub use binary::binary_search;
pub use hybrid::{hybrid_search, HybridStep};
pub use line_fit::{line_fit_search, EndpointReads};
pub use linear::linear_scan;
pub use strategy::Strategy;
pub use verify::{verify, VerificationMismatch};
