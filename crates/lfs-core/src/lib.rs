#![deny(missing_docs)]
#![doc = "Core data types shared by the line-fit search benchmark crates: sequences, queries, search outcomes, the error taxonomy and seeded randomness."]

pub mod errors;
pub mod numeric;
pub mod provenance;
pub mod rng;
mod sequence;

pub use errors::{ErrorInfo, LfsError};
pub use numeric::{clamp, lerp, LineFit};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RandomSource, RngHandle};
pub use sequence::{Query, SearchOutcome, Sequence, MAX_DOMAIN_VALUE};
