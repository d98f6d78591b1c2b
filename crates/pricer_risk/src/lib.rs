//! # Pricer Risk (L3: Batch)
//!
//! Maps a book of option inputs to their pricing outcomes.
//!
//! This crate provides:
//! - Sequential and Rayon-parallel batch evaluation
//! - Per-option outcomes paired with their inputs
//! - Outcome counts for reporting
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  batch/     - price_all, BatchSummary   │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Closed-form Black-Scholes engine       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Output order always equals input order and one failed option never
//! aborts the batch.
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::OptionKind;
//! use pricer_models::instruments::OptionInput;
//! use pricer_risk::{price_all, BatchSummary};
//!
//! let call = OptionInput::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let put = call.with_kind(OptionKind::Put);
//!
//! let priced = price_all(&[call, put]);
//! assert_eq!(priced.len(), 2);
//! assert_eq!(BatchSummary::from_priced(&priced).priced, 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod parallel;

pub use batch::{price_all, price_all_parallel, BatchSummary, PricedOption};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
