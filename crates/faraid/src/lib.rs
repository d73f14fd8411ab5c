//! Islamic inheritance (Faraid) for a simplified family composition.
//!
//! This crate provides:
//! - Fixed shares (Fard) for spouse, mother, father and daughters
//! - Residuary distribution (Asabah) through an explicit decision table
//! - Itemized, serializable results with Indonesian heir labels
//!
//! 'Awl (proportional reduction of over-subscribed fixed shares) is not
//! applied. Over-subscribed results are returned unchanged and flagged by
//! [`Distribution::is_oversubscribed`].

pub mod composition;
pub mod engine;
pub mod error;
pub mod share;

pub use composition::FamilyComposition;
pub use engine::{ResidualCase, distribute, fard_shares};
pub use error::FaraidError;
pub use share::{Distribution, Heir, HeirShare, ShareBasis};
