//! Storage layer for the Pet Store.
//!
//! Pets live in memory only; nothing survives a restart.

pub mod pet_store;

pub use pet_store::PetStore;
