//! Pet catalog entries.
//!
//! - [`entities::PetRecord`] - one adoptable animal, canonical schema
//! - [`value_objects::PetKey`] - identity key for selection and dedup
//! - [`value_objects::VoteDirection`] - up/down vote on a favorite

pub mod entities;
pub mod value_objects;
