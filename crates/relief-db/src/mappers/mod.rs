//! Model to entity mappers
//!
//! Conversions between database models and domain entities (relief-core).
//! Rows carry enum-like values as TEXT, so conversion is fallible:
//! `TryFrom<Model> for Entity` validates those values and reports a
//! malformed row as a `DomainError`.

mod forum;
mod manual;
mod portal;
mod resource;
mod update;
mod volunteer;
