//! Shift-Scheduling Constraint Validation Engine
//!
//! This crate decides whether a proposed work interval for an employee may be
//! committed, enforcing three business rules: no time overlap with existing
//! shifts, a maximum number of consecutive working days, and a maximum total
//! net working time per calendar day (with break pro-ration for shifts that
//! cross midnight).

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod validation;
