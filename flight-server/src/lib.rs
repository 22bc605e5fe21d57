//! Flight route server.
//!
//! Answers "what is the lowest-cost sequence of direct flight legs between
//! two airports?" over a static in-memory graph built at startup from two
//! open datasets (airports, direct routes).

pub mod data;
pub mod domain;
pub mod geo;
pub mod graph;
pub mod search;
pub mod web;
