//! Implementation blocks for the context.

pub mod data_context;
