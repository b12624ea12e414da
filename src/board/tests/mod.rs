//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material, stalemate)
//! - `make_unmake.rs` - Make/unmake and apply/undo correctness
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax, quiescence and the recommender
//! - `proptest.rs` - Property-based tests

mod perft;
mod proptest;
