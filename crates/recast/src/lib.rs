//! Batch and I/O glue around the recast core pipeline.
//!
//! The core is a pure text-in/text-out function; everything that
//! touches the filesystem lives here: input discovery, per-file
//! conversion with strict failure isolation, output-path mapping, and
//! diff rendering for previews.

pub mod batch;
