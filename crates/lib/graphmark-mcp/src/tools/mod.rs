//! MCP tool modules.
//!
//! Graph tools fetch one upstream record per call and render it; nothing is
//! cached or shared between invocations.

pub mod graph;
