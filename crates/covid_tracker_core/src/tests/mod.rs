//! Tests that run the core pieces together against a recorded API payload.
//!
//! - `fixture` - Parsing and aggregating the sample payload
//! - `click_flow` - Toggle, dispatch and scroll as one click sequence

mod click_flow;
mod fixture;

const SAMPLE_PAYLOAD: &str = include_str!("../../fixtures/locations.json");
