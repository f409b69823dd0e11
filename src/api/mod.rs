//! Review API module
//!
//! This module contains everything that talks to, or interprets answers
//! from, the homework review API:
//! - The [`ReviewApi`] capability trait and its reqwest implementation
//! - Payload shape validation and cursor extraction
//! - Rendering a homework record into a notification report

mod client;
mod response;

pub use client::{build_http_client, PracticumClient, ReviewApi};
pub use response::{check_response, parse_status, ApiAnswer};
