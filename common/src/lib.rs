//! Target-independent core of the user administration UI.
//!
//! Everything here compiles and runs on the host: the record model and its
//! wire format, the form and list state machines the Yew components drive,
//! and the `UsersApi` seam the frontend implements over HTTP.

pub mod api;
pub mod config;
pub mod format;
pub mod model;
pub mod requests;
