//! Data transfer types shared by the web client and the server.
//!
//! Everything in here compiles for both targets, so the frontend and the Resource API agree
//! on the wire format of catalog records, collection pages, import reports and validation
//! errors.

pub mod api;
pub mod form;
pub mod import;
pub mod pokemon;
