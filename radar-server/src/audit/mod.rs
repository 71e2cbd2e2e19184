//! CFDI audit core
//!
//! Stateless per-request scan over uploaded CFDI XML files: each file is
//! parsed into a [`cfdi::TaxDocument`], its issuer RFC is checked against the
//! denylist, and a per-file verdict plus a batch summary is produced. Nothing
//! here touches durable storage.
//!
//! - [`cfdi`] - CFDI XML parsing
//! - [`denylist`] - issuer denylist lookup
//! - [`service`] - batch scan and risk classification

pub mod cfdi;
pub mod denylist;
pub mod service;
