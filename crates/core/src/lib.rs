//! Domain logic for the CRM backend.
//!
//! Everything in this crate is free of I/O: the validation engine, the
//! customer rule set, the customer access policy and the page-props
//! contract shared with client views.

pub mod access;
pub mod customer;
pub mod error;
pub mod literal;
pub mod page_props;
pub mod roles;
pub mod types;
pub mod validation;
