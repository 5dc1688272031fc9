pub mod auth;
pub mod customer;
pub mod page;
pub mod user;
