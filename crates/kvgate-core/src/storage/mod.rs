//! Storage facade over the host's stores.
//!
//! The [`Storage`] facade dispatches each call to the store selected by a
//! [`StorageMethod`], after checking the method is legal for the host it
//! was built over.

mod facade;
mod method;

pub use facade::Storage;
pub use method::StorageMethod;
