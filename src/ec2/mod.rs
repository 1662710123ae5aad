//! EC2 resource wrappers populated from API responses.

mod address;
mod element;

pub use address::Address;
pub use element::ResponseElement;
