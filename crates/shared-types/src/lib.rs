pub mod config;
pub mod error;
pub mod models;
pub mod requests;

// Lawyer directory domain
pub mod connection;
pub mod filter;
pub mod lawyer;
mod lenient;

pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;

pub use connection::*;
pub use filter::*;
pub use lawyer::*;
