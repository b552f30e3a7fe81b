pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod view;

pub use api::{HttpClient, LawyerApi};
pub use dispatch::{
    send_consultation_request, DispatchError, RequestButton, RequestDispatcher, RequestFailure,
};
pub use error::{ClientError, ConfigError};
pub use filter::{connected_ids, matches, visible_lawyers, RosterStats};
pub use loader::{load_directory, Directory};
pub use normalize::normalize_connections;
pub use view::{landing_redirect, Redirect, ViewTab};
