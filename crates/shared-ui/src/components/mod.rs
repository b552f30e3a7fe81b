// Standalone components
pub mod badge;
pub mod button;

// Primitive wrappers
pub mod toast;

pub use badge::*;
pub use button::*;
pub use toast::*;
