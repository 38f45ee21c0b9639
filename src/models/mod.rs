pub mod platform;
pub mod response;

pub use platform::*;
pub use response::*;
