mod fixtures;
mod test_app;

pub use assertions::{assert_state_valid, assert_vector_eq};
pub use fixtures::*;
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
