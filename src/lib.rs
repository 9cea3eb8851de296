pub mod github;
pub mod util;
