#![allow(unused_imports)]

mod mock_repositories;
mod zone;

pub use mock_repositories::*;
pub use zone::*;
