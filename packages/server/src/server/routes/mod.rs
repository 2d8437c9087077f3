// HTTP routes
pub mod crawl;
pub mod events;
pub mod health;
pub mod sources;

pub use crawl::*;
pub use events::*;
pub use health::*;
pub use sources::*;
