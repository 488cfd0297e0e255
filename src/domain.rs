pub mod config;
pub use config::Config;

mod flatten;
pub use flatten::flatten;

mod name;
pub use name::EntryName;

mod node;
pub(crate) use node::sort_siblings;
pub use node::{Node, NodeKind, Paragraph, Section};

mod outline;
pub use outline::{Heading, TitlePosition, outline};
