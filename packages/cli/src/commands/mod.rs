pub mod content;
pub mod flow;
pub mod init;
pub mod layout;

pub use content::{content, ContentArgs};
pub use flow::{flow, FlowArgs};
pub use init::{init, InitArgs};
pub use layout::{layout, LayoutArgs};
