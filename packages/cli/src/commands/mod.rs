pub mod build;
pub mod edit;
pub mod init;

pub use build::{build, BuildArgs};
pub use edit::{edit, EditArgs};
pub use init::{init, InitArgs};
