pub mod error;
pub mod stack;

pub use error::StackError;
pub use stack::Stack;
