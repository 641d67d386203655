pub mod global_error;
pub mod message;

pub use global_error::{ErrorKind, NotifyError};
pub use message::{Block, Button, Link, LinkNames, Message, TextObject, TextType};
