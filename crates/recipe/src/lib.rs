mod command;
mod intake;
mod query;

pub use command::*;
pub use intake::*;
pub use query::*;
