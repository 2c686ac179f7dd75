mod list;
mod preview;

pub use list::*;
pub use preview::*;

use std::ops::Deref;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Deref for Query {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
