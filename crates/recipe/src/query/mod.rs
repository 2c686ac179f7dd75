mod list;

pub use list::*;

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
