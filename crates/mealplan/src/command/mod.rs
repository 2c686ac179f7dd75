mod add;
mod delete;
mod update;

pub use add::*;
pub use update::*;

use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub mealplanner_shared::State);

impl Deref for Command {
    type Target = mealplanner_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: mealplanner_shared::State) -> Self {
        Self(state)
    }
}
