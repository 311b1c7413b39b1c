//! Taking, dropping and listing objects.

use super::Lines;
use crate::catalog::EntityId;
use crate::error::{ActionError, ActionResult};
use crate::world::{Position, WorldState};

/// List carried objects in catalog order.
pub fn list(state: &WorldState) -> Lines {
    let carried: Vec<_> = state.carried().map(|id| id.name().to_string()).collect();
    if carried.is_empty() {
        return vec!["You are carrying nothing.".to_string()];
    }
    let mut lines = Vec::with_capacity(carried.len() + 1);
    lines.push("You are carrying:".to_string());
    lines.extend(carried);
    lines
}

/// Pick up an object lying in the current room.
pub fn take(state: &mut WorldState, item: Option<EntityId>, carry_limit: usize) -> ActionResult<Lines> {
    let item = item
        .filter(|id| id.is_object() && state.is_here(*id))
        .ok_or(ActionError::NotHere)?;
    if state.carried_count() >= carry_limit {
        return Err(ActionError::TooManyObjects);
    }
    state.set_position(item, Position::Carried);
    Ok(vec!["Taken.".to_string()])
}

/// Put down a carried object in the current room.
pub fn drop(state: &mut WorldState, item: Option<EntityId>) -> ActionResult<Lines> {
    let item = item
        .filter(|id| state.is_carried(*id))
        .ok_or(ActionError::NotCarried)?;
    state.set_position(item, Position::InRoom(state.room()));
    Ok(vec!["Dropped.".to_string()])
}
