//! Room descriptions.

use super::Lines;
use crate::world::WorldState;

/// Describe the current room.
///
/// The room text always appears. Entities in the room are only listed while
/// there is light, one line each in catalog order.
pub fn render(state: &WorldState) -> Lines {
    let mut lines = vec![state.room().description().to_string()];
    if state.has_light() {
        lines.extend(state.entities_here().map(|id| format!("You can see {id}.")));
    }
    lines
}
