// Shared fixture builders for champion select tests

use crate::champ_select::types::{
    ChampSelectSession, SessionAction, SessionBans, SessionTimer, TargetSelection,
};
use crate::store::CatalogEntry;

pub fn catalog_entry(id: i64, name: &str) -> CatalogEntry {
    CatalogEntry {
        item_id: id,
        name: name.to_string(),
    }
}

/// Standard target pair used across the tests: ban Garen (2), pick Ahri (1).
pub fn targets() -> TargetSelection {
    TargetSelection {
        ban: catalog_entry(2, "Garen"),
        pick: catalog_entry(1, "Ahri"),
    }
}

pub fn action(id: i64, cell: i64, kind: &str, completed: bool) -> SessionAction {
    SessionAction {
        id,
        actor_cell_id: cell,
        kind: kind.to_string(),
        completed,
    }
}

pub fn session(
    local_cell: i64,
    num_bans: i64,
    actions: Vec<Vec<SessionAction>>,
) -> ChampSelectSession {
    ChampSelectSession {
        local_player_cell_id: local_cell,
        actions,
        bans: SessionBans { num_bans },
        timer: SessionTimer::default(),
    }
}

pub fn session_with_timer(
    local_cell: i64,
    num_bans: i64,
    timer_phase: &str,
    actions: Vec<Vec<SessionAction>>,
) -> ChampSelectSession {
    ChampSelectSession {
        local_player_cell_id: local_cell,
        actions,
        bans: SessionBans { num_bans },
        timer: SessionTimer {
            phase: timer_phase.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_builders_produce_consistent_shapes() {
        let fixture = session(0, 1, vec![vec![action(7, 0, "ban", false)]]);
        assert_eq!(fixture.local_player_cell_id, 0);
        assert_eq!(fixture.bans.num_bans, 1);
        assert_eq!(fixture.actions[0][0].id, 7);
        assert!(!fixture.actions[0][0].completed);

        let picked = targets();
        assert_eq!(picked.ban.name, "Garen");
        assert_eq!(picked.pick.item_id, 1);
    }
}
