use crate::club::squad::error::{Membership, RosterError};
use crate::club::squad::stats::AggregateStats;
use crate::club::squad::view::SquadFilter;
use crate::{PlayerPositionGroup, PlayerRecord};
use log::debug;
use std::collections::HashSet;

/// Squad players and suggested players of one session.
///
/// Both pools live in a single vector partitioned by `is_candidate`. A moved
/// player is re-appended, so each pool keeps the order in which players
/// arrived in it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    players: Vec<PlayerRecord>,
}

impl RosterState {
    pub fn new(players: Vec<PlayerRecord>) -> Result<Self, RosterError> {
        let mut names = HashSet::with_capacity(players.len());

        for player in &players {
            if !names.insert(player.name.as_str()) {
                return Err(RosterError::DuplicateName(player.name.clone()));
            }
        }

        Ok(RosterState { players })
    }

    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn active_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().filter(|p| !p.is_candidate)
    }

    pub fn candidates(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().filter(|p| p.is_candidate)
    }

    // ─── Mutations ───────────────────────────────────────────────────

    /// Suggested player joins the squad under `target`
    pub fn move_to_active(
        &mut self,
        name: &str,
        target: PlayerPositionGroup,
    ) -> Result<&PlayerRecord, RosterError> {
        let idx = self.index_of(name)?;

        if !self.players[idx].is_candidate {
            return Err(RosterError::InvalidState {
                name: name.to_string(),
                membership: Membership::Active,
            });
        }

        let mut player = self.players.remove(idx);
        player.is_candidate = false;
        player.position = target;

        debug!("squad: {} moved to {}", player.name, target.section_title());

        Ok(self.push(player))
    }

    /// Squad player goes back to the suggested pool, keeping the last position
    pub fn move_to_candidate(&mut self, name: &str) -> Result<&PlayerRecord, RosterError> {
        let idx = self.index_of(name)?;

        if self.players[idx].is_candidate {
            return Err(RosterError::InvalidState {
                name: name.to_string(),
                membership: Membership::Candidate,
            });
        }

        let mut player = self.players.remove(idx);
        player.is_candidate = true;

        debug!("squad: {} moved to suggested players", player.name);

        Ok(self.push(player))
    }

    /// Returns the new transfer-listed value
    pub fn toggle_flag(&mut self, name: &str) -> Result<bool, RosterError> {
        let idx = self.index_of(name)?;
        let player = &mut self.players[idx];

        if player.is_candidate {
            return Err(RosterError::InvalidOperation {
                name: name.to_string(),
                membership: Membership::Candidate,
            });
        }

        player.is_flagged = !player.is_flagged;

        debug!(
            "squad: {} transfer listed = {}",
            player.name, player.is_flagged
        );

        Ok(player.is_flagged)
    }

    // ─── Queries ─────────────────────────────────────────────────────

    pub fn group_by_position(&self) -> PositionGroups<'_> {
        self.grouped_view(SquadFilter::All)
    }

    /// Position sections with `filter` applied inside each section
    pub fn grouped_view(&self, filter: SquadFilter) -> PositionGroups<'_> {
        let groups = PlayerPositionGroup::all().map(|group| {
            let players = filter.apply(self.active_players().filter(|p| p.position == group));
            (group, players)
        });

        PositionGroups { groups }
    }

    pub fn sorted_view(&self, filter: SquadFilter) -> Vec<&PlayerRecord> {
        filter.apply(self.active_players())
    }

    pub fn compute_aggregates(&self) -> AggregateStats {
        AggregateStats::from_players(self.active_players())
    }

    fn index_of(&self, name: &str) -> Result<usize, RosterError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| RosterError::NotFound(name.to_string()))
    }

    fn push(&mut self, player: PlayerRecord) -> &PlayerRecord {
        self.players.push(player);
        &self.players[self.players.len() - 1]
    }
}

/// Active players split into the four position sections, always in
/// goalkeeper, defender, midfielder, forward order.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroups<'r> {
    groups: [(PlayerPositionGroup, Vec<&'r PlayerRecord>); 4],
}

impl<'r> PositionGroups<'r> {
    pub fn get(&self, group: PlayerPositionGroup) -> &[&'r PlayerRecord] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, players)| players.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerPositionGroup, &[&'r PlayerRecord])> {
        self.groups.iter().map(|(g, players)| (*g, players.as_slice()))
    }

    pub fn names(&self, group: PlayerPositionGroup) -> Vec<&'r str> {
        self.get(group).iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerPositionGroup::*;

    fn player(name: &str, position: PlayerPositionGroup, rating: f32, age: u8) -> PlayerRecord {
        PlayerRecord::builder()
            .name(name.to_string())
            .position(position)
            .rating(rating)
            .age(age)
            .club("Man City".to_string())
            .build()
            .unwrap()
    }

    fn candidate(name: &str, position: PlayerPositionGroup, rating: f32, age: u8) -> PlayerRecord {
        PlayerRecord {
            is_candidate: true,
            club: "Brighton".to_string(),
            ..player(name, position, rating, age)
        }
    }

    fn roster() -> RosterState {
        RosterState::new(vec![
            player("Ederson", Goalkeeper, 8.4, 30),
            player("Dias", Defender, 8.1, 27),
            player("Rodri", Midfielder, 9.1, 28),
            player("Haaland", Forward, 9.4, 24),
            candidate("Foo", Midfielder, 8.0, 24),
            candidate("Mitoma", Forward, 7.6, 27),
        ])
        .unwrap()
    }

    fn assert_partition(roster: &RosterState) {
        let groups = roster.group_by_position();
        let mut names: Vec<&str> = groups
            .iter()
            .flat_map(|(_, players)| players.iter().map(|p| p.name.as_str()))
            .chain(roster.candidates().map(|p| p.name.as_str()))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();

        assert_eq!(total, roster.players().len());
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_duplicate_seed_names_rejected() {
        let result = RosterState::new(vec![
            player("Dias", Defender, 8.1, 27),
            candidate("Dias", Defender, 7.0, 20),
        ]);

        assert_eq!(result, Err(RosterError::DuplicateName("Dias".to_string())));
    }

    #[test]
    fn test_move_candidate_into_empty_group() {
        let mut roster = RosterState::new(vec![
            player("Ederson", Goalkeeper, 8.4, 30),
            candidate("Foo", Midfielder, 8.0, 24),
        ])
        .unwrap();
        assert!(roster.group_by_position().get(Defender).is_empty());
        let before = roster.compute_aggregates().total_players;

        roster.move_to_active("Foo", Defender).unwrap();

        assert_eq!(roster.group_by_position().names(Defender), vec!["Foo"]);
        assert!(roster.candidates().all(|p| p.name != "Foo"));
        assert_eq!(roster.compute_aggregates().total_players, before + 1);
        assert_partition(&roster);
    }

    #[test]
    fn test_second_move_to_active_fails_without_change() {
        let mut roster = roster();
        roster.move_to_active("Foo", Defender).unwrap();
        let after_first = roster.clone();

        let result = roster.move_to_active("Foo", Defender);

        assert_eq!(
            result.unwrap_err(),
            RosterError::InvalidState {
                name: "Foo".to_string(),
                membership: Membership::Active
            }
        );
        assert_eq!(roster, after_first);
    }

    #[test]
    fn test_move_to_candidate_keeps_position() {
        let mut roster = roster();

        let moved = roster.move_to_candidate("Dias").unwrap();

        assert!(moved.is_candidate);
        assert_eq!(moved.position, Defender);
        assert!(roster.group_by_position().get(Defender).is_empty());
        assert_eq!(roster.candidates().last().map(|p| p.name.as_str()), Some("Dias"));
        assert_partition(&roster);
    }

    #[test]
    fn test_move_candidate_to_candidate_fails() {
        let mut roster = roster();
        let before = roster.clone();

        assert_eq!(
            roster.move_to_candidate("Mitoma").unwrap_err(),
            RosterError::InvalidState {
                name: "Mitoma".to_string(),
                membership: Membership::Candidate
            }
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn test_unknown_player_leaves_state_untouched() {
        let mut roster = roster();
        let before = roster.clone();

        assert_eq!(
            roster.move_to_candidate("Nobody").unwrap_err(),
            RosterError::NotFound("Nobody".to_string())
        );
        assert_eq!(
            roster.move_to_active("Nobody", Forward).unwrap_err(),
            RosterError::NotFound("Nobody".to_string())
        );
        assert_eq!(
            roster.toggle_flag("Nobody").unwrap_err(),
            RosterError::NotFound("Nobody".to_string())
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn test_round_trip_changes_only_position() {
        let mut roster = roster();
        roster.toggle_flag("Rodri").unwrap();
        let original = roster.player("Rodri").cloned().unwrap();

        roster.move_to_candidate("Rodri").unwrap();
        roster.move_to_active("Rodri", Defender).unwrap();

        let restored = roster.player("Rodri").unwrap();
        assert!(!restored.is_candidate);
        assert_eq!(restored.position, Defender);
        assert_eq!(
            restored,
            &PlayerRecord {
                position: Defender,
                ..original
            }
        );
    }

    #[test]
    fn test_toggle_flag_twice() {
        let mut roster = roster();

        assert_eq!(roster.toggle_flag("Dias"), Ok(true));
        assert_eq!(roster.compute_aggregates().flagged_count, 1);
        assert_eq!(roster.sorted_view(SquadFilter::FlaggedOnly).len(), 1);

        assert_eq!(roster.toggle_flag("Dias"), Ok(false));
        assert_eq!(roster.compute_aggregates().flagged_count, 0);
        assert!(!roster.player("Dias").unwrap().is_flagged);
    }

    #[test]
    fn test_toggle_flag_on_candidate_rejected() {
        let mut roster = roster();
        let before = roster.clone();

        assert_eq!(
            roster.toggle_flag("Foo").unwrap_err(),
            RosterError::InvalidOperation {
                name: "Foo".to_string(),
                membership: Membership::Candidate
            }
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn test_flag_is_dormant_in_suggested_pool() {
        let mut roster = roster();
        roster.toggle_flag("Haaland").unwrap();

        roster.move_to_candidate("Haaland").unwrap();

        assert!(roster.player("Haaland").unwrap().is_flagged);
        assert_eq!(roster.compute_aggregates().flagged_count, 0);
    }

    #[test]
    fn test_sorted_views() {
        let roster = RosterState::new(vec![
            player("A", Defender, 7.0, 30),
            player("B", Midfielder, 9.0, 22),
            player("C", Forward, 8.0, 26),
        ])
        .unwrap();

        let ratings: Vec<f32> = roster
            .sorted_view(SquadFilter::ByRating)
            .iter()
            .map(|p| p.rating)
            .collect();
        let ages: Vec<u8> = roster
            .sorted_view(SquadFilter::ByAge)
            .iter()
            .map(|p| p.age)
            .collect();

        assert_eq!(ratings, vec![9.0, 8.0, 7.0]);
        assert_eq!(ages, vec![22, 26, 30]);
    }

    #[test]
    fn test_sort_ties_keep_roster_order() {
        let roster = RosterState::new(vec![
            player("First", Defender, 8.0, 25),
            player("Second", Defender, 8.0, 25),
            player("Third", Defender, 9.0, 25),
        ])
        .unwrap();

        let by_rating: Vec<&str> = roster
            .sorted_view(SquadFilter::ByRating)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let by_age: Vec<&str> = roster
            .sorted_view(SquadFilter::ByAge)
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(by_rating, vec!["Third", "First", "Second"]);
        assert_eq!(by_age, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_grouped_view_sorts_inside_sections() {
        let mut roster = roster();
        roster.move_to_active("Mitoma", Forward).unwrap();

        let groups = roster.grouped_view(SquadFilter::ByAge);

        assert_eq!(groups.names(Forward), vec!["Haaland", "Mitoma"]);
        assert_eq!(groups.names(Goalkeeper), vec!["Ederson"]);
        assert_eq!(
            groups.iter().map(|(g, _)| g).collect::<Vec<_>>(),
            PlayerPositionGroup::all().to_vec()
        );
    }

    #[test]
    fn test_mean_rating_tracks_active_players() {
        let mut roster = roster();

        let expected = (8.4 + 8.1 + 9.1 + 9.4) / 4.0;
        assert!((roster.compute_aggregates().mean_rating - expected).abs() < 1e-5);

        for name in ["Ederson", "Dias", "Rodri", "Haaland"] {
            roster.move_to_candidate(name).unwrap();
        }

        let stats = roster.compute_aggregates();
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.mean_rating, 0.0);
        assert_eq!(stats.mean_age, 0.0);
        assert_partition(&roster);
    }
}
