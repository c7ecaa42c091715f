use crate::club::squad::{AggregateStats, RosterError, RosterState, SquadGesture};
use crate::dashboard::TeamDashboard;
use crate::notification::Notification;
use crate::prediction::MatchPrediction;
use crate::tactics::TacticalLineup;
use crate::transfers::TransferMarket;
use log::{debug, warn};
use std::time::Duration;

/// In-memory state of one session. Owned by a single caller, every
/// gesture runs to completion before the next one is accepted.
#[derive(Debug, Clone)]
pub struct GameData {
    pub dashboard: TeamDashboard,
    pub roster: RosterState,
    pub market: TransferMarket,
    pub lineup: TacticalLineup,
    pub prediction: MatchPrediction,
}

impl GameData {
    pub fn new(
        dashboard: TeamDashboard,
        roster: RosterState,
        market: TransferMarket,
        lineup: TacticalLineup,
        prediction: MatchPrediction,
    ) -> Self {
        GameData {
            dashboard,
            roster,
            market,
            lineup,
            prediction,
        }
    }

    /// Applies a squad gesture. A rejected gesture leaves the roster as it
    /// was and comes back as a notification for the user.
    pub fn handle_gesture(
        &mut self,
        gesture: &SquadGesture,
        notification_delay: Duration,
    ) -> Result<AggregateStats, Notification> {
        match gesture.apply(&mut self.roster) {
            Ok(()) => {
                let stats = self.roster.compute_aggregates();
                debug!("squad: {:?} -> {:?}", gesture, stats);
                Ok(stats)
            }
            Err(error) => {
                warn!("squad: gesture rejected: {}", error);
                Err(Self::notify(&error, notification_delay))
            }
        }
    }

    fn notify(error: &RosterError, delay: Duration) -> Notification {
        Notification::from_error(error, delay)
    }
}
