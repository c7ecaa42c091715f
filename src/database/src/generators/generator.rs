use crate::generators::PlayerGenerator;
use crate::loaders::{DashboardEntity, LineupEntity, PredictionEntity, SquadEntity, TransfersEntity};
use crate::{DatabaseEntity, DatabaseError};
use log::debug;
use squad_core::prediction::{
    MatchPrediction, PredictedStats, StatComparison, TacticalInsight, WinProbability,
};
use squad_core::tactics::{Formation, FormationSlot, LineupPlayer, TacticalLineup};
use squad_core::transfers::{RecentTransfer, TransferMarket};
use squad_core::{Fixture, GameData, RosterState, SeasonStats, TeamDashboard};

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> Result<GameData, DatabaseError> {
        let roster = Self::generate_roster(&data.squad)?;
        let market = Self::generate_market(&data.transfers)?;
        let lineup = Self::generate_lineup(&data.lineup)?;
        let prediction = Self::generate_prediction(&data.prediction)?;
        let dashboard = Self::generate_dashboard(&data.dashboard);

        debug!(
            "generated {} squad players, {} suggested, {} market targets",
            roster.active_players().count(),
            roster.candidates().count(),
            market.targets().len()
        );

        Ok(GameData::new(dashboard, roster, market, lineup, prediction))
    }

    fn generate_roster(squad: &SquadEntity) -> Result<RosterState, DatabaseError> {
        let active = squad
            .squad
            .iter()
            .map(|p| PlayerGenerator::generate(p, false));
        let suggested = squad
            .suggested
            .iter()
            .map(|p| PlayerGenerator::generate(p, true));

        let players = active.chain(suggested).collect::<Result<Vec<_>, _>>()?;

        Ok(RosterState::new(players)?)
    }

    fn generate_market(transfers: &TransfersEntity) -> Result<TransferMarket, DatabaseError> {
        let targets = transfers
            .market
            .iter()
            .map(PlayerGenerator::generate_target)
            .collect::<Result<Vec<_>, _>>()?;

        let recent = transfers
            .recent
            .iter()
            .map(|t| RecentTransfer {
                player_name: t.player_name.clone(),
                from_club: t.from_club.clone(),
                to_club: t.to_club.clone(),
                fee: t.fee.clone(),
                date: t.date.clone(),
                position: t.position.clone(),
            })
            .collect();

        Ok(TransferMarket::new(targets, recent))
    }

    fn generate_lineup(lineup: &LineupEntity) -> Result<TacticalLineup, DatabaseError> {
        let starters = lineup
            .starters
            .iter()
            .map(|s| -> Result<LineupPlayer, DatabaseError> {
                Ok(LineupPlayer {
                    name: s.name.clone(),
                    rating: s.rating,
                    position: PlayerGenerator::position(&s.position)?,
                    is_star_player: s.is_star_player,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let formations = lineup
            .formations
            .iter()
            .map(|f| Formation {
                name: f.name.clone(),
                display_name: f.display_name.clone(),
                slots: f
                    .slots
                    .iter()
                    .map(|s| FormationSlot {
                        player_index: s.player_index,
                        x: s.x,
                        y: s.y,
                    })
                    .collect(),
            })
            .collect();

        Ok(TacticalLineup::new(starters, formations)?)
    }

    fn generate_prediction(entity: &PredictionEntity) -> Result<MatchPrediction, DatabaseError> {
        let stat = |s: &crate::loaders::StatComparisonEntity| {
            StatComparison::new(&s.metric, s.home_value, s.away_value)
        };

        let prediction = MatchPrediction {
            home_team: entity.home_team.clone(),
            away_team: entity.away_team.clone(),
            kickoff: entity.kickoff,
            venue: entity.venue.clone(),
            confidence_level: entity.confidence_level.clone(),
            win_probability: WinProbability {
                home_win: entity.win_probability.home_win,
                draw: entity.win_probability.draw,
                away_win: entity.win_probability.away_win,
            },
            predicted_stats: PredictedStats {
                expected_goals: stat(&entity.predicted_stats.expected_goals),
                possession: stat(&entity.predicted_stats.possession),
                shots_on_target: stat(&entity.predicted_stats.shots_on_target),
                pass_completion: stat(&entity.predicted_stats.pass_completion),
                ppda: stat(&entity.predicted_stats.ppda),
            },
            tactical_insight: TacticalInsight {
                title: entity.tactical_insight.title.clone(),
                description: entity.tactical_insight.description.clone(),
            },
            model_version: entity.model_version.clone(),
        };

        prediction.validate()?;

        Ok(prediction)
    }

    fn generate_dashboard(entity: &DashboardEntity) -> TeamDashboard {
        TeamDashboard {
            team_name: entity.team_name.clone(),
            season: SeasonStats {
                league_position: entity.season.league_position,
                league: entity.season.league.clone(),
                points: entity.season.points,
                matches_played: entity.season.matches_played,
                goals_scored: entity.season.goals_scored,
                clean_sheets: entity.season.clean_sheets,
            },
            recent_form: entity.recent_form.clone(),
            fixtures: entity
                .fixtures
                .iter()
                .map(|f| Fixture {
                    opponent: f.opponent.clone(),
                    kickoff: f.kickoff,
                    venue: f.venue,
                    competition: f.competition.clone(),
                })
                .collect(),
        }
    }
}
