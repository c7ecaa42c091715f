mod settings;

use color_eyre::eyre::Result;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::info;
use settings::SessionSettings;
use squad_core::utils::TimeEstimation;
use squad_core::{DropTarget, GameData, PlayerPositionGroup, SquadFilter, SquadGesture, TeamDashboard};

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let settings = SessionSettings::from_env();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let mut game = DatabaseGenerator::generate(&database)?;

    log_dashboard(&game);
    log_squad(&game, SquadFilter::All);

    if settings.is_demo {
        info!("demo session started");

        for gesture in demo_session() {
            match game.handle_gesture(&gesture, settings.notification_delay) {
                Ok(stats) => info!(
                    "{:?}: {} players, avg rating {:.2}, avg age {:.1}, {} listed",
                    gesture, stats.total_players, stats.mean_rating, stats.mean_age, stats.flagged_count
                ),
                Err(notification) => info!(
                    "notification ({} ms): {}",
                    notification.total_visible().as_millis(),
                    notification.message
                ),
            }
        }

        log_squad(&game, SquadFilter::ByRating);
    }

    Ok(())
}

fn log_dashboard(game: &GameData) {
    let dashboard = &game.dashboard;

    info!(
        "{}: {} in {}, {} pts, {}",
        dashboard.team_name,
        dashboard.season.league_position_label(),
        dashboard.season.league,
        dashboard.season.points,
        dashboard.form_summary()
    );

    if let Some(fixture) = dashboard.next_fixture() {
        info!(
            "next: {} ({:?}) {} - {}",
            fixture.opponent,
            fixture.venue,
            fixture.kickoff_label(),
            fixture.competition
        );
    }

    for performer in TeamDashboard::top_performers(&game.roster, 5) {
        info!("top performer: {} {} {:.1}", performer.name, performer.position, performer.rating);
    }

    info!(
        "lineup: {} ({}), avg rating {:.2}",
        game.lineup.formation().display_name,
        game.lineup.formation_description(),
        game.lineup.average_rating()
    );

    let (home, draw, away) = game.prediction.win_probability.percents();
    info!(
        "prediction: {} vs {} on {}, {}% / {}% / {}% ({})",
        game.prediction.home_team,
        game.prediction.away_team,
        game.prediction.kickoff_label(),
        home,
        draw,
        away,
        game.prediction.confidence_level
    );
}

fn log_squad(game: &GameData, filter: SquadFilter) {
    let stats = game.roster.compute_aggregates();

    info!(
        "squad ({}): {} players, avg rating {:.2}, avg age {:.1}, {} listed",
        filter.label(),
        stats.total_players,
        stats.mean_rating,
        stats.mean_age,
        stats.flagged_count
    );

    for (group, players) in game.roster.grouped_view(filter).iter() {
        let names: Vec<String> = players.iter().map(|p| p.to_string()).collect();
        info!("{}: {}", group.section_title(), names.join(", "));
    }

    let suggested: Vec<&str> = game.roster.candidates().map(|p| p.name.as_str()).collect();
    info!("suggested: {}", suggested.join(", "));
}

fn demo_session() -> Vec<SquadGesture> {
    vec![
        SquadGesture::drop_on("Michael Olise", DropTarget::Position(PlayerPositionGroup::Forward)),
        SquadGesture::toggle("Kyle Walker"),
        SquadGesture::toggle("Bart Verbruggen"),
        SquadGesture::drop_on("Kyle Walker", DropTarget::Candidates),
        SquadGesture::drop_on("Michael Olise", DropTarget::Position(PlayerPositionGroup::Midfielder)),
        SquadGesture::drop_on("Martin Zubimendi", DropTarget::Position(PlayerPositionGroup::Midfielder)),
        SquadGesture::drop_on("Lamine Yamal", DropTarget::Candidates),
    ]
}
