//! Interactive terminal front-end
//!
//! Menu-driven screens over the desk logic. Input is plain line-based
//! stdin; visual styling is deliberately minimal.

pub mod admin;
pub mod user;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use courtside_client::{ArchiveClient, GraphqlClient};
use shared::models::{Game, Session, Winner};
use shared::util::format_amount;

use crate::core::{AuthSession, Config, Poller, SessionStore};
use crate::error::DeskResult;
use crate::forms::{BetDraft, BettorPairDraft, GameDraft, ShuttleQty, SubmitGuard};
use crate::prefs::PrefsStore;
use crate::summary::{compute_game_summary, compute_session_bets, SessionBilling};

/// How a menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    SignOut,
    Quit,
}

/// Everything a screen needs
pub struct App {
    pub config: Config,
    pub client: GraphqlClient,
    pub archive: ArchiveClient,
    pub prefs: PrefsStore,
    pub store: SessionStore,
    pub session: AuthSession,
    pub guard: SubmitGuard,
}

// ===== Input helpers =====

pub fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}

pub fn get_input_with_default(prompt: &str, default: &str) -> String {
    let input = get_input(&format!("{} [{}]: ", prompt, default));
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

pub fn get_optional(prompt: &str) -> Option<String> {
    let input = get_input(prompt);
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

pub fn get_decimal(prompt: &str) -> Decimal {
    loop {
        let input = get_input(prompt);
        match input.parse() {
            Ok(value) => return value,
            Err(_) => println!("Enter a number, e.g. 200 or 12.5"),
        }
    }
}

pub fn get_u32(prompt: &str, default: u32) -> u32 {
    get_input(prompt).parse().unwrap_or(default)
}

/// Prompt for a UTC timestamp; empty input means now.
pub fn get_datetime(prompt: &str) -> chrono::DateTime<Utc> {
    loop {
        let input = get_input(&format!("{} (YYYY-MM-DD HH:MM, empty = now): ", prompt));
        if input.is_empty() {
            return Utc::now();
        }
        match NaiveDateTime::parse_from_str(&input, "%Y-%m-%d %H:%M") {
            Ok(naive) => return Utc.from_utc_datetime(&naive),
            Err(_) => println!("Could not parse that, try again"),
        }
    }
}

pub fn print_error(err: &crate::error::DeskError) {
    println!("!! [{}] {}", err.error_code().code(), err);
}

// ===== Shared screens =====

/// List recent sessions and pick one; `None` backs out.
pub async fn pick_session(app: &App) -> DeskResult<Option<Session>> {
    println!("\nLoading sessions...");
    let sessions = app.client.fetch_sessions(20).await?;
    if sessions.is_empty() {
        println!("No sessions yet.");
        return Ok(None);
    }

    println!("\nRecent sessions:");
    for (i, s) in sessions.iter().enumerate() {
        let state = if s.is_ongoing() { "open" } else { "closed" };
        println!(
            "{:2}. {}  [{}]  {} players, {} games",
            i + 1,
            s.start.format("%Y-%m-%d %H:%M"),
            state,
            s.available_players.len(),
            s.games.len()
        );
    }

    let choice = get_input("Pick a session (0 = back): ");
    let index: usize = match choice.parse() {
        Ok(n) if n >= 1 && n <= sessions.len() => n,
        _ => return Ok(None),
    };
    Ok(sessions.into_iter().nth(index - 1))
}

fn winner_label(game: &Game) -> &'static str {
    match game.resolved_winner() {
        Some(Winner::A) => "A won",
        Some(Winner::B) => "B won",
        None => "-",
    }
}

fn print_session(session: &Session) {
    let state = if session.is_ongoing() { "open" } else { "closed" };
    println!(
        "\nSession {} [{}], {} on the roster",
        session.start.format("%Y-%m-%d %H:%M"),
        state,
        session.available_players.len()
    );
    if session.games.is_empty() {
        println!("  no games yet");
    }
    for (i, g) in session.games.iter().enumerate() {
        let side_a = match &g.a2 {
            Some(a2) => format!("{}/{}", g.a1.name, a2.name),
            None => g.a1.name.clone(),
        };
        let side_b = match &g.b2 {
            Some(b2) => format!("{}/{}", g.b1.name, b2.name),
            None => g.b1.name.clone(),
        };
        println!(
            "  {:2}. {} vs {}  on {}  [{:?}]  {}",
            i + 1,
            side_a,
            side_b,
            g.court.name,
            g.status,
            winner_label(g)
        );
    }
}

/// Live session view with background refresh. `can_edit` gates the
/// mutating actions to admins.
pub async fn session_view(app: &mut App, session: Session, can_edit: bool) -> DeskResult<()> {
    let session_id = session.id.clone();
    let latest: Arc<RwLock<Session>> = Arc::new(RwLock::new(session));

    let poller = {
        let client = app.client.clone();
        let latest = latest.clone();
        let id = session_id.clone();
        Poller::spawn(
            Duration::from_secs(app.config.poll_interval_secs),
            move || {
                let client = client.clone();
                let latest = latest.clone();
                let id = id.clone();
                async move {
                    match client.fetch_session(&id).await {
                        Ok(Some(fresh)) => *latest.write().await = fresh,
                        Ok(None) => tracing::warn!(session_id = %id, "session vanished"),
                        Err(err) => tracing::warn!(error = %err, "background refresh failed"),
                    }
                }
            },
        )
    };

    let result = session_menu(app, &session_id, &latest, can_edit).await;
    poller.shutdown().await;
    result
}

async fn refetch(
    app: &App,
    session_id: &str,
    latest: &Arc<RwLock<Session>>,
) -> DeskResult<()> {
    if let Some(fresh) = app.client.fetch_session(session_id).await? {
        *latest.write().await = fresh;
    }
    Ok(())
}

async fn session_menu(
    app: &mut App,
    session_id: &str,
    latest: &Arc<RwLock<Session>>,
    can_edit: bool,
) -> DeskResult<()> {
    loop {
        let snapshot = latest.read().await.clone();
        print_session(&snapshot);

        println!("\nSession actions:");
        println!("1. Billing summary");
        println!("2. Bets summary");
        println!("3. Game summary");
        println!("4. Refresh now");
        if can_edit {
            println!("5. Start game");
            println!("6. End game");
            println!("7. Record bet");
            println!("8. Add players");
            println!("9. Remove players");
            println!("10. Add court");
            println!("11. Toggle session open/closed");
            println!("12. End session");
        }
        println!("0. Back");

        match get_input("> ").as_str() {
            "0" => return Ok(()),
            "1" => {
                if let Err(err) = show_billing_summary(app, session_id).await {
                    print_error(&err);
                }
            }
            "2" => {
                if let Err(err) = show_bets_summary(app, session_id).await {
                    print_error(&err);
                }
            }
            "3" => show_game_summary(app, &snapshot).await,
            "4" => {
                if let Err(err) = refetch(app, session_id, latest).await {
                    print_error(&err);
                }
            }
            "5" if can_edit => {
                if let Err(err) = start_game(app, &snapshot).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "6" if can_edit => {
                if let Err(err) = end_game(app, &snapshot).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "7" if can_edit => {
                if let Err(err) = record_bet(app, &snapshot).await {
                    print_error(&err);
                }
            }
            "8" if can_edit => {
                if let Err(err) = add_players(app, session_id).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "9" if can_edit => {
                if let Err(err) = remove_players(app, &snapshot).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "10" if can_edit => {
                if let Err(err) = add_court(app, session_id).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "11" if can_edit => {
                if let Err(err) = toggle_session(app, &snapshot).await {
                    print_error(&err);
                } else {
                    let _ = refetch(app, session_id, latest).await;
                }
            }
            "12" if can_edit => {
                if get_input("End this session? (y/N): ").to_lowercase() == "y" {
                    match app.client.end_session(session_id).await {
                        Ok(()) => {
                            println!("Session ended.");
                            let _ = refetch(app, session_id, latest).await;
                        }
                        Err(err) => print_error(&err.into()),
                    }
                }
            }
            _ => println!("Unknown choice"),
        }
    }
}

// ===== Summaries =====

async fn show_billing_summary(app: &App, session_id: &str) -> DeskResult<()> {
    println!("\nLoading billing summary...");
    let summary = app.client.fetch_session_summary(session_id).await?;

    let games = match app.client.fetch_games_by_session(session_id).await {
        Ok(games) => games,
        Err(err) => {
            tracing::warn!(error = %err, "could not fetch games, sponsor grouping will be empty");
            Vec::new()
        }
    };
    let billing = SessionBilling::compute(&games, &summary.player_rates, summary.other_income);

    println!("Court total:    {}", format_amount(summary.court_total));
    println!("Shuttle total:  {}", format_amount(summary.shuttle_total));
    println!(
        "Other income:   {}",
        format_amount(billing.other_income_display())
    );
    println!("Player total:   {}", format_amount(summary.player_total));
    println!("Overall:        {}", format_amount(summary.overall_total()));

    println!("\nShuttles used ({} total):", summary.total_shuttles_used);
    for d in &summary.shuttle_details {
        println!(
            "  {} x{}  {}",
            d.shuttle_name,
            d.quantity,
            format_amount(d.total_price)
        );
    }

    println!("\nPer sponsor:");
    for group in &billing.sponsor_groups {
        println!("  {}  {}", group.sponsor, format_amount(group.subtotal));
        for row in &group.rows {
            println!(
                "    {} ({} games)  {}",
                row.label,
                row.games_played,
                format_amount(row.rate)
            );
        }
    }

    println!("\nCourt usage:");
    for d in &summary.duration_per_court {
        println!("  {}: {} min", d.court.name, d.total_minutes);
    }
    Ok(())
}

async fn show_bets_summary(app: &mut App, session_id: &str) -> DeskResult<()> {
    let types = app
        .client
        .fetch_distinct_bet_types(session_id)
        .await
        .unwrap_or_default();
    if !types.is_empty() {
        println!("\nBet types in this session: {}", types.join(", "));
    }
    let remembered = app
        .prefs
        .bet_type_filter(session_id)
        .map(|s| s.to_string());
    let prompt = match &remembered {
        Some(f) => format!("Filter by bet type [{}] ('-' clears, empty keeps): ", f),
        None => "Filter by bet type (empty = all): ".to_string(),
    };
    let filter = match get_input(&prompt).as_str() {
        "" => remembered,
        "-" => None,
        picked => Some(picked.to_string()),
    };
    app.prefs.set_bet_type_filter(session_id, filter.as_deref())?;

    println!("Loading bets...");
    let bets = app.client.fetch_bets_by_session(session_id).await?;
    let summary = compute_session_bets(&bets, filter.as_deref());

    println!(
        "\n{} bets, {} staked, {} wins / {} losses",
        summary.total_bets,
        format_amount(summary.total_amount),
        summary.total_wins,
        summary.total_losses
    );
    for p in &summary.player_stats {
        println!(
            "  {}  {}W/{}L ({} bets)",
            p.user.name, p.wins, p.losses, p.total
        );
        for c in &p.competitors {
            println!("    vs {}  {}W/{}L", c.user.name, c.wins, c.losses);
        }
    }
    Ok(())
}

async fn show_game_summary(app: &App, session: &Session) {
    let Some(game) = pick_game(session) else {
        return;
    };
    // Prefer the server's figures; fall back to the local computation
    // when the query is unavailable.
    match app.client.fetch_game_summary(&game.id).await {
        Ok(summary) => print_game_summary(&summary),
        Err(err) => {
            tracing::debug!(error = %err, "server game summary unavailable, computing locally");
            match compute_game_summary(game) {
                Some(summary) => print_game_summary(&summary),
                None => println!("Game is still open, no summary yet."),
            }
        }
    }
}

fn print_game_summary(summary: &shared::models::summary::GameSummary) {
    println!(
        "Court {} ({} each), shuttles {} ({} each), total {} ({} each)",
        format_amount(summary.court_rate),
        format_amount(summary.court_rate_per_player),
        format_amount(summary.shuttle_rate),
        format_amount(summary.shuttle_rate_per_player),
        format_amount(summary.total_rate),
        format_amount(summary.total_rate_per_player)
    );
}

fn pick_game<'a>(session: &'a Session) -> Option<&'a Game> {
    if session.games.is_empty() {
        println!("No games in this session.");
        return None;
    }
    let choice = get_input("Game number (0 = back): ");
    let index: usize = choice.parse().ok()?;
    if index == 0 || index > session.games.len() {
        return None;
    }
    Some(&session.games[index - 1])
}

// ===== Mutating actions =====

fn pick_roster_player(session: &Session, prompt: &str, required: bool) -> Option<String> {
    loop {
        let input = get_input(prompt);
        if input.is_empty() {
            if required {
                println!("This slot is required");
                continue;
            }
            return None;
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= session.available_players.len() => {
                return Some(session.available_players[n - 1].id.clone());
            }
            _ => println!("Pick a roster number"),
        }
    }
}

async fn start_game(app: &App, session: &Session) -> DeskResult<()> {
    println!("\nRoster:");
    for (i, p) in session.available_players.iter().enumerate() {
        println!("  {:2}. {}", i + 1, p.name);
    }
    println!("Courts:");
    for (i, c) in session.courts.iter().enumerate() {
        println!("  {:2}. {}", i + 1, c.name);
    }

    let roster: Vec<String> = session
        .available_players
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let mut draft = GameDraft::new(&session.id, Utc::now(), roster);

    draft.a1 = pick_roster_player(session, "Player A1: ", true).unwrap_or_default();
    draft.b1 = pick_roster_player(session, "Player B1: ", true).unwrap_or_default();
    draft.a2 = pick_roster_player(session, "Player A2 (empty for singles): ", false);
    draft.b2 = pick_roster_player(session, "Player B2 (empty for singles): ", false);

    let court_no = get_u32("Court number: ", 1) as usize;
    if court_no >= 1 && court_no <= session.courts.len() {
        draft.court = session.courts[court_no - 1].id.clone();
    }
    if let Some(shuttle) = &session.shuttle {
        let qty = get_u32(&format!("Shuttles used ({}) [1]: ", shuttle.name), 1);
        draft.shuttles.push(ShuttleQty {
            shuttle: shuttle.id.clone(),
            quantity: qty,
        });
    }

    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    let game = app
        .guard
        .run(async { Ok(app.client.create_game(&input).await?) })
        .await?;
    println!("Game started ({}).", game.id);
    Ok(())
}

async fn end_game(app: &App, session: &Session) -> DeskResult<()> {
    let Some(game) = pick_game(session) else {
        return Ok(());
    };
    if game.is_closed() {
        println!("That game is already over.");
        return Ok(());
    }
    let winner = match get_input("Winner (a/b, empty = none): ").as_str() {
        "a" => Some(Winner::A),
        "b" => Some(Winner::B),
        _ => None,
    };

    let ended = app
        .guard
        .run(async {
            Ok(app
                .client
                .end_game(&game.id, &session.id, Utc::now(), winner)
                .await?)
        })
        .await?;
    println!("Game ended ({:?}).", ended.status);
    Ok(())
}

async fn record_bet(app: &App, session: &Session) -> DeskResult<()> {
    let Some(game) = pick_game(session) else {
        return Ok(());
    };

    let mut draft = BetDraft::new(&game.id);
    draft.bet_type = get_input("Bet type: ");
    draft.amount = get_decimal("Amount: ");
    loop {
        println!("Bettor pair {} (roster numbers, empty side allowed):", draft.pairs.len() + 1);
        let for_a = pick_roster_player(session, "  backing side A: ", false);
        let for_b = pick_roster_player(session, "  backing side B: ", false);
        draft.pairs.push(BettorPairDraft { for_a, for_b });
        if get_input("Add another pair? (y/N): ").to_lowercase() != "y" {
            break;
        }
    }
    draft.paid = get_input("Already paid? (y/N): ").to_lowercase() == "y";

    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    app.guard
        .run(async { Ok(app.client.create_bet(&input).await?) })
        .await?;
    println!("Bet recorded.");
    Ok(())
}

async fn add_players(app: &App, session_id: &str) -> DeskResult<()> {
    println!("\nLoading players...");
    let users = app.client.fetch_users().await?;
    for (i, u) in users.iter().enumerate() {
        println!("  {:2}. {} ({})", i + 1, u.name, u.username);
    }
    let picks = get_input("Add players (comma-separated numbers): ");
    let ids: Vec<String> = picks
        .split(',')
        .filter_map(|p| p.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= users.len())
        .map(|n| users[n - 1].id.clone())
        .collect();
    if ids.is_empty() {
        return Ok(());
    }
    app.guard
        .run(async { Ok(app.client.add_players_to_session(session_id, &ids).await?) })
        .await?;
    println!("Added {} player(s).", ids.len());
    Ok(())
}

async fn remove_players(app: &App, session: &Session) -> DeskResult<()> {
    for (i, p) in session.available_players.iter().enumerate() {
        println!("  {:2}. {}", i + 1, p.name);
    }
    let picks = get_input("Remove players (comma-separated numbers): ");
    let ids: Vec<String> = picks
        .split(',')
        .filter_map(|p| p.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= session.available_players.len())
        .map(|n| session.available_players[n - 1].id.clone())
        .collect();
    if ids.is_empty() {
        return Ok(());
    }
    app.guard
        .run(async {
            Ok(app
                .client
                .remove_players_from_session(&session.id, &ids)
                .await?)
        })
        .await?;
    println!("Removed {} player(s).", ids.len());
    Ok(())
}

async fn add_court(app: &App, session_id: &str) -> DeskResult<()> {
    let courts = app.client.fetch_courts().await?;
    for (i, c) in courts.iter().enumerate() {
        println!(
            "  {:2}. {}  {}/hr",
            i + 1,
            c.name,
            format_amount(c.price)
        );
    }
    let pick: usize = get_input("Court number (0 = back): ").parse().unwrap_or(0);
    if pick == 0 || pick > courts.len() {
        return Ok(());
    }
    let court_id = courts[pick - 1].id.clone();
    app.guard
        .run(async { Ok(app.client.add_court_to_session(session_id, &court_id).await?) })
        .await?;
    println!("Court added.");
    Ok(())
}

async fn toggle_session(app: &App, session: &Session) -> DeskResult<()> {
    let end = if session.is_ongoing() {
        Some(Utc::now())
    } else {
        None
    };
    let toggled = app
        .guard
        .run(async { Ok(app.client.toggle_session(&session.id, end).await?) })
        .await?;
    if toggled.is_ongoing() {
        println!("Session reopened.");
    } else {
        println!("Session closed.");
    }
    Ok(())
}
