//! Courtside terminal client
//!
//! Run: cargo run --bin courtside
//!
//! Configuration comes from the environment (optionally a `.env` file)
//! with command-line overrides; see `core::config`.

use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use courtside_client::GraphqlClient;
use courtside_desk::core::routing::{resolve, RouteDecision};
use courtside_desk::core::{AuthSession, Config, SessionStore};
use courtside_desk::forms::SubmitGuard;
use courtside_desk::prefs::PrefsStore;
use courtside_desk::ui::{self, App, Exit};
use shared::models::Role;

#[derive(Parser, Debug)]
#[command(name = "courtside", about = "Badminton court rental session manager")]
struct Args {
    /// GraphQL endpoint URL
    #[arg(long)]
    graphql_url: Option<String>,

    /// CSV archive base URL
    #[arg(long)]
    archive_url: Option<String>,

    /// Local data directory
    #[arg(long)]
    work_dir: Option<String>,

    /// Background refresh interval in seconds
    #[arg(long)]
    poll_interval_secs: Option<u64>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::from_env();
        if let Some(url) = self.graphql_url {
            config.graphql_url = url;
        }
        if let Some(url) = self.archive_url {
            config.archive_url = url;
        }
        if let Some(dir) = self.work_dir {
            config.work_dir = dir;
        }
        if let Some(secs) = self.poll_interval_secs {
            config.poll_interval_secs = secs;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    tracing::info!(graphql_url = %config.graphql_url, "starting courtside");

    let store = SessionStore::new(Path::new(&config.work_dir));
    let client_config = config.client_config();

    loop {
        let mut client = client_config.build_graphql_client()?;

        let session = match store.load()? {
            Some(session) => session,
            None => match login(&client, &store).await? {
                Some(session) => session,
                None => return Ok(()),
            },
        };
        client.set_token(&session.token);

        match resolve("/", Some(&session)) {
            RouteDecision::Redirect(home) => tracing::debug!(home = %home, "routing to role home"),
            RouteDecision::Allow => {}
        }

        let mut app = App {
            archive: client_config.build_archive_client()?,
            prefs: PrefsStore::load(Path::new(&config.work_dir))?,
            store: SessionStore::new(Path::new(&config.work_dir)),
            guard: SubmitGuard::new(),
            config: config.clone(),
            client,
            session,
        };

        let exit = match app.session.role() {
            Role::Admin => ui::admin::run(&mut app).await,
            Role::User => ui::user::run(&mut app).await,
        };

        match exit {
            Ok(Exit::SignOut) => {
                sign_out(&mut app).await;
                continue;
            }
            Ok(Exit::Quit) => {
                println!("Bye.");
                return Ok(());
            }
            Err(err) => {
                // A menu loop only errors on something unrecoverable;
                // tear the session down and start over at login.
                tracing::error!(error = %err, "session loop failed");
                sign_out(&mut app).await;
            }
        }
    }
}

async fn login(client: &GraphqlClient, store: &SessionStore) -> anyhow::Result<Option<AuthSession>> {
    println!("\n=== Courtside ===");
    loop {
        let pin = ui::get_input("PIN (q to quit): ");
        if pin == "q" {
            return Ok(None);
        }
        if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            println!("Invalid PIN");
            continue;
        }
        match client.login_with_pin(&pin).await {
            Ok(response) => {
                let session = AuthSession::new(response.token, response.user);
                store.save(&session)?;
                println!("Welcome, {}.", session.profile.name);
                return Ok(Some(session));
            }
            Err(err) => {
                // Whatever the server said, the user only learns the
                // PIN did not work.
                tracing::debug!(error = %err, "login rejected");
                println!("Invalid PIN");
            }
        }
    }
}

/// Tear the signed-in context down: best-effort server-side logout,
/// then drop the token and the persisted session.
async fn sign_out(app: &mut App) {
    let token = app.session.token.clone();
    if let Err(err) = app.client.logout(&token).await {
        tracing::warn!(error = %err, "server-side logout failed");
    }
    app.client.clear_token();
    if let Err(err) = app.store.clear() {
        tracing::warn!(error = %err, "could not clear cached session");
    }
    println!("Signed out.");
}
