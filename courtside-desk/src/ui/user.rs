//! Regular-user screens
//!
//! Read-only view of sessions and summaries; mutations stay behind the
//! admin role.

use crate::error::DeskResult;

use super::{get_input, pick_session, print_error, session_view, App, Exit};

/// User menu loop.
pub async fn run(app: &mut App) -> DeskResult<Exit> {
    loop {
        println!("\n=== Courtside ({}) ===", app.session.profile.name);
        println!("1. Sessions");
        println!("9. Sign out");
        println!("0. Quit");

        match get_input("> ").as_str() {
            "0" => return Ok(Exit::Quit),
            "9" => return Ok(Exit::SignOut),
            "1" => match pick_session(app).await {
                Ok(Some(session)) => {
                    if let Err(err) = session_view(app, session, false).await {
                        print_error(&err);
                    }
                }
                Ok(None) => {}
                Err(err) => print_error(&err),
            },
            _ => println!("Unknown choice"),
        }
    }
}
