//! Admin screens

use shared::models::Role;
use shared::util::format_amount;

use crate::error::DeskResult;
use crate::forms::{CourtDraft, ProfileDraft, SessionDraft, ShuttleDraft};

use super::{
    get_datetime, get_decimal, get_input, get_input_with_default, get_optional, pick_session,
    print_error, session_view, App, Exit,
};

/// Admin menu loop.
pub async fn run(app: &mut App) -> DeskResult<Exit> {
    loop {
        println!("\n=== Courtside (admin: {}) ===", app.session.profile.name);
        println!("1. Sessions");
        println!("2. New session");
        println!("3. Courts");
        println!("4. Shuttles");
        println!("5. Profiles");
        println!("6. Summary history");
        println!("9. Sign out");
        println!("0. Quit");

        match get_input("> ").as_str() {
            "0" => return Ok(Exit::Quit),
            "9" => return Ok(Exit::SignOut),
            "1" => match pick_session(app).await {
                Ok(Some(session)) => {
                    if let Err(err) = session_view(app, session, true).await {
                        print_error(&err);
                    }
                }
                Ok(None) => {}
                Err(err) => print_error(&err),
            },
            "2" => {
                if let Err(err) = new_session_screen(app).await {
                    print_error(&err);
                }
            }
            "3" => {
                if let Err(err) = courts_screen(app).await {
                    print_error(&err);
                }
            }
            "4" => {
                if let Err(err) = shuttles_screen(app).await {
                    print_error(&err);
                }
            }
            "5" => {
                if let Err(err) = profiles_screen(app).await {
                    print_error(&err);
                }
            }
            "6" => {
                if let Err(err) = archive_screen(app).await {
                    print_error(&err);
                }
            }
            _ => println!("Unknown choice"),
        }
    }
}

async fn new_session_screen(app: &App) -> DeskResult<()> {
    let courts = app.client.fetch_courts().await?;
    let shuttles = app.client.fetch_shuttles().await?;
    let users = app.client.fetch_users().await?;
    if courts.is_empty() || shuttles.is_empty() {
        println!("Set up at least one court and one shuttle first.");
        return Ok(());
    }

    let mut draft = SessionDraft::new(get_datetime("Session start"));

    println!("Courts:");
    for (i, c) in courts.iter().enumerate() {
        println!("  {:2}. {}", i + 1, c.name);
    }
    draft.courts = get_input("Courts (comma-separated numbers): ")
        .split(',')
        .filter_map(|p| p.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= courts.len())
        .map(|n| courts[n - 1].id.clone())
        .collect();

    println!("Shuttles:");
    for (i, s) in shuttles.iter().enumerate() {
        println!("  {:2}. {}", i + 1, s.name);
    }
    let pick: usize = get_input("Default shuttle number: ").parse().unwrap_or(0);
    if pick >= 1 && pick <= shuttles.len() {
        draft.shuttle = shuttles[pick - 1].id.clone();
    }

    println!("Players:");
    for (i, u) in users.iter().enumerate() {
        println!("  {:2}. {}", i + 1, u.name);
    }
    draft.players = get_input("Roster (comma-separated numbers, empty = none): ")
        .split(',')
        .filter_map(|p| p.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= users.len())
        .map(|n| users[n - 1].id.clone())
        .collect();

    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    let session = app
        .guard
        .run(async { Ok(app.client.create_session(&input).await?) })
        .await?;
    println!(
        "Session created for {}.",
        session.start.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

async fn courts_screen(app: &App) -> DeskResult<()> {
    loop {
        let courts = app.client.fetch_courts().await?;
        println!("\nCourts:");
        for (i, c) in courts.iter().enumerate() {
            println!("  {:2}. {}  {}/hr", i + 1, c.name, format_amount(c.price));
        }
        match get_input("(c)reate, (e)dit, (d)elete, 0 back: ").as_str() {
            "0" | "" => return Ok(()),
            "c" => {
                let draft = CourtDraft {
                    name: get_input("Name: "),
                    price: get_decimal("Hourly price: "),
                };
                if let Err(err) = submit_court(app, None, draft).await {
                    print_error(&err);
                }
            }
            "e" => {
                let pick: usize = get_input("Court number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= courts.len() {
                    let existing = &courts[pick - 1];
                    let mut draft = CourtDraft::from_court(existing);
                    draft.name = get_input_with_default("Name", &draft.name);
                    let price = get_input_with_default("Hourly price", &draft.price.to_string());
                    draft.price = price.parse().unwrap_or(draft.price);
                    if let Err(err) = submit_court(app, Some(existing.id.clone()), draft).await {
                        print_error(&err);
                    }
                }
            }
            "d" => {
                let pick: usize = get_input("Court number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= courts.len() {
                    app.client.delete_court(&courts[pick - 1].id).await?;
                    println!("Court deleted.");
                }
            }
            _ => {}
        }
    }
}

async fn submit_court(app: &App, id: Option<String>, draft: CourtDraft) -> DeskResult<()> {
    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    app.guard
        .run(async {
            match &id {
                Some(id) => app.client.update_court(id, &input).await?,
                None => app.client.create_court(&input).await?,
            };
            Ok(())
        })
        .await?;
    println!("Court saved.");
    Ok(())
}

async fn shuttles_screen(app: &App) -> DeskResult<()> {
    loop {
        let shuttles = app.client.fetch_shuttles().await?;
        println!("\nShuttles:");
        for (i, s) in shuttles.iter().enumerate() {
            println!("  {:2}. {}  {}", i + 1, s.name, format_amount(s.price));
        }
        match get_input("(c)reate, (e)dit, (d)elete, 0 back: ").as_str() {
            "0" | "" => return Ok(()),
            "c" => {
                let draft = ShuttleDraft {
                    name: get_input("Name: "),
                    price: get_decimal("Unit price: "),
                };
                if let Err(err) = submit_shuttle(app, None, draft).await {
                    print_error(&err);
                }
            }
            "e" => {
                let pick: usize = get_input("Shuttle number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= shuttles.len() {
                    let existing = &shuttles[pick - 1];
                    let mut draft = ShuttleDraft::from_shuttle(existing);
                    draft.name = get_input_with_default("Name", &draft.name);
                    let price = get_input_with_default("Unit price", &draft.price.to_string());
                    draft.price = price.parse().unwrap_or(draft.price);
                    if let Err(err) = submit_shuttle(app, Some(existing.id.clone()), draft).await {
                        print_error(&err);
                    }
                }
            }
            "d" => {
                let pick: usize = get_input("Shuttle number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= shuttles.len() {
                    app.client.delete_shuttle(&shuttles[pick - 1].id).await?;
                    println!("Shuttle deleted.");
                }
            }
            _ => {}
        }
    }
}

async fn submit_shuttle(app: &App, id: Option<String>, draft: ShuttleDraft) -> DeskResult<()> {
    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    app.guard
        .run(async {
            match &id {
                Some(id) => app.client.update_shuttle(id, &input).await?,
                None => app.client.create_shuttle(&input).await?,
            };
            Ok(())
        })
        .await?;
    println!("Shuttle saved.");
    Ok(())
}

async fn profiles_screen(app: &App) -> DeskResult<()> {
    loop {
        let users = app.client.fetch_users().await?;
        println!("\nProfiles:");
        for (i, u) in users.iter().enumerate() {
            let sponsor = u
                .sponsored_by
                .as_ref()
                .map(|s| format!(", sponsored by {}", s.name))
                .unwrap_or_default();
            println!(
                "  {:2}. {} ({}, {:?}{})",
                i + 1,
                u.name,
                u.username,
                u.role,
                sponsor
            );
        }
        match get_input("(c)reate, (e)dit, (d)elete, 0 back: ").as_str() {
            "0" | "" => return Ok(()),
            "c" => {
                let draft = ProfileDraft {
                    name: get_input("Name: "),
                    username: get_input("Username: "),
                    contact: get_optional("Contact (optional): "),
                    role: read_role(),
                    pin: get_optional("4-digit PIN: "),
                    sponsored_by: get_optional("Sponsor user id (optional): "),
                };
                if let Err(err) = submit_profile(app, None, draft).await {
                    print_error(&err);
                }
            }
            "e" => {
                let pick: usize = get_input("Profile number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= users.len() {
                    let existing = &users[pick - 1];
                    let mut draft = ProfileDraft::from_user(existing);
                    draft.name = get_input_with_default("Name", &draft.name);
                    draft.username = get_input_with_default("Username", &draft.username);
                    draft.pin = get_optional("New 4-digit PIN (empty keeps current): ");
                    if let Err(err) = submit_profile(app, Some(existing.id.clone()), draft).await {
                        print_error(&err);
                    }
                }
            }
            "d" => {
                let pick: usize = get_input("Profile number: ").parse().unwrap_or(0);
                if pick >= 1 && pick <= users.len() {
                    app.client.delete_user(&users[pick - 1].id).await?;
                    println!("Profile deleted.");
                }
            }
            _ => {}
        }
    }
}

fn read_role() -> Role {
    match get_input("Role (admin/user) [user]: ").as_str() {
        "admin" => Role::Admin,
        _ => Role::User,
    }
}

async fn submit_profile(app: &App, id: Option<String>, draft: ProfileDraft) -> DeskResult<()> {
    validator::Validate::validate(&draft)?;
    let input = draft.to_input();
    app.guard
        .run(async {
            match &id {
                Some(id) => app.client.update_user(id, &input).await?,
                None => app.client.create_user(&input).await?,
            };
            Ok(())
        })
        .await?;
    println!("Profile saved.");
    Ok(())
}

async fn archive_screen(app: &App) -> DeskResult<()> {
    println!("\nLoading archive...");
    let files = app.archive.list_files().await?;
    if files.is_empty() {
        println!("No archived summaries.");
        return Ok(());
    }
    for (i, f) in files.iter().enumerate() {
        println!("  {:2}. {}  ({})", i + 1, f.file_name, f.date);
    }
    let pick: usize = get_input("Download file number (0 = back): ")
        .parse()
        .unwrap_or(0);
    if pick == 0 || pick > files.len() {
        return Ok(());
    }
    let file = &files[pick - 1];
    let bytes = app.archive.download(&file.file_name).await?;
    let dir = std::path::Path::new(&app.config.work_dir).join("archive");
    std::fs::create_dir_all(&dir)?;
    let target = dir.join(&file.file_name);
    std::fs::write(&target, bytes)?;
    println!("Saved to {}", target.display());
    Ok(())
}
