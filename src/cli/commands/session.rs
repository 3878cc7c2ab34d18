use crate::cli::parser::{SessionCommand, Verdict};
use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::core::session::InspectionSession;
use crate::core::submit::finish_session;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Answer, Polarity};
use crate::ui::messages::{header, hint, info, success, warning};
use crate::utils::colors::{GREEN, RESET, YELLOW, colorize_answer};
use crate::utils::date::resolve_day;
use crate::utils::table::Table;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs;
use std::path::Path;

fn load_active(path: &Path) -> AppResult<InspectionSession> {
    InspectionSession::load_draft(path)?.ok_or(AppError::NoActiveSession)
}

fn print_progress(session: &InspectionSession) {
    let (answered, expected) = (session.answered_count(), session.expected_count());
    if session.is_complete() {
        println!("{GREEN}{answered}/{expected} answered, ready to finish{RESET}");
    } else {
        println!("{YELLOW}{answered}/{expected} answered{RESET}");
    }
}

fn yes(flag: bool) -> String {
    if flag {
        "yes".to_string()
    } else {
        String::new()
    }
}

fn print_session(session: &InspectionSession) {
    header(format!("{} / {}", session.ship(), session.zone()));

    let mut table = Table::with_headers(&[
        "#",
        "Item",
        "Answer",
        "Pest",
        "Repair",
        "Photo",
        "Observation",
    ]);
    for item in session.items() {
        table.add_row(vec![
            item.index.to_string(),
            item.key.to_string(),
            item.state.answer.symbol().to_string(),
            yes(item.state.pest),
            yes(item.state.repair),
            yes(item.has_photo),
            item.observation.to_string(),
        ]);
    }
    print!("{}", table.render());
    println!();
    print_progress(session);
}

/// Base64 of an image file, rejected when it does not decode as an image.
fn read_photo(file: &str) -> AppResult<String> {
    let bytes = fs::read(file)?;
    image::load_from_memory(&bytes).map_err(|e| AppError::Image(format!("{file}: {e}")))?;
    Ok(STANDARD.encode(bytes))
}

pub fn handle(action: &SessionCommand, cfg: &Config) -> AppResult<()> {
    let path = InspectionSession::draft_path(&cfg.database);

    match action {
        SessionCommand::Start { ship, zone, force } => {
            if let Some(existing) = InspectionSession::load_draft(&path)? {
                let label = format!("{} / {}", existing.ship(), existing.zone());
                if !force {
                    return Err(AppError::SessionInProgress(label));
                }
                warning(format!("Discarding the inspection of {label} in progress."));
            }

            let session = InspectionSession::for_zone(*ship, *zone);
            session.save_draft(&path)?;

            success(format!(
                "Started inspection of {ship} / {zone} ({} items)",
                session.expected_count()
            ));
            hint("List the items with `session show`.");
            hint("Answer them with `session answer <N> ok|ko`.");
        }

        SessionCommand::Answer { item, verdict } => {
            let mut session = load_active(&path)?;
            let key = session.resolve_key(item)?;

            match (verdict, session.answer(&key)) {
                (Verdict::Conforms, _) => session.set_answer(&key, Polarity::Conforms, true),
                (Verdict::NotConforms, _) => {
                    session.set_answer(&key, Polarity::DoesNotConform, true)
                }
                (Verdict::Clear, Answer::Conforms) => {
                    session.set_answer(&key, Polarity::Conforms, false)
                }
                (Verdict::Clear, Answer::DoesNotConform) => {
                    session.set_answer(&key, Polarity::DoesNotConform, false)
                }
                (Verdict::Clear, Answer::Unset) => {}
            }

            session.save_draft(&path)?;
            println!("{} {}", colorize_answer(session.answer(&key).symbol()), key);
            print_progress(&session);
        }

        SessionCommand::Flag {
            item,
            pest,
            repair,
            off,
        } => {
            let mut session = load_active(&path)?;
            let key = session.resolve_key(item)?;

            if *pest {
                session.set_pest_flag(&key, !off);
            }
            if *repair {
                session.set_repair_flag(&key, !off);
            }
            session.save_draft(&path)?;

            let state = session.item_state(&key);
            info(format!("{key}: pest={} repair={}", state.pest, state.repair));
        }

        SessionCommand::Note { item, text } => {
            let mut session = load_active(&path)?;
            let key = session.resolve_key(item)?;
            session.set_observation(&key, text.trim());
            session.save_draft(&path)?;
            info(format!("Observation saved for {key}"));
        }

        SessionCommand::Photo { item, file, remove } => {
            let mut session = load_active(&path)?;
            let key = session.resolve_key(item)?;

            match (remove, file) {
                (true, _) => {
                    session.set_photo(&key, None);
                    info(format!("Photo removed from {key}"));
                }
                (false, Some(file)) => {
                    session.set_photo(&key, Some(read_photo(file)?));
                    info(format!("Photo attached to {key}"));
                }
                (false, None) => return Err(AppError::Image("no photo file given".to_string())),
            }
            session.save_draft(&path)?;
        }

        SessionCommand::Show => {
            let session = load_active(&path)?;
            print_session(&session);
        }

        SessionCommand::Finish { user, date } => {
            let session = load_active(&path)?;
            if !session.is_complete() {
                return Err(AppError::IncompleteChecklist {
                    answered: session.answered_count(),
                    expected: session.expected_count(),
                });
            }

            let pool = DbPool::new(&cfg.database)?;
            let user = match user {
                Some(u) => u.trim().to_string(),
                None => LoginLogic::current_user(&pool.conn)?.ok_or(AppError::NoCurrentUser)?,
            };
            let day = resolve_day(date.as_deref())?;

            let id = finish_session(&pool, &session, &user, &day, &path)?;
            success(format!(
                "Inspection of {} / {} on {day} saved (id {id}).",
                session.ship(),
                session.zone()
            ));
        }

        SessionCommand::Abort => {
            if InspectionSession::discard_draft(&path)? {
                success("Inspection in progress discarded.");
            } else {
                warning("No inspection in progress.");
            }
        }
    }

    Ok(())
}
