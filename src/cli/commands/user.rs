use crate::cli::parser::UserCommand;
use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(action: &UserCommand, cfg: &Config) -> AppResult<()> {
    match action {
        UserCommand::Add {
            email,
            password,
            role,
        } => {
            let pool = DbPool::new(&cfg.database)?;
            LoginLogic::register(&pool.conn, email, password, *role)?;
            success(format!(
                "User {} created ({})",
                email.trim().to_lowercase(),
                role.to_db_str()
            ));
        }
    }
    Ok(())
}
