use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{hint, success};

pub fn handle(email: &str, password: &str, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let role = LoginLogic::login(&pool.conn, email, password)?;

    success(format!(
        "Logged in as {} ({})",
        email.trim().to_lowercase(),
        role.to_db_str()
    ));
    hint(format!("Next: rshipaudit {}", role.landing_command()));
    Ok(())
}
