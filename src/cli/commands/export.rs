use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::RecordFilter;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        ship,
        zone,
        date,
        photos,
        force,
    } = cmd
    {
        let filter = RecordFilter::from_parts(*ship, *zone, date.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let n = ExportLogic::export(&pool, *format, file, &filter, *photos, *force)?;
        info(format!("{n} inspection(s) exported as {}", format.as_str()));
    }
    Ok(())
}
