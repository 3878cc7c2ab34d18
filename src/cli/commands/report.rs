use crate::ai::{GeminiGenerator, NarrativeClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{
    NO_AI_NOTICE, ReportLogic, default_report_path, find_inspection, narrate, unavailable_notice,
};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::resolve_day;
use crate::utils::path::open_with_default_app;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        ship,
        zone,
        date,
        file,
        no_ai,
        open,
    } = cmd
    {
        let day = resolve_day(date.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;
        let record = find_inspection(&pool, *ship, *zone, &day)?;

        let narrative = if *no_ai {
            NO_AI_NOTICE.to_string()
        } else {
            match GeminiGenerator::from_config(cfg) {
                Ok(generator) => {
                    info("Requesting narrative evaluation…");
                    let mut client = NarrativeClient::new(generator);
                    narrate(&mut client, &record)
                }
                Err(e) => {
                    warning(format!("Narrative generation skipped: {e}"));
                    unavailable_notice(&e)
                }
            }
        };

        let output = match file {
            Some(f) => PathBuf::from(f),
            None => default_report_path(&cfg.reports_path(), *ship, *zone, &day),
        };
        let header = cfg.header_image_path();

        let path = ReportLogic::render(
            &pool.conn,
            &record,
            &narrative,
            header.as_deref(),
            &output,
        )?;
        success(format!("Report written to {}", path.display()));

        if *open && let Err(e) = open_with_default_app(&path) {
            warning(format!("Could not open the report: {e}"));
        }
    }
    Ok(())
}
