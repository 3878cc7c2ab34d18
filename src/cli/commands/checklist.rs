use crate::core::registry::checklist;
use crate::errors::AppResult;
use crate::models::Zone;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};

/// Print sections and numbered items. Numbers match `session answer <N>`.
pub fn handle(zone: Option<Zone>) -> AppResult<()> {
    let zones = match zone {
        Some(z) => vec![z],
        None => Zone::ALL.to_vec(),
    };

    for z in zones {
        header(z.name());
        let mut n = 0;
        for section in checklist(z) {
            println!("{CYAN}{}{RESET}", section.name);
            for item in section.items {
                n += 1;
                println!("  {n:>3}. {item}");
            }
        }
        println!();
    }

    Ok(())
}
