use crate::data::jurisdictions::short_code;
use crate::data::sessions;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::format_date;

/// Handle the `sessions` command: print the static session table.
pub fn handle() -> AppResult<()> {
    let table = sessions::sessions_2026()?;

    header("Configured legislative sessions");

    for session in table.iter() {
        let code = short_code(&session.name);

        match &session.dates {
            Some(range) => {
                println!(
                    "{:<16} {:<4} {} → {}  {}",
                    session.id,
                    code,
                    format_date(range.start),
                    format_date(range.end),
                    session.description
                );
                for recess in &session.recess {
                    println!(
                        "{:<21} recess {} → {}",
                        "",
                        format_date(recess.start),
                        format_date(recess.end)
                    );
                }
            }
            None => {
                println!("{:<16} {:<4} {}", session.id, code, session.description);
            }
        }
    }

    Ok(())
}
