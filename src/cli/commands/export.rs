use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
    } = cmd
    {
        let pool = store::open(cfg)?;
        ExportLogic::export(&pool, *table, *format, file, *force)?;
    }

    Ok(())
}
