// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use std::rc::Rc;

use poupa::config::Settings;
use poupa::ledger::Ledger;
use poupa::log::init_logging;
use poupa::models::TransactionKind;
use poupa::store::{SqliteStorage, Storage};
use poupa::{cli, commands, db};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = run(&matches);
    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
    }
    result
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => db::db_path()?,
    };
    let conn = db::open_at(&path)?;
    let storage: Rc<dyn Storage> = Rc::new(SqliteStorage::new(conn));
    let settings = Settings::load(&*storage)?;
    let mut ledger = Ledger::load(Rc::clone(&storage))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("income", sub)) => {
            commands::transactions::handle(&mut ledger, TransactionKind::Income, &settings, sub)?
        }
        Some(("expense", sub)) => {
            commands::transactions::handle(&mut ledger, TransactionKind::Expense, &settings, sub)?
        }
        Some(("goal", sub)) => commands::goals::handle(&mut ledger, &settings, sub)?,
        Some(("investment", sub)) => commands::investments::handle(&mut ledger, &settings, sub)?,
        Some(("debt", sub)) => commands::debts::handle(&mut ledger, &settings, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ledger, &settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("config", sub)) => commands::settings::handle(&*storage, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
