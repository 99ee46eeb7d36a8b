// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Record identifier")
}

fn transaction_command(name: &'static str, noun: &'static str) -> Command {
    Command::new(name)
        .about(format!("Record and review {}s", noun))
        .subcommand(
            Command::new("add")
                .about(format!("Add an {}", noun))
                .arg(Arg::new("description").short('d').long("description").required(true))
                .arg(Arg::new("amount").short('a').long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD, defaults to today"),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("fixed|variable|daily|extraordinary (default variable)"),
                )
                .arg(
                    Arg::new("tags")
                        .long("tags")
                        .help("Comma separated tags, e.g. \"food,work\""),
                )
                .arg(
                    Arg::new("recurring")
                        .long("recurring")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about(format!("List {}s", noun))
                .arg(Arg::new("month").long("month").help("YYYY-MM"))
                .arg(Arg::new("category").short('c').long("category")),
        ))
        .subcommand(
            Command::new("rm")
                .about(format!("Remove an {}", noun))
                .arg(id_arg()),
        )
}

pub fn build_cli() -> Command {
    Command::new("poupa")
        .version(crate_version!())
        .about("Personal finance tracker: incomes, expenses, goals, investments and debts")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Path to the database file (overrides POUPA_DB)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(transaction_command("income", "income"))
        .subcommand(transaction_command("expense", "expense"))
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("name").short('n').long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Target date YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List goals")))
                .subcommand(
                    Command::new("deposit")
                        .about("Put money into a goal")
                        .arg(id_arg())
                        .arg(
                            Arg::new("amount")
                                .short('a')
                                .long("amount")
                                .required(true)
                                .allow_negative_numbers(true),
                        ),
                )
                .subcommand(Command::new("rm").about("Remove a goal").arg(id_arg())),
        )
        .subcommand(
            Command::new("investment")
                .about("Investments")
                .subcommand(
                    Command::new("add")
                        .about("Add an investment")
                        .arg(
                            Arg::new("type")
                                .short('t')
                                .long("type")
                                .required(true)
                                .help("fixed-income|stocks|real-estate-funds|crypto"),
                        )
                        .arg(Arg::new("name").short('n').long("name").required(true))
                        .arg(Arg::new("value").long("value").required(true)),
                )
                .subcommand(json_flags(Command::new("list").about("List investments")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an investment")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("debt")
                .about("Debts and installment plans")
                .subcommand(
                    Command::new("add")
                        .about("Add a debt")
                        .arg(Arg::new("name").short('n').long("name").required(true))
                        .arg(Arg::new("total").long("total").required(true))
                        .arg(
                            Arg::new("installments")
                                .long("installments")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("installment_value")
                                .long("installment-value")
                                .required(true),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List debts")))
                .subcommand(Command::new("rm").about("Remove a debt").arg(id_arg())),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Monthly statistics, alerts and goal progress")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Reference date YYYY-MM-DD, defaults to today"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export incomes and expenses")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").short('o').long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("set")
                        .about("Change a setting")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("list").about("Show settings"))
                .subcommand(Command::new("reset").about("Restore default settings")),
        )
}
