// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

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
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("soles")
        .about("Personal finance tracker for Peruvian wallets and banks")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local database"))
        .subcommand(
            Command::new("apps")
                .about("Manage connected financial apps")
                .subcommand(
                    Command::new("setup")
                        .about("Pick the connected apps in one go")
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Connect every supported app"),
                        )
                        .arg(
                            Arg::new("ids")
                                .num_args(0..)
                                .help("Registry ids to connect (e.g. yape plin bcp)"),
                        ),
                )
                .subcommand(Command::new("list").about("List supported apps and their state"))
                .subcommand(
                    Command::new("enable")
                        .about("Connect one app")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("disable")
                        .about("Disconnect one app")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction manually")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .default_value("S/")
                                .help("S/ or $"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("Otro")
                                .help("Yape, Plin, Transferencia, Pago Servicio or Otro"),
                        )
                        .arg(Arg::new("entity").long("entity").required(true))
                        .arg(
                            Arg::new("counterparty")
                                .long("counterparty")
                                .default_value(""),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("code").long("code").help("Operation code"))
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .action(ArgAction::SetTrue)
                                .help("Record as income instead of expense"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Filter by counterparty or entity"),
                        )
                        .arg(Arg::new("type").long("type"))
                        .arg(
                            Arg::new("range")
                                .long("range")
                                .default_value("all")
                                .help("all, today, week or month"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(json_flags(
            Command::new("parse")
                .about("Extract a transaction from a pasted notification")
                .arg(
                    Arg::new("text")
                        .required(true)
                        .help("The notification text (SMS, push or mail body)"),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .action(ArgAction::SetTrue)
                        .help("Store the extracted transaction"),
                ),
        ))
        .subcommand(
            Command::new("stats")
                .about("Aggregated statistics")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expenses and balance"),
                ))
                .subcommand(json_flags(
                    Command::new("by-entity").about("Expenses aggregated per entity"),
                ))
                .subcommand(json_flags(
                    Command::new("daily").about("Expense trend over the last 7 days"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export all transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the local data for problems"))
}
