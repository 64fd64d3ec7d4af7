/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Subcommand;

use super::GlobalArgs;

pub mod barabasi_albert;
pub mod gilbert;

/// Generates random graphs.
#[derive(Subcommand, Debug)]
#[command(name = "gen")]
pub enum SubCommands {
    Gilbert(gilbert::CliArgs),
    BarabasiAlbert(barabasi_albert::CliArgs),
}

pub fn main(global_args: GlobalArgs, subcommand: SubCommands) -> Result<()> {
    match subcommand {
        SubCommands::Gilbert(args) => gilbert::main(global_args, args),
        SubCommands::BarabasiAlbert(args) => barabasi_albert::main(global_args, args),
    }
}
