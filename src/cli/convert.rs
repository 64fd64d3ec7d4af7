/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{save_graph, GlobalArgs, LoadArgs};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "convert", about = "Converts an edge list between the CSV and TXT formats (formats are chosen by the extensions).", long_about = None)]
pub struct CliArgs {
    #[clap(flatten)]
    pub load: LoadArgs,

    /// The destination edge list.
    pub dst: std::path::PathBuf,
}

pub fn main(_global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = args.load.load()?;
    save_graph(&graph, &args.dst)?;
    log::info!("Saved graph to {}", args.dst.display());
    Ok(())
}
