/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reading and writing edge lists.
//!
//! Two textual formats are supported, selected by the extension of the file:
//!
//! - CSV (`.csv`): a header line `id_1,id_2`, followed by one edge per line
//!   with endpoints separated by a comma; the header line is skipped on read
//!   whatever its content, and blank lines are ignored;
//! - TXT (`.txt`): one edge per line with endpoints separated by whitespace
//!   (a TAB on write); everything following a `#` is a comment, and blank
//!   lines are ignored. A header comment `# from<TAB>to` is written first.
//!
//! Graphs are undirected, so on write each edge is emitted once as a pair
//! `a b` with `a <= b`.
//!
//! Readers and writers work on any [`BufRead`] or [`Write`]; [`load`] and
//! [`save`] are path-based wrappers.
//!
//! # Examples
//!
//! ```
//! use graphstat::io::{EdgeListFormat, LoadPolicy};
//! use graphstat::traits::RandomAccessGraph;
//!
//! let csv = "id_1,id_2\n0,1\n0,2\n1,2\n";
//! let graph = EdgeListFormat::Csv.read(csv.as_bytes(), LoadPolicy::Growing)?;
//! assert_eq!(graph.num_nodes(), 3);
//! assert_eq!(graph.num_edges(), 3);
//!
//! let mut txt = Vec::new();
//! EdgeListFormat::Txt.write(&graph, &mut txt)?;
//! assert_eq!(String::from_utf8(txt)?, "# from\tto\n0\t1\n0\t2\n1\t2\n");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::graphs::UndirectedGraph;
use crate::traits::RandomAccessGraph;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing edge lists.
#[derive(Error, Debug)]
pub enum EdgeListError {
    /// The extension of the file does not correspond to a known format.
    #[error("Unsupported edge-list format for {path:?}: the extension must be .csv or .txt")]
    UnsupportedFormat { path: PathBuf },

    /// A line could not be parsed as an edge.
    #[error("Line {line}: {reason}")]
    Parse {
        /// The line number, starting from 1.
        line: usize,
        reason: String,
    },

    /// The nodes needed by an edge could not be allocated.
    #[error("Line {line}: cannot allocate {num_nodes} nodes")]
    TooManyNodes {
        /// The line number, starting from 1.
        line: usize,
        num_nodes: usize,
    },

    /// An I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// How edges are inserted into a graph being loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Nodes are added as needed
    /// ([`add_edge_growing`](UndirectedGraph::add_edge_growing)).
    #[default]
    Growing,
    /// The graph has the given number of nodes, and edges with an endpoint
    /// out of range are dropped
    /// ([`add_edge_bounded`](UndirectedGraph::add_edge_bounded)).
    Bounded(usize),
}

impl LoadPolicy {
    fn new_graph(self) -> UndirectedGraph {
        match self {
            LoadPolicy::Growing => UndirectedGraph::new(),
            LoadPolicy::Bounded(n) => UndirectedGraph::empty(n),
        }
    }

    fn insert(
        self,
        graph: &mut UndirectedGraph,
        line: usize,
        (a, b): (usize, usize),
    ) -> Result<(), EdgeListError> {
        match self {
            LoadPolicy::Growing => graph.try_add_edge_growing(a, b).map_err(|_| {
                EdgeListError::TooManyNodes {
                    line,
                    num_nodes: a.max(b).saturating_add(1),
                }
            }),
            LoadPolicy::Bounded(_) => {
                graph.add_edge_bounded(a, b);
                Ok(())
            }
        }
    }
}

/// The supported edge-list formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListFormat {
    /// Comma-separated values with a header line.
    Csv,
    /// Whitespace-separated values with `#` comments.
    Txt,
}

impl EdgeListFormat {
    /// Returns the format associated with the extension of `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EdgeListError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Ok(EdgeListFormat::Csv),
            Some("txt") => Ok(EdgeListFormat::Txt),
            _ => Err(EdgeListError::UnsupportedFormat {
                path: path.to_owned(),
            }),
        }
    }

    /// Reads a graph in this format.
    pub fn read(
        self,
        reader: impl BufRead,
        policy: LoadPolicy,
    ) -> Result<UndirectedGraph, EdgeListError> {
        match self {
            EdgeListFormat::Csv => read_csv(reader, policy),
            EdgeListFormat::Txt => read_txt(reader, policy),
        }
    }

    /// Writes a graph in this format.
    pub fn write(self, graph: &UndirectedGraph, writer: impl Write) -> Result<(), EdgeListError> {
        match self {
            EdgeListFormat::Csv => write_csv(graph, writer),
            EdgeListFormat::Txt => write_txt(graph, writer),
        }
    }
}

/// Parses the two endpoints of an edge from the fields of a line.
fn parse_edge<'a>(
    line: usize,
    mut fields: impl Iterator<Item = &'a str>,
) -> Result<(usize, usize), EdgeListError> {
    let mut endpoint = |name: &str| -> Result<usize, EdgeListError> {
        let field = fields.next().ok_or_else(|| EdgeListError::Parse {
            line,
            reason: format!("missing {} endpoint", name),
        })?;
        field.trim().parse().map_err(|err| EdgeListError::Parse {
            line,
            reason: format!("cannot parse {} endpoint {:?}: {}", name, field, err),
        })
    };
    let a = endpoint("first")?;
    let b = endpoint("second")?;
    if let Some(extra) = fields.next() {
        return Err(EdgeListError::Parse {
            line,
            reason: format!("unexpected field {:?}", extra),
        });
    }
    Ok((a, b))
}

/// Reads a CSV edge list, skipping the header line.
pub fn read_csv(reader: impl BufRead, policy: LoadPolicy) -> Result<UndirectedGraph, EdgeListError> {
    let mut graph = policy.new_graph();
    for (line_num, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let edge = parse_edge(line_num + 1, line.split(','))?;
        policy.insert(&mut graph, line_num + 1, edge)?;
    }
    Ok(graph)
}

/// Reads a whitespace-separated edge list with `#` comments.
pub fn read_txt(reader: impl BufRead, policy: LoadPolicy) -> Result<UndirectedGraph, EdgeListError> {
    let mut graph = policy.new_graph();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => &line,
        };
        if content.trim().is_empty() {
            continue;
        }
        let edge = parse_edge(line_num + 1, content.split_whitespace())?;
        policy.insert(&mut graph, line_num + 1, edge)?;
    }
    Ok(graph)
}

/// Writes a graph as a CSV edge list.
pub fn write_csv(graph: &UndirectedGraph, mut writer: impl Write) -> Result<(), EdgeListError> {
    writeln!(writer, "id_1,id_2")?;
    for (a, b) in graph.edges() {
        writeln!(writer, "{},{}", a, b)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a graph as a TAB-separated edge list.
pub fn write_txt(graph: &UndirectedGraph, mut writer: impl Write) -> Result<(), EdgeListError> {
    writeln!(writer, "# from\tto")?;
    for (a, b) in graph.edges() {
        writeln!(writer, "{}\t{}", a, b)?;
    }
    writer.flush()?;
    Ok(())
}

/// Loads a graph from a file, choosing the format by its extension.
pub fn load(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<UndirectedGraph, EdgeListError> {
    let path = path.as_ref();
    let format = EdgeListFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    let mut graph = format.read(reader, policy)?;
    graph.shrink_to_fit();
    log::info!(
        "Loaded {} nodes and {} edges from {}",
        graph.num_nodes(),
        graph.num_edges(),
        path.display()
    );
    Ok(graph)
}

/// Saves a graph to a file, choosing the format by its extension.
///
/// The format is checked before creating the file.
pub fn save(graph: &UndirectedGraph, path: impl AsRef<Path>) -> Result<(), EdgeListError> {
    let path = path.as_ref();
    let format = EdgeListFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);
    format.write(graph, writer)
}
