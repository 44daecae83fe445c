//! Line-oriented edge list loading

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::{Graph, GraphBuilder};

/// Build a graph from an edge list file
pub fn load_edge_list(path: impl AsRef<Path>, directed: bool) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    // Check if the file exists
    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let graph = parse_edge_list(BufReader::new(file), directed)?;

    log::info!(
        "Loaded {} graph with {} vertices and {} arcs",
        if directed { "directed" } else { "undirected" },
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Build a graph from edge list text.
///
/// Each line's first two whitespace-separated tokens name an edge; anything
/// after them is ignored. Lines with fewer than two tokens are skipped.
pub fn parse_edge_list<R: BufRead>(reader: R, directed: bool) -> Result<Graph> {
    let mut builder = GraphBuilder::default().directed(directed);
    let mut skipped = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_no + 1))?;
        let mut tokens = line.split_whitespace();

        match (tokens.next(), tokens.next()) {
            (Some(src), Some(dst)) => builder.add_edge(src, dst),
            _ => {
                skipped += 1;
                log::debug!("Skipping line {}: fewer than two tokens", line_no + 1);
            }
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} malformed lines", skipped);
    }

    Ok(builder.build())
}
