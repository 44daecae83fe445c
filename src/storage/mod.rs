//! Results reporting and persistence module

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use serde_json::{json, to_string_pretty};

use crate::cluster::metrics::summarize;
use crate::cluster::{Clustering, Engine};
use crate::graph::Graph;

/// Write one `<id>:<cluster>` line per labeled vertex, ordered by identity
pub fn write_assignment<W: Write>(writer: &mut W, graph: &Graph, clustering: &Clustering) -> Result<()> {
    for (v, cluster) in clustering
        .assignment
        .iter()
        .sorted_by(|a, b| graph.label(*a.0).cmp(graph.label(*b.0)))
    {
        writeln!(writer, "{}:{}", graph.label(*v), cluster)?;
    }
    Ok(())
}

/// Save a clustering run to `output_dir/<engine>/`
pub fn save_results(graph: &Graph, clustering: &Clustering, engine: Engine, output_dir: &str) -> Result<()> {
    let engine_dir = Path::new(output_dir).join(engine.name());
    log::info!("Saving {} results to {}", engine, engine_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(&engine_dir)?;

    save_summary(graph, clustering, engine, &engine_dir)?;
    save_clusters(graph, clustering, &engine_dir)?;

    let mut file = BufWriter::new(File::create(engine_dir.join("assignment.txt"))?);
    write_assignment(&mut file, graph, clustering)?;
    file.flush()?;

    log::info!("Results saved successfully");

    Ok(())
}

fn save_summary(graph: &Graph, clustering: &Clustering, engine: Engine, dir: &Path) -> Result<()> {
    log::debug!("Saving summary information");

    let summary = json!({
        "engine": engine,
        "stats": summarize(graph, clustering),
    });

    let mut file = File::create(dir.join("summary.json"))?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

fn save_clusters(graph: &Graph, clustering: &Clustering, dir: &Path) -> Result<()> {
    log::debug!("Saving individual cluster information");

    let clusters = clustering.clusters(graph);
    let clusters_json = json!({
        "clusters": clusters.iter().map(|c| {
            json!({
                "id": c.id,
                "size": c.size,
                "density": c.density,
                "members": c.members.iter().map(|&v| graph.label(v)).collect::<Vec<_>>(),
            })
        }).collect::<Vec<_>>()
    });

    let mut file = File::create(dir.join("clusters.json"))?;
    file.write_all(to_string_pretty(&clusters_json)?.as_bytes())?;

    Ok(())
}
