//! SCAN structural graph clustering
//!
//! Vertices are grouped by the overlap of their closed neighborhoods. Two
//! interchangeable engines are provided: a breadth-first reachability
//! expansion ([`cluster::cluster_sequential`]) and a round-based
//! connected-components merge over core edges ([`cluster::cluster_bulk`],
//! with a rayon-backed variant in [`cluster::cluster_bulk_parallel`]).

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use cluster::{Cluster, Clustering, Engine};
pub use config::{Config, ScanParams};
pub use error::{ScanError, ScanResult};
pub use graph::{Graph, GraphBuilder, VertexId};
