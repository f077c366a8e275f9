// Loads city map files (vertices, edges, point-of-interest tags) into a
// weighted graph

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::models::{Location, PoiCategory, PointOfInterest, Preferences};
use crate::utils::distance::{euclidean_distance, haversine_distance};
use crate::utils::graph::WeightedGraph;

/// Key of a map vertex: a node id plus its position. Two nodes are the
/// same vertex when their ids match.
#[derive(Debug, Clone, Copy)]
pub struct MapNode {
    pub id: u32,
    pub location: Location,
}

impl MapNode {
    pub fn new(id: u32, location: Location) -> Self {
        Self { id, location }
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Loads a map directory containing `nodes.txt` and `edges.txt` into a
/// graph. Edge weights are derived from the endpoint positions: haversine
/// for real-world maps with latitude/longitude nodes, plain Euclidean for
/// synthetic grids.
pub fn load_map<P: AsRef<Path>>(dir: P, haversine: bool) -> io::Result<WeightedGraph<MapNode>> {
    let dir = dir.as_ref();
    let mut graph = WeightedGraph::new();

    let nodes = read_lines(&dir.join("nodes.txt"))?;
    for parts in nodes {
        if parts.len() >= 3 {
            let id = parts[0].parse::<u32>().unwrap_or(0);
            let x = parts[1].parse::<f64>().unwrap_or(0.0);
            let y = parts[2].parse::<f64>().unwrap_or(0.0);

            graph.add_vertex(MapNode::new(id, Location::new(x, y)));
        }
    }
    println!("Loaded {} map nodes", graph.vertex_count());

    let edges = read_lines(&dir.join("edges.txt"))?;
    let mut edge_count = 0;
    for parts in edges {
        if parts.len() >= 2 {
            let source_id = parts[0].parse::<u32>().unwrap_or(0);
            let dest_id = parts[1].parse::<u32>().unwrap_or(0);

            let (source, dest) = match (
                find_node(&graph, source_id),
                find_node(&graph, dest_id),
            ) {
                (Some(s), Some(d)) => (s, d),
                _ => continue,
            };

            let weight = if haversine {
                haversine_distance(&source.location, &dest.location)
            } else {
                euclidean_distance(&source.location, &dest.location)
            };

            if graph.add_edge(&source, &dest, weight) {
                edge_count += 1;
            }
        }
    }
    println!("Loaded {} roads", edge_count);

    Ok(graph)
}

/// Loads `tags.txt` from a map directory and scores every tagged vertex
/// with the given preferences. The file holds blocks of one category tag,
/// an entry count and that many vertex ids; ids tagged with an
/// unrecognized category are skipped.
pub fn load_pois<P: AsRef<Path>>(
    dir: P,
    graph: &WeightedGraph<MapNode>,
    preferences: &Preferences,
) -> io::Result<Vec<PointOfInterest>> {
    let tokens: Vec<String> = read_lines(&dir.as_ref().join("tags.txt"))?
        .into_iter()
        .flatten()
        .collect();

    let mut pois = Vec::new();
    let mut cursor = 0;

    while cursor + 1 < tokens.len() {
        let category = PoiCategory::from_tag(&tokens[cursor]);
        let entries = tokens[cursor + 1].parse::<usize>().unwrap_or(0);
        cursor += 2;

        for token in tokens.iter().skip(cursor).take(entries) {
            let id = token.parse::<u32>().unwrap_or(0);

            if let (Some(category), Some(vertex)) = (
                category,
                graph.vertices().iter().position(|v| v.info().id == id),
            ) {
                pois.push(PointOfInterest::new(vertex, category, preferences));
            }
        }
        cursor += entries;
    }

    println!("Loaded {} points of interest", pois.len());
    Ok(pois)
}

// Reads a file into whitespace/punctuation-split token rows, skipping the
// leading count line the map files carry
fn read_lines(path: &Path) -> io::Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        let parts: Vec<String> = line
            .split(|c: char| c == '(' || c == ')' || c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        // First line is the entry count
        if index == 0 && parts.len() == 1 && parts[0].parse::<usize>().is_ok() {
            continue;
        }

        rows.push(parts);
    }

    Ok(rows)
}

fn find_node(graph: &WeightedGraph<MapNode>, id: u32) -> Option<MapNode> {
    graph
        .vertices()
        .iter()
        .find(|v| v.info().id == id)
        .map(|v| *v.info())
}
