use trip_planner::models::{PoiCategory, PointOfInterest, Preferences, Score};
use trip_planner::utils::graph::WeightedGraph;
use trip_planner::utils::reduction::ReductionStrategy;
use trip_planner::{plan_trip, SearchStrategy};

// Worked example: a small city with twelve locations, four of them worth
// a visit
fn init_city_graph() -> (WeightedGraph<char>, Vec<PointOfInterest>, Vec<Score>) {
    let mut graph = WeightedGraph::new();

    for c in 'a'..='k' {
        graph.add_vertex(c);
    }
    graph.add_vertex('s');

    graph.add_edge(&'a', &'s', 4.0);
    graph.add_edge(&'a', &'i', 5.0);
    graph.add_edge(&'b', &'c', 4.0);
    graph.add_edge(&'b', &'s', 3.0);
    graph.add_edge(&'b', &'g', 7.0);
    graph.add_edge(&'c', &'b', 4.0);
    graph.add_edge(&'c', &'e', 4.0);
    graph.add_edge(&'d', &'s', 2.0);
    graph.add_edge(&'d', &'e', 3.0);
    graph.add_edge(&'e', &'d', 3.0);
    graph.add_edge(&'e', &'i', 3.0);
    graph.add_edge(&'e', &'k', 2.0);
    graph.add_edge(&'e', &'j', 2.0);
    graph.add_edge(&'f', &'h', 1.0);
    graph.add_edge(&'f', &'j', 1.0);
    graph.add_edge(&'f', &'k', 2.0);
    graph.add_edge(&'g', &'c', 2.0);
    graph.add_edge(&'g', &'h', 3.0);
    graph.add_edge(&'h', &'f', 2.0);
    graph.add_edge(&'h', &'g', 2.0);
    graph.add_edge(&'i', &'e', 2.0);
    graph.add_edge(&'j', &'e', 2.0);
    graph.add_edge(&'j', &'f', 2.0);
    graph.add_edge(&'k', &'f', 3.0);
    graph.add_edge(&'s', &'a', 1.0);
    graph.add_edge(&'s', &'b', 3.0);
    graph.add_edge(&'s', &'c', 5.0);
    graph.add_edge(&'s', &'d', 3.0);

    // Visitor preferences decide how much each kind of stop is worth
    let mut preferences = Preferences::new();
    preferences.set(PoiCategory::Information, 1.0);
    preferences.set(PoiCategory::Viewpoint, 3.0);
    preferences.set(PoiCategory::Attraction, 4.0);
    preferences.set(PoiCategory::Museum, 2.0);

    let tagged = [
        ('b', PoiCategory::Information),
        ('h', PoiCategory::Viewpoint),
        ('i', PoiCategory::Attraction),
        ('j', PoiCategory::Museum),
    ];

    let mut pois = Vec::new();
    let mut scores = Vec::new();
    for (info, category) in tagged {
        let vertex = graph
            .find_vertex(&info)
            .expect("tagged vertex missing from the city graph");
        let poi = PointOfInterest::new(vertex, category, &preferences);
        scores.push(poi.score);
        pois.push(poi);
    }

    (graph, pois, scores)
}

fn main() {
    let (graph, pois, scores) = init_city_graph();

    let start = 's';
    let finish = 'f';
    let budget = 12.0;

    println!("Planning a trip from {} to {} with budget {}", start, finish, budget);
    println!(
        "{} points of interest: {:?}",
        pois.len(),
        pois.iter()
            .map(|poi| (*graph.vertex(poi.vertex).info(), poi.score))
            .collect::<Vec<_>>()
    );

    let combinations = [
        ("Dijkstra + Branch and Bound", ReductionStrategy::Dijkstra, SearchStrategy::BranchAndBound),
        ("Dijkstra + Nearest Neighbour", ReductionStrategy::Dijkstra, SearchStrategy::NearestNeighbour),
        ("Floyd-Warshall + Branch and Bound", ReductionStrategy::FloydWarshall, SearchStrategy::BranchAndBound),
        ("Floyd-Warshall + Nearest Neighbour", ReductionStrategy::FloydWarshall, SearchStrategy::NearestNeighbour),
    ];

    let mut last_plan = None;

    for (label, reduction, search) in combinations {
        println!("\n=== {} ===", label);

        let started = std::time::Instant::now();
        let plan = plan_trip(&graph, &pois, &scores, &start, &finish, budget, reduction, search);
        let elapsed = started.elapsed();

        if plan.is_empty() {
            println!("No trip within the budget exists.");
            continue;
        }

        let route: Vec<String> = plan.stops.iter().map(|c| c.to_string()).collect();
        println!("Route: {}", route.join(" - "));
        println!(
            "Path score: {} | Path cost: {} | found in {:.2?}",
            plan.total_score, plan.total_cost, elapsed
        );

        last_plan = Some(plan);
    }

    // Dump the last plan for downstream tooling
    if let Some(plan) = last_plan {
        match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("\n{}", json),
            Err(e) => eprintln!("Failed to serialize the plan: {}", e),
        }
    }
}
