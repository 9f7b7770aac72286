use best_first_search::prelude::*;
use log::info;
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SIZE: usize = 2000;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	reference_route();
	random_routes();
}

/// The 13 Locations from the textbook example, with the straight-line distance to G as Heuristic
fn reference_route() {
	let mut graph = Graph::new();

	graph.connect("S", "A", 2);
	graph.connect("S", "F", 1);
	graph.connect("S", "K", 2);
	graph.connect("A", "B", 2);
	graph.connect("B", "C", 2);
	graph.connect("B", "G", 3);
	graph.connect("C", "D", 2);
	graph.connect("D", "E", 1);
	graph.connect("D", "G", 5);
	graph.connect("E", "D", 1);
	graph.connect("F", "H", 1);
	graph.connect("H", "I", 1);
	graph.connect("I", "J", 1);
	graph.connect("J", "G", 1);
	graph.connect("K", "L", 1);
	graph.connect("L", "K", 1);
	graph.connect("G", "D", 5);
	graph.connect("G", "B", 3);
	graph.connect("G", "J", 1);

	graph.make_undirected();

	let heuristics: HashMap<&str, Cost> = [
		("S", 4),
		("A", 2),
		("B", 3),
		("C", 4),
		("D", 5),
		("E", 6),
		("F", 4),
		("H", 3),
		("I", 2),
		("J", 1),
		("K", 5),
		("L", 6),
		("G", 0),
	]
	.into_iter()
	.collect();

	match best_first_search(&graph, &heuristics, "S", "G") {
		Ok(Some(path)) => {
			let steps: Vec<String> = path.iter().map(|step| step.to_string()).collect();
			println!("{:?}", steps);
		}
		Ok(None) => println!("None"),
		Err(err) => println!("error: {}", err),
	}
	println!();
}

/// Compares greedy and A* Routes on random Graphs
fn random_routes() {
	let mut rng = rand::thread_rng();

	let mut results: HashMap<&str, Vec<(u128, Option<Cost>)>> =
		[("greedy", vec![]), ("a_star", vec![])].into_iter().collect();

	for _ in 0..5 {
		// every Node gets a position, Edges connect close Nodes and the Heuristic is the
		// Manhattan distance, so that it never overestimates
		let positions: Vec<(usize, usize)> = (0..SIZE)
			.map(|_| (rng.gen_range(0..1000), rng.gen_range(0..1000)))
			.collect();
		let distance = |a: usize, b: usize| {
			let (pa, pb) = (positions[a], positions[b]);
			pa.0.abs_diff(pb.0) + pa.1.abs_diff(pb.1)
		};

		let mut graph = Graph::undirected();
		for a in 0..SIZE {
			for _ in 0..3 {
				let b = rng.gen_range(0..SIZE);
				if distance(a, b) < 300 {
					graph.connect(&a.to_string(), &b.to_string(), distance(a, b));
				}
			}
		}
		info!(
			"finished Graph gen: {} nodes, {} edges",
			graph.node_count(),
			graph.edge_count()
		);

		let goal = rng.gen_range(0..SIZE);
		let heuristics: HashMap<String, Cost> = (0..SIZE)
			.map(|node| (node.to_string(), distance(node, goal)))
			.collect();
		let goal = goal.to_string();
		let starts: Vec<String> = (0..10).map(|_| rng.gen_range(0..SIZE).to_string()).collect();

		for (name, config) in [("greedy", SearchConfig::GREEDY), ("a_star", SearchConfig::A_STAR)] {
			for start in starts.iter() {
				let start_time = Instant::now();
				let path = best_first_search_with(&graph, &heuristics, start, &goal, &config);
				let dt = duration_as_nanos(Instant::now() - start_time);
				let cost = match path {
					Ok(path) => path.map(|p| p.cost()),
					Err(err) => {
						println!("{}: {}", name, err);
						None
					}
				};
				if let Some(entries) = results.get_mut(name) {
					entries.push((dt, cost));
				}
			}
		}

		let start_time = Instant::now();
		let batch = search_many(&graph, &heuristics, &starts, &goal, &SearchConfig::A_STAR);
		info!(
			"batch of {} A* searches: {} found in {}ms",
			batch.len(),
			batch.iter().filter(|r| matches!(r, Ok(Some(_)))).count(),
			(Instant::now() - start_time).as_millis()
		);
	}

	for (name, entries) in results.iter() {
		let found: Vec<&(u128, Option<Cost>)> =
			entries.iter().filter(|(_, cost)| cost.is_some()).collect();
		let total_time: u128 = entries.iter().map(|(dt, _)| dt).sum();
		let total_cost: Cost = found.iter().filter_map(|(_, cost)| *cost).sum();
		println!(
			"{}: {}/{} Routes found, total Cost {}, avg time {}µs",
			name,
			found.len(),
			entries.len(),
			total_cost,
			total_time / entries.len().max(1) as u128 / 1000
		);
	}
}

fn duration_as_nanos(d: Duration) -> u128 {
	d.as_secs() as u128 * 1_000_000_000 + d.subsec_nanos() as u128
}
