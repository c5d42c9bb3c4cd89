use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use weighted_astar::prelude::*;

type Point = (usize, usize);

#[derive(Copy, Clone, Debug)]
pub struct Tile {
    cost: isize,
}

#[derive(Clone)]
struct Map {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        let tile_count = width * height;
        Map {
            tiles: vec![Tile { cost: 1 }; tile_count],
            width,
            height,
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        let tile_count = width * height;
        let mut tiles = Vec::with_capacity(tile_count);
        let mut rng = WyRand::new_seed(4);
        for _ in 0..tile_count {
            // 0 = solid, everything else is the cost of the Tile
            let roll = rng.generate_range(0_u64..10) as isize;
            tiles.push(Tile {
                cost: if roll == 0 { -1 } else { roll },
            });
        }
        // keep the corners open so that the benchmarked searches have somewhere to start
        for (x, y) in corners(width, height) {
            tiles[x + y * width].cost = 1;
        }
        Map {
            tiles,
            width,
            height,
        }
    }

    fn get_tile_cost(&self, (x, y): Point) -> isize {
        self.tiles[x + y * self.width].cost
    }

    /// Converts the Tiles into a Graph where walking onto a Tile costs that Tile's cost.
    /// Tiles with a negative cost are solid and can't be walked onto.
    fn to_graph(&self) -> AdjacencyList<Point, usize> {
        let mut graph = AdjacencyList::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                graph.add_node((x, y));
                for (dx, dy) in [(0isize, -1isize), (1, 0), (0, 1), (-1, 0)] {
                    let (nx, ny) = (x as isize + dx, y as isize + dy);
                    if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
                        continue;
                    }
                    let other = (nx as usize, ny as usize);
                    let cost = self.get_tile_cost(other);
                    if cost >= 0 {
                        graph.add_edge((x, y), other, cost as usize);
                    }
                }
            }
        }
        graph
    }
}

fn corners(width: usize, height: usize) -> [Point; 4] {
    [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)]
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug to log every single search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_single_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Path");
    group.sample_size(10);

    // Log to stdout
    init();

    let map_sizes = [64, 256];

    for map_size in map_sizes {
        let (width, height) = (map_size, map_size);
        let uniform = Map::new(width, height).to_graph();
        let random = Map::new_random(width, height).to_graph();
        log::info!(
            "Map Size: ({}, {}), random map has {} walkable edges",
            width,
            height,
            random.edge_count()
        );
        let start = (0, 0);
        let goal = (width - 1, height - 1);

        for (name, graph) in [("Uniform", &uniform), ("Random", &random)] {
            let id = format!("A*, {} map, Manhattan, Map Size: ({}, {})", name, width, height);
            group.bench_function(&id, |b| {
                b.iter(|| find_path(graph, start, goal, &Manhattan))
            });

            let id = format!("A*, {} map, Zero, Map Size: ({}, {})", name, width, height);
            group.bench_function(&id, |b| b.iter(|| find_path(graph, start, goal, &Zero)));
        }

        let id = format!("Dijkstra, Random map, all corners, Map Size: ({}, {})", width, height);
        let goals = corners(width, height);
        group.bench_function(&id, |b| {
            b.iter(|| Pathfinder::default().dijkstra(&random, start, &goals))
        });
    }
}

fn bench_many_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Many Paths");
    group.sample_size(10);

    let (width, height) = (256, 256);
    let graph = Map::new_random(width, height).to_graph();
    let pathfinder = Pathfinder::new(SearchConfig::UNCHECKED.with_size_hint(width * height));

    if pathfinder.find_path(&graph, (0, 0), (width - 1, height - 1), &Manhattan).is_err() {
        log::warn!("opposite corners are not connected, some searches will explore the whole map");
    }

    let points = corners(width, height);
    let queries: Vec<(Point, Point)> = points
        .iter()
        .flat_map(|&a| points.iter().filter(move |&&b| b != a).map(move |&b| (a, b)))
        .collect();

    #[cfg(feature = "parallel")]
    let id = format!("All corner pairs, Parallel, Map Size: ({}, {})", width, height);
    #[cfg(not(feature = "parallel"))]
    let id = format!("All corner pairs, Single Threaded, Map Size: ({}, {})", width, height);

    group.bench_function(&id, |b| {
        b.iter(|| pathfinder.find_paths(&graph, &queries, &Manhattan))
    });
}

criterion_group!(benches, bench_single_path, bench_many_paths);
criterion_main!(benches);
