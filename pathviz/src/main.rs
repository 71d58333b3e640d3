//! pathviz: animate BFS, DFS, Dijkstra or A* on a tile grid.

use clap::Parser;

use pathviz_lib::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    run(&args)
}
