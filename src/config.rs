use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    #[arg(long, default_value_t = 10)]
    pub cols: usize,

    #[arg(long, default_value_t = 20)]
    pub num_walls: usize,

    /// One of DFS, BFS, Dijkstra, Astar.
    #[arg(long, default_value = "BFS")]
    pub algorithm: String,

    /// Seed for wall placement and endpoint choice; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,
}
