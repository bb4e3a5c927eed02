//! Hexagon demo: lays out the hexagon template on a centred tile, draws a
//! six-pointed star as pattern lines and prints the compound path.
//!
//! Usage:
//! ```text
//! cargo run --example hexagon
//! RUST_LOG=girih=trace cargo run --example hexagon
//! cargo run --example hexagon -- --json   # print the scene snapshot instead
//! ```

use girih::construction::ConstructionGraph;
use girih::geometry::Tile;
use girih::operations::creation::ExtendedLine;
use girih::operations::template::HexagonTemplate;
use girih::GirihError;

/// Star points as indices into the inscribed circle's twelve points.
const STAR: [[usize; 3]; 2] = [[1, 9, 6], [5, 10, 2]];

fn main() -> Result<(), GirihError> {
    // Default: WARN for everything, INFO for girih.
    // Override with RUST_LOG env var (e.g. RUST_LOG=girih=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("girih=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let tile = Tile::centered(400.0, 400.0, 20.0)?;
    let mut graph = ConstructionGraph::new();
    let frame = HexagonTemplate::new(tile).execute(&mut graph)?;

    // Extend the upper-left side across the whole tile.
    let side = graph.line(frame.sides[1])?;
    let (start, end) = (*side.start(), *side.end());
    ExtendedLine::new(tile, start, end).execute(&mut graph)?;

    for triangle in STAR {
        for k in 0..3 {
            let a = graph.intersection_point_at(frame.circle, triangle[k])?;
            let b = graph.intersection_point_at(frame.circle, triangle[(k + 1) % 3])?;
            graph.add_pattern_line_through(a, b)?;
        }
    }

    tracing::info!(
        elements = graph.element_count(),
        points = graph.point_count(),
        pattern_lines = graph.pattern_lines().len(),
        "construction finished"
    );

    if std::env::args().any(|arg| arg == "--json") {
        match serde_json::to_string_pretty(&graph.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(%err, "failed to encode snapshot"),
        }
    } else {
        println!("{}", graph.full_pattern_path());
    }
    Ok(())
}
