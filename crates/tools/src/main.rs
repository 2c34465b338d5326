use std::env;
use std::fs;
use std::path::PathBuf;

use charts::{ChartArea, DashboardCharts, LabelOverlay, PointLabel};
use history::{FileHistoryStore, HistoryStore, MAX_RECENT_SEARCHES};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "charts" => cmd_charts(args),
        "labels" => cmd_labels(args),
        "search" => cmd_search(args),
        "history" => cmd_history(args),
        _ => Err(usage()),
    }
}

fn cmd_charts(args: Vec<String>) -> Result<(), String> {
    // riverwatch charts <out_dir>
    if args.len() != 1 {
        return Err(usage());
    }
    let out_dir = PathBuf::from(&args[0]);
    fs::create_dir_all(&out_dir).map_err(|e| format!("create {out_dir:?}: {e}"))?;

    for (id, config) in DashboardCharts::default().configs() {
        let payload = config.to_json_pretty().map_err(|e| format!("json: {e}"))?;
        let path = out_dir.join(format!("{}.json", id.canvas_id()));
        fs::write(&path, payload).map_err(|e| format!("write {path:?}: {e}"))?;
        tracing::info!(chart = id.canvas_id(), path = %path.display(), "chart config written");
        println!("{}", path.display());
    }
    Ok(())
}

fn cmd_labels(args: Vec<String>) -> Result<(), String> {
    // riverwatch labels <bottom> <x:y:value>...
    if args.len() < 2 {
        return Err(usage());
    }
    let bottom: f64 = args[0]
        .parse()
        .map_err(|_| format!("invalid bottom: {}", args[0]))?;

    let mut values = Vec::with_capacity(args.len() - 1);
    let mut points = Vec::with_capacity(args.len() - 1);
    for arg in &args[1..] {
        let (point, value) = parse_point(arg)?;
        points.push(point);
        values.push(value);
    }

    let area = ChartArea {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom,
    };
    for label in LabelOverlay::default().layout(&values, &points, area) {
        println!("{}", format_label(&label));
    }
    Ok(())
}

fn parse_point(arg: &str) -> Result<([f64; 2], f64), String> {
    let parts: Vec<&str> = arg.split(':').collect();
    let [x, y, value] = parts.as_slice() else {
        return Err(format!("expected x:y:value, got {arg}"));
    };
    let num = |s: &str| s.parse::<f64>().map_err(|_| format!("invalid number in {arg}: {s}"));
    Ok(([num(*x)?, num(*y)?], num(*value)?))
}

fn format_label(label: &PointLabel) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        label.index,
        label.align.as_str(),
        label.x,
        label.y,
        label.text
    )
}

fn cmd_search(args: Vec<String>) -> Result<(), String> {
    // riverwatch search <history.json> <term>
    if args.len() != 2 {
        return Err(usage());
    }
    let mut store = FileHistoryStore::new(&args[0]);
    let searches = store
        .record(&args[1], MAX_RECENT_SEARCHES)
        .map_err(|e| e.to_string())?;
    for term in searches.iter() {
        println!("{term}");
    }
    Ok(())
}

fn cmd_history(args: Vec<String>) -> Result<(), String> {
    // riverwatch history <history.json>
    if args.len() != 1 {
        return Err(usage());
    }
    let searches = FileHistoryStore::new(&args[0])
        .load()
        .map_err(|e| e.to_string())?;
    if searches.is_empty() {
        println!("No recent searches");
    }
    for term in searches.iter() {
        println!("{term}");
    }
    Ok(())
}

fn usage() -> String {
    let exe = env::args().next().unwrap_or_else(|| "riverwatch".to_string());
    format!(
        "Usage:\n  {exe} charts <out_dir>\n  {exe} labels <bottom> <x:y:value> [x:y:value ...]\n  {exe} search <history.json> <term>\n  {exe} history <history.json>\n\nNotes:\n- `charts` writes one Chart.js config per dashboard canvas.\n- `labels` prints index, alignment, x, y and text of each river-height label.\n- The history file holds the same JSON array the browser keeps under `recentSearches`.\n- Set RUST_LOG=debug for store diagnostics.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_triples() {
        assert_eq!(parse_point("10:40.5:1.2"), Ok(([10.0, 40.5], 1.2)));
        assert!(parse_point("10:40").is_err());
        assert!(parse_point("a:1:2").is_err());
    }

    #[test]
    fn label_lines_are_tab_separated() {
        let label = PointLabel {
            index: 6,
            text: "1.7m".to_string(),
            x: 285.0,
            y: 110.0,
            align: charts::TextAlign::Right,
        };
        assert_eq!(format_label(&label), "6\tright\t285\t110\t1.7m");
    }

    #[test]
    fn search_then_history_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let p = path.to_string_lossy().to_string();
        for term in ["Paris", "London", "Paris"] {
            cmd_search(vec![p.clone(), term.to_string()]).unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"["Paris","London"]"#);
        cmd_history(vec![p]).unwrap();
    }

    #[test]
    fn charts_writes_one_file_per_canvas() {
        let dir = tempfile::tempdir().unwrap();
        cmd_charts(vec![dir.path().to_string_lossy().to_string()]).unwrap();
        for name in ["windLineChart", "windBarChart", "sunArcChart", "riverHeightChart"] {
            assert!(dir.path().join(format!("{name}.json")).exists(), "{name}");
        }
    }
}
