use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bst_trace::{Operation, PlaybackConfig, Run, TraversalOrder, Visualizer};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bst-trace", about = "Step-by-step traces of binary search tree operations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute operations and print the trace of each.
    Run {
        /// Operations such as `insert 5`, `i5`, `search 3`, `delete 7`, `inorder`, `clear`.
        operations: Vec<String>,
        /// Script file with one operation per line (`#` starts a comment).
        #[arg(long)]
        script: Option<PathBuf>,
        /// Default delay between steps in milliseconds.
        #[arg(long, default_value_t = bst_trace::playback::DEFAULT_SPEED_MS)]
        speed_ms: u64,
        /// Replay each trace in real time instead of printing it at once.
        #[arg(long)]
        animate: bool,
        /// Print a content fingerprint after each trace.
        #[arg(long)]
        fingerprint: bool,
        /// Emit each run as JSON (requires the `visualize` feature).
        #[arg(long)]
        json: bool,
    },
    /// Build the tree [5, 3, 8, 1, 4, 7, 9] and trace all three traversals.
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            operations,
            script,
            speed_ms,
            animate,
            fingerprint,
            json,
        } => {
            let mut ops = parse_operations(&operations)?;
            if let Some(path) = script {
                ops.extend(read_script(&path)?);
            }
            let options = PrintOptions {
                animate,
                fingerprint,
                json,
            };
            run_operations(ops, speed_ms, &options)?
        }
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

#[derive(Debug)]
struct PrintOptions {
    animate: bool,
    fingerprint: bool,
    json: bool,
}

fn parse_operations(raw: &[String]) -> Result<Vec<Operation>> {
    raw.iter()
        .map(|text| {
            text.parse::<Operation>()
                .with_context(|| format!("invalid operation '{}'", text))
        })
        .collect()
}

fn read_script(path: &PathBuf) -> Result<Vec<Operation>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open script {}", path.display()))?,
    );
    let mut ops = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let op = text
            .parse::<Operation>()
            .with_context(|| format!("{}:{}: invalid operation", path.display(), line_no + 1))?;
        ops.push(op);
    }

    Ok(ops)
}

fn run_operations(ops: Vec<Operation>, speed_ms: u64, options: &PrintOptions) -> Result<()> {
    if ops.is_empty() {
        anyhow::bail!("no operations given; pass operations or --script");
    }
    let config = PlaybackConfig::with_speed_ms(speed_ms).context("invalid --speed-ms")?;
    let mut viz = Visualizer::with_config(config);

    for op in ops {
        let Some(run) = viz.apply(op).cloned() else {
            println!("== {}", op);
            continue;
        };
        if options.json {
            print_json(&run)?;
        } else if options.animate {
            animate(&mut viz, &run);
        } else {
            print_run(&run);
        }
        if options.fingerprint {
            println!("fingerprint\t{}", run.trace.fingerprint().to_hex());
        }
    }

    if !options.json {
        println!("-- tree");
        print!("{}", viz.engine().snapshot().render());
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    let mut viz = Visualizer::new();
    for value in [5, 3, 8, 1, 4, 7, 9] {
        viz.insert(value);
    }
    print!("{}", viz.engine().snapshot().render());

    for order in TraversalOrder::ALL {
        let values = viz.engine().traverse(order);
        let run = viz.traverse(order).clone();
        println!("{}: {:?}", order, values);
        print_run(&run);
    }
    Ok(())
}

fn print_run(run: &Run) {
    println!("== {}", run.operation);
    for (index, step) in run.trace.iter().enumerate() {
        let marker = if step.is_structural() { "*" } else { " " };
        println!("{:>3}{} {:<10} {}", index + 1, marker, step.kind(), step.message());
    }
}

fn animate(viz: &mut Visualizer, run: &Run) {
    println!("== {}", run.operation);
    let playback = viz.playback_mut();
    loop {
        if let Some(step) = playback.active_step() {
            println!(
                "{:>3} {:<10} {}",
                playback.position_index() + 1,
                step.kind(),
                step.message()
            );
        }
        let Some(delay) = playback.next_delay() else {
            break;
        };
        std::thread::sleep(delay);
        playback.advance();
    }
}

#[cfg(feature = "visualize")]
fn print_json(run: &Run) -> Result<()> {
    let json = serde_json::to_string(run).context("failed to serialize run")?;
    println!("{}", json);
    Ok(())
}

#[cfg(not(feature = "visualize"))]
fn print_json(_run: &Run) -> Result<()> {
    anyhow::bail!("--json requires building with the `visualize` feature")
}
