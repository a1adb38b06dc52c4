mod case;

use case::{Case, CliResult};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tq_fields::{FunctionObjectList, FunctionObjectTable, ModelFamily, catalog::resolve_tag};
use tq_registry::{DirectorySink, FieldSink, MemorySink, ObjectRegistry};
use tracing::info;

#[derive(Parser)]
#[command(name = "tq-cli")]
#[command(about = "turbfields CLI - publish turbulence fields of a frozen model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file and its function objects
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// List the fields a model family can publish
    Fields {
        /// compressible or incompressible
        family: ModelFamily,
    },
    /// Run the function objects of a case
    Run {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Output directory (defaults to `output` next to the case file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep results in memory instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Fields { family } => cmd_fields(family),
        Commands::Run {
            case_path,
            output,
            dry_run,
        } => cmd_run(&case_path, output, dry_run),
    }
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = Case::load(case_path)?;

    let mut registry = ObjectRegistry::new();
    case.model.register(&mut registry)?;
    let functions = case.function_objects(&FunctionObjectTable::with_builtins())?;

    println!(
        "✓ Case is valid: {} model, {} cells, {} function object(s)",
        case.model.family(),
        case.model.cells(),
        functions.len()
    );
    Ok(())
}

fn cmd_fields(family: ModelFamily) -> CliResult<()> {
    println!("{} turbulence fields:", family);
    for name in family.field_names() {
        let kind = resolve_tag(name, family)?.kind();
        println!("  {:<12} {}", name, kind);
    }
    Ok(())
}

fn cmd_run(case_path: &Path, output: Option<PathBuf>, dry_run: bool) -> CliResult<()> {
    let case = Case::load(case_path)?;

    let mut registry = ObjectRegistry::new();
    case.model.register(&mut registry)?;
    let mut functions = case.function_objects(&FunctionObjectTable::with_builtins())?;

    info!(
        family = %case.model.family(),
        cells = case.model.cells(),
        functions = functions.len(),
        steps = case.run.steps,
        "starting run"
    );

    let start = Instant::now();
    if dry_run {
        let mut sink = MemorySink::new();
        run_steps(&case, &mut functions, &mut registry, &mut sink)?;
        println!("✓ Dry run complete: {} field write(s)", sink.writes().len());
        for record in sink.writes() {
            println!("  t={:<8} {}", record.time, record.key);
        }
    } else {
        let output_dir = output.unwrap_or_else(|| {
            case_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("output")
        });
        let mut sink = DirectorySink::new(output_dir)?;
        run_steps(&case, &mut functions, &mut registry, &mut sink)?;
        let times = sink.list_times()?;
        println!(
            "✓ Wrote {} output time(s) to {}",
            times.len(),
            sink.root_dir().display()
        );
        if let Some(last) = times.last() {
            for key in sink.list_fields(last)? {
                println!("  {}/{}", last, key);
            }
        }
    }
    println!("  Elapsed: {:.3}s", start.elapsed().as_secs_f64());

    Ok(())
}

fn run_steps(
    case: &Case,
    functions: &mut FunctionObjectList,
    registry: &mut ObjectRegistry,
    sink: &mut dyn FieldSink,
) -> CliResult<()> {
    for step in 1..=case.run.steps {
        let time = step as f64 * case.run.dt;
        functions.run_cycle(time, registry, sink)?;
    }
    Ok(())
}
