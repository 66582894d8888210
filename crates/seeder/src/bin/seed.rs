use clap::{Parser, Subcommand};
use seeder::{ProgramSeed, SeedReport, import_program, seed_sample_data, validation::ProgramValidator};
use std::path::PathBuf;
use storage::{DEFAULT_DATABASE_URL, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "workout-seed")]
#[command(about = "Workout tracker database bootstrap", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the schema
    Migrate,
    /// Create the schema and add the sample program to an empty database
    Init,
    /// Load a program definition from a JSON file
    Import {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "workout_seed={},seeder={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Migrate => {
            connect(&cli.database_url).await?;
        }
        Commands::Init => {
            let db = connect(&cli.database_url).await?;
            match seed_sample_data(&db).await? {
                SeedReport::AlreadySeeded => tracing::info!("Nothing to do"),
                SeedReport::Seeded(summary) => tracing::info!(
                    "Created {} workouts and {} exercises",
                    summary.workouts,
                    summary.exercises
                ),
            }
        }
        Commands::Import {
            file,
            validate_only,
        } => {
            handle_import(file, validate_only, &cli.database_url).await?;
        }
    }

    Ok(())
}

async fn connect(database_url: &str) -> Result<Database, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let db = Database::new(database_url).await?;
    db.run_migrations().await?;
    tracing::info!("Database schema ready");

    Ok(db)
}

async fn handle_import(
    file: PathBuf,
    validate_only: bool,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading program from: {}", file.display());

    let json_content = tokio::fs::read_to_string(&file).await?;
    let seed: ProgramSeed = serde_json::from_str(&json_content)?;

    tracing::info!(
        "Loaded program: {} ({} workouts, {} exercises)",
        seed.name,
        seed.workouts.len(),
        seed.exercise_count()
    );

    if validate_only {
        let report = ProgramValidator::validate(&seed)?;
        report.log_warnings();
        tracing::info!("Validation successful");
        return Ok(());
    }

    let db = connect(database_url).await?;
    let summary = import_program(&db, &seed).await?;
    tracing::info!("Import completed, program id {}", summary.program_id);

    Ok(())
}
