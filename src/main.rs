use anyhow::Result;
use clap::{error::ErrorKind, Arg, Command};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use course_data_generator::{Config, CourseGenerator};

fn build_cli() -> Command {
    Command::new("course-data-generator")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Scans a course folder and generates course_data.json for the course website")
        .after_help(
            "Example:\n  course-data-generator \"C:\\Courses\\Python Masterclass\" \
             \"https://storage.googleapis.com/python-course-bucket\"",
        )
        .arg(
            Arg::new("course-folder")
                .value_name("COURSE_FOLDER")
                .help("Course folder; each subdirectory is one chapter")
                .required(true)
        )
        .arg(
            Arg::new("bucket-url")
                .value_name("BUCKET_URL")
                .help("Base URL of the storage bucket holding the course files")
                .required(true)
        )
        .arg(
            Arg::new("extra")
                .value_name("EXTRA")
                .num_args(0..)
                .action(clap::ArgAction::Append)
                .hide(true)
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output filename inside the course folder [default: course_data.json]")
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file (TOML)")
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Scan and print the summary without writing the output file")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
        )
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_target(verbose)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let mut cli = build_cli();
    let matches = match cli.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            cli.print_help()?;
            println!("\n\nError: Missing arguments!");
            println!("Usage: course-data-generator <course_folder> <bucket_url>");
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    init_logging(matches.get_flag("verbose"));

    // Both positionals are required, so clap guarantees they are present
    let course_path = matches
        .get_one::<String>("course-folder")
        .map(PathBuf::from)
        .unwrap_or_default();
    let bucket_url = matches
        .get_one::<String>("bucket-url")
        .cloned()
        .unwrap_or_default();
    let dry_run = matches.get_flag("dry-run");
    if let Some(extra) = matches.get_many::<String>("extra") {
        debug!("Ignoring extra arguments: {:?}", extra.collect::<Vec<_>>());
    }

    let mut config = Config::load(matches.get_one::<String>("config").map(PathBuf::from).as_deref())
        .inspect_err(|e| error!("❌ {:#}", e))?;
    if let Some(output) = matches.get_one::<String>("output") {
        config.output.filename = output.clone();
    }
    debug!("{}", config.summary());

    let generator =
        CourseGenerator::new(config, &bucket_url).inspect_err(|e| error!("❌ {:#}", e))?;
    let report = generator
        .run(&course_path, dry_run)
        .inspect_err(|e| error!("❌ {:#}", e))?;

    let summary = &report.summary;
    info!("✅ Scan complete in {:.2}s", report.total_time.as_secs_f64());
    info!("   Chapters: {}", summary.chapters);
    info!("   Total lessons: {}", summary.lessons);
    info!("   Videos: {} ({} with subtitles)", summary.videos, summary.subtitled_videos);
    info!("   Text lessons: {}", summary.texts);
    info!("   Resources: {}", summary.resources);

    if !report.written {
        info!("🧪 Dry run, would save to: {}", report.output_path.display());
        return Ok(());
    }

    info!("📄 Saved to: {}", report.output_path.display());
    info!("💡 Next steps:");
    info!("   1. Copy this file to: src/data/{}", generator.config().output.filename);
    info!("   2. Update src/config/course.config.js with course details");
    info!("   3. Run: npm run build");

    Ok(())
}
