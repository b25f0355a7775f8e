use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use syscode_catalogue::{parse_id, Catalogue, CatalogueConfig, Code, CodeId};

#[derive(Parser)]
#[command(name = "syscode")]
#[command(about = "Look up SysCodes, their groups and subsets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Code table (id;_;code;name;de short;de medium;en short;en medium)
    #[arg(long, env = "SYSCODE_CODES_FILE")]
    codes: PathBuf,

    /// Subset table (subset name;entry name;sort number;default flag)
    #[arg(long, env = "SYSCODE_SUBSETS_FILE")]
    subsets: PathBuf,

    /// TOML file overriding id offset, group gap bounds and listing limit
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe the code with the given id (hex as printed, or --decimal)
    Show(ShowArgs),

    /// Describe the code with the given name
    Name(NameArgs),

    /// Find codes by exact code or name substring
    Search(SearchArgs),

    /// List distinct English/German medium translations
    Translations(TranslationsArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Code id in hex, with or without a 0x prefix
    id: String,

    /// Read the id as a decimal number
    #[arg(long)]
    decimal: bool,
}

#[derive(Args)]
struct NameArgs {
    /// Code name
    name: String,
}

#[derive(Args)]
struct SearchArgs {
    /// Exact code or part of a name (case-sensitive)
    text: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TranslationsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TranslationOutput<'a> {
    english: &'a str,
    german: &'a str,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON parsing
    let json_output = match &cli.command {
        Commands::Search(args) => args.json,
        Commands::Translations(args) => args.json,
        _ => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = match &cli.config {
        Some(path) => CatalogueConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CatalogueConfig::default(),
    };

    let catalogue = Catalogue::load(&cli.codes, &cli.subsets, config)
        .context("Failed to load SysCode tables")?;

    match cli.command {
        Commands::Show(args) => run_show(&catalogue, args)?,
        Commands::Name(args) => run_name(&catalogue, args)?,
        Commands::Search(args) => run_search(&catalogue, args)?,
        Commands::Translations(args) => run_translations(&catalogue, args)?,
    }

    Ok(())
}

fn run_show(catalogue: &Catalogue, args: ShowArgs) -> Result<()> {
    let parsed = if args.decimal {
        args.id.trim().parse::<CodeId>().ok()
    } else {
        parse_id(&args.id)
    };
    let Some(id) = parsed else {
        bail!("Invalid syscode id: {}", args.id);
    };
    let Some(code) = catalogue.get_by_id(id) else {
        bail!("No syscode found for id {}", args.id);
    };
    print!("{}", catalogue.render(code));
    Ok(())
}

fn run_name(catalogue: &Catalogue, args: NameArgs) -> Result<()> {
    let Some(code) = catalogue.get_by_name(&args.name) else {
        bail!("No syscode found for name {}", args.name);
    };
    print!("{}", catalogue.render(code));
    Ok(())
}

fn run_search(catalogue: &Catalogue, args: SearchArgs) -> Result<()> {
    let hits: Vec<&Code> = catalogue.search(&args.text);
    log::debug!("{} codes match {:?}", hits.len(), args.text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    for code in hits {
        println!("{}", catalogue.reference_line(code.id()));
    }
    Ok(())
}

fn run_translations(catalogue: &Catalogue, args: TranslationsArgs) -> Result<()> {
    let translations = catalogue.translations();

    if args.json {
        let output: Vec<TranslationOutput<'_>> = translations
            .iter()
            .map(|(english, german)| TranslationOutput { english, german })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (english, german) in &translations {
        println!("{english} : {german}");
    }
    Ok(())
}
