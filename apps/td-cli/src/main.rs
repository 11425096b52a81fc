use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use td_core::{Arch, CompilerFamily, Os, TargetPlatform};
use td_emit::{MetadataEmitter, PackageDescriptor, fingerprint};
use td_recipe::{RecipeManifest, tdlib};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "tdmeta")]
#[command(about = "TDLib package metadata - component graph and descriptor emission", long_about = None)]
struct Cli {
    /// Recipe manifest (YAML or JSON); defaults to the built-in TDLib recipe
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the recipe: metadata, duplicate keys, dangling references, cycles
    Validate,
    /// List components with their dependencies
    Components,
    /// Print components in dependency order
    Order,
    /// Emit package descriptors for a build configuration
    Emit {
        #[command(flatten)]
        target: TargetArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the SHA-256 fingerprint of the emitted descriptors
    Fingerprint {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Target operating system (defaults to the host)
    #[arg(long)]
    os: Option<Os>,
    /// Compiler family (defaults to the platform's usual one)
    #[arg(long)]
    compiler: Option<CompilerFamily>,
    /// Target architecture (defaults to the host)
    #[arg(long)]
    arch: Option<Arch>,
    /// Produce a shared artifact (overrides the recipe default)
    #[arg(long)]
    shared: Option<bool>,
    /// Upstream version (overrides the recipe version)
    #[arg(long = "pkg-version")]
    version: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Recipe(#[from] td_recipe::RecipeError),

    #[error(transparent)]
    Graph(#[from] td_graph::GraphError),

    #[error(transparent)]
    Emit(#[from] td_emit::EmitError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let manifest = load_manifest(cli.manifest.as_deref())?;

    match cli.command {
        Commands::Validate => cmd_validate(&manifest),
        Commands::Components => cmd_components(&manifest),
        Commands::Order => cmd_order(&manifest),
        Commands::Emit {
            target,
            format,
            output,
        } => cmd_emit(&manifest, &target, format, output.as_deref()),
        Commands::Fingerprint { target } => cmd_fingerprint(&manifest, &target),
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn load_manifest(path: Option<&Path>) -> CliResult<RecipeManifest> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading recipe");
            Ok(td_recipe::load(path)?)
        }
        None => Ok(tdlib::manifest()),
    }
}

fn cmd_validate(manifest: &RecipeManifest) -> CliResult<()> {
    td_recipe::validate_manifest(manifest).map_err(td_recipe::RecipeError::from)?;
    println!(
        "✓ {} {}: {} components, {} platform rules",
        manifest.package.name,
        manifest.package.version,
        manifest.components.len(),
        manifest.platform_rules.len()
    );
    Ok(())
}

fn cmd_components(manifest: &RecipeManifest) -> CliResult<()> {
    let graph = manifest.component_graph()?;
    println!("{:<18} {:<14} {:<6} DEPENDENCIES", "KEY", "EXPORTED", "LIB");
    for comp in graph.iter() {
        let deps: Vec<&str> = comp
            .internal_dependencies
            .iter()
            .map(|k| k.as_str())
            .chain(comp.external_dependencies.iter().map(String::as_str))
            .collect();
        println!(
            "{:<18} {:<14} {:<6} {}",
            comp.key.as_str(),
            comp.exported_name.as_deref().unwrap_or("-"),
            if comp.produces_artifact { "yes" } else { "no" },
            deps.join(", ")
        );
    }
    Ok(())
}

fn cmd_order(manifest: &RecipeManifest) -> CliResult<()> {
    let graph = manifest.component_graph()?;
    for (i, key) in td_graph::topological_order(&graph)?.into_iter().enumerate() {
        println!("{:>3}. {}", i + 1, key);
    }
    Ok(())
}

fn emit_descriptor(manifest: &RecipeManifest, target: &TargetArgs) -> CliResult<PackageDescriptor> {
    let graph = manifest.component_graph()?;
    let rules = manifest.platform_rules()?;
    let naming = manifest.naming();

    let host = TargetPlatform::host();
    let os = target.os.unwrap_or(host.os);
    let platform = TargetPlatform::new(
        os,
        target
            .compiler
            .unwrap_or_else(|| CompilerFamily::default_for(os)),
        target.arch.unwrap_or(host.arch),
    );

    let mut config = manifest.build_config(platform);
    if let Some(shared) = target.shared {
        config = config.with_shared(shared);
    }
    if let Some(version) = &target.version {
        config = config.with_version(version.clone());
    }

    Ok(MetadataEmitter::new(&graph, &naming)
        .with_rules(&rules)
        .emit(&config)?)
}

fn cmd_emit(
    manifest: &RecipeManifest,
    target: &TargetArgs,
    format: Format,
    output: Option<&Path>,
) -> CliResult<()> {
    let descriptor = emit_descriptor(manifest, target)?;
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&descriptor)? + "\n",
        Format::Yaml => serde_yaml::to_string(&descriptor)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            println!(
                "✓ Wrote {} descriptors to {}",
                descriptor.components.len(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_fingerprint(manifest: &RecipeManifest, target: &TargetArgs) -> CliResult<()> {
    let descriptor = emit_descriptor(manifest, target)?;
    println!("{}  {}", fingerprint(&descriptor)?, descriptor.platform);
    Ok(())
}
