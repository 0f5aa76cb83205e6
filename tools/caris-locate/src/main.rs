use clap::{Parser, ValueEnum};

use caris_finder::{CommandFinder, ProductSpec, BASE_EDITOR, HIPS};

/// Simple standalone locator for CARIS batch engines (sanity-check binary)
#[derive(Parser)]
struct Args {
    /// Product family to search.
    #[arg(short, long, value_enum, default_value = "hips")]
    product: Product,

    /// Print every installed version instead of just the newest.
    #[arg(long)]
    all: bool,

    /// Look up one specific version only.
    #[arg(short, long, conflicts_with = "all")]
    version: Option<String>,

    /// Executable name to search for.
    #[arg(long, default_value = caris_finder::BATCH_ENGINE_EXE)]
    exe: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Product {
    Hips,
    Base,
}

impl Product {
    fn spec(self) -> &'static ProductSpec {
        match self {
            Product::Hips => &HIPS,
            Product::Base => &BASE_EDITOR,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let spec = args.product.spec();
    let finder = CommandFinder::new()?.executable(args.exe);

    if let Some(version) = &args.version {
        let path = finder.exact(spec, version)?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.all {
        for m in finder.all_of(spec)? {
            println!("{}\t{}", m.version, m.path.display());
        }
        return Ok(());
    }

    let m = finder.first_of(spec)?;
    println!("{}\t{}", m.version, m.path.display());
    Ok(())
}
