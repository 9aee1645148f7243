use std::{fs::read_to_string, path::Path, path::PathBuf};

use anyhow::{Context as _, bail};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use visitgen::{
    EmitOptions, HierarchyDef, Style, defs, generate_all,
    writer::{FsWriter, StdoutWriter, write_all},
};

#[derive(argh::FromArgs)]
/// Generate C# AST node hierarchies with visitor dispatch.
struct Args {
    /// hierarchy definitions file, defaults to the built-in Lox definitions
    #[argh(option, short = 'i')]
    input: Option<PathBuf>,

    /// output directory, or `-` to print to stdout
    #[argh(option, short = 'o', default = "String::from(\".\")")]
    out: String,

    /// namespace declared at the top of each file
    #[argh(option, short = 'n')]
    namespace: Option<String>,

    /// naming style of visitor members: `camel` (default) or `pascal`
    #[argh(option)]
    style: Option<Style>,

    /// reject names and types that are not identifier-shaped
    #[argh(switch)]
    strict: bool,

    /// only generate the hierarchy with this base name (repeatable)
    #[argh(option)]
    only: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Args = argh::from_env();
    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    let defs = match &args.input {
        Some(path) => {
            let src = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            defs::parse_defs(&src)
                .with_context(|| format!("invalid definitions in {}", path.display()))?
        }
        None => defs::lox().context("invalid built-in definitions")?,
    };
    let defs = select(defs, &args.only)?;

    let options = EmitOptions {
        style: args.style.unwrap_or_default(),
        namespace: args.namespace,
        strict: args.strict,
    };

    // everything is generated before the first file is written
    let generated = generate_all(&defs, &options).context("generation failed")?;

    if args.out == "-" {
        write_all(&mut StdoutWriter, Path::new(""), &generated)
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let out_dir = Path::new(&args.out);
    let written = write_all(&mut FsWriter, out_dir, &generated)
        .with_context(|| format!("failed to write to {}", out_dir.display()))?;
    for path in written {
        tracing::info!(path = %path.display(), "wrote");
    }

    Ok(())
}

fn select(defs: Vec<HierarchyDef>, only: &[String]) -> anyhow::Result<Vec<HierarchyDef>> {
    if only.is_empty() {
        return Ok(defs);
    }

    for name in only {
        if !defs.iter().any(|def| &def.base == name) {
            bail!("unknown hierarchy `{name}`");
        }
    }

    Ok(defs
        .into_iter()
        .filter(|def| only.contains(&def.base))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::select;
    use visitgen::defs;

    #[test]
    fn select_all_by_default() {
        let selected = select(defs::lox().unwrap(), &[]).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn select_by_base() {
        let selected = select(defs::lox().unwrap(), &["Stmt".to_owned()]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].base, "Stmt");
    }

    #[test]
    fn select_unknown() {
        let err = select(defs::lox().unwrap(), &["Decl".to_owned()]).unwrap_err();
        assert_eq!(err.to_string(), "unknown hierarchy `Decl`");
    }
}
