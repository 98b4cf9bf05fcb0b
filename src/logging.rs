use color_eyre::{Result, eyre::WrapErr};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Initializes the global logger, writing to `path` instead of the terminal
/// the game is drawing on.
///
/// When `verbose` is `true` debug messages are kept, otherwise only info and
/// above. `RUST_LOG` takes precedence over both.
pub fn init(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
    Ok(())
}
