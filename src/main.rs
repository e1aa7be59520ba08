mod cli;
mod export;
mod interactive;
mod logging;
mod render;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use disc_calc::{
    compare_coefficients, parse_assignment, validate_disc_list, BundleBuilder, Control,
    DiscDirectory, DiscEngine, DiscId, DiscSource, Figure, SessionConfig, TrajectoryProvider, UnitSystem,
    UpdateController,
};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            discs,
            units,
            disc_dir,
            config,
            environment,
            sets,
            out,
            export,
            interactive,
        } => {
            // Disc count is checked before anything is read, computed or written.
            let discs: Vec<DiscId> = discs.iter().map(|d| DiscId::new(d.as_str())).collect();
            validate_disc_list(&discs)?;

            let mut session = match &config {
                Some(path) => SessionConfig::from_file(path)?,
                None => SessionConfig::default(),
            };
            if let Some(units) = units {
                session.units = units.parse::<UnitSystem>()?;
            }
            if let Some(dir) = disc_dir {
                session.disc_dir = dir;
            }
            if environment.is_some() {
                session.environment = environment;
                session.apply_environment()?;
            }
            let changes = sets
                .iter()
                .map(|s| parse_assignment(s))
                .collect::<Result<Vec<_>, _>>()?;

            logging::init_logging(cli.verbose, session.log_level.as_deref());
            run_compare(session, discs, &changes, &out, export.as_deref(), interactive)
        }
        Commands::Coeffs { discs, disc_dir, out } => {
            let discs: Vec<DiscId> = discs.iter().map(|d| DiscId::new(d.as_str())).collect();
            logging::init_logging(cli.verbose, None);

            let curves = compare_coefficients(&DiscDirectory::new(disc_dir), &discs)?;
            create_dir(&out)?;
            let path = render::render_coefficients(&curves, &out)?;
            println!("wrote {}", path.display());
            Ok(())
        }
        Commands::List { disc_dir } => {
            logging::init_logging(cli.verbose, None);
            let source = DiscDirectory::new(&disc_dir);
            let ids = source
                .list()
                .with_context(|| format!("failed to list discs in {}", disc_dir.display()))?;
            for id in ids {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn run_compare(
    session: SessionConfig,
    discs: Vec<DiscId>,
    changes: &[(Control, f64)],
    out: &Path,
    export: Option<&Path>,
    interactive: bool,
) -> Result<()> {
    info!(
        discs = discs.len(),
        units = %session.units,
        disc_dir = %session.disc_dir.display(),
        "starting comparison"
    );
    for (name, value) in session.constants.summary() {
        debug!("{name}: {value}");
    }
    let provider = TrajectoryProvider::new(
        Box::new(DiscDirectory::new(&session.disc_dir)),
        Box::new(DiscEngine::new(session.constants)),
    );
    let mut controller = UpdateController::new(
        discs,
        session.units,
        session.launch,
        BundleBuilder::new(provider),
        Figure::new(),
    )?;
    if !changes.is_empty() {
        controller.apply(changes)?;
    }

    let stdout = io::stdout();
    interactive::show(&controller, &mut stdout.lock())?;

    create_dir(out)?;
    publish(&controller, out, export)?;

    if interactive {
        let stdin = io::stdin();
        interactive::run(&mut controller, stdin.lock(), &mut stdout.lock(), |c| {
            publish(c, out, export)
        })?;
    }
    Ok(())
}

/// Render the figures and, if asked, export the bundles.
fn publish(controller: &UpdateController<Figure>, out: &Path, export: Option<&Path>) -> Result<()> {
    for path in render::render_comparison(controller.surface(), controller.units(), out)? {
        info!(path = %path.display(), "figure written");
    }
    if let Some(dir) = export {
        for path in export::export_bundles(controller.bundles(), dir)? {
            info!(path = %path.display(), "bundle exported");
        }
    }
    Ok(())
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}
