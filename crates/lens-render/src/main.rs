use lens_render::export::render_all;
use lens_types::config::RunConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match RunConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => RunConfig::default(),
    };

    log::info!(
        "Rendering {} lens systems with {} angle samples into '{}'",
        config.lens_systems.len(),
        config.sweep.n_samples,
        config.render.output_dir
    );

    let outcomes = render_all(&config);
    let mut succeeded = 0;
    for outcome in &outcomes {
        if let Ok(paths) = &outcome.result {
            succeeded += 1;
            for path in paths {
                log::info!("Wrote {}", path.display());
            }
        }
    }
    log::info!("{}/{} configurations rendered", succeeded, outcomes.len());

    if succeeded == 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
