use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_stats::config::Config;
use workout_stats::error::AppError;
use workout_stats::pipeline::report;
use workout_stats::types::workout::Package;

fn main() -> Result<(), AppError> {
    let config = Config::from_env();

    // Initialize tracing; stdout is reserved for summaries
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let packages = [
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    tracing::info!("Processing {} workout packages", packages.len());

    let mut failed = 0;
    for (package, result) in packages.iter().zip(report::process(&packages)) {
        match result {
            Ok(summary) => println!("{summary}"),
            Err(err) => {
                failed += 1;
                tracing::error!(code = %package.code, "Workout rejected: {}", err);
            }
        }
    }

    if failed > 0 {
        return Err(AppError::Failed(failed));
    }

    tracing::info!("Done");
    Ok(())
}
