use clap::Parser;
use digit_sum::domain::model;
use digit_sum::utils::logger;
use digit_sum::{CliConfig, ColumnarAdder, IterativeAdder, SuiteRunner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting digit-sum self-test");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let scenarios = model::scenarios();
    let reports = vec![
        SuiteRunner::new(IterativeAdder).run(&scenarios)?,
        SuiteRunner::new(ColumnarAdder).run(&scenarios)?,
    ];

    if config.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.render());
            println!();
        }
    }

    for report in &reports {
        if report.all_passed() {
            tracing::info!("{} suite passed", report.strategy);
        } else {
            tracing::warn!("{} suite has failures", report.strategy);
        }
    }

    // Failures are reported above, not reflected in the exit code.
    Ok(())
}
