use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "digit-sum")]
#[command(about = "Arbitrary-precision digit-string addition with a built-in self-test")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit the suite reports as JSON instead of text sections")]
    pub json: bool,
}
