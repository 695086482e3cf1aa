use clap::Parser;

/// Pallet chargeable-weight wizard
#[derive(Parser, Debug)]
#[command(name = "palletui")]
#[command(about = "Interactive calculator for pallet chargeable freight weight")]
#[command(version)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
