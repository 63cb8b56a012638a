use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Args, Parser,
};
use log::Level;

/// Logging options.
#[derive(Args, Clone, Debug)]
pub struct LoggingOpt {
    /// The logging level to use.
    #[arg(
        short, long, default_value_t = Level::Info,
        // Needed because enum is foreign so can't use ValueEnum derive.
        value_parser = PossibleValuesParser::new(["trace", "debug", "info", "warn", "error"]).map(|s| s.parse::<Level>().unwrap()),
        ignore_case = true
    )]
    pub log_level: Level,
}

/// Doubles each number and spells the result out in English.
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct DecorateCli {
    #[command(flatten)]
    pub log_opt: LoggingOpt,

    /// Numeric tokens to decorate. Tokens that aren't integers map to nothing.
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
