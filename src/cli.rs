use std::path::PathBuf;

use clap::Parser;

use crate::password::CharacterClasses;

#[derive(Debug, Parser)]
#[command(name = "oktopass-gen", version, about = "Generate random passwords from selected character classes")]
pub struct Cli {
    /// Password length, between 8 and 16
    #[arg(short = 'L', long)]
    pub length: Option<String>,

    /// Include lowercase letters
    #[arg(short, long)]
    pub lowercase: bool,

    /// Include uppercase letters
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include digits
    #[arg(short, long)]
    pub numbers: bool,

    /// Include symbols (!@#$%&*)
    #[arg(short, long)]
    pub symbols: bool,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Copy the last generated password to the clipboard
    #[arg(short = 'C', long)]
    pub copy: bool,

    /// Start an interactive session
    #[arg(short, long, conflicts_with = "count")]
    pub interactive: bool,

    /// Path to the config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Classes picked on the command line, if any flag was given.
    pub fn classes(&self) -> Option<CharacterClasses> {
        let classes = CharacterClasses {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            numbers: self.numbers,
            symbols: self.symbols,
        };

        classes.any().then_some(classes)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_length_and_classes() {
        let cli = Cli::try_parse_from(["oktopass-gen", "-L", "12", "-n", "--symbols"]).unwrap();

        assert_eq!(cli.length.as_deref(), Some("12"));
        assert_eq!(
            cli.classes(),
            Some(CharacterClasses { lowercase: false, uppercase: false, numbers: true, symbols: true })
        );
        assert_eq!(cli.count, 1);
        assert!(!cli.copy);
    }

    #[test]
    fn no_class_flags_defers_to_config() {
        let cli = Cli::try_parse_from(["oktopass-gen", "--length", "9"]).unwrap();
        assert_eq!(cli.classes(), None);
    }

    #[test]
    fn length_is_kept_raw_for_validation() {
        let cli = Cli::try_parse_from(["oktopass-gen", "-L", "abc"]).unwrap();
        assert_eq!(cli.length.as_deref(), Some("abc"));
    }

    #[test]
    fn count_must_be_positive() {
        assert!(Cli::try_parse_from(["oktopass-gen", "-c", "0"]).is_err());
        let cli = Cli::try_parse_from(["oktopass-gen", "-c", "3"]).unwrap();
        assert_eq!(cli.count, 3);
    }
}
