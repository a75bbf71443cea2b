use crate::cli::actions::Action;
use anyhow::{Context, Result};

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    // Closure to return subcommand matches
    let sub_matches = |subcommand| -> Result<&clap::ArgMatches> {
        matches
            .subcommand_matches(subcommand)
            .context("arguments not found")
    };

    match matches.subcommand_name() {
        Some("request-otp") => {
            let matches = sub_matches("request-otp")?;
            Ok(Action::RequestOtp {
                phone_number: required_string(matches, "phone")?,
            })
        }
        Some("verify-otp") => {
            let matches = sub_matches("verify-otp")?;
            Ok(Action::VerifyOtp {
                phone_number: required_string(matches, "phone")?,
                code: required_string(matches, "code")?,
            })
        }
        Some("whoami") => Ok(Action::Whoami),
        Some("logout") => Ok(Action::Logout),
        _ => Err(anyhow::anyhow!("missing subcommand")),
    }
}

fn required_string(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .map(String::to_string)
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --{name}"))
}
