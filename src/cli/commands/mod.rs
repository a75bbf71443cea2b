use crate::config::DEFAULT_API_BASE_URL;
use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};
use regex::Regex;

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn validator_phone() -> ValueParser {
    ValueParser::from(move |phone: &str| -> std::result::Result<String, String> {
        let pattern = Regex::new(r"^\+[1-9]\d{1,14}$").map_err(|err| err.to_string())?;
        if pattern.is_match(phone) {
            Ok(phone.to_string())
        } else {
            Err("phone number must be in E.164 format, example: +15551234567".to_string())
        }
    })
}

pub fn validator_code() -> ValueParser {
    ValueParser::from(move |code: &str| -> std::result::Result<String, String> {
        if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
            Ok(code.to_string())
        } else {
            Err("code must be the 6-digit number from the SMS".to_string())
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("nudge")
        .about("Client for the Nudge reminders service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .short('u')
                .long("api-url")
                .help("API base URL")
                .default_value(DEFAULT_API_BASE_URL)
                .env("NUDGE_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Directory holding the persisted session token")
                .env("NUDGE_DATA_DIR")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("NUDGE_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("request-otp")
                .about("Request a one-time code over SMS")
                .arg(
                    Arg::new("phone")
                        .short('p')
                        .long("phone")
                        .help("Phone number in E.164 format")
                        .required(true)
                        .value_parser(validator_phone()),
                ),
        )
        .subcommand(
            Command::new("verify-otp")
                .about("Exchange a one-time code for a session")
                .arg(
                    Arg::new("phone")
                        .short('p')
                        .long("phone")
                        .help("Phone number in E.164 format")
                        .required(true)
                        .value_parser(validator_phone()),
                )
                .arg(
                    Arg::new("code")
                        .short('c')
                        .long("code")
                        .help("6-digit code from the SMS")
                        .required(true)
                        .value_parser(validator_code()),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the current session's profile"))
        .subcommand(Command::new("logout").about("Clear the stored session"))
}
