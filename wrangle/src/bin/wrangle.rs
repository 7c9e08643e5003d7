use anyhow::{Context, Result};
use clap::{arg, command, ArgMatches};
use std::path::Path;
use wrangle::utils::log;
use wrangle::Config;
use wrangle_core::{LayoutRegistry, WrangleError, Wrangler};
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> Result<()> {
    let matches = get_command().get_matches();

    let level = log::log_level(matches.get_one::<String>("log-level").map(String::as_str));
    let (subscriber, parse_err) = log::parse_log_level(&level);
    tracing::subscriber::set_global_default(subscriber)
        .context("Couldn't setup global subscriber (logger)")?;
    if let Some(err) = parse_err {
        tracing::warn!("Ignoring log level {:?}: {}", level, err);
    }

    let layouts = LayoutRegistry::<XlibWindowHandle>::default();
    if matches.get_flag("layouts") {
        for name in layouts.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = wrangle::load(matches.get_one::<String>("config").map(Path::new));
    let layout = layout_name(&matches, &config);

    let display_server = XlibDisplayServer::new().context("Couldn't talk to the X server")?;
    let mut wrangler = Wrangler::new(display_server, &layouts, &config);

    let dry_run = matches.get_flag("dry-run");
    let result = if dry_run {
        wrangler.arrange(&layout)
    } else {
        wrangler.apply_layout_by_name(&layout)
    };

    match result {
        Ok(arrangement) if dry_run => println!("{}", serde_json::to_string(&arrangement)?),
        Ok(arrangement) => tracing::info!(
            "Moved {:?} to {}",
            arrangement.window,
            arrangement.geometry
        ),
        // Unknown or failing layouts are diagnostics.
        Err(err @ (WrangleError::LayoutNotFound(_) | WrangleError::LayoutExecution { .. })) => {
            tracing::error!("{}", err);
        }
        Err(err) => return Err(err).context("Couldn't apply layout"),
    }
    Ok(())
}

/// The layout named on the command line, otherwise the configured default.
fn layout_name(matches: &ArgMatches, config: &Config) -> String {
    matches
        .get_one::<String>("LAYOUT")
        .cloned()
        .unwrap_or_else(|| config.default_layout.clone())
}

fn get_command() -> clap::Command {
    command!("wrangle")
        .about("Moves the active window where a layout says it belongs")
        .help_template(wrangle::utils::get_help_template())
        .args(&[
            arg!(-l --layouts "Print the names of the available layouts."),
            arg!(-c --config <FILE> "Read the configuration from FILE."),
            arg!(-n --"dry-run" "Print where the window would go without moving it."),
            arg!(--"log-level" <LEVEL> "Log filter, same syntax as RUST_LOG. Defaults to info."),
            arg!([LAYOUT] "The layout to apply. Uses default_layout from the config otherwise."),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_command() {
        get_command().debug_assert();
    }

    #[test]
    fn layout_and_flags_parse() {
        let matches = get_command()
            .try_get_matches_from(["wrangle", "--dry-run", "-c", "/tmp/wrangle.toml", "fill"])
            .unwrap();
        assert!(matches.get_flag("dry-run"));
        assert!(!matches.get_flag("layouts"));
        assert_eq!(
            matches.get_one::<String>("config").map(String::as_str),
            Some("/tmp/wrangle.toml")
        );
        assert_eq!(
            matches.get_one::<String>("LAYOUT").map(String::as_str),
            Some("fill")
        );
    }

    #[test]
    fn layout_is_optional() {
        let matches = get_command().try_get_matches_from(["wrangle"]).unwrap();
        assert!(matches.get_one::<String>("LAYOUT").is_none());
    }

    #[test]
    fn the_default_layout_is_used_when_none_is_named() {
        let config = Config {
            default_layout: "fill".to_owned(),
            ..Config::default()
        };
        let matches = get_command().try_get_matches_from(["wrangle"]).unwrap();
        assert_eq!(layout_name(&matches, &config), "fill");

        let matches = get_command()
            .try_get_matches_from(["wrangle", "expand"])
            .unwrap();
        assert_eq!(layout_name(&matches, &config), "expand");
    }
}
