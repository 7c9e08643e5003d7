use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::PathBuf;
use wrangle::Config;
use wrangle_core::LayoutRegistry;
use xlib_display_server::XlibWindowHandle;

fn main() -> Result<()> {
    let matches = command!("wrangle check")
        .about("Checks syntax of the configuration file")
        .help_template(wrangle::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m wrangle version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m wrangle git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let path = match matches.get_one::<String>("INPUT") {
        Some(input) => PathBuf::from(input),
        None => wrangle::default_path()?,
    };
    println!(
        "\x1b[0;94m::\x1b[0m Loading configuration from {} . . .",
        path.display()
    );
    if !path.exists() {
        println!("\x1b[1;93mWARN: No configuration file found, defaults will be used.\x1b[0m");
        return Ok(());
    }
    let config = match wrangle::load_from_path(&path) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err:#} \x1b[0m");
            bail!("Configuration failed");
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking layouts . . .");
    let layouts: Vec<&str> = LayoutRegistry::<XlibWindowHandle>::default().names().collect();
    if let Err(err) = check_default_layout(&config, &layouts) {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err} \x1b[0m");
        bail!("Configuration failed");
    }
    println!("\x1b[0;92m    -> Layouts OK \x1b[0m");
    Ok(())
}

fn check_default_layout(config: &Config, layouts: &[&str]) -> Result<()> {
    if !layouts.contains(&config.default_layout.as_str()) {
        bail!(
            "default_layout {:?} is not a layout, try one of: {}",
            config.default_layout,
            layouts.join(", ")
        );
    }
    Ok(())
}
