use colored::Colorize;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use vpn_seed_values::load_and_resolve;
use vpn_seed_values::output::values_to_json;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if std::path::Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(
                Root::builder()
                    .appender("stderr")
                    .build(log::LevelFilter::Info),
            )?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let values = match load_and_resolve() {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{} {e}", "Invalid VPN server configuration:".on_red());
            std::process::exit(1);
        }
    };

    println!("{}", values_to_json(&values)?);

    Ok(())
}
