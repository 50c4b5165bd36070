use anyhow::Result;
use clap::{App as ClapApp, Arg};
use jobbank_tui::{
    app::App,
    config::{parse_page_size, Config},
};

fn validate_page_size(value: String) -> Result<(), String> {
    parse_page_size(&value)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the job listings API")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("page-size")
                .short("s")
                .long("page-size")
                .value_name("N")
                .help("Number of jobs requested per page")
                .takes_value(true)
                .validator(validate_page_size),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    // Theme changes are written back without the command line overrides
    let theme_preference = Box::new(config.clone());

    let page_size = matches
        .value_of("page-size")
        .map(parse_page_size)
        .transpose()?;
    config.apply_overrides(matches.value_of("api-url"), page_size)?;

    App::start(config, theme_preference).await?;
    Ok(())
}
