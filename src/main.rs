mod cli;

use std::io::IsTerminal;

use anyhow::Result;
use cli::CommandLine;
use nexus_core::Config;
use nexus_ui::{components, DashboardApp, DashboardModel, Theme};
use nexus_weather::{Geolocator, WeatherApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLine::parse_args();

    nexus_core::init(cli.log_level())?;

    let (mut config, _) = Config::load_validated(cli.config.as_deref())?;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }
    if let Some(unit) = cli.unit {
        config.weather.temperature_unit = unit.into();
    }
    if cli.no_color || !config.ui.color {
        components::disable_color();
    }

    let client = WeatherApiClient::new(&config.weather)?;
    let geolocator = Geolocator::from_config(&config.location)?;
    let model = DashboardModel::new(
        Theme::current(config.ui.theme),
        config.weather.temperature_unit,
    );

    let interactive = cli.interactive();
    let mut app = DashboardApp::new(model, client, geolocator)
        .with_clear_screen(interactive && std::io::stdout().is_terminal());

    tracing::info!("NexusWeather started");
    app.mount(cli.initial_query());

    if interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        app.run(stdin, &mut stdout).await?;
        return Ok(());
    }

    app.settle().await;
    if let Some(err) = app.model().error() {
        anyhow::bail!("{} ({})", err.user_message(), err);
    }

    if cli.json {
        if let Some(view) = app.model().view() {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    } else {
        println!("{}", app.model().render());
    }

    Ok(())
}
