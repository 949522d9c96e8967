//! The dashboard container: wires input events and service results into the model.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use nexus_weather::{Geolocator, WeatherApiClient, WeatherQuery};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::models::{DashboardModel, Followup};
use crate::services::{request_fetch, request_location, WeatherServiceMessage};

/// A line typed at the prompt
#[derive(Debug, PartialEq)]
pub enum Command {
    Search(String),
    ToggleTheme,
    Relocate,
    Quit,
    Unknown(String),
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    match line {
        "/theme" | "/t" => Command::ToggleTheme,
        "/refresh" | "/r" => Command::Relocate,
        "/quit" | "/q" | "/exit" => Command::Quit,
        other if other.starts_with('/') => Command::Unknown(other.to_string()),
        other => Command::Search(other.to_string()),
    }
}

pub struct DashboardApp {
    model: DashboardModel,
    client: Arc<WeatherApiClient>,
    geolocator: Arc<Geolocator>,
    tx: UnboundedSender<WeatherServiceMessage>,
    rx: UnboundedReceiver<WeatherServiceMessage>,
    clear_screen: bool,
}

impl DashboardApp {
    pub fn new(model: DashboardModel, client: WeatherApiClient, geolocator: Geolocator) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            model,
            client: Arc::new(client),
            geolocator: Arc::new(geolocator),
            tx,
            rx,
            clear_screen: false,
        }
    }

    /// Clear the terminal before every redraw
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn model(&self) -> &DashboardModel {
        &self.model
    }

    /// Initial mount: fetch the given query, or geolocate first
    pub fn mount(&mut self, initial: Option<WeatherQuery>) {
        match initial {
            Some(query) => self.fetch(query),
            None => self.locate(),
        }
    }

    pub fn locate(&mut self) {
        let generation = self.model.begin_locate();
        tracing::info!("Locating (request {})", generation);
        request_location(&self.tx, self.geolocator.clone(), generation);
    }

    pub fn fetch(&mut self, query: WeatherQuery) {
        let generation = self.model.begin_fetch();
        tracing::info!("Fetching weather for {:?} (request {})", query, generation);
        request_fetch(&self.tx, self.client.clone(), query, generation);
    }

    /// Search-box submission. Blank text issues no request.
    pub fn search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.fetch(WeatherQuery::Search(text.to_string()));
        true
    }

    fn handle(&mut self, message: WeatherServiceMessage) {
        if let Followup::FetchFor(location) = self.model.apply(message) {
            self.fetch(WeatherQuery::from(&location));
        }
    }

    /// Process service messages until nothing is in flight
    pub async fn settle(&mut self) {
        while self.model.is_loading() {
            match self.rx.recv().await {
                Some(message) => self.handle(message),
                None => break,
            }
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.clear_screen {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        writeln!(out, "{}\n", self.model.render())?;
        out.flush()?;
        Ok(())
    }

    /// Interactive loop: redraw on every service result and prompt command.
    ///
    /// Ends on `/quit`, or at end of input once pending requests have settled.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        self.draw(out)?;

        loop {
            tokio::select! {
                message = self.rx.recv() => {
                    if let Some(message) = message {
                        self.handle(message);
                        self.draw(out)?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        self.settle().await;
                        self.draw(out)?;
                        break;
                    };
                    match parse_command(&line) {
                        Command::Quit => break,
                        Command::ToggleTheme => self.model.toggle_theme(),
                        Command::Relocate => self.locate(),
                        Command::Search(text) => {
                            self.search(&text);
                        }
                        Command::Unknown(cmd) => {
                            tracing::warn!("Unknown command: {}", cmd);
                            continue;
                        }
                        Command::Empty => continue,
                    }
                    self.draw(out)?;
                }
            }
        }

        Ok(())
    }
}
