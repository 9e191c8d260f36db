//! Subcommand arguments and their handlers.
//!
//! Argument structs carry clap attributes only; each one converts into the
//! core types (`DraftUpdate`s for the wizard steps) before anything reaches
//! `soiree-core`.
//!
//! ```text
//! User Input → CLI Args (clap) → DraftUpdate per step → WizardStore → POST /events
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use jiff::civil::{Date, Time};
use log::{info, warn};
use soiree_core::{
    display::{Artists, CreateResult, OperationStatus},
    DraftUpdate, DrinkRef, EnabledSteps, Location, Soiree,
};

use crate::renderer::TerminalRenderer;

/// Log in with a username and password
#[derive(Args)]
pub struct LoginArgs {
    /// Account username
    pub username: String,
    #[arg(long, env = "SOIREE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Create an account and sign in with it
#[derive(Args)]
pub struct RegisterArgs {
    /// Email address for the new account
    pub email: String,
    /// Display name
    #[arg(long)]
    pub name: String,
    #[arg(long, env = "SOIREE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand)]
pub enum ArtistCommands {
    /// Search artists by name
    #[command(alias = "s")]
    Search {
        /// Artist name to look up
        name: String,
    },
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Fill in the wizard and submit the event
    #[command(alias = "c")]
    Create(CreateEventArgs),
}

/// Create an event
///
/// The options mirror the wizard steps: basics, location, music, drinks and
/// food, then privacy. Naming an artist or a dish switches the matching
/// optional step on.
#[derive(Args)]
pub struct CreateEventArgs {
    /// Event title
    pub name: String,
    #[arg(long, help = "Calendar day, e.g. 2026-10-31")]
    pub date: Option<Date>,
    #[arg(long, help = "Start time, e.g. 21:00")]
    pub time: Option<Time>,
    #[arg(long, requires = "lng", allow_negative_numbers = true, help = "Venue latitude")]
    pub lat: Option<f64>,
    #[arg(long, requires = "lat", allow_negative_numbers = true, help = "Venue longitude")]
    pub lng: Option<f64>,
    #[arg(long = "where", help = "Venue name or directions")]
    pub location_description: Option<String>,
    #[arg(
        long = "artist",
        help = "Artist to book; the best catalogue match is used (repeatable)"
    )]
    pub artists: Vec<String>,
    #[arg(
        long = "drink",
        value_parser = parse_drink,
        help = "Drink as ID:NAME (repeatable)"
    )]
    pub drinks: Vec<DrinkRef>,
    #[arg(long = "food", help = "Dish to serve (repeatable)")]
    pub food: Vec<String>,
    #[arg(long, help = "List the event publicly instead of inviting only")]
    pub public: bool,
    #[arg(long, help = "Print the draft without submitting it")]
    pub dry_run: bool,
}

impl CreateEventArgs {
    fn basics(&self) -> DraftUpdate {
        DraftUpdate::new()
            .with_name(self.name.clone())
            .with_date(self.date)
            .with_time(self.time)
    }

    fn location(&self) -> DraftUpdate {
        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        };
        DraftUpdate::new()
            .with_location(location)
            .with_location_description(self.location_description.clone())
    }

    fn enabled_steps(&self) -> EnabledSteps {
        EnabledSteps {
            music: !self.artists.is_empty(),
            drinks_and_food: !self.drinks.is_empty() || !self.food.is_empty(),
        }
    }

    fn menu(&self) -> DraftUpdate {
        DraftUpdate::new()
            .with_drinks(self.drinks.clone())
            .with_food(self.food.clone())
    }

    fn privacy(&self) -> DraftUpdate {
        DraftUpdate::new().with_private(!self.public)
    }
}

fn parse_drink(value: &str) -> std::result::Result<DrinkRef, String> {
    match value.split_once(':') {
        Some((id, name)) if !id.trim().is_empty() && !name.trim().is_empty() => Ok(DrinkRef {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
        }),
        _ => Err(format!("expected ID:NAME, got '{value}'")),
    }
}

/// Runs one command against a built [`Soiree`] context.
pub struct Cli {
    soiree: Soiree,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(soiree: Soiree, renderer: TerminalRenderer) -> Self {
        Self { soiree, renderer }
    }

    pub async fn login(&self, args: &LoginArgs) -> Result<()> {
        self.soiree
            .session()
            .login(&args.username, &args.password)
            .await
            .context("Login failed")?;
        let session = self.soiree.session();
        session.wait_for_hydration().await;

        let status = OperationStatus::success(format!("Logged in as {}", args.username));
        self.renderer
            .render(&format!("{status}\n{}", session.session()))
    }

    pub async fn register(&self, args: &RegisterArgs) -> Result<()> {
        let issued = self
            .soiree
            .session()
            .register(&args.email, &args.password, &args.name)
            .await
            .context("Registration failed")?;

        let status = if issued {
            self.soiree.session().wait_for_hydration().await;
            OperationStatus::success(format!("Registered and logged in as {}", args.email))
        } else {
            OperationStatus::success(format!(
                "Registered {}; log in once the account is confirmed",
                args.email
            ))
        };
        self.renderer.render(&status.to_string())
    }

    pub fn logout(&self) -> Result<()> {
        self.soiree.session().logout();
        self.renderer
            .render(&OperationStatus::success("Logged out").to_string())
    }

    pub async fn whoami(&self) -> Result<()> {
        let session = self.soiree.session();
        let state = session.wait_for_hydration().await;
        info!("Session is {state}");
        self.renderer.render(&session.session().to_string())
    }

    pub async fn handle_artist_command(&self, command: ArtistCommands) -> Result<()> {
        match command {
            ArtistCommands::Search { name } => {
                let artists = self
                    .soiree
                    .music()
                    .search_artists(&name)
                    .await
                    .context("Failed to search artists")?;
                self.renderer.render(&format!(
                    "# Artists matching '{name}'\n\n{}",
                    Artists(artists)
                ))
            }
        }
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Create(args) => self.create_event(&args).await,
        }
    }

    async fn create_event(&self, args: &CreateEventArgs) -> Result<()> {
        let wizard = self.soiree.wizard();

        wizard.update_form_data(args.basics());
        wizard.update_form_data(args.location());
        wizard.update_form_data(DraftUpdate::new().with_enabled_steps(args.enabled_steps()));

        if !args.artists.is_empty() {
            let mut lineup = Vec::with_capacity(args.artists.len());
            for query in &args.artists {
                let found = self
                    .soiree
                    .music()
                    .search_artists(query)
                    .await
                    .with_context(|| format!("Failed to search artists for '{query}'"))?;
                match found.into_iter().next() {
                    Some(artist) => lineup.push(artist),
                    None => warn!("No artist matches '{query}'"),
                }
            }
            if lineup.is_empty() {
                bail!("None of the requested artists were found");
            }
            wizard.update_form_data(DraftUpdate::new().with_artists(lineup));
        }

        wizard.update_form_data(args.menu());
        wizard.update_form_data(args.privacy());

        let preview = wizard.form_data().to_string();
        if args.dry_run {
            return self.renderer.render(&preview);
        }

        let created = self
            .soiree
            .submit_draft()
            .await
            .context("Failed to create event")?;
        self.renderer
            .render(&format!("{}\n{preview}", CreateResult::new(created)))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args as CliArgs, Commands};

    fn parse_create(extra: &[&str]) -> CreateEventArgs {
        let mut argv = vec!["soiree", "event", "create", "Halloween"];
        argv.extend_from_slice(extra);
        match CliArgs::try_parse_from(argv).expect("arguments should parse").command {
            Some(Commands::Event {
                command: EventCommands::Create(args),
            }) => args,
            _ => panic!("expected event create"),
        }
    }

    #[test]
    fn test_parse_drink() {
        assert_eq!(
            parse_drink("d1:Punch").unwrap(),
            DrinkRef {
                id: "d1".to_string(),
                name: "Punch".to_string()
            }
        );
        assert!(parse_drink("Punch").is_err());
        assert!(parse_drink(":Punch").is_err());
    }

    #[test]
    fn test_create_args_map_to_steps() {
        let args = parse_create(&[
            "--date",
            "2026-10-31",
            "--time",
            "21:00",
            "--lat",
            "-33.86",
            "--lng",
            "151.2",
            "--drink",
            "d1:Punch",
            "--public",
        ]);

        let mut draft = soiree_core::WizardDraft::default();
        args.basics().apply_to(&mut draft);
        args.location().apply_to(&mut draft);
        args.menu().apply_to(&mut draft);
        args.privacy().apply_to(&mut draft);

        assert_eq!(draft.name, "Halloween");
        assert_eq!(draft.date, Some(jiff::civil::date(2026, 10, 31)));
        assert_eq!(draft.time, Some(jiff::civil::time(21, 0, 0, 0)));
        assert_eq!(
            draft.location,
            Some(Location {
                lat: -33.86,
                lng: 151.2
            })
        );
        assert_eq!(draft.drinks.len(), 1);
        assert!(!draft.is_private);
        assert_eq!(
            args.enabled_steps(),
            EnabledSteps {
                music: false,
                drinks_and_food: true
            }
        );
    }

    #[test]
    fn test_latitude_requires_longitude() {
        let result = CliArgs::try_parse_from(["soiree", "event", "create", "X", "--lat", "1.0"]);
        assert!(result.is_err());
    }
}
