//! Command-line front end for the Reservista administration dashboard.
//!
//! The session is kept in `<data-dir>/session.json`; entity data is the
//! seeded demo set, rebuilt on every run.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use reservista_admin::auth::resolve;
use reservista_admin::entities::ReservationStatus;
use reservista_admin::{
    AuthConfig, AuthService, DashboardSummary, FileStorage, ReservationFilter, Restaurant,
    RestaurantConfig, Route, SessionUser,
};
use reservista_core::{CollectionManager, Fields, FixedLatency};
use tracing_subscriber::EnvFilter;

use crate::render::{print_view, Row};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the session file
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Records per page for users, tables, reservations and menu items
    #[arg(long, default_value_t = 5)]
    page_size: usize,

    /// Simulated round trip for logins and mutations in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with a mock account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List one page of an entity
    List {
        entity: Entity,
        /// Case-insensitive substring matched against every field
        #[arg(long, default_value = "")]
        search: String,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Reservation status filter
        #[arg(long, value_parser = parse_status)]
        status: Option<ReservationStatus>,
        /// Reservation date filter (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the dashboard summary
    Dashboard {
        /// Day to count reservations for (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Entity {
    Users,
    Tables,
    Reservations,
    Menu,
    Categories,
    Images,
}

impl Entity {
    fn route(self) -> Route {
        match self {
            Entity::Users => Route::Users,
            Entity::Tables => Route::Tables,
            Entity::Reservations => Route::Reservations,
            Entity::Menu | Entity::Categories => Route::Menu,
            Entity::Images => Route::Images,
        }
    }
}

fn parse_status(value: &str) -> Result<ReservationStatus, String> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| format!("unknown status '{}'", value))
}

/// Fails unless the session may open `route`.
fn guard(route: Route, session: Option<&SessionUser>) -> Result<()> {
    let target = resolve(route, session);
    if target != route {
        bail!("{} requires a signed-in user; run `login` first", route);
    }
    Ok(())
}

fn list_page<T: Fields + Row>(
    manager: &CollectionManager<T, FixedLatency>,
    search: &str,
    page: usize,
    json: bool,
) -> Result<()> {
    manager.set_search_term(search);
    manager.set_page(page);
    print_view(&manager.view(), json)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let auth = AuthService::new(
        FileStorage::new(&args.data_dir),
        AuthConfig {
            login_delay_ms: args.delay_ms,
        },
    );
    let session = auth.current_user().context("Failed to read session")?;
    let config = RestaurantConfig {
        page_size: args.page_size,
        mutation_delay_ms: args.delay_ms,
        ..Default::default()
    };

    match args.command {
        Command::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            tracing::info!("Session stored in {}", args.data_dir.display());
            println!("Signed in as {} <{}> ({})", user.name, user.email, user.role);
        }
        Command::Logout => {
            auth.logout()?;
            println!("Signed out");
        }
        Command::Whoami => match session {
            Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
            None => println!("Not signed in"),
        },
        Command::List {
            entity,
            search,
            page,
            status,
            date,
            json,
        } => {
            guard(entity.route(), session.as_ref())?;
            let restaurant = open_restaurant(config)?;
            match entity {
                Entity::Users => list_page(restaurant.users(), &search, page, json)?,
                Entity::Tables => list_page(restaurant.tables(), &search, page, json)?,
                Entity::Menu => list_page(restaurant.menu_items(), &search, page, json)?,
                Entity::Categories => list_page(restaurant.categories(), &search, page, json)?,
                Entity::Images => list_page(restaurant.images(), &search, page, json)?,
                Entity::Reservations => {
                    let reservations = restaurant.reservations();
                    reservations.set_search_term(search);
                    reservations.set_page(page);
                    let view = ReservationFilter { status, date }.view(reservations);
                    print_view(&view, json)?;
                }
            }
        }
        Command::Dashboard { date } => {
            guard(Route::Dashboard, session.as_ref())?;
            let restaurant = open_restaurant(config)?;
            let today = date.unwrap_or_else(|| Utc::now().date_naive());
            println!("{}", DashboardSummary::collect(&restaurant, today));
        }
    }

    Ok(())
}

fn open_restaurant(config: RestaurantConfig) -> Result<Restaurant> {
    Restaurant::new(config).context("Failed to load restaurant data")
}
