//! # Procure Session Library
//!
//! Session controller for the procurement forms: order form, virtual credit
//! card request and order number generator. The browser view layer sends raw
//! field edits to the commands here and renders what they return.
//!
//! ## Module Organization
//! ```text
//! procure_session/
//! ├── lib.rs          ◄─── You are here (Session & logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Layered configuration
//! │   ├── order_form.rs ◄─ Order form draft
//! │   ├── card.rs     ◄─── Card request draft
//! │   ├── generator.rs ◄── Order number generator inputs
//! │   ├── order_number.rs ◄ Shared order number
//! │   └── tab.rs      ◄─── Active tab
//! ├── commands/       ◄─── One module per tab, plus catalog & config
//! ├── render/         ◄─── Screen tables and print layout
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## One Session per Browser Tab
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session                                                                │
//! │                                                                         │
//! │  config ───────► read by every form, never written by commands          │
//! │  order_form ───► items, adjustments, details                            │
//! │  card_form ────► card request draft                                     │
//! │  generator ────► year, department, initials, sequence                   │
//! │  order_number ─► written by the generator, read by both forms           │
//! │  tab ──────────► which form is visible                                  │
//! │                                                                         │
//! │  Fields are public so a caller can borrow two of them at once:          │
//! │    commands::order::submit_order(&mut s.order_form, &s.order_number)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use chrono::NaiveDate;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{CardFormState, ConfigState, GeneratorState, OrderFormState, OrderNumberState, Tab};

/// All state of one forms session.
#[derive(Debug)]
pub struct Session {
    pub config: ConfigState,
    pub order_number: OrderNumberState,
    pub order_form: OrderFormState,
    pub card_form: CardFormState,
    pub generator: GeneratorState,
    pub tab: Tab,
}

impl Session {
    /// Starts a session with every form at its configured defaults.
    pub fn new(config: ConfigState) -> Self {
        Self::with_date(config, commands::today())
    }

    /// Like [`Session::new`], with the generator year taken from `today`.
    pub fn with_date(config: ConfigState, today: NaiveDate) -> Self {
        let session = Session {
            order_number: OrderNumberState::new(),
            order_form: OrderFormState::new(&config),
            card_form: CardFormState::new(&config),
            generator: GeneratorState::new(&config, today),
            tab: Tab::default(),
            config,
        };

        info!(
            department = %session.generator.department(),
            tax_rate = %session.config.order.tax_rate,
            "Session started"
        );
        session
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=procure=trace` - Show trace for procure crates only
/// - Default: INFO, DEBUG for procure crates
///
/// Calling it twice is harmless; the second call keeps the first subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,procure=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .try_init();
}
