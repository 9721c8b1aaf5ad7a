//! # State Module
//!
//! Per-session state of the forms suite.
//!
//! ## One State Type per Concern
//! Instead of one struct with every field, each tab gets its own state
//! type and commands declare exactly which ones they touch.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Session                                  │   │
//! │  │  owns every state value, single-threaded, no locks              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴────┬────────────────┬──────────────┐    │
//! │     ▼              ▼              ▼                ▼              ▼    │
//! │  ┌────────┐  ┌────────────┐  ┌───────────┐  ┌────────────┐  ┌──────┐  │
//! │  │ Config │  │ OrderForm  │  │ CardForm  │  │ Generator  │  │ Tab  │  │
//! │  │ (r/o)  │  │ items,     │  │ request   │  │ year, III, │  │      │  │
//! │  │        │  │ totals     │  │           │  │ sequence   │  │      │  │
//! │  └────────┘  └─────┬──────┘  └─────┬─────┘  └─────┬──────┘  └──────┘  │
//! │                    │ reads         │ reads        │ writes             │
//! │                    └───────────────┼──────────────┘                    │
//! │                                    ▼                                   │
//! │                          ┌───────────────────┐                         │
//! │                          │ OrderNumberState  │                         │
//! │                          └───────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod card;
mod config;
mod generator;
mod order_form;
mod order_number;
mod tab;

pub use card::CardFormState;
pub use config::{
    CardSettings, ConfigState, DisplaySettings, InstitutionConfig, OrderDefaults, CONFIG_PATH_ENV,
    MIN_PAPER_WIDTH,
};
pub use generator::{GeneratorState, SchemeKind};
pub use order_form::OrderFormState;
pub use order_number::OrderNumberState;
pub use tab::Tab;
