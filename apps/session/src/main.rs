//! # Procure Session Entry Point
//!
//! Demo run of one forms session: loads the configuration, fills the sample
//! order, generates a sequence order number, submits and prints both views.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (defaults → `procure.toml` → `PROCURE_*` env)
//! 3. Create the session state
//! 4. Drive the order form through the commands
//! 5. Print screen and paper renderings to stdout

use procure_session::commands::{order, order_number};
use procure_session::render::{PrintRenderer, Renderer, ScreenRenderer};
use procure_session::state::ConfigState;
use procure_session::{init_tracing, Session};
use tracing::{error, info};

fn main() {
    init_tracing();
    info!("Starting procure session");

    let config = ConfigState::load_or_default(None);
    let mut session = Session::new(config);

    order::load_sample_order(&mut session.order_form, &session.config);

    if let Err(e) = order_number::generate_order_number(
        &mut session.generator,
        &mut session.order_number,
        "sequence",
    ) {
        error!(error = %e, "Could not generate an order number");
        std::process::exit(1);
    }

    let snapshot = match order::submit_order(&mut session.order_form, &session.order_number) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!(error = %e, fields = ?e.fields, "Sample order was rejected");
            std::process::exit(1);
        }
    };

    println!("{}", ScreenRenderer::new(&session.config).render_order(&snapshot));
    println!();
    println!("{}", PrintRenderer::new(&session.config).render_order(&snapshot));
}
