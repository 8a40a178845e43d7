use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber when `RUST_LOG` is set.
///
/// Spans from `#[tracing::instrument]` pass entry points print as an
/// indented tree on stderr. Without `RUST_LOG` nothing is installed and
/// every `trace!`/`debug!` call stays a no-op. Safe to call repeatedly.
///
/// ```text
/// RUST_LOG=gaz_eval=trace gaz run prog.gaz
/// RUST_LOG=gaz_codegen=debug gaz emit prog.gaz
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        // `try_init` so a subscriber installed by an embedding host wins.
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tree)
            .try_init();
    });
}
