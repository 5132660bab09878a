// File: crates/meridian-core/src/error.rs
// Summary: Error taxonomy for the few fallible chart surfaces (export, attribute decoding, kind lookup).

/// Errors surfaced by explicit `try_*`/export entry points.
/// Interactive paths (render, redraw, input handling) never return these; they
/// degrade and log instead.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unknown chart kind '{0}'")]
    UnknownKind(String),

    #[error("chart '{0}' has not been rendered yet")]
    NotRendered(String),

    #[error("no image exporter installed for chart '{0}'")]
    NoExporter(String),

    #[error("attribute '{key}' rejected value: {source}")]
    Attribute {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Export(#[from] anyhow::Error),
}

pub type ChartResult<T> = Result<T, ChartError>;
