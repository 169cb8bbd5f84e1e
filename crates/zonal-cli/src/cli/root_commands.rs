use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch zones and print the full map view (centre, summary, overlays).
    Map,
    /// Fetch zones and print the centre and category summary.
    Summary,
    /// Fetch zones and print the decoded records.
    Zones,
    /// Print the JSON Schema of a map payload type.
    Schema(SchemaArgs),
}

/// Arguments for `zonal schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Payload type to describe.
    #[arg(value_enum, default_value = "map-view")]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    MapView,
    Overlay,
    Summary,
}
