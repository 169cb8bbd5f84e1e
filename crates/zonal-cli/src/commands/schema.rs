use schemars::{Schema, schema_for};
use zonal_core::{MapView, Overlay, ZoneSummary};

use crate::cli::{GlobalFlags, OutputFormat, SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `zonal schema`. Table format falls back to JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema(args.type_name), format)
}

fn schema(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::MapView => schema_for!(MapView),
        SchemaType::Overlay => schema_for!(Overlay),
        SchemaType::Summary => schema_for!(ZoneSummary),
    }
}
