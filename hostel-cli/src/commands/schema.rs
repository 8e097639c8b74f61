//! Print record schemas without starting the server

use anyhow::Result;
use clap::Parser;

use hostel_server::models::schema;

#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Only print this entity (student, laundryrequest, attendancerecord, menu, issue)
    pub entity: Option<String>,

    /// Single-line JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

pub fn run_schema(args: SchemaArgs) -> Result<()> {
    let all = schema::all();
    let selected = match &args.entity {
        Some(name) => all
            .get(name.to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown entity '{}'", name))?,
        None => all,
    };

    let rendered = if args.compact {
        serde_json::to_string(&selected)?
    } else {
        serde_json::to_string_pretty(&selected)?
    };
    println!("{}", rendered);

    Ok(())
}
