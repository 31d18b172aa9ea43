use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;

use worklist_codec::{decode_query, encode_query};
use worklist_model::{QueryData, QueryId};

use crate::cli::{DecodeArgs, EncodeArgs};

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let data = decode(args)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let json = match &args.json {
        Some(json) => json.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read query JSON from stdin")?;
            buffer
        }
    };
    let data: QueryData = serde_json::from_str(&json).context("parse query configuration")?;
    println!("{}", encode_query(&data));
    Ok(())
}

pub fn run_explain(args: &DecodeArgs) -> Result<()> {
    let data = decode(args)?;

    match &data.name {
        Some(name) => println!("query: {name}"),
        None => println!("query: (unnamed)"),
    }
    let active = data.filters.iter().filter(|f| !f.deactivated).count();
    println!("filters: {} ({} active)", data.filters.len(), active);
    for filter in &data.filters {
        let marker = if filter.deactivated { " (off)" } else { "" };
        println!(
            "  {} {} [{}]{marker}",
            filter.attribute,
            filter.operator,
            filter.values.join(", ")
        );
    }
    let columns: Vec<&str> = data.columns.iter().map(|c| c.as_str()).collect();
    println!("columns: {}", columns.join(", "));
    if let Some(group_by) = &data.group_by {
        println!("grouped by: {group_by}");
    }
    if data.page.is_some() || data.per_page.is_some() {
        println!(
            "pagination override: page {}, per page {}",
            data.page.map_or_else(|| "-".to_string(), |p| p.to_string()),
            data.per_page
                .map_or_else(|| "-".to_string(), |p| p.to_string())
        );
    }
    Ok(())
}

fn decode(args: &DecodeArgs) -> Result<QueryData> {
    let id = args
        .query_id
        .as_deref()
        .map(QueryId::new)
        .transpose()
        .context("invalid query id")?;
    debug!(token_len = args.token.len(), "decoding token");
    let decoded = decode_query(id, &args.token).context("decode token")?;
    Ok(decoded.data)
}
