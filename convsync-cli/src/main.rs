//! Convsync CLI
//!
//! Line-oriented front end over the domain tables, standing in for the
//! page's input fields. Each line plays one edit event:
//!
//!   <domain> <unit> <value>   fan the value out, print sibling fields
//!   list                      show domains and their units
//!
//! With `--json` the fan-out result is printed as one JSON object.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use convsync_domains::DomainRegistry;
use serde_json::json;
use tracing::debug;

fn print_domains(registry: &DomainRegistry) {
    for group in registry.groups() {
        let keys: Vec<&str> = group.units().iter().map(|u| u.key.as_str()).collect();
        println!("{} (base {}): {}", group.name(), group.base_key(), keys.join(", "));
    }
}

fn handle_edit(registry: &DomainRegistry, line: &str, as_json: bool) {
    let mut parts = line.split_whitespace();
    let (Some(domain), Some(unit), Some(value)) = (parts.next(), parts.next(), parts.next())
    else {
        eprintln!("expected: <domain> <unit> <value>");
        return;
    };

    let Some(group) = registry.get(domain) else {
        eprintln!("unknown domain '{}' (try 'list')", domain);
        return;
    };
    if group.unit(unit).is_none() {
        eprintln!("unknown unit '{}' in domain '{}' (try 'list')", unit, domain);
        return;
    }

    let out = group.on_edit(unit, value);
    if out.is_empty() {
        // unparsable value; the engine ignores it silently, mirror that
        debug!(domain, unit, value, "edit ignored");
        return;
    }

    if as_json {
        println!("{}", json!({ "domain": domain, "edited": unit, "fields": out }));
    } else {
        for (key, text) in &out {
            let label = group.unit(key).map(|u| u.label.as_str()).unwrap_or("");
            println!("  {:>6} = {:<16} {}", key, text, label);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let as_json = env::args().any(|a| a == "--json");
    let registry = DomainRegistry::new()?;

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "list" {
            print_domains(&registry);
        } else {
            handle_edit(&registry, line, as_json);
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
