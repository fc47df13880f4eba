//! Command-Line Parsing
//!
//! The hand-rolled `--flag value` argv loops for both binaries. A flag with
//! no following value is an error, not a panic; the binaries print the usage
//! message and exit on any `Err`.

use anyhow::{bail, Result};
use std::net::SocketAddr;

#[derive(Debug)]
pub struct OrchestratorArgs {
    pub bind_addr: SocketAddr,
    pub agents: Vec<SocketAddr>,
    pub db_url: String,
}

/// Parses orchestrator arguments: `--bind <addr:port>` (required),
/// `--agent <addr:port>` (repeatable), `--db <path>`.
pub fn parse_orchestrator_args(args: &[String]) -> Result<OrchestratorArgs> {
    let mut bind_addr: Option<SocketAddr> = None;
    let mut agents: Vec<SocketAddr> = vec![];
    let mut db_url = "sqlite://expressions.db".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(flag_value(args, i, "--bind")?.parse()?);
                i += 2;
            }
            "--agent" => {
                agents.push(flag_value(args, i, "--agent")?.parse()?);
                i += 2;
            }
            "--db" => {
                db_url = format!("sqlite://{}", flag_value(args, i, "--db")?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        bail!("--bind is required");
    };

    Ok(OrchestratorArgs {
        bind_addr,
        agents,
        db_url,
    })
}

#[derive(Debug)]
pub struct AgentArgs {
    pub bind_addr: SocketAddr,
}

/// Parses agent arguments: `--bind <addr:port>` (required).
pub fn parse_agent_args(args: &[String]) -> Result<AgentArgs> {
    let mut bind_addr: Option<SocketAddr> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(flag_value(args, i, "--bind")?.parse()?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        bail!("--bind is required");
    };

    Ok(AgentArgs { bind_addr })
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(value) => Ok(value),
        None => bail!("missing value for {}", flag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_orchestrator_args_full() {
        let parsed = parse_orchestrator_args(&args(&[
            "--bind",
            "127.0.0.1:8080",
            "--agent",
            "127.0.0.1:8081",
            "--agent",
            "127.0.0.1:8082",
            "--db",
            "calc.db",
        ]))
        .expect("valid arguments");

        assert_eq!(parsed.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(parsed.agents.len(), 2);
        assert_eq!(parsed.db_url, "sqlite://calc.db");
    }

    #[test]
    fn test_orchestrator_args_defaults() {
        let parsed = parse_orchestrator_args(&args(&["--bind", "127.0.0.1:8080"]))
            .expect("valid arguments");

        assert!(parsed.agents.is_empty());
        assert_eq!(parsed.db_url, "sqlite://expressions.db");
    }

    #[test]
    fn test_bind_is_required() {
        let result = parse_orchestrator_args(&args(&["--agent", "127.0.0.1:8081"]));
        assert!(result.is_err());

        let result = parse_agent_args(&args(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_flag_without_value_is_an_error() {
        // A flag as the final argument must report an error, not panic.
        let result = parse_orchestrator_args(&args(&["--bind"]));
        assert!(result.unwrap_err().to_string().contains("missing value"));

        let result = parse_orchestrator_args(&args(&["--bind", "127.0.0.1:8080", "--agent"]));
        assert!(result.unwrap_err().to_string().contains("missing value"));

        let result = parse_agent_args(&args(&["--bind"]));
        assert!(result.unwrap_err().to_string().contains("missing value"));
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let parsed = parse_orchestrator_args(&args(&["--verbose", "--bind", "127.0.0.1:8080"]))
            .expect("valid arguments");
        assert_eq!(parsed.bind_addr, "127.0.0.1:8080".parse().unwrap());
    }
}
