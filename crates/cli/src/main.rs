// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use bakery_orders_api::{
    AuthenticatedActor, AuthorizationService, OrderCapabilities, authenticate_stub,
    compute_order_capabilities,
};
use bakery_orders_domain::{
    ActorRole, CUSTOMER_TRANSITIONS, GLOBAL_TRANSITIONS, INTERNAL_TRANSITIONS, OrderStatus,
    all_states, is_transition_allowed_for_role_token, is_transition_valid_token,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, error};

/// Bakery Orders - query the order status transition engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether an order may move between two statuses.
    ///
    /// Exits 0 when the transition is allowed, 1 when it is not.
    Check {
        /// Current status token (e.g. `PENDING`)
        #[arg(long)]
        from: String,
        /// Requested status token (e.g. `CONFIRMED`)
        #[arg(long)]
        to: String,
        /// Role class performing the transition (`CUSTOMER` or `INTERNAL`)
        #[arg(long)]
        role: Option<String>,
    },
    /// List what a role may do with an order in a given status.
    Actions {
        /// Role class (`CUSTOMER` or `INTERNAL`)
        #[arg(long)]
        role: String,
        /// Current status token
        #[arg(long)]
        status: String,
        /// Actor identifier
        #[arg(long, default_value = "cli")]
        actor: String,
    },
    /// Print the global and per-role transition tables.
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Outcome of a `check` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CheckReport {
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Whether the lifecycle has this transition at all.
    valid: bool,
    /// Whether the role may perform it; absent when no role was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl CheckReport {
    const fn accepted(&self) -> bool {
        match self.allowed {
            Some(allowed) => allowed,
            None => self.valid,
        }
    }
}

/// One row of the `table` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TableRow {
    status: OrderStatus,
    terminal: bool,
    content_locked: bool,
    global: Vec<OrderStatus>,
    customer: Vec<OrderStatus>,
    internal: Vec<OrderStatus>,
}

/// Errors that stop a command before it produces output.
#[derive(Debug)]
enum CliError {
    Domain(bakery_orders_domain::DomainError),
    Api(bakery_orders_api::ApiError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{err}"),
            Self::Api(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "Failed to render JSON: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<bakery_orders_domain::DomainError> for CliError {
    fn from(err: bakery_orders_domain::DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<bakery_orders_api::AuthError> for CliError {
    fn from(err: bakery_orders_api::AuthError) -> Self {
        Self::Api(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Answers a `check` query.
///
/// Unrecognized tokens are not errors here: they simply make the transition
/// invalid, with the offending token named in the reason.
fn check(from: &str, to: &str, role: Option<&str>) -> CheckReport {
    let valid: bool = is_transition_valid_token(from, to);
    let allowed: Option<bool> = role.map(|role| is_transition_allowed_for_role_token(role, from, to));

    let reason: Option<String> = if allowed.unwrap_or(valid) {
        None
    } else if let Some(token) = [from, to]
        .into_iter()
        .find(|token| OrderStatus::from_token(token).is_none())
    {
        Some(format!("unrecognized status '{token}'"))
    } else if let Some(token) = role.filter(|role| ActorRole::from_token(role).is_none()) {
        Some(format!("unrecognized role '{token}'"))
    } else {
        // Both statuses parsed, so the authorization service can explain.
        let from_status = OrderStatus::from_token(from);
        let to_status = OrderStatus::from_token(to);
        let actor_role = role.and_then(ActorRole::from_token);
        match (from_status, to_status, actor_role) {
            (Some(from_status), Some(to_status), Some(actor_role)) => {
                let actor = AuthenticatedActor::new(String::from("cli"), actor_role);
                AuthorizationService::authorize_transition(&actor, from_status, to_status)
                    .err()
                    .map(|err| err.to_string())
            }
            (Some(from_status), Some(to_status), None) => Some(format!(
                "Transition from {from_status} to {to_status} is not part of the order lifecycle"
            )),
            _ => None,
        }
    };

    CheckReport {
        from: from.to_string(),
        to: to.to_string(),
        role: role.map(str::to_string),
        valid,
        allowed,
        reason,
    }
}

fn render_check(report: &CheckReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = format!(
                "{} -> {}: {}",
                report.from,
                report.to,
                if report.valid { "valid" } else { "invalid" }
            );
            if let (Some(role), Some(allowed)) = (&report.role, report.allowed) {
                out.push_str(&format!(
                    "\n{role}: {}",
                    if allowed { "allowed" } else { "not allowed" }
                ));
            }
            if let Some(reason) = &report.reason {
                out.push_str(&format!("\nreason: {reason}"));
            }
            Ok(out)
        }
    }
}

fn actions(actor_id: String, role: &str, status: &str) -> Result<OrderCapabilities, CliError> {
    let role: ActorRole = role.parse()?;
    let status: OrderStatus = status.parse()?;
    let actor: AuthenticatedActor = authenticate_stub(actor_id, role)?;
    Ok(compute_order_capabilities(&actor, status))
}

fn render_actions(caps: &OrderCapabilities, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(caps)?),
        OutputFormat::Text => {
            let mut lines: Vec<String> = vec![format!(
                "status: {} ({})",
                caps.status,
                caps.status.label()
            )];
            if caps.transitions.is_empty() {
                lines.push(String::from("transitions: none"));
            }
            for transition in &caps.transitions {
                let suffix = if transition.requires_confirmation {
                    " [requires confirmation]"
                } else {
                    ""
                };
                lines.push(format!(
                    "  -> {} ({}){suffix}",
                    transition.target, transition.label
                ));
            }
            lines.push(format!(
                "edit contents: {}",
                if caps.can_edit_contents.is_allowed() {
                    "yes"
                } else {
                    "no"
                }
            ));
            lines.push(String::from("refresh: yes"));
            Ok(lines.join("\n"))
        }
    }
}

fn table() -> Vec<TableRow> {
    all_states()
        .into_iter()
        .map(|status| TableRow {
            status,
            terminal: status.is_terminal(),
            content_locked: status.is_content_locked(),
            global: GLOBAL_TRANSITIONS.successors(status).to_vec(),
            customer: CUSTOMER_TRANSITIONS.successors(status).to_vec(),
            internal: INTERNAL_TRANSITIONS.successors(status).to_vec(),
        })
        .collect()
}

fn join_statuses(statuses: &[OrderStatus]) -> String {
    if statuses.is_empty() {
        return String::from("-");
    }
    statuses
        .iter()
        .map(OrderStatus::as_str)
        .collect::<Vec<&str>>()
        .join(", ")
}

fn render_table(rows: &[TableRow], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Text => {
            let mut lines: Vec<String> = vec![format!(
                "{:<14} {:<26} {:<20} {}",
                "STATUS", "GLOBAL", "CUSTOMER", "INTERNAL"
            )];
            for row in rows {
                let global = if row.terminal {
                    String::from("(terminal)")
                } else {
                    join_statuses(&row.global)
                };
                lines.push(format!(
                    "{:<14} {:<26} {:<20} {}",
                    row.status.as_str(),
                    global,
                    join_statuses(&row.customer),
                    join_statuses(&row.internal)
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    match args.command {
        Command::Check { from, to, role } => {
            debug!(%from, %to, role = ?role, "Handling check command");
            let report: CheckReport = check(&from, &to, role.as_deref());
            println!("{}", render_check(&report, args.format)?);
            Ok(if report.accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Actions {
            role,
            status,
            actor,
        } => {
            debug!(%role, %status, %actor, "Handling actions command");
            let caps: OrderCapabilities = actions(actor, &role, &status)?;
            println!("{}", render_actions(&caps, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Table => {
            debug!("Handling table command");
            println!("{}", render_table(&table(), args.format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_parse_check_command() {
        let args = Args::try_parse_from([
            "bakery-orders",
            "check",
            "--from",
            "PENDING",
            "--to",
            "CONFIRMED",
            "--role",
            "INTERNAL",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Text);
        match args.command {
            Command::Check { from, to, role } => {
                assert_eq!(from, "PENDING");
                assert_eq!(to, "CONFIRMED");
                assert_eq!(role.as_deref(), Some("INTERNAL"));
            }
            other => panic!("Expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_format_flag_is_global() {
        let args = Args::try_parse_from(["bakery-orders", "table", "--format", "json"]).unwrap();

        assert_eq!(args.format, OutputFormat::Json);
        assert!(matches!(args.command, Command::Table));
    }

    #[test]
    fn test_actions_requires_role_and_status() {
        assert!(Args::try_parse_from(["bakery-orders", "actions", "--role", "CUSTOMER"]).is_err());
    }

    #[test]
    fn test_check_allowed_transition() {
        let report = check("PENDING", "CONFIRMED", Some("INTERNAL"));

        assert!(report.valid);
        assert_eq!(report.allowed, Some(true));
        assert_eq!(report.reason, None);
        assert!(report.accepted());
    }

    #[test]
    fn test_check_role_rejection_explains_reason() {
        let report = check("PENDING", "CONFIRMED", Some("CUSTOMER"));

        assert!(report.valid);
        assert_eq!(report.allowed, Some(false));
        assert_eq!(
            report.reason.as_deref(),
            Some("Role CUSTOMER is not allowed to move an order from PENDING to CONFIRMED")
        );
        assert!(!report.accepted());
    }

    #[test]
    fn test_check_without_role_uses_lifecycle_only() {
        let report = check("READY", "CANCELLED", None);

        assert!(!report.valid);
        assert_eq!(report.allowed, None);
        assert_eq!(
            report.reason.as_deref(),
            Some("Transition from READY to CANCELLED is not part of the order lifecycle")
        );
        assert!(!report.accepted());
    }

    #[test]
    fn test_check_unknown_tokens_are_rejected_not_errors() {
        let report = check("UNKNOWN", "PENDING", None);
        assert!(!report.accepted());
        assert_eq!(
            report.reason.as_deref(),
            Some("unrecognized status 'UNKNOWN'")
        );

        let report = check("DRAFT", "PENDING", Some("GUEST"));
        assert!(report.valid);
        assert_eq!(report.allowed, Some(false));
        assert_eq!(report.reason.as_deref(), Some("unrecognized role 'GUEST'"));
    }

    #[test]
    fn test_render_check_text() {
        let report = check("DRAFT", "PENDING", Some("CUSTOMER"));

        let out = render_check(&report, OutputFormat::Text).unwrap();

        assert_eq!(out, "DRAFT -> PENDING: valid\nCUSTOMER: allowed");
    }

    #[test]
    fn test_render_check_json_omits_absent_fields() {
        let report = check("DRAFT", "PENDING", None);

        let out = render_check(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "from": "DRAFT", "to": "PENDING", "valid": true })
        );
    }

    #[test]
    fn test_actions_rejects_unknown_role() {
        let result = actions(String::from("cli"), "GUEST", "DRAFT");

        assert!(matches!(result, Err(CliError::Domain(_))));
    }

    #[test]
    fn test_actions_rejects_empty_actor() {
        let result = actions(String::new(), "CUSTOMER", "DRAFT");

        assert!(matches!(result, Err(CliError::Api(_))));
    }

    #[test]
    fn test_render_actions_text() {
        let caps = actions(String::from("cli"), "CUSTOMER", "DRAFT").unwrap();

        let out = render_actions(&caps, OutputFormat::Text).unwrap();

        assert_eq!(
            out,
            "status: DRAFT (Draft)\n  -> PENDING (Pending confirmation)\n  -> CANCELLED (Cancelled) [requires confirmation]\nedit contents: yes\nrefresh: yes"
        );
    }

    #[test]
    fn test_render_actions_for_terminal_status() {
        let caps = actions(String::from("cli"), "INTERNAL", "DELIVERED").unwrap();

        let out = render_actions(&caps, OutputFormat::Text).unwrap();

        assert!(out.contains("transitions: none"));
        assert!(out.contains("edit contents: no"));
    }

    #[test]
    fn test_table_has_one_row_per_status() {
        let rows = table();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].status, OrderStatus::Draft);
        assert_eq!(
            rows[0].customer,
            vec![OrderStatus::Pending, OrderStatus::Cancelled]
        );
        assert!(rows[0].internal.is_empty());
        assert!(rows[5].terminal);
        assert!(rows[6].terminal);
    }

    #[test]
    fn test_render_table_text() {
        let out = render_table(&table(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("STATUS"));
        assert!(lines[5].starts_with("READY"));
        assert!(lines[5].contains("DELIVERED"));
        assert!(lines[6].starts_with("DELIVERED"));
        assert!(lines[6].contains("(terminal)"));
    }

    #[test]
    fn test_render_table_json() {
        let out = render_table(&table(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[4]["status"], "READY");
        assert_eq!(value[4]["global"], serde_json::json!(["DELIVERED"]));
        assert_eq!(value[4]["customer"], serde_json::json!([]));
        assert_eq!(value[4]["content_locked"], true);
    }
}
