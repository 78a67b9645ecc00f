//! CLI entry point for Beehive.

pub mod commands;

use clap::{Args, Parser, Subcommand};

/// Beehive API CLI
#[derive(Parser, Debug)]
#[command(name = "beehive", version, about = "Beehive — Neato cloud API CLI")]
pub struct Cli {
    /// API host (overrides BEEHIVE_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Send API requests to this origin instead of https://<host>
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the authorization URL to start a login
    LoginUrl(LoginUrlArgs),
    /// Show the identity carried by a redirect and check it against the API
    Status(RedirectArgs),
    /// List robots linked to the account
    Robots(RedirectArgs),
    /// Issue a signed request
    Call(CallArgs),
}

/// Arguments for `beehive login-url`.
#[derive(Args, Debug)]
pub struct LoginUrlArgs {
    /// OAuth client id (overrides BEEHIVE_CLIENT_ID)
    #[arg(long)]
    pub client_id: Option<String>,

    /// Requested scopes (overrides BEEHIVE_SCOPES)
    #[arg(long)]
    pub scopes: Option<String>,

    /// Redirect URL registered for the client (overrides BEEHIVE_REDIRECT_URL)
    #[arg(long)]
    pub redirect_url: Option<String>,
}

/// Redirect the browser landed on after login.
#[derive(Args, Debug)]
pub struct RedirectArgs {
    /// Full redirect URL or its fragment (`#access_token=...`)
    #[arg(short, long)]
    pub redirect: String,
}

/// Arguments for `beehive call`.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    pub method: String,

    /// Request path, e.g. /users/me
    pub path: String,

    /// JSON body for POST, PUT and PATCH
    #[arg(short, long)]
    pub body: Option<String>,

    #[command(flatten)]
    pub redirect: RedirectArgs,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_login_url_with_overrides() {
        let cli = Cli::try_parse_from([
            "beehive",
            "login-url",
            "--client-id",
            "123",
            "--scopes",
            "control_robots",
        ])
        .unwrap();
        match cli.command {
            Commands::LoginUrl(args) => {
                assert_eq!(args.client_id.as_deref(), Some("123"));
                assert_eq!(args.scopes.as_deref(), Some("control_robots"));
                assert_eq!(args.redirect_url, None);
            }
            other => panic!("expected LoginUrl, got {other:?}"),
        }
    }

    #[test]
    fn parse_status_with_global_host() {
        let cli = Cli::try_parse_from([
            "beehive",
            "status",
            "--redirect",
            "#access_token=abc",
            "--host",
            "staging.example",
        ])
        .unwrap();
        assert_eq!(cli.host.as_deref(), Some("staging.example"));
        match cli.command {
            Commands::Status(args) => assert_eq!(args.redirect, "#access_token=abc"),
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn parse_call_with_body() {
        let cli = Cli::try_parse_from([
            "beehive",
            "call",
            "POST",
            "/users/me",
            "--body",
            r#"{"key":"value"}"#,
            "-r",
            "access_token=abc",
        ])
        .unwrap();
        match cli.command {
            Commands::Call(args) => {
                assert_eq!(args.method, "POST");
                assert_eq!(args.path, "/users/me");
                assert_eq!(args.body.as_deref(), Some(r#"{"key":"value"}"#));
                assert_eq!(args.redirect.redirect, "access_token=abc");
            }
            other => panic!("expected Call, got {other:?}"),
        }
    }

    #[test]
    fn robots_requires_redirect() {
        assert!(Cli::try_parse_from(["beehive", "robots"]).is_err());
    }
}
