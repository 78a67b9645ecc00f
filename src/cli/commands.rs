//! CLI command handlers.

use std::str::FromStr;

use super::{CallArgs, Cli, LoginUrlArgs, RedirectArgs};
use crate::auth::{LoginOptions, StdoutNavigator};
use crate::call::{CallResponse, HttpMethod};
use crate::config::BeehiveConfig;
use crate::error::{BeehiveError, Result};
use crate::session::Session;

/// Environment config with the global flags applied on top.
pub fn resolve_config(cli: &Cli) -> BeehiveConfig {
    let mut config = BeehiveConfig::from_env();
    if let Some(host) = &cli.host {
        config = config.with_host(host.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    config
}

/// Handle `beehive login-url`.
pub fn handle_login_url(config: BeehiveConfig, args: &LoginUrlArgs) -> Result<()> {
    let mut config = config;
    if let Some(client_id) = &args.client_id {
        config = config.with_client_id(client_id.clone());
    }
    if let Some(scopes) = &args.scopes {
        config = config.with_scopes(scopes.clone());
    }
    if let Some(redirect_url) = &args.redirect_url {
        config = config.with_redirect_url(redirect_url.clone());
    }
    let options = LoginOptions::from_config(&config)?;
    Session::from_config(config, "").login(&options, &StdoutNavigator);
    Ok(())
}

/// Handle `beehive status`.
pub async fn handle_status(config: BeehiveConfig, args: &RedirectArgs) -> Result<()> {
    let session = Session::from_config(config, &args.redirect);
    if let Some(error) = session.authorization_error() {
        println!("Authorization failed: {error}");
        return Ok(());
    }
    let Some(token) = session.token() else {
        println!("Not logged in: redirect carries no access token");
        return Ok(());
    };
    println!("Host:    {}", session.host());
    if let Some(expires_at) = token.expires_at() {
        println!("Expires: {expires_at}");
    }

    println!("{}", connectivity_line(&session.is_connected().await));
    Ok(())
}

fn connectivity_line(outcome: &Result<CallResponse>) -> String {
    match outcome {
        Ok(_) => "Status:  connected".to_string(),
        Err(e) => format!("Status:  token rejected ({e})"),
    }
}

/// Handle `beehive robots`.
pub async fn handle_robots(config: BeehiveConfig, args: &RedirectArgs) -> Result<()> {
    let session = Session::from_config(config, &args.redirect);
    let response = session.get_robots().await?;
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}

/// Handle `beehive call`.
pub async fn handle_call(config: BeehiveConfig, args: &CallArgs) -> Result<()> {
    let method = HttpMethod::from_str(&args.method)
        .map_err(|_| BeehiveError::InvalidArgument(format!("unknown method: {}", args.method)))?;
    let body: Option<serde_json::Value> = args
        .body
        .as_deref()
        .map(serde_json::from_str)
        .transpose()?;

    let session = Session::from_config(config, &args.redirect.redirect);
    let response = session.call(method, &args.path, body).await?;
    println!("{}", serde_json::to_string_pretty(&response.body)?);
    Ok(())
}
