//! Tests for session construction and login.

use std::sync::Mutex;

use beehive::auth::LoginOptions;
use beehive::config::BeehiveConfig;
use beehive::session::Session;
use pretty_assertions::assert_eq;

const REDIRECT_TOKEN: &str = "f9fbd7c3c2f5d9373ea22967c252bc17a0e755aeaec8fff0e0752934b0897b70";

#[test]
fn session_defaults_to_beehive_host() {
    let session = Session::from_fragment("");
    assert_eq!(session.host(), "beehive.neatocloud.com");
}

#[test]
fn redirect_with_access_token_sets_token() {
    let session = Session::from_fragment(&format!(
        "#access_token={REDIRECT_TOKEN}&token_type=bearer&expires_in=1209600"
    ));

    assert_eq!(session.access_token(), Some(REDIRECT_TOKEN));
    let token = session.token().unwrap();
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
    assert_eq!(token.expires_in, Some(1_209_600));
    assert!(session.authorization_error().is_none());
    assert!(!session.authentication_error());
}

#[test]
fn redirect_with_empty_access_token_keeps_empty_token() {
    let session = Session::from_fragment("#access_token=");

    assert_eq!(session.access_token(), Some(""));
    assert_eq!(session.token().unwrap().authorization_value(), "Bearer ");
    assert!(session.authorization_error().is_none());
}

#[test]
fn redirect_with_error_sets_error_fields() {
    let session = Session::from_fragment(
        "https://app.example/callback#error=access_denied&error_description=The+user+denied",
    );

    assert_eq!(session.token(), None);
    let error = session.authorization_error().unwrap();
    assert_eq!(error.code, "access_denied");
    assert_eq!(error.description.as_deref(), Some("The+user+denied"));
    assert!(session.authentication_error());
}

#[test]
fn redirect_with_error_and_no_description() {
    let session = Session::from_fragment("#error=server_error");
    let error = session.authorization_error().unwrap();
    assert_eq!(error.code, "server_error");
    assert_eq!(error.description, None);
}

#[test]
fn redirect_with_token_and_error_is_unauthenticated() {
    let session = Session::from_fragment("#access_token=abc&error=access_denied");
    assert_eq!(session.token(), None);
    assert!(session.authorization_error().is_none());
    assert!(!session.authentication_error());
}

#[test]
fn redirect_without_known_keys_is_unauthenticated() {
    let session = Session::from_fragment("#state=xyz&foo");
    assert_eq!(session.token(), None);
    assert!(session.authorization_error().is_none());
    assert_eq!(session.host(), "beehive.neatocloud.com");
}

#[test]
fn authentication_error_is_false_without_error() {
    assert!(!Session::from_fragment("").authentication_error());
    assert!(!Session::from_fragment("#error=").authentication_error());
}

#[test]
fn connected_is_unknown_before_any_check() {
    let session = Session::from_fragment("#access_token=abc");
    assert_eq!(session.connected(), None);
}

#[test]
fn login_navigates_to_exact_authorize_url() {
    let session = Session::from_fragment("");
    let visited = Mutex::new(Vec::<String>::new());
    let options = LoginOptions::builder()
        .client_id("123")
        .scopes("my-scopes")
        .redirect_url("my-url")
        .build();

    session.login(&options, &|url: &str| {
        visited.lock().unwrap().push(url.to_string())
    });

    assert_eq!(
        visited.into_inner().unwrap(),
        vec![format!(
            "https://{}/oauth2/authorize?client_id=123&scope=my-scopes&response_type=token&redirect_uri=my-url",
            session.host()
        )]
    );
}

#[test]
fn login_options_from_config() {
    let config = BeehiveConfig::new()
        .with_client_id("abc")
        .with_scopes("control_robots+public_profile")
        .with_redirect_url("https://app.example/cb");
    let session = Session::from_config(config.clone(), "");
    let options = LoginOptions::from_config(&config).unwrap();

    assert_eq!(
        session.authorize_url(&options),
        "https://beehive.neatocloud.com/oauth2/authorize?client_id=abc&scope=control_robots+public_profile&response_type=token&redirect_uri=https://app.example/cb"
    );
}

#[test]
fn clones_share_identity() {
    let session = Session::from_fragment("#access_token=abc");
    let clone = session.clone();
    assert!(session.ptr_eq(&clone));
    assert!(!session.ptr_eq(&Session::from_fragment("#access_token=abc")));
}
