//! Kept in its own test binary: the echo switch is process-wide.

use droplet_ips::api::{is_verbose, request_echo, response_echo, set_verbose};

#[test]
fn test_api_echo_is_opt_in() {
    let body = r#"{"droplets":[{"id":2,"tags":["secret-db"],"networks":{"v4":[{"ip_address":"203.0.113.77","type":"public"}]}}]}"#;
    let url = "https://api.digitalocean.com/v2/droplets?page=1&per_page=200";

    // Default run: nothing from the inventory reaches stdout.
    assert!(!is_verbose());
    assert_eq!(response_echo(body), None);
    assert_eq!(request_echo(url), None);

    set_verbose(true);
    let response = response_echo(body).unwrap();
    assert!(response.starts_with("Response:\n"));
    assert!(response.contains("203.0.113.77"));
    let request = request_echo(url).unwrap();
    assert!(request.contains("per_page=200"));
    assert!(request.contains("Bearer ***"));

    set_verbose(false);
    assert_eq!(response_echo(body), None);
}
