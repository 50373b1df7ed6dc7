//! Binary integration tests.
//!
//! These tests spawn the actual `autoassist` process to check startup
//! refusal without provider keys and the offline `risk` subcommand.

use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::process::{Command, Output};

/// Command with every AutoAssist-related variable cleared.
fn autoassist() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_autoassist"));
    for var in [
        "OPENAI_API_KEY",
        "GROQ_API_KEY",
        "OPENAI_BASE_URL",
        "GROQ_BASE_URL",
        "OPENAI_MODEL",
        "GROQ_MODEL",
        "AUTOASSIST_API_KEY",
        "AUTOASSIST_RATE_LIMIT",
        "AUTOASSIST_CORS_ORIGINS",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "off");
    cmd
}

/// A port nothing is listening on right now.
fn free_port() -> u16 {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).expect("Failed to bind ephemeral port");
    listener.local_addr().expect("No local address").port()
}

fn serve_on(port: u16, cmd: &mut Command) -> Output {
    cmd.args(["serve", "--port", &port.to_string()])
        .output()
        .expect("Failed to run autoassist serve")
}

mod startup {
    use super::*;

    #[test]
    fn refuses_to_serve_without_openai_key() {
        let port = free_port();

        let output = serve_on(port, autoassist().env("GROQ_API_KEY", "gsk-test"));

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Missing OPENAI_API_KEY"), "stderr was: {}", stderr);
        assert!(TcpStream::connect((Ipv4Addr::LOCALHOST, port)).is_err());
    }

    #[test]
    fn refuses_to_serve_without_groq_key() {
        let port = free_port();

        let output = serve_on(port, autoassist().env("OPENAI_API_KEY", "sk-test"));

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Missing GROQ_API_KEY"), "stderr was: {}", stderr);
        assert!(TcpStream::connect((Ipv4Addr::LOCALHOST, port)).is_err());
    }

    #[test]
    fn blank_key_is_refused_like_a_missing_one() {
        let port = free_port();

        let output = serve_on(
            port,
            autoassist()
                .env("OPENAI_API_KEY", "  ")
                .env("GROQ_API_KEY", "gsk-test"),
        );

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Missing OPENAI_API_KEY"));
    }
}

mod risk_command {
    use super::*;

    #[test]
    fn prints_escalation_note_without_provider_keys() {
        let output = autoassist()
            .args(["risk", "2015 Honda Civic, brake fluid leak under the car"])
            .output()
            .expect("Failed to run autoassist risk");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Safety Escalation Triggered"));
        assert!(stdout.contains("brake fluid leak"));
    }

    #[test]
    fn reports_no_hits_for_routine_question() {
        let output = autoassist()
            .args(["risk", "2012 Corolla wiper blades streak"])
            .output()
            .expect("Failed to run autoassist risk");

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "No high-risk keywords found."
        );
    }
}
