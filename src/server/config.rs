use crate::verifier::VerifyOptions;
use clap::Parser;

/// Server configuration from command-line flags or environment
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jwtview",
    version,
    about = "Decode, issue and verify HMAC-signed JWTs over HTTP"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "JWTVIEW_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on; a leading ':' is accepted
    #[arg(long, env = "PORT", default_value = "8080", value_parser = parse_port)]
    pub port: u16,

    /// Clock skew tolerated on exp/nbf, in seconds (max 300)
    #[arg(long, env = "JWTVIEW_LEEWAY", default_value_t = 0)]
    pub leeway: u64,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions::default().leeway(self.leeway)
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    let port = value.strip_prefix(':').unwrap_or(value);
    port.parse().map_err(|e| format!("invalid port '{value}': {e}"))
}
