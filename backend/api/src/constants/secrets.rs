use std::fs;
use std::path::Path;

const DOCKER_SECRETS_PATH: &str = "/run/secrets/";

/// Read a docker secret mounted under `/run/secrets/`.
pub fn read_secret(name: &str) -> Result<String, std::io::Error> {
    fs::read_to_string(Path::new(DOCKER_SECRETS_PATH).join(name.to_lowercase()))
}
