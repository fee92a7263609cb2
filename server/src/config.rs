use error_stack::{Report, ResultExt};
use kernel::KernelError;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const HOST: &str = "SERVER_HOST";
const PORT: &str = "SERVER_PORT";
const SEED: &str = "SEED_DEALER";
const SEED_NAME: &str = "SEED_DEALER_NAME";
const SEED_LOCATION: &str = "SEED_DEALER_LOCATION";

/// Dealer created on startup when none exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDealer {
    pub name: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub seed: Option<SeedDealer>,
}

impl AppConfig {
    /// Reads the process environment, loading `.env` first if present.
    pub fn load() -> error_stack::Result<Self, KernelError> {
        env_file(dotenvy::dotenv())?;
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let host = lookup(HOST)
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{} is not an IP address", HOST))?;
        let port = lookup(PORT)
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("{} is not a port number", PORT))?;

        let seed = match lookup(SEED).as_deref() {
            None | Some("true") | Some("1") => Some(SeedDealer {
                name: lookup(SEED_NAME).unwrap_or_else(|| "Oscar Mobility Main".to_string()),
                location: Some(
                    lookup(SEED_LOCATION).unwrap_or_else(|| "Munich, Germany".to_string()),
                )
                .filter(|location| !location.is_empty()),
            }),
            Some("false") | Some("0") => None,
            Some(other) => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("{} has unexpected value `{}`", SEED, other)))
            }
        };

        Ok(Self {
            bind: SocketAddr::new(host, port),
            seed,
        })
    }
}

/// A missing `.env` is skipped; an unreadable or malformed one is an error.
fn env_file(loaded: Result<PathBuf, dotenvy::Error>) -> error_stack::Result<(), KernelError> {
    match loaded {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Report::new(e)
            .change_context(KernelError::Internal)
            .attach_printable("Failed to load .env")),
    }
}
