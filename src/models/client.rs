//! Client type: a single cargo request.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::error::ValidationError;

/// Unique identifier of a client, generated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientId(Uuid);

impl ClientId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A client requesting transport of one cargo load.
///
/// Clients are immutable once built. Each construction yields a fresh
/// [`ClientId`], so two clients with identical fields are still distinct.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Client;
///
/// let c = Client::new("Ivan", 5.0, false).unwrap();
/// assert_eq!(c.name(), "Ivan");
/// assert_eq!(c.cargo_weight(), 5.0);
/// assert!(!c.is_vip());
///
/// assert!(Client::new("", 5.0, false).is_err());
/// assert!(Client::new("Maria", -1.0, true).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    id: ClientId,
    name: String,
    cargo_weight: f64,
    is_vip: bool,
}

impl Client {
    /// Creates a new client.
    ///
    /// Fails if `name` is blank or `cargo_weight` is negative or non-finite.
    /// A zero weight is accepted.
    pub fn new(
        name: impl Into<String>,
        cargo_weight: f64,
        is_vip: bool,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !cargo_weight.is_finite() || cargo_weight < 0.0 {
            return Err(ValidationError::InvalidCargoWeight(cargo_weight));
        }
        Ok(Self {
            id: ClientId::generate(),
            name,
            cargo_weight,
            is_vip,
        })
    }

    /// Client ID.
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Client name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight of the cargo, in tonnes.
    pub fn cargo_weight(&self) -> f64 {
        self.cargo_weight
    }

    /// Whether this client is placed ahead of regular clients.
    pub fn is_vip(&self) -> bool {
        self.is_vip
    }
}

/// Writes the one-line client description shared by every client view.
pub(crate) fn write_client_line(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cargo_weight: f64,
    is_vip: bool,
) -> fmt::Result {
    let status = if is_vip { "VIP" } else { "regular" };
    write!(f, "Client {name}, cargo weight: {cargo_weight} t, status: {status}")
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_client_line(f, &self.name, self.cargo_weight, self.is_vip)
    }
}
