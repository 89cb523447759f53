use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque outlet identifier, generated client-side at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutletId(Uuid);

impl OutletId {
    pub(super) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OutletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A managed physical location. Created only through the outlet form,
/// never edited in place, removed only by a full reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: OutletId,
    pub name: String,
    pub address: String,
    pub campaign: String,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone)]
pub struct NewOutlet {
    pub name: String,
    pub address: String,
    pub campaign: String,
}

pub trait OutletRepository {
    /// Insertion order, which is also display order.
    fn outlets(&self) -> &[Outlet];
    fn outlet_by_id(&self, id: &OutletId) -> Option<&Outlet>;
    fn add_outlet(&mut self, outlet: NewOutlet) -> Outlet;
}
