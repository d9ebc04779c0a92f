use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::info;

use crate::types::NodeRole;

/// Decides whether the local node is authoritative (the cluster master).
///
/// Every state-mutating operation asks this first, on every call. The
/// answer may change between calls when mastership migrates, so it must
/// not be cached past a single operation.
pub trait RoleGate: Send + Sync {
    fn is_authoritative(&self) -> bool;
}

impl RoleGate for NodeRole {
    fn is_authoritative(&self) -> bool {
        self.is_master()
    }
}

impl<R: RoleGate + ?Sized> RoleGate for Arc<R> {
    fn is_authoritative(&self) -> bool {
        (**self).is_authoritative()
    }
}

/// A role handle that can be switched at runtime. Clones observe the same
/// role.
#[derive(Clone, Debug)]
pub struct SharedRole {
    master: Arc<AtomicBool>,
}

impl SharedRole {
    pub fn new(role: NodeRole) -> Self {
        Self {
            master: Arc::new(AtomicBool::new(role.is_master())),
        }
    }

    pub fn set(&self, role: NodeRole) {
        let was_master = self.master.swap(role.is_master(), Ordering::SeqCst);
        if was_master != role.is_master() {
            info!("Node role changed to {:?}", role);
        }
    }

    pub fn role(&self) -> NodeRole {
        if self.master.load(Ordering::SeqCst) {
            NodeRole::Master
        } else {
            NodeRole::Slave
        }
    }
}

impl RoleGate for SharedRole {
    fn is_authoritative(&self) -> bool {
        self.master.load(Ordering::SeqCst)
    }
}
