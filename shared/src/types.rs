pub type Tick = u16;

/// Identifies one node of the rendering cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Master,
    Slave,
}

impl NodeRole {
    pub fn is_master(self) -> bool {
        self == NodeRole::Master
    }
}
