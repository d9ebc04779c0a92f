use std::default::Default;

/// Contains Config properties which will be used by a ClusterNode
#[derive(Clone, Debug)]
pub struct ClusterConfig {
    /// Name used for this node in log output
    pub node_name: String,
    /// Log a warning when a sender's messages arrive with a tick older
    /// than one already delivered from it
    pub warn_on_tick_regression: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            node_name: String::from("node"),
            warn_on_tick_regression: true,
        }
    }
}
