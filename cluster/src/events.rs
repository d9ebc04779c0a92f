use std::vec::IntoIter;

use vabridge_shared::{NodeId, PlayAction, SignalSourceId, Tick};

use crate::signal_source::SourceKey;

/// What happened on a node since the previous tick
pub struct ClusterEvents {
    ticks: Vec<Tick>,
    audiofile_changes: Vec<(SourceKey, SignalSourceId)>,
    play_actions: Vec<(NodeId, SourceKey, PlayAction)>,
    empty: bool,
}

impl Default for ClusterEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterEvents {
    pub(crate) fn new() -> Self {
        Self {
            ticks: Vec::new(),
            audiofile_changes: Vec::new(),
            play_actions: Vec::new(),
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn read<V: ClusterEvent>(&mut self) -> V::Iter {
        V::iter(self)
    }

    pub fn has<V: ClusterEvent>(&self) -> bool {
        V::has(self)
    }

    pub(crate) fn push_tick(&mut self, tick: Tick) {
        self.ticks.push(tick);
        self.empty = false;
    }

    pub(crate) fn push_audiofile_change(&mut self, source: SourceKey, id: SignalSourceId) {
        self.audiofile_changes.push((source, id));
        self.empty = false;
    }

    pub(crate) fn push_play_action(&mut self, sender: NodeId, source: SourceKey, action: PlayAction) {
        self.play_actions.push((sender, source, action));
        self.empty = false;
    }
}

// Event Trait
pub trait ClusterEvent {
    type Iter;

    fn iter(events: &mut ClusterEvents) -> Self::Iter;

    fn has(events: &ClusterEvents) -> bool;
}

// Tick Event
pub struct TickEvent;
impl ClusterEvent for TickEvent {
    type Iter = IntoIter<Tick>;

    fn iter(events: &mut ClusterEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.ticks);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClusterEvents) -> bool {
        !events.ticks.is_empty()
    }
}

// Audiofile Changed Event
/// An audiofile source was switched to a new server-side signal source
pub struct AudiofileChangedEvent;
impl ClusterEvent for AudiofileChangedEvent {
    type Iter = IntoIter<(SourceKey, SignalSourceId)>;

    fn iter(events: &mut ClusterEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.audiofile_changes);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClusterEvents) -> bool {
        !events.audiofile_changes.is_empty()
    }
}

// Play Action Replicated Event
/// A replicated play action was applied at the tick boundary
pub struct PlayActionReplicatedEvent;
impl ClusterEvent for PlayActionReplicatedEvent {
    type Iter = IntoIter<(NodeId, SourceKey, PlayAction)>;

    fn iter(events: &mut ClusterEvents) -> Self::Iter {
        let list = std::mem::take(&mut events.play_actions);
        IntoIterator::into_iter(list)
    }

    fn has(events: &ClusterEvents) -> bool {
        !events.play_actions.is_empty()
    }
}
