use serde::Serialize;

/// A sending endpoint: a (system id, component id) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EndpointId {
    pub system_id: u8,
    pub component_id: u8,
}

impl EndpointId {
    pub const fn new(system_id: u8, component_id: u8) -> Self {
        Self {
            system_id,
            component_id,
        }
    }
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.system_id, self.component_id)
    }
}

/// Per-endpoint 8-bit frame sequence. Starts at 0 and wraps at 256.
#[derive(Debug, Default, Clone)]
pub struct SequenceCounter {
    next: u8,
}

impl SequenceCounter {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub const fn starting_at(next: u8) -> Self {
        Self { next }
    }

    /// Take the next sequence number.
    pub fn advance(&mut self) -> u8 {
        let seq = self.next;
        self.next = seq.wrapping_add(1);
        seq
    }

    /// The number the next frame will carry.
    pub fn peek(&self) -> u8 {
        self.next
    }
}
