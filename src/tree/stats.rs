use crate::tree::{ChannelNode, ContentNode};
use serde::Serialize;

/// Shape statistics of a channel tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub topics: u64,
    pub videos: u64,
    /// Deepest level below the channel root (0 for an empty channel)
    pub max_depth: u32,
}

impl TreeStats {
    /// Walks the channel and counts its nodes
    pub fn from_channel(channel: &ChannelNode) -> Self {
        let mut stats = Self::default();
        for child in &channel.children {
            stats.visit(child, 1);
        }
        stats
    }

    /// Total number of nodes below the root
    pub fn total_nodes(&self) -> u64 {
        self.topics + self.videos
    }

    fn visit(&mut self, node: &ContentNode, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
        match node {
            ContentNode::Topic(topic) => {
                self.topics += 1;
                for child in &topic.children {
                    self.visit(child, depth + 1);
                }
            }
            ContentNode::Video(_) => self.videos += 1,
        }
    }
}
