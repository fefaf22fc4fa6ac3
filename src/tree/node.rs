//! Channel tree node definitions
//!
//! The tree is append-only: nodes are pushed onto their parent's child list
//! when created and never moved or removed afterwards.

use crate::config::ChannelConfig;
use crate::tree::License;
use serde::Serialize;

/// Anything that owns an ordered list of child nodes
///
/// This is the only way the crawler mutates the tree.
pub trait ContentContainer {
    /// Children in insertion order
    fn children(&self) -> &[ContentNode];

    /// Appends `node` as the last child and returns a handle to it
    fn add_child(&mut self, node: ContentNode) -> &mut ContentNode;
}

/// Root of the published tree, carrying channel-level metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelNode {
    pub source_domain: String,
    pub source_id: String,
    pub title: String,
    pub language: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub children: Vec<ContentNode>,
}

impl ChannelNode {
    /// Creates an empty channel from configured metadata
    pub fn from_config(config: &ChannelConfig) -> Self {
        Self {
            source_domain: config.source_domain.clone(),
            source_id: config.source_id.clone(),
            title: config.title.clone(),
            language: config.language.clone(),
            description: config.description.clone(),
            thumbnail: config.thumbnail.clone(),
            children: Vec::new(),
        }
    }
}

impl ContentContainer for ChannelNode {
    fn children(&self) -> &[ContentNode] {
        &self.children
    }

    fn add_child(&mut self, node: ContentNode) -> &mut ContentNode {
        push_last(&mut self.children, node)
    }
}

/// A non-root node of the channel tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentNode {
    Topic(TopicNode),
    Video(VideoNode),
}

impl ContentNode {
    pub fn title(&self) -> &str {
        match self {
            Self::Topic(topic) => &topic.title,
            Self::Video(video) => &video.title,
        }
    }

    pub fn source_id(&self) -> &str {
        match self {
            Self::Topic(topic) => &topic.source_id,
            Self::Video(video) => &video.source_id,
        }
    }

    /// Children of a topic; videos have none
    pub fn children(&self) -> &[ContentNode] {
        match self {
            Self::Topic(topic) => &topic.children,
            Self::Video(_) => &[],
        }
    }

    pub fn as_topic(&self) -> Option<&TopicNode> {
        match self {
            Self::Topic(topic) => Some(topic),
            Self::Video(_) => None,
        }
    }

    pub fn as_topic_mut(&mut self) -> Option<&mut TopicNode> {
        match self {
            Self::Topic(topic) => Some(topic),
            Self::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&VideoNode> {
        match self {
            Self::Video(video) => Some(video),
            Self::Topic(_) => None,
        }
    }
}

/// Folder-like node grouping child nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicNode {
    pub source_id: String,
    pub title: String,
    pub children: Vec<ContentNode>,
}

impl TopicNode {
    pub fn new(source_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }
}

impl ContentContainer for TopicNode {
    fn children(&self) -> &[ContentNode] {
        &self.children
    }

    fn add_child(&mut self, node: ContentNode) -> &mut ContentNode {
        push_last(&mut self.children, node)
    }
}

/// Leaf node referencing remote video files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoNode {
    pub source_id: String,
    pub title: String,
    pub files: Vec<VideoFile>,
    pub license: License,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<String>,
}

/// A remote video file, addressed by URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoFile {
    pub path: String,
}

fn push_last(children: &mut Vec<ContentNode>, node: ContentNode) -> &mut ContentNode {
    let index = children.len();
    children.push(node);
    &mut children[index]
}
