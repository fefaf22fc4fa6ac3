//! Structural checks run once on the finished channel
//!
//! Every problem is collected so a failed run reports all of them at once.

use crate::tree::{ChannelNode, ContentNode};
use crate::ValidationError;

/// Checks that the channel and every node in it carry the required fields
///
/// # Returns
///
/// * `Ok(())` - The channel can be published
/// * `Err(ValidationError)` - One or more required fields are missing
pub fn validate_channel(channel: &ChannelNode) -> Result<(), ValidationError> {
    let mut problems = Vec::new();

    for (field, value) in [
        ("title", &channel.title),
        ("source_domain", &channel.source_domain),
        ("source_id", &channel.source_id),
        ("language", &channel.language),
    ] {
        if value.trim().is_empty() {
            problems.push(format!("channel is missing {}", field));
        }
    }

    for child in &channel.children {
        validate_node(child, &channel.title, &mut problems);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { problems })
    }
}

fn validate_node(node: &ContentNode, parent_path: &str, problems: &mut Vec<String>) {
    let path = format!("{}/{}", parent_path, node.title());

    if node.source_id().trim().is_empty() {
        problems.push(format!("{} is missing source_id", path));
    }
    if node.title().trim().is_empty() {
        problems.push(format!("{} is missing title", path));
    }

    match node {
        ContentNode::Topic(topic) => {
            if topic.children.is_empty() {
                tracing::warn!("Topic '{}' has no children", path);
            }
            for child in &topic.children {
                validate_node(child, &path, problems);
            }
        }
        ContentNode::Video(video) => {
            if video.files.is_empty() {
                problems.push(format!("{} has no files", path));
            }
            for file in &video.files {
                if file.path.trim().is_empty() {
                    problems.push(format!("{} has a file with an empty path", path));
                }
            }
            if video.license.requires_copyright_holder()
                && video
                    .copyright_holder
                    .as_deref()
                    .map_or(true, |holder| holder.trim().is_empty())
            {
                problems.push(format!(
                    "{} uses license '{}' but has no copyright holder",
                    path, video.license
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelConfig;
    use crate::tree::{ContentContainer, License, TopicNode, VideoFile, VideoNode};

    fn channel() -> ChannelNode {
        ChannelNode::from_config(&ChannelConfig::default())
    }

    fn video(title: &str, files: Vec<VideoFile>) -> ContentNode {
        ContentNode::Video(VideoNode {
            source_id: format!("{}.mp4", title),
            title: title.to_string(),
            files,
            license: License::PublicDomain,
            copyright_holder: None,
        })
    }

    fn file() -> VideoFile {
        VideoFile {
            path: "http://example.com/v.mp4".to_string(),
        }
    }

    #[test]
    fn test_valid_channel() {
        let mut channel = channel();
        let topic = channel.add_child(ContentNode::Topic(TopicNode::new("dir-a", "A")));
        topic
            .as_topic_mut()
            .unwrap()
            .add_child(video("Clip", vec![file()]));

        assert!(validate_channel(&channel).is_ok());
    }

    #[test]
    fn test_empty_channel_is_valid() {
        assert!(validate_channel(&channel()).is_ok());
    }

    #[test]
    fn test_missing_channel_metadata() {
        let mut channel = channel();
        channel.title = String::new();
        channel.language = " ".to_string();

        let err = validate_channel(&channel).unwrap_err();
        assert_eq!(err.problems.len(), 2);
        assert!(err.problems[0].contains("title"));
        assert!(err.problems[1].contains("language"));
    }

    #[test]
    fn test_video_without_files() {
        let mut channel = channel();
        let topic = channel.add_child(ContentNode::Topic(TopicNode::new("dir-a", "A")));
        topic.as_topic_mut().unwrap().add_child(video("Clip", vec![]));

        let err = validate_channel(&channel).unwrap_err();
        assert_eq!(err.problems, vec!["Solar Spell/A/Clip has no files"]);
    }

    #[test]
    fn test_license_needing_holder() {
        let mut channel = channel();
        channel.add_child(ContentNode::Video(VideoNode {
            source_id: "v.mp4".to_string(),
            title: "V".to_string(),
            files: vec![file()],
            license: License::CcBy,
            copyright_holder: None,
        }));

        let err = validate_channel(&channel).unwrap_err();
        assert!(err.problems[0].contains("copyright holder"));
    }

    #[test]
    fn test_collects_every_problem() {
        let mut channel = channel();
        channel.add_child(ContentNode::Topic(TopicNode::new("", "A")));
        channel.add_child(video("", vec![]));

        let err = validate_channel(&channel).unwrap_err();
        assert_eq!(err.problems.len(), 3);
    }
}
