//! Shapes the generation templates ask for. Used to check model output,
//! never to rewrite it.

use crate::modules::jobs::model::AnalysisType;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0} is empty")]
    Empty(&'static str),
}

fn require_text(field: &'static str, value: &str) -> Result<(), ShapeError> {
    if value.trim().is_empty() {
        return Err(ShapeError::Empty(field));
    }
    Ok(())
}

fn require_list(field: &'static str, values: &[String]) -> Result<(), ShapeError> {
    if values.is_empty() {
        return Err(ShapeError::Empty(field));
    }
    values.iter().try_for_each(|value| require_text(field, value))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: SeoDescription,
    pub tags: Vec<String>,
    pub thumbnail_keywords: Vec<String>,
    pub topic_analysis: TopicAnalysis,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDescription {
    pub hook: String,
    pub full_description: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
pub struct Chapter {
    pub timestamp: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicAnalysis {
    pub main_topic: String,
    pub related_topics: Vec<String>,
    pub keywords_to_emphasize: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub metadata: BlogMetadata,
    pub content: BlogContent,
    pub video_embed: VideoEmbed,
    pub related_content: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    pub title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub introduction: String,
    pub sections: Vec<BlogSection>,
    pub conclusion: String,
    pub call_to_action: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSection {
    pub heading: String,
    pub content: String,
    pub key_takeaways: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEmbed {
    pub title: String,
    pub embed_placeholder: String,
}

impl SeoMetadata {
    fn validate(&self) -> Result<(), ShapeError> {
        require_text("title", &self.title)?;
        require_text("description.hook", &self.description.hook)?;
        require_text("description.fullDescription", &self.description.full_description)?;
        for chapter in &self.description.chapters {
            require_text("description.chapters.timestamp", &chapter.timestamp)?;
            require_text("description.chapters.title", &chapter.title)?;
        }
        require_list("tags", &self.tags)?;
        require_list("thumbnailKeywords", &self.thumbnail_keywords)?;
        require_text("topicAnalysis.mainTopic", &self.topic_analysis.main_topic)?;
        require_list("topicAnalysis.relatedTopics", &self.topic_analysis.related_topics)?;
        require_list("topicAnalysis.keywordsToEmphasize", &self.topic_analysis.keywords_to_emphasize)
    }
}

impl BlogPost {
    fn validate(&self) -> Result<(), ShapeError> {
        require_text("metadata.title", &self.metadata.title)?;
        require_text("metadata.metaDescription", &self.metadata.meta_description)?;
        require_list("metadata.keywords", &self.metadata.keywords)?;
        require_text("content.introduction", &self.content.introduction)?;
        if self.content.sections.is_empty() {
            return Err(ShapeError::Empty("content.sections"));
        }
        for section in &self.content.sections {
            require_text("content.sections.heading", &section.heading)?;
            require_text("content.sections.content", &section.content)?;
            require_list("content.sections.keyTakeaways", &section.key_takeaways)?;
        }
        require_text("content.conclusion", &self.content.conclusion)?;
        require_text("content.callToAction", &self.content.call_to_action)?;
        require_text("videoEmbed.title", &self.video_embed.title)?;
        require_text("videoEmbed.embedPlaceholder", &self.video_embed.embed_placeholder)?;
        // Related content is optional in practice; entries must still be non-empty.
        self.related_content.iter().try_for_each(|value| require_text("relatedContent", value))
    }
}

/// Models like to wrap JSON in a ```json fence or a sentence; take the
/// outermost object.
fn json_object(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

pub fn check(analysis_type: AnalysisType, text: &str) -> Result<(), ShapeError> {
    let body = json_object(text);
    match analysis_type {
        AnalysisType::Seo => serde_json::from_str::<SeoMetadata>(body)?.validate(),
        AnalysisType::Blog => serde_json::from_str::<BlogPost>(body)?.validate(),
    }
}
