// src/synergy/prompts.rs
use crate::providers::{ResponseSchema, SchemaType};

/// Grounding text sent with every synergy check.
pub const RESUME_CONTEXT: &str = "Harshit Govindarajan is a Product Management Professional (CSPO®) with 39 months of experience. He worked at Kofluence Tech Ltd from Jan 2021 to Apr 2024. Key achievements include leading a mobile app to 1M+ downloads with 88% retention, implementing an AI/ML software generating over ₹320 crore annually, and developing a finance interface for 100,000+ creators. He has a PGPM from Great Lakes Institute of Management and a BBA in Marketing from Christ University. His skills include Stakeholder Management, Data Analytics, Scrum, SEO/ASO, Market Research, UI/UX, and tools like Python, SQL, Power BI, and Jira.";

/// Builds the evaluation prompt.
///
/// Both texts are embedded as-is. Quotes inside the job description are not
/// escaped and can blur where the quoted sections end.
pub fn synergy_prompt(resume_context: &str, job_description: &str) -> String {
    format!(
        r#"Based on my resume context, evaluate my fit for the following job description. My resume context: "{}". Job Description: "{}". Provide a synergy score from 0 to 100 and a brief justification for why I am a good fit, highlighting key matching skills and experiences."#,
        resume_context, job_description
    )
}

/// `{synergyScore: NUMBER, justification: STRING}`
pub fn synergy_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("synergyScore", ResponseSchema::scalar(SchemaType::Number)),
        ("justification", ResponseSchema::scalar(SchemaType::String)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts_verbatim() {
        let job = "Senior PM, must say \"ship it\" daily";
        let prompt = synergy_prompt(RESUME_CONTEXT, job);

        assert!(prompt.starts_with("Based on my resume context"));
        assert!(prompt.contains(&format!("My resume context: \"{}\".", RESUME_CONTEXT)));
        assert!(prompt.contains(&format!("Job Description: \"{}\".", job)));
        assert!(prompt.ends_with("highlighting key matching skills and experiences."));
    }

    #[test]
    fn test_schema_fields() {
        let schema = synergy_schema();
        assert_eq!(schema.kind, SchemaType::Object);
        assert_eq!(schema.properties["synergyScore"].kind, SchemaType::Number);
        assert_eq!(schema.properties["justification"].kind, SchemaType::String);
        assert_eq!(schema.properties.len(), 2);
    }
}
