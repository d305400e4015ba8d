//! Built-in record set used when the CSV source is unreachable or yields no
//! valid records.

use crate::domain::AppRecord;

pub fn default_apps() -> Vec<AppRecord> {
    vec![
        AppRecord {
            id: 1,
            name: "ChatGPT".to_string(),
            company: "OpenAI".to_string(),
            website: "https://chat.openai.com".to_string(),
            is_free: "Yes (free tier)".to_string(),
            field: "Assistance & Writing".to_string(),
            description: "A conversational assistant that answers questions, drafts text and helps with a wide range of tasks.".to_string(),
            logo: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/04/ChatGPT_logo.svg/240px-ChatGPT_logo.svg.png".to_string(),
            date_added: "2024-01-15".to_string(),
        },
        AppRecord {
            id: 2,
            name: "Midjourney".to_string(),
            company: "Midjourney Inc".to_string(),
            website: "https://www.midjourney.com".to_string(),
            is_free: "No".to_string(),
            field: "Design & Art".to_string(),
            description: "Generates artistic images from text prompts with strong creative control.".to_string(),
            logo: "https://cdn.midjourney.com/22828b2c-8657-45cd-85a1-08b6e8050d8a/0_0.png".to_string(),
            date_added: "2024-01-15".to_string(),
        },
        AppRecord {
            id: 3,
            name: "Grammarly".to_string(),
            company: "Grammarly Inc".to_string(),
            website: "https://www.grammarly.com".to_string(),
            is_free: "Yes (free tier)".to_string(),
            field: "Writing & Editing".to_string(),
            description: "Improves writing with grammar checking and style suggestions.".to_string(),
            logo: "https://static.grammarly.com/assets/files/6d2a4cd4e8f92a0c4f5e5c5c6c2c7c3e/grammarly-logo.svg".to_string(),
            date_added: "2024-01-15".to_string(),
        },
        AppRecord {
            id: 4,
            name: "OtterAI".to_string(),
            company: "Otter AI".to_string(),
            website: "https://otter.ai".to_string(),
            is_free: "Yes (free tier)".to_string(),
            field: "Meetings & Transcription".to_string(),
            description: "Transcribes speech to text with automatic speaker identification and summaries.".to_string(),
            logo: "https://otter.ai/_next/static/media/otter_logo.5a7a0c9a.svg".to_string(),
            date_added: "2024-01-15".to_string(),
        },
        AppRecord {
            id: 5,
            name: "TensorFlow".to_string(),
            company: "Google".to_string(),
            website: "https://www.tensorflow.org".to_string(),
            is_free: "Yes".to_string(),
            field: "Development".to_string(),
            description: "An open-source machine learning library developed by Google and used at scale.".to_string(),
            logo: "https://www.tensorflow.org/images/tf_logo_social.png".to_string(),
            date_added: "2024-01-15".to_string(),
        },
    ]
}
