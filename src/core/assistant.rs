//! Assistant boundary
//!
//! The catalog can be paired with a chat assistant that answers questions about
//! the platform or a single course. Inference is delegated to an [`Assistant`]
//! backend; this module owns request validation, system context construction
//! and the error taxonomy exposed to callers.

use crate::core::models::{CatalogCourse, Language};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model requested when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Sampling temperature used when none is configured
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Environment variable consulted for the API key when config has none
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Errors surfaced by the assistant boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistantError {
    /// Missing or invalid server-side configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request itself is unusable
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The backend failed
    #[error("AI error: {detail}")]
    Upstream {
        /// Backend-provided failure detail
        detail: String,
    },
}

impl AssistantError {
    /// HTTP status a web front end should answer with
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Configuration(_) | Self::Upstream { .. } => 500,
            Self::BadRequest(_) => 400,
        }
    }
}

/// Chat participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model
    System,
    /// The student or visitor
    User,
    /// A previous assistant reply
    Assistant,
}

/// One chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a message
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A validated completion request handed to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantRequest {
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Conversation, system context first
    pub messages: Vec<ChatMessage>,
    #[serde(skip)]
    api_key: String,
}

impl AssistantRequest {
    /// Validate credentials and messages
    ///
    /// # Errors
    /// `Configuration` when `api_key` is missing or blank, `BadRequest` when
    /// `messages` is empty or every message is blank
    pub fn new(messages: Vec<ChatMessage>, api_key: Option<&str>) -> Result<Self, AssistantError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AssistantError::Configuration("API key is missing".to_string()))?;

        if messages.iter().all(|m| m.content.trim().is_empty()) {
            return Err(AssistantError::BadRequest("No messages provided".to_string()));
        }

        Ok(Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            messages,
            api_key: api_key.to_string(),
        })
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Credential for the backend
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// A chat completion backend
pub trait Assistant {
    /// Answer the conversation in `request`
    ///
    /// # Errors
    /// Returns `Upstream` when the backend fails
    fn ask(&self, request: &AssistantRequest) -> Result<String, AssistantError>;
}

/// What the assistant is helping with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantMode {
    /// General questions about the platform
    Platform,
    /// Tutoring within one course; holds a plain-text course description
    Course(String),
}

impl AssistantMode {
    /// Course mode with context drawn from a catalog entry
    #[must_use]
    pub fn for_course(course: &CatalogCourse) -> Self {
        let mut lines = vec![
            format!("{} ({})", course.title, course.code),
            course.specialization.clone(),
        ];
        lines.extend(
            [&course.level_label, &course.semester_label]
                .into_iter()
                .flatten()
                .cloned(),
        );
        if !course.description.trim().is_empty() {
            lines.push(course.description.clone());
        }
        lines.retain(|l| !l.trim().is_empty());
        Self::Course(lines.join("\n"))
    }
}

/// Settings for [`CatalogAssistant`]
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantSettings {
    /// API key; requests fail with `Configuration` when absent
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Reply language
    pub language: Language,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            language: Language::Ar,
        }
    }
}

impl AssistantSettings {
    /// Use the `OPENAI_API_KEY` environment variable when no key is set
    #[must_use]
    pub fn with_env_key(mut self) -> Self {
        if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
        self
    }
}

/// Validates questions, builds context, and delegates to a backend
pub struct CatalogAssistant<A> {
    backend: A,
    settings: AssistantSettings,
}

impl<A: Assistant> CatalogAssistant<A> {
    /// Wrap `backend`
    pub const fn new(backend: A, settings: AssistantSettings) -> Self {
        Self { backend, settings }
    }

    /// Settings in effect
    pub const fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// Ask `question` with optional prior turns
    ///
    /// # Errors
    /// `BadRequest` for a blank question, `Configuration` without an API key,
    /// and any backend error
    pub fn ask(
        &self,
        question: &str,
        mode: &AssistantMode,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::BadRequest(empty_question(self.settings.language).to_string()));
        }

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::new(Role::System, system_context(mode, self.settings.language)));
        messages.extend(history.iter().filter(|m| m.role != Role::System).cloned());
        messages.push(ChatMessage::new(Role::User, question));

        let request = AssistantRequest::new(messages, self.settings.api_key.as_deref())?
            .with_model(self.settings.model.clone())
            .with_temperature(self.settings.temperature);

        let reply = self.backend.ask(&request)?;
        if reply.trim().is_empty() {
            Ok(fallback_reply(self.settings.language).to_string())
        } else {
            Ok(reply)
        }
    }
}

/// System prompt for `mode` in `lang`
#[must_use]
pub fn system_context(mode: &AssistantMode, lang: Language) -> String {
    let base = match lang {
        Language::Ar => "أنت مساعد تعليمي داخل منصة EDU Smart. اشرح بلغة بسيطة وواضحة مع أمثلة إن أمكن، وأجب باللغة العربية.",
        Language::En => "You are the learning assistant of the EDU Smart platform. Explain in simple, clear language with examples where possible, and answer in English.",
    };
    match mode {
        AssistantMode::Platform => {
            let scope = match lang {
                Language::Ar => "ساعد الزائر في فهم الأقسام والتخصصات والمقررات المتاحة في المنصة.",
                Language::En => "Help the visitor understand the departments, specializations and courses on the platform.",
            };
            format!("{base}\n{scope}")
        }
        AssistantMode::Course(course) => {
            let heading = match lang {
                Language::Ar => "المقرر الحالي:",
                Language::En => "Current course:",
            };
            format!("{base}\n{heading}\n{course}")
        }
    }
}

const fn empty_question(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "الرجاء كتابة سؤالك أولاً.",
        Language::En => "Please type your question first.",
    }
}

/// Reply used when the backend answers with nothing
#[must_use]
pub const fn fallback_reply(lang: Language) -> &'static str {
    match lang {
        Language::Ar => "لم أستطع توليد إجابة.",
        Language::En => "I could not generate an answer.",
    }
}
