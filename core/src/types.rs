//! Domain types for the trivia API: option enums, request options, tokens
//! and questions.
//!
//! # Design
//! Options are closed types so the only free-form string a caller can send is
//! the token. Every "any" value is the `Default`, which the query encoder
//! omits from the request.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of questions requested by a list call.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest number of questions the service returns per call.
pub const MAX_LIMIT: u32 = 50;

/// Question category, identified on the wire by a numeric code.
///
/// Equality and hashing follow the wire code, so `Other(0) == Any` and
/// `Other(9) == GeneralKnowledge`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Category {
    #[default]
    Any,
    GeneralKnowledge,
    Books,
    Film,
    Music,
    MusicalsAndTheatres,
    Television,
    VideoGames,
    BoardGames,
    ScienceAndNature,
    Computers,
    Mathematics,
    Mythology,
    Sports,
    Geography,
    History,
    Politics,
    Art,
    Celebrities,
    Animals,
    Vehicles,
    Comics,
    Gadgets,
    AnimeAndManga,
    CartoonAndAnimations,
    /// A code the enumeration does not name. `Other(0)` behaves like `Any`.
    Other(u8),
}

impl Category {
    pub fn code(self) -> u8 {
        match self {
            Category::Any => 0,
            Category::GeneralKnowledge => 9,
            Category::Books => 10,
            Category::Film => 11,
            Category::Music => 12,
            Category::MusicalsAndTheatres => 13,
            Category::Television => 14,
            Category::VideoGames => 15,
            Category::BoardGames => 16,
            Category::ScienceAndNature => 17,
            Category::Computers => 18,
            Category::Mathematics => 19,
            Category::Mythology => 20,
            Category::Sports => 21,
            Category::Geography => 22,
            Category::History => 23,
            Category::Politics => 24,
            Category::Art => 25,
            Category::Celebrities => 26,
            Category::Animals => 27,
            Category::Vehicles => 28,
            Category::Comics => 29,
            Category::Gadgets => 30,
            Category::AnimeAndManga => 31,
            Category::CartoonAndAnimations => 32,
            Category::Other(code) => code,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Category::Any,
            9 => Category::GeneralKnowledge,
            10 => Category::Books,
            11 => Category::Film,
            12 => Category::Music,
            13 => Category::MusicalsAndTheatres,
            14 => Category::Television,
            15 => Category::VideoGames,
            16 => Category::BoardGames,
            17 => Category::ScienceAndNature,
            18 => Category::Computers,
            19 => Category::Mathematics,
            20 => Category::Mythology,
            21 => Category::Sports,
            22 => Category::Geography,
            23 => Category::History,
            24 => Category::Politics,
            25 => Category::Art,
            26 => Category::Celebrities,
            27 => Category::Animals,
            28 => Category::Vehicles,
            29 => Category::Comics,
            30 => Category::Gadgets,
            31 => Category::AnimeAndManga,
            32 => Category::CartoonAndAnimations,
            other => Category::Other(other),
        }
    }

    pub fn is_any(self) -> bool {
        self.code() == 0
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Category {}

impl std::hash::Hash for Category {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire value, or `None` for `Any`.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Difficulty::Any => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionType {
    #[default]
    Any,
    Multiple,
    Boolean,
}

impl QuestionType {
    /// Wire value, or `None` for `Any`.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            QuestionType::Any => None,
            QuestionType::Multiple => Some("multiple"),
            QuestionType::Boolean => Some("boolean"),
        }
    }
}

/// Opaque continuation token issued by the service.
///
/// While a token is sent along, the service never returns a question it has
/// already served under that token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first four characters followed by an ellipsis, for log fields.
    pub fn redacted(&self) -> String {
        let mut shown: String = self.0.chars().take(4).collect();
        if self.0.chars().count() > 4 {
            shown.push('…');
        }
        shown
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}


/// Options for a bounded list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Refresh the token and retry once when the service reports it empty.
    pub auto_refresh: bool,
    pub category: Category,
    pub difficulty: Difficulty,
    pub kind: QuestionType,
    pub token: Option<Token>,
    /// Requested number of questions. `None` or `Some(0)` means
    /// `DEFAULT_LIMIT`; anything above `MAX_LIMIT` is clamped.
    pub limit: Option<u32>,
}

impl ListOptions {
    /// The limit actually sent to the service, always in `1..=MAX_LIMIT`.
    pub fn effective_limit(&self) -> u32 {
        match self.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(n) => n.min(MAX_LIMIT),
        }
    }
}

/// Options for a single random question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RandomOptions {
    /// Refresh the token and retry once when the service reports it empty.
    pub auto_refresh: bool,
    pub category: Category,
    pub difficulty: Difficulty,
    pub kind: QuestionType,
    pub token: Option<Token>,
}

impl From<ListOptions> for RandomOptions {
    fn from(options: ListOptions) -> Self {
        Self {
            auto_refresh: options.auto_refresh,
            category: options.category,
            difficulty: options.difficulty,
            kind: options.kind,
            token: options.token,
        }
    }
}

/// A single trivia question as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn is_answer_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// The correct answer mixed into the incorrect ones, in random order.
    pub fn shuffled_answers(&self) -> Vec<String> {
        self.shuffled_answers_with(&mut rand::rng())
    }

    pub fn shuffled_answers_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut answers = self.incorrect_answers.clone();
        answers.push(self.correct_answer.clone());
        answers.shuffle(rng);
        answers
    }
}
