use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const SUCCESS: u8 = 0;
pub const NO_RESULTS: u8 = 1;
pub const INVALID_PARAMETER: u8 = 2;
pub const TOKEN_EMPTY: u8 = 3;
pub const TOKEN_NOT_FOUND: u8 = 4;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub response_code: u8,
    pub results: Vec<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub response_code: u8,
    pub response_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A bank entry: the numeric category code plus the question as served.
#[derive(Clone, Debug)]
pub struct Entry {
    pub category_code: u8,
    pub question: Question,
}

/// Questions already served, per issued token.
pub type Tokens = Arc<RwLock<HashMap<String, HashSet<usize>>>>;

#[derive(Clone)]
pub struct AppState {
    bank: Arc<Vec<Entry>>,
    tokens: Tokens,
}

pub fn app() -> Router {
    app_with_bank(default_bank())
}

pub fn app_with_bank(bank: Vec<Entry>) -> Router {
    let state = AppState {
        bank: Arc::new(bank),
        tokens: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/api.php", get(questions))
        .route("/api_token.php", get(token_command))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    amount: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenParams {
    command: Option<String>,
    token: Option<String>,
}

fn question_reply(response_code: u8, results: Vec<Question>) -> Json<QuestionResponse> {
    Json(QuestionResponse { response_code, results })
}

fn token_reply(response_code: u8, message: &str, token: Option<String>) -> Json<TokenResponse> {
    Json(TokenResponse {
        response_code,
        response_message: message.to_string(),
        token,
    })
}

/// Validated filters of a question request.
struct Filters {
    amount: usize,
    category: Option<u8>,
    difficulty: Option<String>,
    kind: Option<String>,
}

impl Filters {
    fn parse(params: &QuestionParams) -> Option<Self> {
        let amount: usize = params.amount.as_deref()?.parse().ok()?;
        if !(1..=50).contains(&amount) {
            return None;
        }
        let category = match params.category.as_deref() {
            None => None,
            Some(raw) => Some(raw.parse::<u8>().ok()?),
        };
        let difficulty = match params.difficulty.as_deref() {
            None => None,
            Some(d @ ("easy" | "medium" | "hard")) => Some(d.to_string()),
            Some(_) => return None,
        };
        let kind = match params.kind.as_deref() {
            None => None,
            Some(k @ ("multiple" | "boolean")) => Some(k.to_string()),
            Some(_) => return None,
        };
        Some(Self {
            amount,
            category,
            difficulty,
            kind,
        })
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.category.map_or(true, |c| c == entry.category_code)
            && self
                .difficulty
                .as_deref()
                .map_or(true, |d| d == entry.question.difficulty)
            && self.kind.as_deref().map_or(true, |k| k == entry.question.kind)
    }
}

async fn questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionParams>,
) -> Json<QuestionResponse> {
    let Some(filters) = Filters::parse(&params) else {
        return question_reply(INVALID_PARAMETER, Vec::new());
    };

    let matching: Vec<usize> = state
        .bank
        .iter()
        .enumerate()
        .filter(|(_, entry)| filters.matches(entry))
        .map(|(i, _)| i)
        .collect();

    let Some(token) = params.token else {
        if matching.len() < filters.amount {
            return question_reply(NO_RESULTS, Vec::new());
        }
        let picked = pick(&state.bank, &matching, filters.amount);
        return question_reply(SUCCESS, picked.into_iter().map(|(_, q)| q).collect());
    };

    let mut tokens = state.tokens.write().await;
    let Some(served) = tokens.get_mut(&token) else {
        return question_reply(TOKEN_NOT_FOUND, Vec::new());
    };
    let unseen: Vec<usize> = matching.iter().copied().filter(|i| !served.contains(i)).collect();
    if unseen.len() < filters.amount {
        let code = if matching.len() >= filters.amount {
            TOKEN_EMPTY
        } else {
            NO_RESULTS
        };
        debug!(%token, code, "token cannot satisfy request");
        return question_reply(code, Vec::new());
    }
    let picked = pick(&state.bank, &unseen, filters.amount);
    served.extend(picked.iter().map(|(i, _)| *i));
    question_reply(SUCCESS, picked.into_iter().map(|(_, q)| q).collect())
}

fn pick(bank: &[Entry], candidates: &[usize], amount: usize) -> Vec<(usize, Question)> {
    candidates
        .choose_multiple(&mut rand::rng(), amount)
        .map(|&i| (i, bank[i].question.clone()))
        .collect()
}

async fn token_command(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Json<TokenResponse> {
    match params.command.as_deref() {
        Some("request") => {
            let token = Uuid::new_v4().simple().to_string();
            state.tokens.write().await.insert(token.clone(), HashSet::new());
            debug!(%token, "issued token");
            token_reply(SUCCESS, "Token Generated Successfully!", Some(token))
        }
        Some("reset") => {
            let Some(token) = params.token else {
                return token_reply(INVALID_PARAMETER, "No token supplied.", None);
            };
            match state.tokens.write().await.get_mut(&token) {
                Some(served) => {
                    served.clear();
                    debug!(%token, "reset token");
                    token_reply(SUCCESS, "Token has been reset.", Some(token))
                }
                None => token_reply(TOKEN_NOT_FOUND, "Token does not exist.", None),
            }
        }
        _ => token_reply(INVALID_PARAMETER, "Unknown command.", None),
    }
}

fn entry(
    category_code: u8,
    category: &str,
    kind: &str,
    difficulty: &str,
    question: &str,
    correct: &str,
    incorrect: &[&str],
) -> Entry {
    Entry {
        category_code,
        question: Question {
            category: category.to_string(),
            kind: kind.to_string(),
            difficulty: difficulty.to_string(),
            question: question.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// Fixed question bank: 4 General Knowledge, 4 Video Games, 3 Computers,
/// 3 History.
pub fn default_bank() -> Vec<Entry> {
    const GK: &str = "General Knowledge";
    const VG: &str = "Entertainment: Video Games";
    const CS: &str = "Science: Computers";
    const HI: &str = "History";
    vec![
        entry(9, GK, "multiple", "easy", "How many continents are there?", "7", &["5", "6", "8"]),
        entry(9, GK, "boolean", "easy", "The sky is blue on a clear day.", "True", &["False"]),
        entry(9, GK, "multiple", "medium", "What is the chemical symbol for gold?", "Au", &["Ag", "Gd", "Go"]),
        entry(9, GK, "boolean", "hard", "Venus rotates clockwise.", "True", &["False"]),
        entry(15, VG, "multiple", "easy", "Which company created Mario?", "Nintendo", &["Sega", "Sony", "Atari"]),
        entry(15, VG, "boolean", "easy", "Tetris was created in the Soviet Union.", "True", &["False"]),
        entry(15, VG, "multiple", "medium", "What colour is Sonic?", "Blue", &["Red", "Green", "Yellow"]),
        entry(15, VG, "multiple", "hard", "What year was Pong released?", "1972", &["1970", "1975", "1980"]),
        entry(18, CS, "multiple", "easy", "What does CPU stand for?", "Central Processing Unit", &["Central Process Unit", "Computer Personal Unit", "Central Processor Unit"]),
        entry(18, CS, "boolean", "medium", "HTML is a programming language.", "False", &["True"]),
        entry(18, CS, "multiple", "hard", "How many bits are in a byte?", "8", &["4", "16", "32"]),
        entry(23, HI, "multiple", "easy", "Who was the first US president?", "George Washington", &["John Adams", "Thomas Jefferson", "Abraham Lincoln"]),
        entry(23, HI, "boolean", "medium", "The Berlin Wall fell in 1989.", "True", &["False"]),
        entry(23, HI, "multiple", "hard", "In which year did the Byzantine Empire fall?", "1453", &["1204", "1492", "1071"]),
    ]
}
