//! The compile request/response contract
//!
//! [`compile`] runs the whole pipeline for one request and packages every
//! intermediate artifact for display, successful or not. It never returns
//! an error: failures become responses with a [`Status`] a transport can
//! map onto its own codes.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::analysis::{self, SymbolTable};
use crate::codegen::{self, Language};
use crate::errors::{BridgeError, BridgeResult, Diagnostic};
use crate::lexer::{Lexer, Token};
use crate::parser::{Parser, Program};
use crate::preprocess::Preprocessor;

/// A request to compile `code` into `language`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

impl CompileRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Outcome class of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The pipeline ran; `success` tells whether it produced code
    Ok,
    /// The request itself was unusable
    ClientError,
    /// The pipeline failed unexpectedly
    ServerError,
}

impl Status {
    /// Matching HTTP status code
    pub fn http_code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::ClientError => 400,
            Status::ServerError => 500,
        }
    }
}

/// The response to a [`CompileRequest`]. Artifacts of phases that did not
/// run are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileResponse {
    #[serde(skip)]
    pub status: Status,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<Program>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_table: Option<SymbolTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Diagnostic>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CompileResponse {
    fn empty(status: Status) -> Self {
        Self {
            status,
            success: false,
            generated_code: None,
            tokens: None,
            ast: None,
            symbol_table: None,
            normalized_code: None,
            errors: None,
            message: None,
        }
    }

    fn client_error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(Status::ClientError)
        }
    }

    fn server_error(detail: String) -> Self {
        Self {
            message: Some("Compilation failed".to_string()),
            errors: Some(vec![Diagnostic {
                line: 0,
                message: detail,
            }]),
            ..Self::empty(Status::ServerError)
        }
    }

    /// Serialize for a client
    pub fn to_json(&self) -> BridgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BridgeError::internal(e.to_string()))
    }
}

/// Compile one request
pub fn compile(request: &CompileRequest) -> CompileResponse {
    if request.code.is_empty() || request.language.is_empty() {
        return CompileResponse::client_error("Code and language are required");
    }

    let language = match request.language.parse::<Language>() {
        Ok(language) => language,
        Err(e) => return CompileResponse::client_error(e.message()),
    };

    let code = request.code.as_str();
    match panic::catch_unwind(AssertUnwindSafe(|| run_pipeline(code, language))) {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            eprintln!("Compilation error: {}", e);
            CompileResponse::server_error(e.message())
        }
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            eprintln!("Compilation error: {}", detail);
            CompileResponse::server_error(detail)
        }
    }
}

/// Compile a JSON-encoded request into a JSON-encoded response
pub fn compile_json(body: &str) -> (Status, String) {
    let response = match serde_json::from_str::<CompileRequest>(body) {
        Ok(request) => compile(&request),
        Err(e) => CompileResponse::client_error(format!("Invalid request: {}", e)),
    };
    match response.to_json() {
        Ok(json) => (response.status, json),
        Err(e) => (
            Status::ServerError,
            format!(
                "{{\"success\": false, \"message\": \"Compilation failed\", \"errors\": [{{\"line\": 0, \"message\": {:?}}}]}}",
                e.message()
            ),
        ),
    }
}

fn run_pipeline(code: &str, language: Language) -> BridgeResult<CompileResponse> {
    let normalized = Preprocessor::new().process(code);
    let tokens = Lexer::new(&normalized).tokenize();

    let parsed = Parser::new(tokens.clone()).parse();
    let program = match parsed.program {
        Some(program) if parsed.errors.is_empty() => program,
        _ => {
            return Ok(CompileResponse {
                errors: Some(parsed.errors.iter().map(Diagnostic::from).collect()),
                tokens: Some(tokens),
                normalized_code: Some(normalized),
                ..CompileResponse::empty(Status::Ok)
            });
        }
    };

    let checked = analysis::analyze(&program);
    if !checked.is_ok() {
        return Ok(CompileResponse {
            errors: Some(checked.errors.iter().map(Diagnostic::from).collect()),
            tokens: Some(tokens),
            ast: Some(program),
            symbol_table: Some(checked.symbol_table),
            normalized_code: Some(normalized),
            ..CompileResponse::empty(Status::Ok)
        });
    }

    let generated = codegen::generate(&program, language)?;

    Ok(CompileResponse {
        success: true,
        generated_code: Some(generated),
        tokens: Some(tokens),
        ast: Some(program),
        symbol_table: Some(checked.symbol_table),
        normalized_code: Some(normalized),
        errors: Some(Vec::new()),
        ..CompileResponse::empty(Status::Ok)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown internal failure".to_string()
    }
}
