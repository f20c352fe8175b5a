//! Web playground for inspecting token streams.

use axum::http::header;
use axum::routing::{get, post};
use axum::Form;
use maud::{html, Markup};
use std::collections::HashMap;

use crate::lexer::{lex, Token};

const STYLE: &[u8] = include_bytes!("style.css");

async fn index() -> Markup {
    page("", None)
}

async fn tokens(Form(form): Form<HashMap<String, String>>) -> Markup {
    let source = form.get("source").map(String::as_str).unwrap_or("");
    tracing::info!(bytes = source.len(), "lexing submitted script");
    page(source, Some(lex(source)))
}

/// One page for both routes: the entry form, plus the token table once a
/// script has been submitted.
fn page(source: &str, tokens: Option<Vec<Token>>) -> Markup {
    html!(
        (maud::DOCTYPE)
        html {
            head {
                title { "fscript tokens" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                main {
                    form method="post" action="/tokens" {
                        textarea name="source" placeholder="script here" { (source) }
                        button { "Lex" }
                    }
                    @if let Some(tokens) = tokens {
                        table id="tokens" {
                            tr { th { "kind" } th { "value" } }
                            @for token in &tokens {
                                tr {
                                    td { (token.kind().to_string()) }
                                    td { (value_text(token)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// The value column of the table; kinds without a value get an empty cell.
fn value_text(token: &Token) -> String {
    match token {
        Token::String(s) => format!("{:?}", s),
        Token::Number(n) => n.to_string(),
        Token::Boolean(b) => b.to_string(),
        Token::Memory(name) => format!("<{name}>"),
        Token::Value(text) => text.clone(),
        Token::Operator(op) => (*op).to_owned(),
        Token::Null | Token::Newline => String::new(),
    }
}

pub fn get_server() -> axum::Router {
    axum::Router::new()
        .route("/", get(index))
        .route("/tokens", post(tokens))
        .route(
            "/style.css",
            get(|| async { ([(header::CONTENT_TYPE, "text/css")], STYLE) }),
        )
}
