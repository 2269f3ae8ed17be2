// Copyright 2025 Mihail Petrov
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::types::answered::AnsweredRecord;
use crate::types::language::Direction;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let quiz = state.quiz.lock().unwrap();
    let mode_selector = html! {
        form.mode action="/" method="post" {
            label for="direction" { "Modo" }
            select id="direction" name="direction" onchange="this.form.submit()" {
                @for direction in [Direction::EsBg, Direction::BgEs] {
                    @if direction == quiz.direction() {
                        option value=(direction.form_value()) selected { (direction) }
                    } @else {
                        option value=(direction.form_value()) { (direction) }
                    }
                }
            }
            noscript {
                input type="submit" value="Cambiar";
            }
        }
    };
    let prompt = html! {
        div.prompt {
            span { "Palabra para traducir: " }
            span.word { (quiz.current_word()) }
            @if quiz.is_graded() {
                @if quiz.last_answer_correct() == Some(true) {
                    span.mark.correct { "✓" }
                } @else {
                    span.mark.wrong { "✗" }
                }
            }
        }
    };
    let answer_form = html! {
        form.answer action="/" method="post" {
            input
                id="user_translation"
                name="user_translation"
                type="text"
                placeholder="Introduce tu traducción"
                autocomplete="off"
                autofocus;
            @if quiz.ready_for_next() {
                input type="submit" value="Siguiente palabra";
            } @else {
                input type="submit" value="Comprobar traducción";
            }
        }
    };
    let history_table = html! {
        table.history {
            thead {
                tr {
                    th { "Palabra" }
                    th { "Traducción" }
                    th { "Traducción del usuario" }
                }
            }
            tbody {
                @for record in quiz.history() {
                    (history_row(record))
                }
            }
        }
    };
    let body = html! {
        div.root {
            h1 { "¡Practica la lengua española!" }
            (mode_selector)
            (prompt)
            (answer_form)
            div.progress {
                (quiz.history().len()) " / " (quiz.total())
            }
            (history_table)
        }
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}

fn history_row(record: &AnsweredRecord) -> Markup {
    html! {
        tr {
            td { (record.entry().word()) }
            td {
                ul {
                    @for translation in record.entry().translations() {
                        li { (translation) }
                    }
                }
            }
            @if record.is_correct() {
                td.correct { (record.user_answer()) }
            } @else {
                td.wrong { (record.user_answer()) }
            }
        }
    }
}
