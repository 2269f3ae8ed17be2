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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::drill::state::ServerState;
use crate::types::language::Direction;

/// The page posts either the mode selector (`direction`) or the answer
/// form (`user_translation`), never both. An unparseable direction is
/// rejected by axum before this handler runs.
#[derive(Deserialize)]
pub struct FormData {
    direction: Option<Direction>,
    user_translation: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    let mut quiz = state.quiz.lock().unwrap();
    match form.direction {
        Some(direction) => {
            log::info!("direction changed to: {direction}");
            quiz.set_direction(direction);
        }
        None => {
            log::info!("submit: {:?}", form.user_translation);
            quiz.submit(form.user_translation.as_deref());
        }
    }
    Redirect::to("/")
}
