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

use std::path::Path;

use clap::Parser;

use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::lexicon;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Drill vocabulary in the browser.
    Drill {
        /// Optional path to a lexicon CSV file. Defaults to the built-in
        /// Spanish-Bulgarian dataset.
        csv: Option<String>,
        /// The port to serve on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Drill { csv, port } => {
            let entries = match csv {
                Some(path) => lexicon::load_path(Path::new(&path))?,
                None => lexicon::load_default()?,
            };
            println!("Loaded {} words.", entries.len());
            start_server(entries, port).await
        }
    }
}
