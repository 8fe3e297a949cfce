// Copyright 2026 The Flashdeck Authors
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

use std::process::exit;

use clap::Parser;
use flashdeck_core::error::Fallible;
use tokio::spawn;

use crate::cmd::decks::list_decks;
use crate::cmd::import::import_file;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::utils::wait_for_server;

const DEFAULT_DB_PATH: &str = "flashdeck.db";

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Review and manage decks through a web interface.
    Serve {
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Path to the deck database. Default is flashdeck.db in the current directory.
        #[arg(long)]
        db: Option<String>,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Import a JSON deck document into the database.
    Import {
        /// Path to the deck document.
        file: String,
        /// Path to the deck database. Default is flashdeck.db in the current directory.
        #[arg(long)]
        db: Option<String>,
    },
    /// List the decks in the database.
    Decks {
        /// Path to the deck database. Default is flashdeck.db in the current directory.
        #[arg(long)]
        db: Option<String>,
    },
}

fn db_path(db: Option<String>) -> String {
    db.unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            host,
            port,
            db,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                host,
                port,
                db_path: db_path(db),
            };
            start_server(config).await
        }
        Command::Import { file, db } => import_file(&file, &db_path(db)),
        Command::Decks { db } => list_decks(&db_path(db)),
    }
}
