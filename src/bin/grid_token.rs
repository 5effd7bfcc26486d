//! Encodes and decodes grid query tokens.
//!
//! ```text
//! grid_token encode '{"query":"bret","page":1,"pageSize":10}'
//! grid_token decode eyJxdWVyeSI6ImJyZXQiLCJwYWdlIjoxLCJwYWdlU2l6ZSI6MTB9
//! ```

use std::env;
use std::process::ExitCode;

use grid_data::domain::query_state::QueryState;
use grid_data::token::{decode_query_state, encode_query_state};

const USAGE: &str = "usage: grid_token <encode JSON | decode TOKEN>";

fn encode(json: &str) -> Result<String, String> {
    let state: QueryState =
        serde_json::from_str(json).map_err(|e| format!("invalid query state: {e}"))?;
    encode_query_state(&state).map_err(|e| e.to_string())
}

fn decode(token: &str) -> Result<String, String> {
    let state = decode_query_state(token).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&state).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.as_slice() {
        [cmd, input] if cmd == "encode" => encode(input),
        [cmd, input] if cmd == "decode" => decode(input),
        _ => Err(USAGE.to_string()),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
